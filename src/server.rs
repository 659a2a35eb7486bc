use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};

use tokio::{
    net::{TcpListener, TcpStream},
    sync::{OwnedSemaphorePermit, Semaphore},
};
use tracing::{debug, error, info, info_span, Instrument, Span};

use crate::{transform::transform, Error, Result};

/// Upper-casing line echo server.
///
/// Every accepted connection is handed to its own task, which runs
/// [`transform`] with the connection as both source and sink.
pub struct Server {
    listener: TcpListener,
    addr: SocketAddr,
    span: Span,
    limit: Option<Arc<Semaphore>>,
}

impl Server {
    pub async fn bind(addr: SocketAddr) -> Result<Server> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| Error::Bind { addr, source })?;
        let addr = listener
            .local_addr()
            .map_err(|source| Error::Bind { addr, source })?;

        Ok(Server {
            listener,
            addr,
            span: info_span!("server"),
            limit: None,
        })
    }

    /// Log under `span` instead of the default `server` span.
    pub fn with_span(mut self, span: Span) -> Server {
        self.span = span;
        self
    }

    /// Handle at most `max` connections at once. Further clients wait in the
    /// listen backlog until a handler finishes.
    pub fn with_connection_limit(mut self, max: usize) -> Server {
        self.limit = Some(Arc::new(Semaphore::new(max)));
        self
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Accept connections until accepting fails.
    pub async fn run(self) -> Result<()> {
        let Server {
            listener,
            addr,
            span,
            limit,
        } = self;

        accept_loop(listener, addr, limit).instrument(span).await
    }
}

async fn accept_loop(
    listener: TcpListener,
    addr: SocketAddr,
    limit: Option<Arc<Semaphore>>,
) -> Result<()> {
    info!("listening at {addr}");

    loop {
        let permit = match &limit {
            Some(semaphore) => semaphore.clone().acquire_owned().await.ok(),
            None => None,
        };

        let (stream, peer) = listener.accept().await.map_err(Error::Accept)?;
        debug!(%peer, "accepted connection");

        tokio::spawn(handle(stream, permit).instrument(info_span!("connection", %peer)));
    }
}

async fn handle(mut stream: TcpStream, _permit: Option<OwnedSemaphorePermit>) {
    let (reader, writer) = stream.split();

    match transform(reader, writer).await {
        Ok(lines) => debug!(lines, "connection closed"),
        Err(e) => error!("{e}"),
    }
}

/// Serve on the loopback interface at `port`.
pub async fn serve(port: u16) -> Result<()> {
    Server::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, port)))
        .await?
        .run()
        .await
}
