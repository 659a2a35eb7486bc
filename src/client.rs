use std::net::{Ipv4Addr, SocketAddr};

use tokio::{
    io::{AsyncRead, AsyncWrite, AsyncWriteExt},
    net::TcpStream,
    task::JoinHandle,
};
use tracing::{debug, info, info_span, Instrument, Span};

use crate::{lines::Lines, Error, Result};

/// Line client: sends input lines to the server and prints what comes back.
pub struct Client {
    stream: TcpStream,
    span: Span,
}

impl Client {
    pub async fn connect(addr: SocketAddr) -> Result<Client> {
        let stream = TcpStream::connect(addr)
            .await
            .map_err(|source| Error::Connect { addr, source })?;

        Ok(Client {
            stream,
            span: info_span!("client", peer = %addr),
        })
    }

    pub fn with_span(mut self, span: Span) -> Client {
        self.span = span;
        self
    }

    /// Send every line of `input` to the server while a separate task copies
    /// the server's lines to `output`.
    ///
    /// Returns once `input` is exhausted. The connection is closed on return.
    pub async fn run<I, O>(self, input: I, output: O) -> Result<()>
    where
        I: AsyncRead + Unpin,
        O: AsyncWrite + Unpin + Send + 'static,
    {
        let (reader, writer) = self.stream.into_split();

        let mut inbound = tokio::spawn(receive(reader, output).instrument(self.span.clone()));
        let result = exchange(input, writer, &mut inbound)
            .instrument(self.span)
            .await;
        inbound.abort();

        result
    }
}

async fn exchange<I, W>(input: I, writer: W, inbound: &mut JoinHandle<Result<()>>) -> Result<()>
where
    I: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let outbound = send(input, writer);
    tokio::pin!(outbound);

    tokio::select! {
        res = &mut outbound => res,
        joined = inbound => {
            joined??;
            debug!("server closed the connection");
            outbound.await
        }
    }
}

async fn send<I, W>(input: I, mut writer: W) -> Result<()>
where
    I: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = Lines::new(input);

    while let Some(line) = lines.next_line().await.map_err(Error::Read)? {
        info!("sent: {}", String::from_utf8_lossy(line));
        writer.write_all(line).await.map_err(Error::Write)?;
        writer.write_all(b"\n").await.map_err(Error::Write)?;
    }

    Ok(())
}

async fn receive<R, O>(reader: R, mut output: O) -> Result<()>
where
    R: AsyncRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let mut lines = Lines::new(reader);

    while let Some(line) = lines.next_line().await.map_err(Error::Read)? {
        output.write_all(line).await.map_err(Error::Write)?;
        output.write_all(b"\n").await.map_err(Error::Write)?;
        output.flush().await.map_err(Error::Write)?;
    }

    Ok(())
}

/// Talk to a server on the loopback interface at `port` over stdin/stdout.
pub async fn connect(port: u16) -> Result<()> {
    Client::connect(SocketAddr::from((Ipv4Addr::LOCALHOST, port)))
        .await?
        .run(tokio::io::stdin(), tokio::io::stdout())
        .await
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        pin::Pin,
        task::{Context, Poll},
    };

    use tokio::io::AsyncWrite;

    use super::send;

    #[derive(Default)]
    struct Recorder {
        writes: Vec<Vec<u8>>,
    }

    impl AsyncWrite for Recorder {
        fn poll_write(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &[u8],
        ) -> Poll<io::Result<usize>> {
            self.writes.push(buf.to_vec());
            Poll::Ready(Ok(buf.len()))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    #[tokio::test]
    async fn sends_payload_then_newline() {
        let mut recorder = Recorder::default();
        send(&b"test\n"[..], &mut recorder).await.unwrap();

        assert_eq!(recorder.writes, vec![b"test".to_vec(), b"\n".to_vec()]);
    }

    #[tokio::test]
    async fn sends_unterminated_last_line() {
        let mut recorder = Recorder::default();
        send(&b"a\nb"[..], &mut recorder).await.unwrap();

        assert_eq!(recorder.writes.concat(), b"a\nb\n");
    }
}
