use std::{io, net::SocketAddr};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("lookup ip: {host:?} | err: {source}")]
    Lookup {
        host: String,
        #[source]
        source: io::Error,
    },

    #[error("could not find any ips for host: {0:?}")]
    NoAddresses(String),

    #[error("could not listen on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("accept failed: {0}")]
    Accept(#[source] io::Error),

    #[error("could not connect to {addr}: {source}")]
    Connect {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    #[error("write failed: {0}")]
    Write(#[source] io::Error),

    #[error("receive task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, Error>;
