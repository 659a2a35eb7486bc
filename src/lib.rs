//! Two small network tools: a system-resolver lookup that reports one address
//! per family, and a line echo server/client pair that upper-cases every line.

pub mod cli;
pub mod client;
pub mod error;
pub mod lines;
pub mod logging;
pub mod resolver;
pub mod server;
pub mod transform;

pub use error::{Error, Result};
