use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "netplay", about = "Upper-casing line echo server and client")]
pub struct Args {
    /// set mode to client or server
    #[arg(short, long, value_enum, default_value_t = Mode::Server)]
    pub mode: Mode,

    /// set appropriate port to connect to / host on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Server,
    Client,
}

/// Print the first IPv4 and first IPv6 address of a host.
#[derive(Parser, Debug)]
#[command(name = "dns-lookup", disable_help_flag = true)]
pub struct LookupArgs {
    #[arg(allow_hyphen_values = true)]
    pub host: String,
}
