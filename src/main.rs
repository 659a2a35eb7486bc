use clap::Parser;
use netplay::{
    cli::{Args, Mode},
    client, logging, server,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init();

    match args.mode {
        Mode::Server => server::serve(args.port).await?,
        Mode::Client => client::connect(args.port).await?,
    }

    Ok(())
}
