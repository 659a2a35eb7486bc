use clap::Parser;
use netplay::{cli::LookupArgs, logging, resolver};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = LookupArgs::parse();
    logging::init();

    let lookup = resolver::resolve(&args.host).await?;
    println!("{lookup}");

    Ok(())
}
