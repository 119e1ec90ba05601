//! MVC CLI - Command line tool for exploring NYC motor vehicle collisions.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "mvc-cli",
    version,
    about = "Motor Vehicle Collisions data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: mvc_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("mvc-cli {}", env!("CARGO_PKG_VERSION"));
    mvc_cmd::run(cli.command).await
}
