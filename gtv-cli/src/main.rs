//! GTV CLI - Command line tool for the global temperature variance heat map.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gtv-cli",
    version,
    about = "Monthly global temperature variance heat map toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: gtv_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    gtv_cmd::run(cli.command).await
}
