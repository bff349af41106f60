//! wx-cli - Command line tool for the weather chart data pipeline.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wx-cli",
    version,
    about = "Weather CSV summaries and chart model export"
)]
struct Cli {
    #[command(subcommand)]
    command: wx_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("wx-cli starting");
    wx_cmd::run(cli.command).await
}
