use anyhow::Result;
use clap::Parser;
use weather_panel::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    weather_panel::run(cli).await
}
