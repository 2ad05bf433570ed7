//! MLB CLI - Command line tool for checking chart data and render plans.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "mlb-cli",
    version,
    about = "MLB narrative chart data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: mlb_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let output = mlb_cmd::run(cli.command)?;
    println!("{}", output);
    Ok(())
}
