mod cli;
mod commands;
mod host;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Command results are reported at DEBUG and above
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("ssx=debug".parse()?)
                .add_directive("ssx_cli=info".parse()?),
        )
        .with_target(false)
        .init();

    let pack = cli.pack.as_deref();
    let base_tables = cli.base_tables.as_deref();

    match &cli.command {
        Command::SetFrameOffset { frame, x, y } => {
            let mut session = commands::open_session(pack, cli.gender, base_tables)?;
            commands::frame::run_set(&mut session, frame, x, y);
        }
        Command::GetFrameOffset { frame } => {
            let mut session = commands::open_session(pack, cli.gender, base_tables)?;
            commands::frame::run_get(&mut session, frame);
        }
        Command::Console => {
            let mut session = commands::open_session(pack, cli.gender, base_tables)?;
            commands::console::run(&mut session)?;
        }
        Command::Settings { action } => {
            let mut extender = commands::open_extender(pack);
            commands::settings::run(&mut extender, action)?;
        }
        Command::Tables { all } => {
            let session = commands::open_session(pack, cli.gender, base_tables)?;
            commands::tables::run(&session, *all)?;
        }
    }

    Ok(())
}
