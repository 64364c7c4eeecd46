#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;

#[derive(FromArgs, Debug)]
/// Export and import the avatar textures stored in Scarlet/Violet save blocks
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Export(commands::export::ExportCmd),
    Import(commands::import::ImportCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli: TopLevel = argh::from_env();

    match cli.command {
        Commands::Export(cmd) => {
            commands::export::handle_export_command(cmd)?;
        }
        Commands::Import(cmd) => {
            commands::import::handle_import_command(cmd)?;
        }
    }

    Ok(())
}
