//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ssx::Gender;

#[derive(Parser)]
#[command(name = "ssx")]
#[command(version, about = "Farmer spritesheet offset editor")]
pub struct Cli {
    /// Content pack directory holding SSXConfig.json (runs without storage when omitted)
    #[arg(short, long, env = "SSX_PACK")]
    pub pack: Option<PathBuf>,

    /// Gender of the player whose offsets are edited
    #[arg(short, long, default_value = "male")]
    pub gender: Gender,

    /// JSON file with the base feature offset tables ({"x": [...], "y": [...]})
    #[arg(short, long)]
    pub base_tables: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Set the x and y offset of an added frame
    SetFrameOffset {
        /// Index of the targeted sprite on the farmer's sprite sheet
        #[arg(allow_hyphen_values = true)]
        frame: String,
        /// Horizontal offset in pixels (positive right, negative left)
        #[arg(allow_hyphen_values = true)]
        x: String,
        /// Vertical offset in pixels (positive down, negative up)
        #[arg(allow_hyphen_values = true)]
        y: String,
    },
    /// Show the x and y offset of an added frame
    GetFrameOffset {
        /// Index of the targeted sprite on the farmer's sprite sheet
        #[arg(allow_hyphen_values = true)]
        frame: String,
    },
    /// Read console commands from stdin
    Console,
    /// Inspect or change the number of added sprites
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Print the extended offset tables
    Tables {
        /// Include the base frames
        #[arg(long)]
        all: bool,
    },
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show the current counts
    Show,
    /// Change the counts and save
    Set {
        /// Male sprites to be added
        #[arg(long)]
        male: Option<u32>,
        /// Female sprites to be added
        #[arg(long)]
        female: Option<u32>,
    },
    /// Restore the default config and save
    Reset,
}
