use anyhow::Result;
use aurapal::config::Config;
use aurapal::session::HsbAdjust;
use clap::Parser;

use super::{Cli, Commands};
use crate::cli_cmds::*;

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Convert { hex } => {
            cmd_convert(&hex)?;
        }
        Commands::Adjust {
            hex,
            hue,
            saturation,
            brightness,
        } => {
            let adjust = HsbAdjust {
                h: hue,
                s: saturation,
                b: brightness,
            };
            cmd_adjust(&hex, adjust)?;
        }
        Commands::Generate {
            palette,
            lock,
            seed,
            format,
        } => {
            cmd_generate(palette.as_deref(), &lock, seed, format, &config)?;
        }
        Commands::Compare { first, second } => {
            cmd_compare(&first, &second)?;
        }
        Commands::Export { palette, format } => {
            cmd_export(&palette, format, &config)?;
        }
        Commands::Catalog { action } => {
            cmd_catalog(action, &config)?;
        }
        Commands::Validate { palette } => {
            cmd_validate(&palette)?;
        }
        Commands::Request {
            mode,
            image,
            color,
            keywords,
        } => {
            cmd_request(mode, image, color, keywords)?;
        }
        Commands::Session { seed } => {
            cmd_session(seed, &config)?;
        }
    }

    Ok(())
}
