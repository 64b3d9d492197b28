use anyhow::Result;
use aurapal::catalog::{Catalog, PredefinedPalette};
use aurapal::color::{hex_to_hsb, hex_to_rgb};
use aurapal::config::Config;

use super::rng_from_seed;
use crate::CatalogAction;

fn summary_line(palette: &PredefinedPalette) -> String {
    format!(
        "{:<24} {:<22} {}",
        palette.id,
        palette.name,
        palette.colors.join(" ")
    )
}

pub fn cmd_catalog(action: CatalogAction, config: &Config) -> Result<()> {
    let catalog = Catalog::builtin();

    match action {
        CatalogAction::List => {
            for palette in catalog.all() {
                println!("{}", summary_line(palette));
            }
            println!();
            println!("{} palettes", catalog.len());
        }
        CatalogAction::Show { id } => {
            let palette = catalog.get(&id)?;
            println!("{} ({})", palette.name, palette.id);
            println!();
            for (i, hex) in palette.colors.iter().enumerate() {
                let rgb = hex_to_rgb(hex);
                println!(
                    "  {}  {}  rgb({}, {}, {})  {}",
                    i + 1,
                    hex,
                    rgb.red,
                    rgb.green,
                    rgb.blue,
                    hex_to_hsb(hex)
                );
            }
        }
        CatalogAction::Similar { id, limit } => {
            let limit = limit.unwrap_or(config.catalog.similar_limit);
            let similar = catalog.similar_to(&id, limit)?;

            if similar.is_empty() {
                println!("No similar palettes for: {}", id);
            } else {
                println!("Palettes similar to: {}", id);
                println!();
                for entry in &similar {
                    println!("  {:>7.2} - {}", entry.score, summary_line(entry.palette));
                }
            }
        }
        CatalogAction::Featured { seed } => {
            let mut rng = rng_from_seed(seed);
            let showcase = catalog.showcase(
                &mut rng,
                config.catalog.featured_count,
                config.catalog.random_count,
            );

            println!("Featured");
            println!("========");
            for palette in &showcase.featured {
                println!("  {}", summary_line(palette));
            }
            println!();
            println!("Random picks");
            println!("============");
            for palette in &showcase.random {
                println!("  {}", summary_line(palette));
            }
        }
    }

    Ok(())
}
