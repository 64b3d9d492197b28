use anyhow::{bail, Context, Result};
use aurapal::ai::{validate_ai_output, GenerationRequest};
use aurapal::color::parse_hex;
use aurapal::config::Config;
use aurapal::export::{export_palette, ExportFormat};
use aurapal::generator::{generate_new_palette, palette_hexes, PaletteColor, PALETTE_SIZE};
use aurapal::input::{parse_color_list, split_color_list};
use aurapal::similarity::calculate_palette_similarity;
use tracing::{debug, info};

use super::rng_from_seed;
use crate::{FormatArg, ModeArg};

fn export_format(format: Option<FormatArg>, config: &Config) -> ExportFormat {
    format
        .map(ExportFormat::from)
        .unwrap_or(config.export.default_format)
}

/// Convert 1-based lock positions to indices.
fn lock_indices(lock: &[usize]) -> Result<Vec<usize>> {
    lock.iter()
        .map(|&pos| {
            if pos == 0 || pos > PALETTE_SIZE {
                bail!("Lock position {} is out of range 1-{}", pos, PALETTE_SIZE);
            }
            Ok(pos - 1)
        })
        .collect()
}

pub fn cmd_generate(
    palette: Option<&str>,
    lock: &[usize],
    seed: Option<u64>,
    format: Option<FormatArg>,
    config: &Config,
) -> Result<()> {
    let mut rng = rng_from_seed(seed);

    let existing = match palette {
        Some(list) => {
            let hexes = parse_color_list(list).context("Invalid --palette")?;
            let mut colors: Vec<PaletteColor> = hexes
                .into_iter()
                .map(|hex| PaletteColor::new(hex, &mut rng))
                .collect();
            for index in lock_indices(lock)? {
                colors[index].locked = true;
            }
            Some(colors)
        }
        None if !lock.is_empty() => bail!("--lock needs a --palette to lock colors of"),
        None => None,
    };

    let generated = generate_new_palette(existing.as_deref(), &mut rng);
    debug!(palette = ?palette_hexes(&generated), "generated");

    let format = export_format(format, config);
    println!(
        "{}",
        export_palette(&palette_hexes(&generated), format, &config.export.css_prefix)
    );
    Ok(())
}

/// Comma-separated colors, each of which must parse. Any count is allowed.
fn parse_any_colors(list: &str) -> Result<Vec<String>> {
    let colors = split_color_list(list);
    for color in &colors {
        parse_hex(color).with_context(|| format!("Invalid color '{}'", color))?;
    }
    Ok(colors)
}

pub fn cmd_compare(first: &str, second: &str) -> Result<()> {
    let a = parse_any_colors(first)?;
    let b = parse_any_colors(second)?;

    println!(
        "first -> second: {:.2}",
        calculate_palette_similarity(&a, &b)
    );
    println!(
        "second -> first: {:.2}",
        calculate_palette_similarity(&b, &a)
    );
    Ok(())
}

pub fn cmd_export(palette: &str, format: Option<FormatArg>, config: &Config) -> Result<()> {
    let hexes = parse_color_list(palette).context("Invalid palette")?;
    let format = export_format(format, config);
    println!(
        "{}",
        export_palette(&hexes, format, &config.export.css_prefix)
    );
    Ok(())
}

/// Model output is checked as-is, without adding missing `#` prefixes.
pub fn cmd_validate(palette: &str) -> Result<()> {
    let colors: Vec<&str> = palette
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();

    let hexes = validate_ai_output(&colors).context("Palette rejected")?;
    println!("✓ Valid palette");
    for hex in &hexes {
        println!("  {}", hex);
    }
    Ok(())
}

pub fn cmd_request(
    mode: ModeArg,
    image: Option<String>,
    color: Option<String>,
    keywords: Option<String>,
) -> Result<()> {
    let request = GenerationRequest {
        generation_mode: mode.into(),
        image_data_uri: image,
        base_color_hex: color,
        keywords,
    };
    request
        .validate()
        .with_context(|| format!("Invalid {} request", request.generation_mode.display_name()))?;

    info!(mode = request.generation_mode.display_name(), "request ready");
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}
