use anyhow::{Context, Result};
use aurapal::color::{hsb_to_hex, parse_hex, rgb_to_hex, rgb_to_hsb, Rgb};
use aurapal::session::HsbAdjust;

fn describe(rgb: Rgb) -> String {
    format!(
        "hex: {}\nrgb: rgb({}, {}, {})\nhsb: {}",
        rgb_to_hex(rgb),
        rgb.red,
        rgb.green,
        rgb.blue,
        rgb_to_hsb(rgb)
    )
}

pub fn cmd_convert(hex: &str) -> Result<()> {
    let rgb = parse_hex(hex).with_context(|| format!("Cannot convert '{}'", hex))?;
    println!("{}", describe(rgb));
    Ok(())
}

pub fn cmd_adjust(hex: &str, adjust: HsbAdjust) -> Result<()> {
    let rgb = parse_hex(hex).with_context(|| format!("Cannot adjust '{}'", hex))?;
    if adjust.is_empty() {
        eprintln!("Nothing to adjust; pass --hue, --saturation or --brightness");
    }

    let hsb = adjust.apply(rgb_to_hsb(rgb));
    let adjusted = parse_hex(&hsb_to_hex(hsb))?;
    println!("{}", describe(adjusted));
    Ok(())
}
