use anyhow::{anyhow, bail, Context, Result};
use aurapal::catalog::Catalog;
use aurapal::config::Config;
use aurapal::generator::PALETTE_SIZE;
use aurapal::input::split_color_list;
use aurapal::session::{HsbAdjust, Session};
use rand::Rng;
use std::io::{self, BufRead, Write};

use super::rng_from_seed;

const HELP: &str = "\
Commands (positions are 1-5):
  g            generate (an empty line with a space works too)
  l <n>        toggle lock
  s <n> <hex>  set color
  a <n> [h=<deg>] [s=<pct>] [b=<pct>]
               adjust hue, saturation, brightness
  load <list|id>
               load five comma-separated colors or a catalog palette
  h            show history
  r <n>        restore history entry
  p            print palette
  ?            this help
  q            quit";

enum Flow {
    Continue,
    Quit,
}

pub fn cmd_session(seed: Option<u64>, config: &Config) -> Result<()> {
    let session = Session::new(rng_from_seed(seed), config.history.max_entries);
    let catalog = Catalog::builtin();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(session, &catalog, stdin.lock(), stdout.lock())
}

fn run_session<R, I, W>(
    mut session: Session<R>,
    catalog: &Catalog,
    input: I,
    mut out: W,
) -> Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    writeln!(out, "Type ? for help")?;
    print_palette(&session, &mut out)?;

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        match execute(&mut session, catalog, &line, &mut out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => writeln!(out, "error: {:#}", e)?,
        }
    }

    out.flush()?;
    Ok(())
}

/// Parse a 1-based position (at most `max`) into an index.
fn parse_position(arg: Option<&str>, max: usize) -> Result<usize> {
    let arg = arg.ok_or_else(|| anyhow!("missing position"))?;
    match arg.parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => Ok(n - 1),
        _ => bail!("position must be 1-{}, got '{}'", max, arg),
    }
}

/// `h=<deg> s=<pct> b=<pct>` in any order, any subset.
fn parse_adjust<'a>(args: impl Iterator<Item = &'a str>) -> Result<HsbAdjust> {
    let mut adjust = HsbAdjust::default();
    for arg in args {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| anyhow!("expected key=value, got '{}'", arg))?;
        let value: i32 = value
            .parse()
            .with_context(|| format!("invalid number '{}'", value))?;
        match key {
            "h" => adjust.h = Some(value),
            "s" => adjust.s = Some(value),
            "b" => adjust.b = Some(value),
            _ => bail!("unknown component '{}', use h, s or b", key),
        }
    }
    if adjust.is_empty() {
        bail!("nothing to adjust");
    }
    Ok(adjust)
}

fn execute<R: Rng, W: Write>(
    session: &mut Session<R>,
    catalog: &Catalog,
    line: &str,
    out: &mut W,
) -> Result<Flow> {
    // A line holding only whitespace stands in for the space bar.
    let command = if line.trim().is_empty() && !line.is_empty() {
        "g"
    } else {
        line.trim()
    };

    let mut parts = command.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(Flow::Continue);
    };

    match verb {
        "g" | "space" => {
            session.generate();
            print_palette(session, out)?;
        }
        "l" => {
            let index = parse_position(parts.next(), PALETTE_SIZE)?;
            let locked = session.toggle_lock(index)?;
            writeln!(
                out,
                "{} {}",
                if locked { "Locked" } else { "Unlocked" },
                index + 1
            )?;
            print_palette(session, out)?;
        }
        "s" => {
            let index = parse_position(parts.next(), PALETTE_SIZE)?;
            let hex = parts.next().ok_or_else(|| anyhow!("missing color"))?;
            session.set_color(index, hex)?;
            print_palette(session, out)?;
        }
        "a" => {
            let index = parse_position(parts.next(), PALETTE_SIZE)?;
            let adjust = parse_adjust(parts)?;
            let hsb = session.adjust(index, adjust)?;
            writeln!(out, "{} -> {}", index + 1, hsb)?;
            print_palette(session, out)?;
        }
        "load" => {
            let arg = parts.next().ok_or_else(|| anyhow!("missing palette"))?;
            if arg.contains(',') {
                session.load(&split_color_list(arg), "list")?;
            } else {
                let palette = session.load_catalog(catalog, arg)?;
                writeln!(out, "Loaded {}", palette.name)?;
            }
            print_palette(session, out)?;
        }
        "h" => print_history(session, out)?,
        "r" => {
            let index = parse_position(parts.next(), session.history().max_entries())?;
            session
                .restore(index)
                .map_err(|_| anyhow!("no history entry {}", index + 1))?;
            print_palette(session, out)?;
        }
        "p" => print_palette(session, out)?,
        "?" | "help" => writeln!(out, "{}", HELP)?,
        "q" | "quit" => return Ok(Flow::Quit),
        other => bail!("unknown command '{}', type ? for help", other),
    }

    Ok(Flow::Continue)
}

fn print_palette<R: Rng, W: Write>(session: &Session<R>, out: &mut W) -> Result<()> {
    for (i, color) in session.palette().iter().enumerate() {
        let lock = if color.locked { "  [locked]" } else { "" };
        writeln!(out, "  {}  {}{}", i + 1, color.hex, lock)?;
    }
    Ok(())
}

fn print_history<R: Rng, W: Write>(session: &Session<R>, out: &mut W) -> Result<()> {
    let history = session.history();
    if history.is_empty() {
        writeln!(out, "History is empty")?;
        return Ok(());
    }
    for (i, palette) in history.iter().enumerate() {
        let hexes: Vec<&str> = palette.iter().map(|c| c.hex.as_str()).collect();
        writeln!(out, "  {:>2}  {}", i + 1, hexes.join(" "))?;
    }
    Ok(())
}
