use aurapal::ai::GenerationMode;
use aurapal::config::CONFIG_ENV;
use aurapal::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aurapal")]
#[command(author = "MrMattias")]
#[command(version)]
#[command(about = "Color palette explorer: convert, generate, lock and compare palettes")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Config file (defaults to the platform config dir)
    #[arg(short, long, global = true, env = CONFIG_ENV)]
    pub(crate) config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show a color as hex, RGB and HSB
    Convert {
        /// Color in #RRGGBB form
        hex: String,
    },
    /// Change hue, saturation or brightness of a color
    Adjust {
        /// Color in #RRGGBB form
        hex: String,
        /// Hue in degrees (wraps around 360)
        #[arg(long, allow_hyphen_values = true)]
        hue: Option<i32>,
        /// Saturation percent (0-100)
        #[arg(long, allow_hyphen_values = true)]
        saturation: Option<i32>,
        /// Brightness percent (0-100)
        #[arg(long, allow_hyphen_values = true)]
        brightness: Option<i32>,
    },
    /// Generate a palette, keeping locked colors of an existing one
    Generate {
        /// Existing palette, comma-separated
        #[arg(short, long)]
        palette: Option<String>,
        /// 1-based positions to lock, e.g. "1,3"
        #[arg(short, long, value_delimiter = ',')]
        lock: Vec<usize>,
        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },
    /// Similarity between two palettes in both directions (lower is closer)
    Compare {
        /// First palette, comma-separated
        first: String,
        /// Second palette, comma-separated
        second: String,
    },
    /// Print a palette as HEX, RGB or CSS variables
    Export {
        /// Palette, comma-separated
        palette: String,
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },
    /// Browse the predefined palettes
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Check a model response: exactly five #RRGGBB colors
    Validate {
        /// Palette, comma-separated
        palette: String,
    },
    /// Build and validate an AI generation request
    Request {
        #[arg(short, long, value_enum, default_value = "general")]
        mode: ModeArg,
        /// Image as a base64 data URI
        #[arg(long)]
        image: Option<String>,
        /// Base color for color mode
        #[arg(long)]
        color: Option<String>,
        /// Keywords for keywords mode
        #[arg(long)]
        keywords: Option<String>,
    },
    /// Interactive explorer reading commands from stdin
    Session {
        /// Seed for reproducible palettes
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

#[derive(Subcommand)]
pub(crate) enum CatalogAction {
    /// List all predefined palettes
    List,
    /// Show one palette
    Show {
        /// Palette id, e.g. ocean-breeze
        id: String,
    },
    /// Palettes most similar to a predefined one
    Similar {
        /// Palette id
        id: String,
        /// Maximum number of results (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Random featured palettes plus a random selection
    Featured {
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum FormatArg {
    Hex,
    Rgb,
    Css,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Hex => ExportFormat::Hex,
            FormatArg::Rgb => ExportFormat::Rgb,
            FormatArg::Css => ExportFormat::Css,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum ModeArg {
    Image,
    Color,
    Keywords,
    General,
}

impl From<ModeArg> for GenerationMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Image => GenerationMode::Image,
            ModeArg::Color => GenerationMode::Color,
            ModeArg::Keywords => GenerationMode::Keywords,
            ModeArg::General => GenerationMode::General,
        }
    }
}
