mod args;
mod runner;

pub(crate) use args::{CatalogAction, Cli, Commands, FormatArg, ModeArg};
pub(crate) use runner::run;
