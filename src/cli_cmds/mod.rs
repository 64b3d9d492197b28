mod catalog_cmds;
mod color_cmds;
mod palette_cmds;
mod session_cmds;

pub use catalog_cmds::cmd_catalog;
pub use color_cmds::{cmd_adjust, cmd_convert};
pub use palette_cmds::{cmd_compare, cmd_export, cmd_generate, cmd_request, cmd_validate};
pub use session_cmds::cmd_session;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seeded generator when a seed is given, entropy-seeded otherwise.
pub(crate) fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
