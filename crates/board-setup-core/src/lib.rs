pub mod matcher;
pub mod operations;
pub mod stanzas;
pub mod types;

pub use operations::{apply_stanza, patch_content, run_preflight_checks};
pub use stanzas::{BOARD_STANZAS, CMAKE_LISTS, KCONFIG_PROJBUILD};
pub use types::{Boundary, Fallback, PatchOutcome, Stanza};
