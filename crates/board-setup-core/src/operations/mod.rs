pub mod file_operations;
pub mod patch_applicator;
pub mod preflight_checks;

pub use patch_applicator::{apply_stanza, patch_content};
pub use preflight_checks::run_preflight_checks;
