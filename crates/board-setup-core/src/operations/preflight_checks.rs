use crate::operations::file_operations::{is_read_only, read_file_content};
use crate::operations::patch_applicator::patch_content;
use crate::types::{PatchOutcome, Stanza};
use std::path::Path;

/// Reports on every target file before anything is written. The result only
/// describes problems; callers still patch files in order and stop at the
/// first one that fails to read or write. The read-only check looks at the
/// permission bits alone, so a file owned by another user can pass here and
/// still fail at write time.
pub fn run_preflight_checks(base_path: &Path, stanzas: &[Stanza]) -> Result<(), Vec<String>> {
    println!("--- Running Preflight Checks ---");
    let mut errors = Vec::new();

    for stanza in stanzas {
        let path = base_path.join(stanza.file_name);
        let prefix = format!("  - {:?}:", path);

        if !path.is_file() {
            errors.push(format!("{} FAILED (File not found)", prefix));
            continue;
        }

        if let Ok(true) = is_read_only(&path) {
            errors.push(format!(
                "{} FAILED (Permission bits mark the file read-only)",
                prefix
            ));
            continue;
        }

        match read_file_content(&path) {
            Ok(content) => match patch_content(&content, stanza).0 {
                PatchOutcome::AlreadyPresent => println!("{} OK (Already patched)", prefix),
                PatchOutcome::Inserted { line } => {
                    println!("{} OK (Block goes in at line {})", prefix, line)
                }
                PatchOutcome::AnchorMissing => {
                    println!("{} WARN (Anchor '{}' not found)", prefix, stanza.anchor)
                }
                PatchOutcome::BoundaryMissing => println!(
                    "{} WARN (No boundary line after '{}')",
                    prefix, stanza.anchor
                ),
            },
            Err(e) => {
                errors.push(format!("{} FAILED (Could not read file: {:#})", prefix, e));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
