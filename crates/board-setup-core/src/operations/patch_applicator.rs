use crate::matcher::{find_boundary, line_number_at};
use crate::operations::file_operations::{read_file_content, write_file_content};
use crate::types::{Fallback, PatchOutcome, Stanza};
use anyhow::Result;
use log::{debug, info};
use std::path::Path;

/// Splices the stanza's block into `content`. Returns the new text only when
/// something was inserted.
pub fn patch_content(content: &str, stanza: &Stanza) -> (PatchOutcome, Option<String>) {
    if content.contains(stanza.guard) {
        return (PatchOutcome::AlreadyPresent, None);
    }

    let Some(anchor_offset) = content.find(stanza.anchor) else {
        return (PatchOutcome::AnchorMissing, None);
    };

    let insert_pos = match find_boundary(content, anchor_offset, stanza.boundary) {
        Some(pos) => pos,
        None => match stanza.fallback {
            Fallback::AnchorOffset => anchor_offset,
            Fallback::Skip => return (PatchOutcome::BoundaryMissing, None),
        },
    };

    let mut patched = String::with_capacity(content.len() + stanza.block.len());
    patched.push_str(content);
    patched.insert_str(insert_pos, stanza.block);

    let line = line_number_at(content, insert_pos);
    (PatchOutcome::Inserted { line }, Some(patched))
}

pub fn apply_stanza(path: &Path, stanza: &Stanza, dry_run: bool) -> Result<PatchOutcome> {
    debug!("Applying {} stanza to {:?}", stanza.label, path);

    let content = read_file_content(path)?;
    let (outcome, patched) = patch_content(&content, stanza);

    match outcome {
        PatchOutcome::AnchorMissing => info!(
            "{:?}: anchor '{}' not found, nothing inserted",
            path, stanza.anchor
        ),
        PatchOutcome::BoundaryMissing => info!(
            "{:?}: no boundary line after '{}', nothing inserted",
            path, stanza.anchor
        ),
        PatchOutcome::Inserted { line } => debug!("Block goes in at line {}", line),
        PatchOutcome::AlreadyPresent => {}
    }

    if let Some(patched) = patched {
        if !dry_run {
            write_file_content(path, &patched)?;
        }
    }

    Ok(outcome)
}
