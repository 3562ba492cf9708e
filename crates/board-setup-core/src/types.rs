/// How the line that the block is inserted in front of is recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// A line whose trimmed content equals the keyword, e.g. `endif()`.
    ClosingKeyword(&'static str),
    /// A line starting the next entry, or the line closing the enclosing group.
    NextEntry {
        entry_prefix: &'static str,
        closing: &'static str,
    },
}

/// What to do when no boundary line follows the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Leave the file alone.
    Skip,
    /// Insert the block at the anchor's own offset.
    AnchorOffset,
}

/// Everything needed to patch a single target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stanza {
    pub file_name: &'static str,
    pub label: &'static str,
    pub guard: &'static str,
    pub anchor: &'static str,
    pub block: &'static str,
    pub boundary: Boundary,
    pub fallback: Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    AlreadyPresent,
    /// `line` is the 1-based line at which the inserted block starts.
    Inserted { line: usize },
    AnchorMissing,
    BoundaryMissing,
}

impl PatchOutcome {
    pub fn is_change(&self) -> bool {
        matches!(self, PatchOutcome::Inserted { .. })
    }
}

impl Stanza {
    /// Status line printed for an outcome. Outcomes that leave the file
    /// untouched without the guard being present print nothing.
    pub fn status_message(&self, outcome: PatchOutcome, dry_run: bool) -> Option<String> {
        match outcome {
            PatchOutcome::AlreadyPresent => Some(format!(
                "{} already contains {}, skipping",
                self.file_name, self.label
            )),
            PatchOutcome::Inserted { line } if dry_run => Some(format!(
                "[DRY RUN] {} would be updated (block at line {})",
                self.file_name, line
            )),
            PatchOutcome::Inserted { .. } => Some(format!("{} updated", self.file_name)),
            PatchOutcome::AnchorMissing | PatchOutcome::BoundaryMissing => None,
        }
    }
}
