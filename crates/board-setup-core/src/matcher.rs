use crate::types::Boundary;

/// Returns the byte offset of the first boundary line after the line holding
/// `anchor_offset`. The anchor line itself is never a boundary.
pub fn find_boundary(content: &str, anchor_offset: usize, boundary: Boundary) -> Option<usize> {
    let rest = content.get(anchor_offset..)?;
    let mut offset = anchor_offset;

    for (i, line) in rest.split_inclusive('\n').enumerate() {
        if i > 0 && is_boundary_line(line.trim(), boundary) {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}

fn is_boundary_line(stripped: &str, boundary: Boundary) -> bool {
    match boundary {
        Boundary::ClosingKeyword(keyword) => stripped == keyword,
        Boundary::NextEntry {
            entry_prefix,
            closing,
        } => stripped.starts_with(entry_prefix) || stripped == closing,
    }
}

/// 1-based line number of the line starting at `offset`.
pub fn line_number_at(content: &str, offset: usize) -> usize {
    content
        .get(..offset)
        .map_or(0, |head| head.matches('\n').count())
        + 1
}
