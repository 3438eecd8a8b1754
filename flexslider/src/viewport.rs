//! Breakpoint resolution.

use crate::config::Breakpoints;

/// Resolves the page size for a viewport `width`.
///
/// Every breakpoint whose `min_width` does not exceed `width` overrides the
/// result, so the largest matching threshold wins. Falls back to `base` when
/// nothing matches.
pub fn resolve_page_size(width: f32, base: usize, breakpoints: &Breakpoints) -> usize {
    let mut page_size = base;
    for bp in breakpoints.iter() {
        if width >= bp.min_width {
            page_size = bp.page_size;
        }
    }
    page_size
}
