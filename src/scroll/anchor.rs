/// Scroll offset that brings a section's top edge just below a fixed header.
///
/// `element_top_client` is the element's top relative to the viewport (as reported by
/// the host at click time). The result never goes above the document start.
pub fn anchor_scroll_target(element_top_client: f64, scroll_y: f64, header_offset_px: f64) -> f64 {
    (element_top_client + scroll_y - header_offset_px).max(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/anchor.rs"]
mod tests;
