//! Drop-shadow filter chain

use crate::model::Shadow;
use crate::rendering::css_number;

/// Render shadows as a space-separated `drop-shadow(...)` chain.
///
/// Returns `None` for an empty list so no `filter` declaration is emitted at all.
pub fn render_shadows(shadows: &[Shadow]) -> Option<String> {
    if shadows.is_empty() {
        return None;
    }

    let chain = shadows
        .iter()
        .map(|s| {
            format!(
                "drop-shadow({} {}px {}px {}px)",
                s.color.hex,
                css_number(s.offset_x),
                css_number(s.offset_y),
                css_number(s.blur)
            )
        })
        .collect::<Vec<_>>()
        .join(" ");
    Some(chain)
}
