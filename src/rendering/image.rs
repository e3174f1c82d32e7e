//! Image layers: pick one representative asset out of the candidate set

use crate::model::{Image, ImageLayer};
use crate::rendering::RenderedLayer;

/// Choose the base-scale candidate to reference.
///
/// If any candidate is animated, only an animated base-scale candidate
/// qualifies; otherwise the first base-scale candidate wins. Candidates at
/// other scales are never used as a fallback.
pub fn select_image(images: &[Image]) -> Option<&Image> {
    let animated = images.iter().any(Image::is_animated);
    images
        .iter()
        .find(|img| img.scale == 1.0 && (!animated || img.is_animated()))
}

pub fn render_image(layer: &ImageLayer, opacity: f64) -> Option<RenderedLayer> {
    let selected = select_image(&layer.images)?;
    Some(RenderedLayer::image(format!("url({})", selected.url), opacity))
}
