//! Per-layer dispatch

use log::debug;

use crate::model::{Layer, LayerKind, SingleColorLayer};
use crate::rendering::gradient::{render_linear_gradient, render_radial_gradient};
use crate::rendering::image::render_image;
use crate::rendering::RenderedLayer;

/// A color layer always contributes.
pub fn render_single_color(layer: &SingleColorLayer, opacity: f64) -> RenderedLayer {
    RenderedLayer::color(layer.color.hex.clone(), opacity)
}

/// Render one layer with the renderer for its kind.
///
/// Unknown kinds are dropped rather than treated as errors.
pub fn render_layer(layer: &Layer) -> Option<RenderedLayer> {
    let opacity = layer.opacity;
    match &layer.kind {
        LayerKind::SingleColor(c) => Some(render_single_color(c, opacity)),
        LayerKind::LinearGradient(g) => render_linear_gradient(g, opacity),
        LayerKind::RadialGradient(g) => render_radial_gradient(g, opacity),
        LayerKind::Image(img) => render_image(img, opacity),
        LayerKind::Unknown(tag) => {
            debug!("skipping layer '{}' of unknown kind '{}'", layer.id, tag);
            None
        }
    }
}
