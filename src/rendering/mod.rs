//! Rendering module: turns a [`Paint`](crate::model::Paint) into CSS declarations
//!
//! Each layer kind has its own renderer producing an optional
//! [`RenderedLayer`]; [`compose`] stitches the survivors together with the
//! shadow filter and the fixed text-clip declarations.

pub mod compose;
pub mod gradient;
pub mod image;
pub mod layers;
pub mod shadow;

pub use compose::{compose, compose_optional, compose_style, Declaration, PaintStyle};
pub use gradient::{render_linear_gradient, render_radial_gradient};
pub use image::{render_image, select_image};
pub use layers::{render_layer, render_single_color};
pub use shadow::render_shadows;

/// What a single layer contributes to the background.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerFill {
    /// A flat color token
    Color(String),
    /// A CSS image value (gradient or `url(...)`)
    Image(String),
}

/// Intermediate result of rendering one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedLayer {
    pub opacity: f64,
    pub fill: LayerFill,
}

impl RenderedLayer {
    pub fn color(color: impl Into<String>, opacity: f64) -> Self {
        Self { opacity, fill: LayerFill::Color(color.into()) }
    }

    pub fn image(image: impl Into<String>, opacity: f64) -> Self {
        Self { opacity, fill: LayerFill::Image(image.into()) }
    }
}

/// Format a number the way a JavaScript template literal would.
///
/// Integral values drop the fraction, `-0` prints as `0`, and non-finite
/// values use the `NaN`/`Infinity` spellings. Magnitudes below `1e-6` or
/// from `1e21` up switch to exponent form (`1e-7`, `1.5e+21`).
pub(crate) fn css_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        (if value > 0.0 { "Infinity" } else { "-Infinity" }).to_string()
    } else if value.abs() < 1e-6 {
        format!("{:e}", value)
    } else if value.abs() >= 1e21 {
        format!("{:e}", value).replacen('e', "e+", 1)
    } else {
        format!("{}", value)
    }
}
