//! paintstyle
//!
//! Composes layered paint descriptions into CSS declarations that fill text
//! with the paint: solid colors, linear and radial gradients, and static or
//! animated images, plus drop shadows and an aggregate opacity.
//!
//! # Example
//!
//! ```
//! use paintstyle::model::{Color, GradientStop, Layer, Paint};
//!
//! let paint = Paint::from_parts(
//!     vec![Layer::linear_gradient(
//!         45.0,
//!         false,
//!         vec![
//!             GradientStop::new(0.0, Color::hex("#000")),
//!             GradientStop::new(1.0, Color::hex("#fff")),
//!         ],
//!         1.0,
//!     )],
//!     vec![],
//! );
//!
//! let css = paintstyle::compose(&paint);
//! assert!(css.starts_with("background: linear-gradient(45deg, #000 0%, #fff 100%);"));
//! ```
//!
//! Composition is a pure function of its input: it never fails, never
//! mutates the paint, and can be called from any number of threads.

pub mod error;
pub use error::{Error, Result};

pub mod logging;
pub mod model;
pub mod rendering;

pub use model::{parse_paints, Paint};
pub use rendering::{compose, compose_optional, compose_style, Declaration, PaintStyle};
