//! Paint description model
//!
//! These types mirror the paint documents served by the paint API: camelCase
//! field names, layer payloads tagged by `__typename`. Everything here is
//! plain immutable data; the compositor in [`crate::rendering`] only borrows it.

use std::io::Read;

use serde::de::{Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;

use crate::Result;

/// A pre-formatted color token plus optional numeric components.
///
/// `hex` is emitted verbatim; the components are carried for callers but the
/// compositor never reads them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Color {
    pub hex: String,
    #[serde(default)]
    pub r: Option<f64>,
    #[serde(default)]
    pub g: Option<f64>,
    #[serde(default)]
    pub b: Option<f64>,
    #[serde(default)]
    pub a: Option<f64>,
}

impl Color {
    pub fn hex(hex: impl Into<String>) -> Self {
        Self { hex: hex.into(), r: None, g: None, b: None, a: None }
    }
}

/// One point along a gradient. `at` is a fraction where 1.0 is 100%.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GradientStop {
    pub at: f64,
    pub color: Color,
}

impl GradientStop {
    pub fn new(at: f64, color: Color) -> Self {
        Self { at, color }
    }
}

/// A candidate asset for an image layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    /// Resolution multiplier; 1 is the base resolution
    pub scale: f64,
    /// 1 for static images, more for animated ones
    #[serde(default = "default_frame_count")]
    pub frame_count: u32,
    /// MIME type as reported upstream (avif, gif, png or webp)
    #[serde(default)]
    pub mime: Option<String>,
    /// Size in bytes
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl Image {
    pub fn new(url: impl Into<String>, scale: f64, frame_count: u32) -> Self {
        Self {
            url: url.into(),
            scale,
            frame_count,
            mime: None,
            size: None,
            width: None,
            height: None,
        }
    }

    pub fn is_animated(&self) -> bool {
        self.frame_count > 1
    }
}

fn default_frame_count() -> u32 {
    1
}

fn default_opacity() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SingleColorLayer {
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinearGradientLayer {
    /// Gradient direction in degrees
    pub angle: f64,
    #[serde(default)]
    pub repeating: bool,
    #[serde(default)]
    pub stops: Vec<GradientStop>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RadialGradientLayer {
    #[serde(default)]
    pub shape: RadialShape,
    #[serde(default)]
    pub repeating: bool,
    #[serde(default)]
    pub stops: Vec<GradientStop>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageLayer {
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Ending shape of a radial gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadialShape {
    Circle,
    #[default]
    Ellipse,
}

impl RadialShape {
    pub fn as_css(self) -> &'static str {
        match self {
            RadialShape::Circle => "circle",
            RadialShape::Ellipse => "ellipse",
        }
    }
}

// Anything other than "CIRCLE", including null, is an ellipse.
impl<'de> Deserialize<'de> for RadialShape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(if raw.as_deref() == Some("CIRCLE") { RadialShape::Circle } else { RadialShape::Ellipse })
    }
}

/// Kind-specific payload of a layer.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerKind {
    SingleColor(SingleColorLayer),
    LinearGradient(LinearGradientLayer),
    RadialGradient(RadialGradientLayer),
    Image(ImageLayer),
    /// A kind this crate does not know how to render; carries the raw tag
    Unknown(String),
}

impl LayerKind {
    pub const SINGLE_COLOR_TAG: &'static str = "PaintLayerTypeSingleColor";
    pub const LINEAR_GRADIENT_TAG: &'static str = "PaintLayerTypeLinearGradient";
    pub const RADIAL_GRADIENT_TAG: &'static str = "PaintLayerTypeRadialGradient";
    pub const IMAGE_TAG: &'static str = "PaintLayerTypeImage";

    /// The `__typename` tag this kind is decoded from.
    pub fn tag(&self) -> &str {
        match self {
            LayerKind::SingleColor(_) => Self::SINGLE_COLOR_TAG,
            LayerKind::LinearGradient(_) => Self::LINEAR_GRADIENT_TAG,
            LayerKind::RadialGradient(_) => Self::RADIAL_GRADIENT_TAG,
            LayerKind::Image(_) => Self::IMAGE_TAG,
            LayerKind::Unknown(tag) => tag,
        }
    }
}

impl<'de> Deserialize<'de> for LayerKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let tag = value
            .get("__typename")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let kind = match tag.as_str() {
            Self::SINGLE_COLOR_TAG => {
                LayerKind::SingleColor(SingleColorLayer::deserialize(value).map_err(D::Error::custom)?)
            }
            Self::LINEAR_GRADIENT_TAG => LayerKind::LinearGradient(
                LinearGradientLayer::deserialize(value).map_err(D::Error::custom)?,
            ),
            Self::RADIAL_GRADIENT_TAG => LayerKind::RadialGradient(
                RadialGradientLayer::deserialize(value).map_err(D::Error::custom)?,
            ),
            Self::IMAGE_TAG => LayerKind::Image(ImageLayer::deserialize(value).map_err(D::Error::custom)?),
            _ => LayerKind::Unknown(tag),
        };
        Ok(kind)
    }
}

/// One visual contribution to a paint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Layer {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "ty")]
    pub kind: LayerKind,
    /// Opacity in [0, 1]
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

impl Layer {
    pub fn new(kind: LayerKind, opacity: f64) -> Self {
        Self { id: String::new(), kind, opacity }
    }

    pub fn single_color(hex: impl Into<String>, opacity: f64) -> Self {
        Self::new(LayerKind::SingleColor(SingleColorLayer { color: Color::hex(hex) }), opacity)
    }

    pub fn linear_gradient(angle: f64, repeating: bool, stops: Vec<GradientStop>, opacity: f64) -> Self {
        Self::new(
            LayerKind::LinearGradient(LinearGradientLayer { angle, repeating, stops }),
            opacity,
        )
    }

    pub fn radial_gradient(
        shape: RadialShape,
        repeating: bool,
        stops: Vec<GradientStop>,
        opacity: f64,
    ) -> Self {
        Self::new(
            LayerKind::RadialGradient(RadialGradientLayer { shape, repeating, stops }),
            opacity,
        )
    }

    pub fn image(images: Vec<Image>, opacity: f64) -> Self {
        Self::new(LayerKind::Image(ImageLayer { images }), opacity)
    }
}

/// A drop shadow. Offsets and blur are in CSS pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub color: Color,
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
}

impl Shadow {
    pub fn new(hex: impl Into<String>, offset_x: f64, offset_y: f64, blur: f64) -> Self {
        Self { color: Color::hex(hex), offset_x, offset_y, blur }
    }
}

/// Layers and shadows of a paint, both in caller-defined order.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PaintData {
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub shadows: Vec<Shadow>,
}

/// Root paint record.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub data: Option<PaintData>,
    #[serde(default)]
    pub created_by_id: String,
    /// Timestamps are kept as the upstream strings
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub search_updated_at: Option<String>,
}

impl Paint {
    /// Build an anonymous paint from layers and shadows.
    pub fn from_parts(layers: Vec<Layer>, shadows: Vec<Shadow>) -> Self {
        Self {
            data: Some(PaintData { layers, shadows }),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn layers(&self) -> &[Layer] {
        self.data.as_ref().map(|d| d.layers.as_slice()).unwrap_or_default()
    }

    pub fn shadows(&self) -> &[Shadow] {
        self.data.as_ref().map(|d| d.shadows.as_slice()).unwrap_or_default()
    }
}

/// Parse a document holding one paint, `null`, or an array of those.
pub fn parse_paints(json: &str) -> Result<Vec<Option<Paint>>> {
    let value: Value = serde_json::from_str(json)?;
    let paints = match value {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value::<Option<Paint>>)
            .collect::<std::result::Result<Vec<_>, _>>()?,
        other => vec![serde_json::from_value::<Option<Paint>>(other)?],
    };
    Ok(paints)
}
