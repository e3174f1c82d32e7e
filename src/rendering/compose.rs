//! Paint compositor
//!
//! Flattens a paint into a CSS declaration fragment that shows the layered
//! background through the shape of rendered text. Output layout:
//!
//! 1. `background` (colors first, then images), when any layer survives
//! 2. the fixed text-clip block
//! 3. `filter`, when the paint has shadows
//! 4. `opacity`, when a surviving layer is translucent
//!
//! The order is part of the output contract.

use std::fmt;

use log::{debug, trace};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::model::Paint;
use crate::rendering::layers::render_layer;
use crate::rendering::shadow::render_shadows;
use crate::rendering::{css_number, LayerFill, RenderedLayer};

const TEXT_CLIP_BLOCK: [(&str, &str); 5] = [
    ("-webkit-background-clip", "text"),
    ("background-clip", "text"),
    ("background-size", "cover"),
    ("background-position", "center"),
    ("color", "transparent"),
];

/// One `property: value;` pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

impl Declaration {
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self { property, value: value.into() }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// Ordered declarations produced for one paint.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct PaintStyle {
    declarations: Vec<Declaration>,
}

impl PaintStyle {
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Value of the first declaration for `property`, if emitted.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    /// Wrap the fragment in a rule for `selector`. An empty style yields an empty string.
    pub fn to_rule(&self, selector: &str) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("{} {{ {} }}", selector, self)
    }

    /// Lowercase hex SHA-256 of the rendered fragment.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.to_string().as_bytes());
        hex::encode(digest)
    }

    fn push(&mut self, property: &'static str, value: impl Into<String>) {
        self.declarations.push(Declaration::new(property, value));
    }
}

impl fmt::Display for PaintStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, decl) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", decl)?;
        }
        Ok(())
    }
}

/// Compose a paint into its ordered declarations.
pub fn compose_style(paint: &Paint) -> PaintStyle {
    let mut style = PaintStyle::default();

    let layers = paint.layers();
    if layers.is_empty() {
        return style;
    }

    let survivors: Vec<RenderedLayer> = layers.iter().filter_map(render_layer).collect();
    if survivors.len() < layers.len() {
        debug!(
            "paint '{}': {} of {} layers contribute nothing",
            paint.id,
            layers.len() - survivors.len(),
            layers.len()
        );
    }

    let mut colors = Vec::new();
    let mut images = Vec::new();
    // Empty tokens add nothing to the background but still count toward opacity.
    for layer in &survivors {
        match &layer.fill {
            LayerFill::Color(c) if !c.is_empty() => colors.push(c.as_str()),
            LayerFill::Image(i) if !i.is_empty() => images.push(i.as_str()),
            _ => {}
        }
    }
    let background = colors.into_iter().chain(images).collect::<Vec<_>>().join(", ");
    if !background.trim().is_empty() {
        style.push("background", background);
    }

    for (property, value) in TEXT_CLIP_BLOCK {
        style.push(property, value);
    }

    if let Some(filter) = render_shadows(paint.shadows()) {
        style.push("filter", filter);
    }

    let min_opacity = survivors
        .iter()
        .map(|l| l.opacity)
        .filter(|o| *o < 1.0)
        .reduce(f64::min);
    if let Some(opacity) = min_opacity {
        style.push("opacity", css_number(opacity));
    }

    trace!("paint '{}': {} declarations", paint.id, style.declarations.len());
    style
}

/// Compose a paint into a CSS declaration fragment.
///
/// A paint with no layers (or no data at all) yields an empty string,
/// whatever its shadows.
pub fn compose(paint: &Paint) -> String {
    compose_style(paint).to_string()
}

/// [`compose`] for a paint that may be missing entirely.
pub fn compose_optional(paint: Option<&Paint>) -> String {
    paint.map(compose).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, GradientStop, Layer, Shadow};

    const CLIP: &str = "-webkit-background-clip: text; background-clip: text; background-size: cover; background-position: center; color: transparent;";

    #[test]
    fn empty_paint_is_empty_string() {
        let paint = Paint::from_parts(vec![], vec![Shadow::new("#000", 1.0, 1.0, 1.0)]);
        assert_eq!(compose(&paint), "");
        assert_eq!(compose(&Paint::default()), "");
        assert_eq!(compose_optional(None), "");
    }

    #[test]
    fn single_color_layer() {
        let paint = Paint::from_parts(vec![Layer::single_color("#ff0000", 1.0)], vec![]);
        assert_eq!(compose(&paint), format!("background: #ff0000; {}", CLIP));
    }

    #[test]
    fn colors_precede_images() {
        let paint = Paint::from_parts(
            vec![
                Layer::linear_gradient(0.0, false, vec![GradientStop::new(1.0, Color::hex("#111"))], 1.0),
                Layer::single_color("#222", 1.0),
                Layer::single_color("#333", 1.0),
            ],
            vec![],
        );
        let style = compose_style(&paint);
        assert_eq!(style.get("background"), Some("#222, #333, linear-gradient(0deg, #111 100%)"));
    }

    #[test]
    fn whitespace_background_is_dropped() {
        let paint = Paint::from_parts(vec![Layer::single_color("  ", 1.0)], vec![]);
        assert_eq!(compose(&paint), CLIP);
    }

    #[test]
    fn empty_color_token_is_left_out_of_background() {
        let paint = Paint::from_parts(
            vec![Layer::single_color("", 0.5), Layer::single_color("#fff", 1.0)],
            vec![],
        );
        let style = compose_style(&paint);
        assert_eq!(style.get("background"), Some("#fff"));
        assert_eq!(style.get("opacity"), Some("0.5"));

        let only_empty = Paint::from_parts(vec![Layer::single_color("", 1.0)], vec![]);
        assert_eq!(compose(&only_empty), CLIP);
    }

    #[test]
    fn declarations_serialize_as_property_value_objects() {
        let paint = Paint::from_parts(vec![Layer::single_color("#fff", 0.5)], vec![]);
        let json = serde_json::to_value(compose_style(&paint)).unwrap();
        assert_eq!(json[0], serde_json::json!({"property": "background", "value": "#fff"}));
        assert_eq!(json[6], serde_json::json!({"property": "opacity", "value": "0.5"}));
        assert_eq!(serde_json::to_string(&PaintStyle::default()).unwrap(), "[]");
    }

    #[test]
    fn full_declaration_order() {
        let paint = Paint::from_parts(
            vec![Layer::single_color("#abc", 0.9), Layer::single_color("#def", 0.6)],
            vec![Shadow::new("#000", 0.0, 1.0, 2.0)],
        );
        assert_eq!(
            compose(&paint),
            format!("background: #abc, #def; {} filter: drop-shadow(#000 0px 1px 2px); opacity: 0.6;", CLIP)
        );
    }

    #[test]
    fn opaque_survivors_emit_no_opacity() {
        let paint = Paint::from_parts(vec![Layer::single_color("#abc", 1.0)], vec![]);
        assert!(compose_style(&paint).get("opacity").is_none());
    }

    #[test]
    fn absent_layers_do_not_affect_opacity() {
        let paint = Paint::from_parts(
            vec![
                Layer::linear_gradient(0.0, false, vec![], 0.1),
                Layer::single_color("#abc", 0.7),
            ],
            vec![],
        );
        assert_eq!(compose_style(&paint).get("opacity"), Some("0.7"));
    }

    #[test]
    fn rule_and_fingerprint() {
        let paint = Paint::from_parts(vec![Layer::single_color("#fff", 1.0)], vec![]);
        let style = compose_style(&paint);
        assert_eq!(style.to_rule(".name"), format!(".name {{ {} }}", style));
        assert_eq!(PaintStyle::default().to_rule(".name"), "");

        let fp = style.fingerprint();
        assert_eq!(fp.len(), 64);
        assert_eq!(fp, compose_style(&paint).fingerprint());
        assert_ne!(fp, PaintStyle::default().fingerprint());
    }
}
