//! Linear and radial gradient layers

use crate::model::{GradientStop, LinearGradientLayer, RadialGradientLayer};
use crate::rendering::{css_number, RenderedLayer};

fn repeat_prefix(repeating: bool) -> &'static str {
    if repeating { "repeating-" } else { "" }
}

/// Serialize stops as `<hex> <percent>%`, comma separated, in caller order.
pub(crate) fn format_stops(stops: &[GradientStop]) -> String {
    stops
        .iter()
        .map(|stop| format!("{} {}%", stop.color.hex, css_number(stop.at * 100.0)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a linear gradient; a gradient without stops contributes nothing.
pub fn render_linear_gradient(layer: &LinearGradientLayer, opacity: f64) -> Option<RenderedLayer> {
    if layer.stops.is_empty() {
        return None;
    }

    let gradient = format!(
        "{}linear-gradient({}deg, {})",
        repeat_prefix(layer.repeating),
        css_number(layer.angle),
        format_stops(&layer.stops)
    );
    Some(RenderedLayer::image(gradient, opacity))
}

/// Render a radial gradient; a gradient without stops contributes nothing.
pub fn render_radial_gradient(layer: &RadialGradientLayer, opacity: f64) -> Option<RenderedLayer> {
    if layer.stops.is_empty() {
        return None;
    }

    let gradient = format!(
        "{}radial-gradient({}, {})",
        repeat_prefix(layer.repeating),
        layer.shape.as_css(),
        format_stops(&layer.stops)
    );
    Some(RenderedLayer::image(gradient, opacity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, RadialShape};
    use crate::rendering::LayerFill;

    fn stop(at: f64, hex: &str) -> GradientStop {
        GradientStop::new(at, Color::hex(hex))
    }

    #[test]
    fn linear_gradient_formats_angle_and_stops() {
        let layer = LinearGradientLayer {
            angle: 45.0,
            repeating: false,
            stops: vec![stop(0.0, "#000"), stop(1.0, "#fff")],
        };
        let rendered = render_linear_gradient(&layer, 1.0).unwrap();
        assert_eq!(
            rendered.fill,
            LayerFill::Image("linear-gradient(45deg, #000 0%, #fff 100%)".into())
        );
    }

    #[test]
    fn repeating_linear_gradient_keeps_stop_order() {
        let layer = LinearGradientLayer {
            angle: 90.5,
            repeating: true,
            stops: vec![stop(0.75, "#111"), stop(0.25, "#222")],
        };
        let rendered = render_linear_gradient(&layer, 0.3).unwrap();
        assert_eq!(rendered.opacity, 0.3);
        assert_eq!(
            rendered.fill,
            LayerFill::Image("repeating-linear-gradient(90.5deg, #111 75%, #222 25%)".into())
        );
    }

    #[test]
    fn radial_gradient_shapes() {
        let mut layer = RadialGradientLayer {
            shape: RadialShape::Circle,
            repeating: true,
            stops: vec![stop(0.5, "#abc")],
        };
        assert_eq!(
            render_radial_gradient(&layer, 1.0).unwrap().fill,
            LayerFill::Image("repeating-radial-gradient(circle, #abc 50%)".into())
        );

        layer.shape = RadialShape::Ellipse;
        layer.repeating = false;
        assert_eq!(
            render_radial_gradient(&layer, 1.0).unwrap().fill,
            LayerFill::Image("radial-gradient(ellipse, #abc 50%)".into())
        );
    }

    #[test]
    fn gradients_without_stops_are_absent() {
        let linear = LinearGradientLayer { angle: 0.0, repeating: false, stops: vec![] };
        let radial = RadialGradientLayer { shape: RadialShape::Circle, repeating: false, stops: vec![] };
        assert!(render_linear_gradient(&linear, 1.0).is_none());
        assert!(render_radial_gradient(&radial, 1.0).is_none());
    }
}
