use crate::core::color::{clamp_fill, color};
use crate::domain::model::DerivedMetrics;

/// Sweep of the dial in degrees.
pub const ARC_DEGREES: f64 = 270.0;

/// Dimensions of the dial for a given layout width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeGeometry {
    pub radius: f64,
    pub stroke_width: f64,
    pub inner_radius: f64,
    pub circumference: f64,
    pub arc: f64,
}

impl GaugeGeometry {
    pub fn for_width(viewport_width: f64) -> Self {
        let radius = viewport_width / 3.0;
        let stroke_width = radius * 0.2;
        let inner_radius = radius - stroke_width / 2.0;
        let circumference = inner_radius * 2.0 * std::f64::consts::PI;
        let arc = circumference * (ARC_DEGREES / 360.0);

        Self {
            radius,
            stroke_width,
            inner_radius,
            circumference,
            arc,
        }
    }

    /// Dash offset that leaves `fill` of the arc visible.
    pub fn dash_offset(&self, fill: f64) -> f64 {
        self.arc - clamp_fill(fill) * self.arc
    }
}

/// What the dial shows.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeView {
    pub fill: f64,
    pub percent: Option<f64>,
    pub label: String,
    pub status: Option<String>,
}

impl GaugeView {
    pub fn from_metrics(metrics: &DerivedMetrics) -> Self {
        let status = match (metrics.pages_pending, metrics.pages_failed) {
            (0, 0) => None,
            (pending, 0) => Some(format!("{} pages loading", pending)),
            (0, failed) => Some(format!("{} pages failed", failed)),
            (pending, failed) => Some(format!(
                "{} pages loading, {} failed",
                pending, failed
            )),
        };

        Self {
            fill: metrics.hype,
            percent: Some(metrics.percent * 100.0),
            label: metrics.label.clone(),
            status,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GaugeRenderer {
    geometry: GaugeGeometry,
    animate: bool,
}

impl GaugeRenderer {
    pub fn new(viewport_width: f64) -> Self {
        Self {
            geometry: GaugeGeometry::for_width(viewport_width),
            animate: true,
        }
    }

    pub fn without_animation(mut self) -> Self {
        self.animate = false;
        self
    }

    pub fn render(&self, view: &GaugeView) -> String {
        let g = &self.geometry;
        let r = num(g.radius);
        let size = num(g.radius * 2.0);
        let inner = num(g.inner_radius);
        let stroke = num(g.stroke_width);
        let dash_array = format!("{} {}", num(g.arc), num(g.circumference));
        let transform = format!("rotate(135, {}, {})", r, r);
        let offset = num(g.dash_offset(view.fill));

        let animation = if self.animate {
            format!(
                r#"<animate attributeName="stroke-dashoffset" from="{}" to="{}" dur="1s" fill="freeze"/>"#,
                num(g.arc),
                offset
            )
        } else {
            String::new()
        };

        let mut svg = String::new();
        svg.push_str(&format!(
            r#"<svg viewBox="0 0 {size} {size}" xmlns="http://www.w3.org/2000/svg">"#
        ));
        svg.push_str(&format!(
            r#"<circle cx="{r}" cy="{r}" fill="transparent" r="{inner}" stroke="gray" stroke-width="{stroke}" stroke-dasharray="{dash_array}" transform="{transform}" stroke-linecap="round"/>"#
        ));
        svg.push_str(&format!(
            r#"<circle cx="{r}" cy="{r}" fill="transparent" r="{inner}" stroke="{color}" stroke-dasharray="{dash_array}" stroke-dashoffset="{offset}" stroke-linecap="round" stroke-width="{stroke}" style="transition: stroke-dashoffset 1s" transform="{transform}">{animation}</circle>"#,
            color = color(view.fill),
        ));
        svg.push_str(&text("50%", g.radius / 6.0, &view.label));
        if let Some(percent) = view.percent {
            svg.push_str(&text("40%", g.radius / 8.0, &format!("{:.0}%", percent.round())));
        }
        if let Some(status) = &view.status {
            svg.push_str(&text("62%", g.radius / 14.0, status));
        }
        svg.push_str("</svg>");
        svg
    }
}

fn text(y: &str, font_size: f64, content: &str) -> String {
    format!(
        r#"<text x="50%" y="{}" dominant-baseline="middle" text-anchor="middle" font-size="{}" fill="white">{}</text>"#,
        y,
        num(font_size),
        escape_xml(content)
    )
}

/// Up to three decimals, trailing zeros trimmed.
fn num(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(fill: f64) -> GaugeView {
        GaugeView {
            fill,
            percent: Some(7.0),
            label: "LOW-MODERATE".to_string(),
            status: None,
        }
    }

    #[test]
    fn test_geometry_from_width() {
        let g = GaugeGeometry::for_width(900.0);
        assert_eq!(g.radius, 300.0);
        assert!((g.stroke_width - 60.0).abs() < 1e-9);
        assert!((g.inner_radius - 270.0).abs() < 1e-9);
        assert!((g.arc - g.circumference * 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_dash_offset_is_clamped() {
        let g = GaugeGeometry::for_width(900.0);
        assert_eq!(g.dash_offset(0.0), g.arc);
        assert_eq!(g.dash_offset(1.0), 0.0);
        assert_eq!(g.dash_offset(2.0), 0.0);
        assert_eq!(g.dash_offset(-1.0), g.arc);
    }

    #[test]
    fn test_render_contains_track_fill_and_labels() {
        let svg = GaugeRenderer::new(900.0).render(&view(0.5));
        assert!(svg.starts_with(r#"<svg viewBox="0 0 600 600""#));
        assert!(svg.contains(r#"stroke="gray""#));
        assert!(svg.contains(r#"stroke="hsl(60,100%,50%)""#));
        assert!(svg.contains(r#"transform="rotate(135, 300, 300)""#));
        assert!(svg.contains(">LOW-MODERATE</text>"));
        assert!(svg.contains(">7%</text>"));
        assert!(svg.contains("<animate"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_render_without_percent_or_animation() {
        let mut v = view(0.2);
        v.percent = None;
        let svg = GaugeRenderer::new(600.0).without_animation().render(&v);
        assert_eq!(svg.matches("<text").count(), 1);
        assert!(!svg.contains("<animate"));
    }

    #[test]
    fn test_status_line_and_escaping() {
        let mut v = view(0.9);
        v.label = "R&D <HOT>".to_string();
        v.status = Some("2 pages failed".to_string());
        let svg = GaugeRenderer::new(900.0).render(&v);
        assert!(svg.contains("R&amp;D &lt;HOT&gt;"));
        assert!(svg.contains(">2 pages failed</text>"));
    }

    #[test]
    fn test_view_from_metrics() {
        let metrics = DerivedMetrics {
            matched: 7,
            sampled: 80,
            percent: 0.25,
            hype: 0.07,
            label: "LOW-MODERATE".to_string(),
            color: color(0.07),
            pages_resolved: 6,
            pages_failed: 2,
            pages_pending: 2,
        };
        let v = GaugeView::from_metrics(&metrics);
        assert_eq!(v.fill, 0.07);
        assert_eq!(v.percent, Some(25.0));
        assert_eq!(v.status.as_deref(), Some("2 pages loading, 2 failed"));
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(300.0), "300");
        assert_eq!(num(1272.3450001), "1272.345");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(-0.0001), "0");
    }
}
