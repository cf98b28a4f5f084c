/// Clamps a fill fraction to `[0, 1]`; NaN becomes 0.
///
/// Both the gauge colour and the visible arc length go through this, so the
/// hue can never wrap past red or green.
pub fn clamp_fill(fill: f64) -> f64 {
    if fill.is_nan() {
        0.0
    } else {
        fill.clamp(0.0, 1.0)
    }
}

/// Green (120) at an empty gauge down to red (0) at a full one.
pub fn hue(fill: f64) -> f64 {
    (1.0 - clamp_fill(fill)) * 120.0
}

pub fn color(fill: f64) -> String {
    format!("hsl({},100%,50%)", hue(fill))
}
