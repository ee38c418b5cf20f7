//! Render options for an encoder disk.
//!
//! Every option has a documented default, so a [`RenderConfig`] is always
//! complete before any geometry is computed. Options can be given in Rust
//! through the `with_*` setters or as JSON using the camel-case keys below:
//!
//! ```text
//! { "n": 16, "duty": 0.4, "Rext": 120, "Rcore": 18,
//!   "A_in": 50, "A_out": 70, "B_in": 80, "B_out": 100,
//!   "notchAngleDeg": 0, "notchWidthDeg": 12, "notchDepth": 7,
//!   "viewMarginRatio": 0.08, "fillColor": "#554691",
//!   "width": 360, "height": 360, "showOutlines": false }
//! ```

use crate::errors::EncoderError;
use crate::float_types::Real;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Disk geometry, encoding pattern and presentation options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Teeth per revolution (must be >= 1).
    pub n: i64,
    /// Fraction of each tooth period that is "on"; clamped away from 0 and 1.
    pub duty: Real,
    /// Nominal outer radius. Widened when a track would touch the rim.
    #[serde(rename = "Rext")]
    pub r_ext: Real,
    /// Core hole radius; `0` disables the hole.
    #[serde(rename = "Rcore")]
    pub r_core: Real,
    #[serde(rename = "A_in")]
    pub a_in: Real,
    #[serde(rename = "A_out")]
    pub a_out: Real,
    #[serde(rename = "B_in")]
    pub b_in: Real,
    #[serde(rename = "B_out")]
    pub b_out: Real,
    /// Angular center of the alignment notch, in degrees.
    pub notch_angle_deg: Real,
    /// Angular width of the alignment notch, in degrees.
    pub notch_width_deg: Real,
    /// Radial depth of the notch measured from the core hole.
    pub notch_depth: Real,
    /// Margin around the disk, as a fraction of its largest radius.
    pub view_margin_ratio: Real,
    pub fill_color: String,
    /// Pixel width; fixed sizing is only emitted when both `width` and `height` are set.
    pub width: Option<Real>,
    pub height: Option<Real>,
    /// Draw thin diagnostic circles at every named radius.
    pub show_outlines: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            n: 8,
            duty: 0.5,
            r_ext: 120.0,
            r_core: 18.0,
            a_in: 50.0,
            a_out: 70.0,
            b_in: 80.0,
            b_out: 100.0,
            notch_angle_deg: 0.0,
            notch_width_deg: 12.0,
            notch_depth: 7.0,
            view_margin_ratio: 0.08,
            fill_color: "#554691".to_string(),
            width: Some(360.0),
            height: Some(360.0),
            show_outlines: false,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON text. Missing keys keep their defaults and
    /// `null` for `width`/`height` disables fixed sizing.
    ///
    /// A tooth count that is not an integer is reported as
    /// [`EncoderError::InvalidParameter`], not as a parse error.
    pub fn from_json(text: &str) -> Result<Self, EncoderError> {
        let mut value: Value = serde_json::from_str(text)?;
        if let Some(n) = value.get_mut("n") {
            *n = normalize_tooth_count(n)?;
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Serialize the options back to JSON with the same keys [`from_json`](Self::from_json) reads.
    pub fn to_json(&self) -> Result<String, EncoderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_teeth(mut self, n: i64) -> Self {
        self.n = n;
        self
    }

    pub fn with_duty(mut self, duty: Real) -> Self {
        self.duty = duty;
        self
    }

    pub fn with_outer_radius(mut self, r_ext: Real) -> Self {
        self.r_ext = r_ext;
        self
    }

    pub fn with_core_radius(mut self, r_core: Real) -> Self {
        self.r_core = r_core;
        self
    }

    pub fn with_track_a(mut self, inner: Real, outer: Real) -> Self {
        self.a_in = inner;
        self.a_out = outer;
        self
    }

    pub fn with_track_b(mut self, inner: Real, outer: Real) -> Self {
        self.b_in = inner;
        self.b_out = outer;
        self
    }

    /// Notch centered at `angle_deg`, `width_deg` wide and `depth` deep.
    pub fn with_notch(mut self, angle_deg: Real, width_deg: Real, depth: Real) -> Self {
        self.notch_angle_deg = angle_deg;
        self.notch_width_deg = width_deg;
        self.notch_depth = depth;
        self
    }

    pub fn with_view_margin_ratio(mut self, ratio: Real) -> Self {
        self.view_margin_ratio = ratio;
        self
    }

    pub fn with_fill_color(mut self, color: impl Into<String>) -> Self {
        self.fill_color = color.into();
        self
    }

    pub fn with_size(mut self, width: Real, height: Real) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Drop the fixed pixel size so the SVG scales to its container.
    pub fn without_size(mut self) -> Self {
        self.width = None;
        self.height = None;
        self
    }

    pub fn with_outlines(mut self, show: bool) -> Self {
        self.show_outlines = show;
        self
    }

    /// The pixel size to emit, if both dimensions are present and non-zero.
    pub fn fixed_size(&self) -> Option<(Real, Real)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if is_set(w) && is_set(h) => Some((w, h)),
            _ => None,
        }
    }
}

// zero and NaN both count as "not given"
fn is_set(value: Real) -> bool {
    value != 0.0 && !value.is_nan()
}

/// Accepts `8` and `8.0`, rejects everything else with the tooth count error.
fn normalize_tooth_count(n: &Value) -> Result<Value, EncoderError> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::from(i));
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => Ok(Value::from(f as i64)),
        _ => Err(EncoderError::tooth_count(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = RenderConfig::default();
        assert_eq!(config.n, 8);
        assert_eq!(config.duty, 0.5);
        assert_eq!(config.r_ext, 120.0);
        assert_eq!(config.r_core, 18.0);
        assert_eq!((config.a_in, config.a_out), (50.0, 70.0));
        assert_eq!((config.b_in, config.b_out), (80.0, 100.0));
        assert_eq!(config.notch_width_deg, 12.0);
        assert_eq!(config.notch_depth, 7.0);
        assert_eq!(config.view_margin_ratio, 0.08);
        assert_eq!(config.fill_color, "#554691");
        assert_eq!(config.fixed_size(), Some((360.0, 360.0)));
        assert!(!config.show_outlines);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = RenderConfig::from_json(r#"{ "n": 4, "Rext": 100, "A_in": 40 }"#).unwrap();
        assert_eq!(config.n, 4);
        assert_eq!(config.r_ext, 100.0);
        assert_eq!(config.a_in, 40.0);
        assert_eq!(config.a_out, 70.0);
        assert_eq!(config.fill_color, "#554691");
    }

    #[test]
    fn json_keys_are_camel_case() {
        let config = RenderConfig::from_json(
            r#"{ "notchAngleDeg": 90, "notchWidthDeg": 20, "notchDepth": 3,
                 "viewMarginRatio": 0.1, "fillColor": "red", "showOutlines": true,
                 "B_in": 70, "B_out": 90, "Rcore": 0 }"#,
        )
        .unwrap();
        assert_eq!(config.notch_angle_deg, 90.0);
        assert_eq!(config.notch_width_deg, 20.0);
        assert_eq!(config.notch_depth, 3.0);
        assert_eq!(config.view_margin_ratio, 0.1);
        assert_eq!(config.fill_color, "red");
        assert!(config.show_outlines);
        assert_eq!((config.b_in, config.b_out), (70.0, 90.0));
        assert_eq!(config.r_core, 0.0);
    }

    #[test]
    fn null_size_disables_fixed_sizing() {
        let config = RenderConfig::from_json(r#"{ "width": null }"#).unwrap();
        assert_eq!(config.width, None);
        assert_eq!(config.fixed_size(), None);

        let zero = RenderConfig::default().with_size(0.0, 200.0);
        assert_eq!(zero.fixed_size(), None);
    }

    #[test]
    fn integral_float_tooth_count_is_accepted() {
        let config = RenderConfig::from_json(r#"{ "n": 12.0 }"#).unwrap();
        assert_eq!(config.n, 12);
    }

    #[test]
    fn non_integer_tooth_count_is_invalid_parameter() {
        for text in [r#"{ "n": 2.5 }"#, r#"{ "n": "8" }"#, r#"{ "n": null }"#] {
            let err = RenderConfig::from_json(text).unwrap_err();
            assert!(
                matches!(err, EncoderError::InvalidParameter { name: "n", .. }),
                "{text} gave {err}"
            );
        }
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = RenderConfig::from_json("{ n: 4 ").unwrap_err();
        assert!(matches!(err, EncoderError::Config(_)));
    }

    #[test]
    fn json_round_trip() {
        let config = RenderConfig::default()
            .with_teeth(32)
            .with_duty(0.3)
            .with_notch(45.0, 8.0, 4.0)
            .without_size()
            .with_outlines(true);
        let text = config.to_json().unwrap();
        assert_eq!(RenderConfig::from_json(&text).unwrap(), config);
    }
}
