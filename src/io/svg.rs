//! SVG path data and document assembly.
//!
//! Path data is written by hand so coordinates follow [`format_number`]
//! exactly; the surrounding document is built with the `svg` crate.

use crate::float_types::Real;
use crate::geometry::{AnnularSector, ArcFlags, ViewBox, Winding};
use nalgebra::Point2;
use std::fmt;
use svg::Document;
use svg::node::element::{Circle, Group, Path};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const OUTLINE_STROKE: &str = "#888";
const OUTLINE_STROKE_WIDTH: &str = "0.6";

/// Format a coordinate for markup.
///
/// Integers print without a decimal point (`-0` prints as `0`); anything else
/// gets at most three decimals with trailing zeros removed. A value exactly
/// halfway between two thousandths rounds away from zero.
///
/// ```
/// # use encoder_disk::io::svg::format_number;
/// assert_eq!(format_number(120.0), "120");
/// assert_eq!(format_number(1.25), "1.25");
/// assert_eq!(format_number(2.0 / 3.0), "0.667");
/// assert_eq!(format_number(50.0625), "50.063");
/// ```
pub fn format_number(value: Real) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        if value == 0.0 {
            return "0".to_string();
        }
        return format!("{value}");
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let fixed = format!("{sign}{:.3}", round_half_up_magnitude(value.abs()));
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// `{:.3}` resolves exact ties to even. A binary float sits exactly halfway
/// between two thousandths only when it is an odd number of sixteenths, so
/// those get nudged one ULP up before formatting.
fn round_half_up_magnitude(magnitude: Real) -> Real {
    let sixteenths = magnitude * 16.0;
    if sixteenths.fract() == 0.0 && sixteenths % 2.0 == 1.0 {
        Real::from_bits(magnitude.to_bits() + 1)
    } else {
        magnitude
    }
}

/// Incremental writer for the `d` attribute of a `<path>`.
#[derive(Debug, Clone, Default)]
pub struct PathData {
    data: String,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn command(&mut self, letter: char) -> &mut Self {
        if !self.data.is_empty() {
            self.data.push(' ');
        }
        self.data.push(letter);
        self
    }

    fn point(&mut self, p: Point2<Real>) -> &mut Self {
        self.data
            .push_str(&format!(" {} {}", format_number(p.x), format_number(p.y)));
        self
    }

    pub fn move_to(&mut self, p: Point2<Real>) -> &mut Self {
        self.command('M').point(p)
    }

    pub fn line_to(&mut self, p: Point2<Real>) -> &mut Self {
        self.command('L').point(p)
    }

    /// Circular arc of `radius` ending at `p`.
    pub fn arc_to(&mut self, radius: Real, flags: ArcFlags, p: Point2<Real>) -> &mut Self {
        let r = format_number(radius);
        self.command('A');
        self.data.push_str(&format!(
            " {r} {r} 0 {} {}",
            u8::from(flags.large_arc),
            u8::from(flags.sweep)
        ));
        self.point(p)
    }

    pub fn close(&mut self) -> &mut Self {
        self.command('Z')
    }

    /// Append a full circle of `radius` around the origin as two half-turn arcs.
    pub fn circle(&mut self, radius: Real) -> &mut Self {
        let half_turn = ArcFlags {
            large_arc: true,
            sweep: true,
        };
        let right = Point2::new(radius, 0.0);
        let left = Point2::new(-radius, 0.0);
        self.move_to(right)
            .arc_to(radius, half_turn, left)
            .arc_to(radius, half_turn, right)
            .close()
    }

    /// Append a closed annular sector: out along the outer radius
    /// counter-clockwise, back along the inner radius clockwise.
    pub fn annular_sector(&mut self, sector: &AnnularSector) -> &mut Self {
        let span = sector.span();
        let start = sector.outer_start();
        self.move_to(start)
            .arc_to(
                sector.outer,
                ArcFlags::for_span(span, Winding::CounterClockwise),
                sector.outer_end(),
            )
            .line_to(sector.inner_end())
            .arc_to(
                sector.inner,
                ArcFlags::for_span(span, Winding::Clockwise),
                sector.inner_start(),
            )
            .line_to(start)
            .close()
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn into_string(self) -> String {
        self.data
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

/// Presentation attributes of the rendered document.
#[derive(Debug, Clone, Copy)]
pub struct DocumentStyle<'a> {
    pub fill: &'a str,
    /// Pixel `width`/`height`; `None` lets the drawing scale to its container.
    pub size: Option<(Real, Real)>,
    /// Radii of the diagnostic outline circles, empty when outlines are off.
    pub outlines: &'a [Real],
}

/// Wrap the compound path (and any outline circles) into an `<svg>` document.
pub fn build_document(view_box: ViewBox, path_data: &str, style: DocumentStyle<'_>) -> Document {
    let min = format_number(view_box.min);
    let size = format_number(view_box.size);

    let mut document = Document::new()
        .set("xmlns", SVG_NAMESPACE)
        .set("viewBox", format!("{min} {min} {size} {size}"));
    if let Some((width, height)) = style.size {
        document = document
            .set("width", format!("{width}"))
            .set("height", format!("{height}"));
    }

    let path = Path::new()
        .set("d", path_data)
        .set("fill", style.fill)
        .set("fill-rule", "evenodd")
        .set("stroke", "none");

    let group = style
        .outlines
        .iter()
        .fold(Group::new().set("transform", "translate(0,0)").add(path), |group, &r| {
            group.add(outline_circle(r))
        });

    document.add(group)
}

fn outline_circle(radius: Real) -> Circle {
    Circle::new()
        .set("cx", "0")
        .set("cy", "0")
        .set("r", format_number(radius))
        .set("fill", "none")
        .set("stroke", OUTLINE_STROKE)
        .set("stroke-width", OUTLINE_STROKE_WIDTH)
        .set("vector-effect", "non-scaling-stroke")
}
