//! Test support library
//! Helpers for pulling geometry back out of rendered SVG text.

#![allow(dead_code)]

use encoder_disk::float_types::Real;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Route `log` output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Value of the first `name="..."` attribute in `svg`.
pub fn attribute<'a>(svg: &'a str, name: &str) -> Option<&'a str> {
    let key = format!(" {name}=\"");
    let start = svg.find(&key)? + key.len();
    let len = svg[start..].find('"')?;
    Some(&svg[start..start + len])
}

/// The compound path's `d` attribute.
pub fn path_data(svg: &str) -> &str {
    attribute(svg, "d").expect("document should contain a path")
}

/// `[min_x, min_y, width, height]` of the document's view box.
pub fn view_box(svg: &str) -> [Real; 4] {
    let values: Vec<Real> = attribute(svg, "viewBox")
        .expect("document should have a viewBox")
        .split_whitespace()
        .map(|v| v.parse().expect("numeric viewBox"))
        .collect();
    [values[0], values[1], values[2], values[3]]
}

/// One `M ... Z` run of a path's data.
#[derive(Debug, Clone)]
pub struct ParsedSubpath {
    pub tokens: Vec<String>,
}

impl ParsedSubpath {
    fn number(&self, index: usize) -> Real {
        self.tokens[index].parse().expect("numeric path token")
    }

    /// Sectors contain straight radial edges, full circles do not.
    pub fn is_sector(&self) -> bool {
        self.tokens.iter().any(|t| t == "L")
    }

    pub fn outer_radius(&self) -> Real {
        self.number(4)
    }

    /// Radius of the return arc of a sector.
    pub fn inner_radius(&self) -> Real {
        self.number(15)
    }

    pub fn outer_large_arc(&self) -> bool {
        self.tokens[7] == "1"
    }

    /// Angle of the `M` point, in degrees within `[0, 360)`.
    pub fn start_angle_deg(&self) -> Real {
        angle_deg(self.number(1), self.number(2))
    }

    /// Angle of the end of the outer arc, in degrees within `[0, 360)`.
    pub fn end_angle_deg(&self) -> Real {
        angle_deg(self.number(9), self.number(10))
    }

    /// Counter-clockwise extent of the outer arc, in degrees.
    pub fn span_deg(&self) -> Real {
        (self.end_angle_deg() - self.start_angle_deg()).rem_euclid(360.0)
    }
}

pub fn angle_deg(x: Real, y: Real) -> Real {
    y.atan2(x).to_degrees().rem_euclid(360.0)
}

/// Split path data into its subpaths.
pub fn subpaths(d: &str) -> Vec<ParsedSubpath> {
    d.split('M')
        .filter(|chunk| !chunk.trim().is_empty())
        .map(|chunk| {
            let mut tokens = vec!["M".to_string()];
            tokens.extend(chunk.split_whitespace().map(str::to_string));
            ParsedSubpath { tokens }
        })
        .collect()
}

/// Sector subpaths whose outer/inner radii are exactly `outer`/`inner`.
pub fn sectors_between(d: &str, inner: Real, outer: Real) -> Vec<ParsedSubpath> {
    subpaths(d)
        .into_iter()
        .filter(|s| s.is_sector() && s.inner_radius() == inner && s.outer_radius() == outer)
        .collect()
}
