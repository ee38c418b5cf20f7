//! Disk geometry derived from a [`RenderConfig`].
//!
//! All angles are in radians, measured counter-clockwise from +X in SVG user
//! space. Nothing here formats markup; see [`crate::io::svg`] for that.

use crate::config::RenderConfig;
use crate::errors::EncoderError;
use crate::float_types::{
    DUTY_EPSILON, MIN_NOTCH_DEPTH, NOTCH_EPSILON, PI, RIM_CLEARANCE, Real, TAU,
};
use log::debug;
use nalgebra::Point2;

/// Point at radius `r` and angle `theta` around the disk center.
#[inline]
pub fn polar(r: Real, theta: Real) -> Point2<Real> {
    Point2::new(r * theta.cos(), r * theta.sin())
}

/// Degrees to radians as `deg * π / 180`, multiplying before dividing.
#[inline]
pub fn deg_to_rad(deg: Real) -> Real {
    deg * PI / 180.0
}

/// Reduce an angular delta into `[0, 2π)`.
#[inline]
pub fn normalize_angle(delta: Real) -> Real {
    delta.rem_euclid(TAU)
}

/// Direction an arc is traversed in, which fixes its sweep flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Increasing angle, sweep flag 1.
    CounterClockwise,
    /// Decreasing angle, sweep flag 0.
    Clockwise,
}

/// The two flag arguments of an SVG elliptical arc command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcFlags {
    pub large_arc: bool,
    pub sweep: bool,
}

impl ArcFlags {
    /// Flags for an arc spanning `delta`: large-arc once the normalized span exceeds half a turn.
    pub fn for_span(delta: Real, winding: Winding) -> Self {
        Self {
            large_arc: normalize_angle(delta) > PI,
            sweep: winding == Winding::CounterClockwise,
        }
    }
}

/// Region between two radii and two angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnularSector {
    pub inner: Real,
    pub outer: Real,
    pub start: Real,
    pub end: Real,
}

impl AnnularSector {
    pub const fn new(inner: Real, outer: Real, start: Real, end: Real) -> Self {
        Self { inner, outer, start, end }
    }

    /// Angular extent, normalized into `[0, 2π)`.
    pub fn span(&self) -> Real {
        normalize_angle(self.end - self.start)
    }

    pub fn outer_start(&self) -> Point2<Real> {
        polar(self.outer, self.start)
    }

    pub fn outer_end(&self) -> Point2<Real> {
        polar(self.outer, self.end)
    }

    pub fn inner_start(&self) -> Point2<Real> {
        polar(self.inner, self.start)
    }

    pub fn inner_end(&self) -> Point2<Real> {
        polar(self.inner, self.end)
    }
}

/// Which of the two quadrature tracks a tooth belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    A,
    B,
}

/// Square view box centered on the disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min: Real,
    pub size: Real,
}

impl ViewBox {
    pub fn half_size(&self) -> Real {
        self.size * 0.5
    }
}

/// Every derived quantity needed to draw the disk.
#[derive(Debug, Clone, PartialEq)]
pub struct DiskGeometry {
    pub teeth: usize,
    /// Duty cycle after clamping into `[ε, 1-ε]`.
    pub duty: Real,
    /// Angular period of one tooth, `2π/n`.
    pub period: Real,
    /// Quadrature offset of track B, a quarter period.
    pub phase_b: Real,
    /// Rim radius, at least [`RIM_CLEARANCE`] beyond both tracks.
    pub rim_radius: Real,
    pub max_radius: Real,
    pub core_radius: Real,
    pub track_a: (Real, Real),
    pub track_b: (Real, Real),
    pub notch: AnnularSector,
    pub view_box: ViewBox,
}

impl DiskGeometry {
    /// Validate the tooth count and derive the rest, clamping where needed.
    pub fn from_config(config: &RenderConfig) -> Result<Self, EncoderError> {
        let teeth = usize::try_from(config.n)
            .ok()
            .filter(|&n| n >= 1)
            .ok_or_else(|| EncoderError::tooth_count(config.n))?;

        let duty = config.duty.max(DUTY_EPSILON).min(1.0 - DUTY_EPSILON);
        if duty != config.duty {
            debug!("duty {} clamped to {}", config.duty, duty);
        }

        let period = TAU / teeth as Real;
        let phase_b = period / 4.0;

        let rim_radius = config
            .r_ext
            .max(config.a_out + RIM_CLEARANCE)
            .max(config.b_out + RIM_CLEARANCE);
        if rim_radius != config.r_ext {
            debug!("outer radius {} widened to {}", config.r_ext, rim_radius);
        }
        let max_radius = rim_radius.max(config.a_out).max(config.b_out);
        let margin = config.view_margin_ratio * max_radius;
        let view_box = ViewBox {
            min: -(max_radius + margin),
            size: 2.0 * (max_radius + margin),
        };

        let notch = notch_sector(config);

        debug!(
            "disk: {teeth} teeth, duty {duty}, rim {rim_radius}, notch {}..{}",
            notch.inner, notch.outer
        );

        Ok(Self {
            teeth,
            duty,
            period,
            phase_b,
            rim_radius,
            max_radius,
            core_radius: config.r_core,
            track_a: (config.a_in, config.a_out),
            track_b: (config.b_in, config.b_out),
            notch,
            view_box,
        })
    }

    /// Angular extent of one tooth, `duty * period`.
    pub fn tooth_span(&self) -> Real {
        self.duty * self.period
    }

    /// The `k`-th tooth of `track`.
    pub fn tooth(&self, track: Track, k: usize) -> AnnularSector {
        let ((inner, outer), offset) = match track {
            Track::A => (self.track_a, 0.0),
            Track::B => (self.track_b, self.phase_b),
        };
        let start = k as Real * self.period + offset;
        AnnularSector::new(inner, outer, start, start + self.tooth_span())
    }

    /// All teeth of `track`, in angular order starting at tooth 0.
    pub fn teeth(&self, track: Track) -> impl Iterator<Item = AnnularSector> + '_ {
        (0..self.teeth).map(move |k| self.tooth(track, k))
    }
}

/// The notch starts flush with the core hole and never reaches into track A.
fn notch_sector(config: &RenderConfig) -> AnnularSector {
    let inner = config.r_core;
    let mut outer = config.r_core + config.notch_depth;
    if config.a_in > 0.0 && outer > config.a_in {
        outer = (config.a_in + config.r_core) / 2.0;
        debug!("notch depth {} clamped, outer radius {}", config.notch_depth, outer);
    }
    if outer <= inner + NOTCH_EPSILON {
        outer = inner + MIN_NOTCH_DEPTH;
    }

    let center = deg_to_rad(config.notch_angle_deg);
    let half_width = deg_to_rad(config.notch_width_deg) / 2.0;
    AnnularSector::new(inner, outer, center - half_width, center + half_width)
}
