// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

/// Distance kept between the duty cycle and the degenerate values 0 and 1.
pub const DUTY_EPSILON: Real = 1e-3;

/// Radial clearance forced between the outermost track and the rim.
pub const RIM_CLEARANCE: Real = 2.0;

/// Smallest radial depth the notch is allowed to collapse to.
pub const MIN_NOTCH_DEPTH: Real = 1.0;

/// A notch shallower than this counts as collapsed and gets [`MIN_NOTCH_DEPTH`].
pub const NOTCH_EPSILON: Real = 1e-6;
