//! SVG generator for **quadrature rotary encoder disks**.
//!
//! A disk is a filled rim with a central core hole, an alignment notch and two
//! concentric tracks (A and B) of annular-sector slots. Track B is shifted by a
//! quarter of the tooth period, so the two read heads are 90 electrical
//! degrees apart. Everything is emitted as one compound `<path>` filled with
//! the even-odd rule, so every slot cuts through the rim.
//!
//! ```
//! use encoder_disk::{RenderConfig, render};
//!
//! let config = RenderConfig::default()
//!     .with_teeth(4)
//!     .with_outer_radius(100.0)
//!     .with_core_radius(10.0)
//!     .with_track_a(40.0, 60.0)
//!     .with_track_b(65.0, 85.0);
//! let svg = render(&config).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod config;
pub mod disk;
pub mod errors;
pub mod float_types;
pub mod geometry;
pub mod io;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use config::RenderConfig;
pub use disk::{EncoderDisk, render};
pub use errors::EncoderError;
