//! The encoder disk renderer.

use crate::config::RenderConfig;
use crate::errors::EncoderError;
use crate::float_types::Real;
use crate::geometry::{AnnularSector, DiskGeometry, Track};
use crate::io::svg::{DocumentStyle, PathData, build_document};
use log::trace;
use svg::Document;

/// What a subpath of the compound path represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubpathKind {
    Rim,
    CoreHole,
    Notch,
    /// Tooth `k` of track A.
    ToothA(usize),
    /// Tooth `k` of track B.
    ToothB(usize),
}

/// Outline of a single subpath.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Full circle around the disk center.
    Circle(Real),
    Sector(AnnularSector),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subpath {
    pub kind: SubpathKind,
    pub shape: Shape,
}

impl Subpath {
    fn write_to(&self, data: &mut PathData) {
        match &self.shape {
            Shape::Circle(radius) => data.circle(*radius),
            Shape::Sector(sector) => data.annular_sector(sector),
        };
    }
}

/// A validated quadrature encoder disk, ready to be drawn.
///
/// Construction is the only step that can fail; every accessor afterwards is
/// a pure function of the configuration.
///
/// ```
/// # use encoder_disk::{EncoderDisk, RenderConfig};
/// let disk = EncoderDisk::new(RenderConfig::default().with_teeth(16)).unwrap();
/// let svg = disk.to_svg();
/// assert!(svg.contains("fill-rule=\"evenodd\""));
/// ```
#[derive(Debug, Clone)]
pub struct EncoderDisk {
    config: RenderConfig,
    geometry: DiskGeometry,
}

impl EncoderDisk {
    pub fn new(config: RenderConfig) -> Result<Self, EncoderError> {
        let geometry = DiskGeometry::from_config(&config)?;
        Ok(Self { config, geometry })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn geometry(&self) -> &DiskGeometry {
        &self.geometry
    }

    /// Subpaths in drawing order: rim, core hole (if any), notch, track A, track B.
    pub fn subpaths(&self) -> Vec<Subpath> {
        let geometry = &self.geometry;
        // `teeth` is unbounded user input, so no capacity hint
        let mut parts = Vec::new();

        parts.push(Subpath {
            kind: SubpathKind::Rim,
            shape: Shape::Circle(geometry.rim_radius),
        });
        if geometry.core_radius > 0.0 {
            parts.push(Subpath {
                kind: SubpathKind::CoreHole,
                shape: Shape::Circle(geometry.core_radius),
            });
        }
        parts.push(Subpath {
            kind: SubpathKind::Notch,
            shape: Shape::Sector(geometry.notch),
        });
        parts.extend(geometry.teeth(Track::A).enumerate().map(|(k, sector)| Subpath {
            kind: SubpathKind::ToothA(k),
            shape: Shape::Sector(sector),
        }));
        parts.extend(geometry.teeth(Track::B).enumerate().map(|(k, sector)| Subpath {
            kind: SubpathKind::ToothB(k),
            shape: Shape::Sector(sector),
        }));

        trace!("{} subpaths for {} teeth", parts.len(), geometry.teeth);
        parts
    }

    /// The `d` attribute of the compound path.
    pub fn path_data(&self) -> String {
        let mut data = PathData::new();
        for subpath in self.subpaths() {
            subpath.write_to(&mut data);
        }
        data.into_string()
    }

    /// Radii that get a diagnostic circle when outlines are enabled.
    pub fn outline_radii(&self) -> Vec<Real> {
        if !self.config.show_outlines {
            return Vec::new();
        }
        let geometry = &self.geometry;
        [
            geometry.rim_radius,
            geometry.core_radius,
            geometry.track_a.0,
            geometry.track_a.1,
            geometry.track_b.0,
            geometry.track_b.1,
        ]
        .into_iter()
        .filter(|&r| r > 0.0)
        .collect()
    }

    /// The disk as an `svg` crate document, for embedding into larger drawings.
    pub fn document(&self) -> Document {
        let outlines = self.outline_radii();
        let style = DocumentStyle {
            fill: &self.config.fill_color,
            size: self.config.fixed_size(),
            outlines: &outlines,
        };
        build_document(self.geometry.view_box, &self.path_data(), style)
    }

    pub fn to_svg(&self) -> String {
        self.document().to_string()
    }
}

/// Render `config` as a complete SVG document.
///
/// Fails only when the tooth count is not a positive integer; every other
/// option is clamped into drawable geometry.
pub fn render(config: &RenderConfig) -> Result<String, EncoderError> {
    Ok(EncoderDisk::new(config.clone())?.to_svg())
}
