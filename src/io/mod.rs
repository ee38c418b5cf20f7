//! Output formats for rendered disks

pub mod svg;
