//! Version information for Clipper2
//!
//! Direct port from clipper.version.h

/// Clipper2 library version string
pub const CLIPPER2_VERSION: &str = "1.5.4";
