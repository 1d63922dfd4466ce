//! Absorption and emission cross-section spectra for Yb3+ doped fiber.
//!
//! Tabulated calibration data over 848–1180 nm with natural cubic spline
//! interpolation at arbitrary query wavelengths. Cross-sections are in pm²,
//! wavelengths in nm.

pub mod data;
pub mod error;
pub mod fiber;
pub mod spline;

pub use error::{FiberError, Result};
pub use fiber::{CrossSectionKind, Yb3Fiber};
