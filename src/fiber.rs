use std::sync::OnceLock;

use crate::data::{ABSORPTION_PM2, EMISSION_PM2, WAVELENGTHS_NM};
use crate::error::{FiberError, Result};
use crate::spline;

/// Kind of cross-section to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossSectionKind {
    Emission,
    Absorption,
}

struct Yb3Table {
    emission_spline: Vec<f64>,
    absorption_spline: Vec<f64>,
}

static TABLE: OnceLock<Yb3Table> = OnceLock::new();

fn table() -> &'static Yb3Table {
    TABLE.get_or_init(|| Yb3Table {
        // second_derivatives validates the knot grid and panics on bad
        // literals, so the data tables are checked on first use.
        emission_spline: spline::second_derivatives(&WAVELENGTHS_NM, &EMISSION_PM2),
        absorption_spline: spline::second_derivatives(&WAVELENGTHS_NM, &ABSORPTION_PM2),
    })
}

/// Spectral lookup handle for Yb3+ doped fiber.
///
/// Cheap to create — borrows statically-allocated tables whose spline
/// coefficients are computed on first use. The tables are immutable, so
/// handles on any number of threads may query concurrently.
///
/// Emission and absorption cross-sections are tabulated over 848–1180 nm.
/// Queries outside that range return the boundary cubic's extrapolation
/// rather than an error; only non-finite wavelengths are rejected.
///
/// # Example
/// ```
/// use ybfiber::Yb3Fiber;
///
/// let fiber = Yb3Fiber::new();
/// let em = fiber.emission(976.0).unwrap();
/// assert!((em - 2.97).abs() < 1e-9);
/// ```
pub struct Yb3Fiber {
    table: &'static Yb3Table,
}

impl Yb3Fiber {
    pub fn new() -> Self {
        Yb3Fiber { table: table() }
    }

    /// Returns the stimulated-emission cross-section in pm² at a
    /// wavelength in nm.
    pub fn emission(&self, wavelength_nm: f64) -> Result<f64> {
        self.cross_section_one(wavelength_nm, CrossSectionKind::Emission)
    }

    /// Returns the absorption cross-section in pm² at a wavelength in nm.
    pub fn absorption(&self, wavelength_nm: f64) -> Result<f64> {
        self.cross_section_one(wavelength_nm, CrossSectionKind::Absorption)
    }

    /// Returns emission cross-sections in pm² at each wavelength in nm.
    pub fn emission_spectrum(&self, wavelengths_nm: &[f64]) -> Result<Vec<f64>> {
        self.cross_section(wavelengths_nm, CrossSectionKind::Emission)
    }

    /// Returns absorption cross-sections in pm² at each wavelength in nm.
    pub fn absorption_spectrum(&self, wavelengths_nm: &[f64]) -> Result<Vec<f64>> {
        self.cross_section(wavelengths_nm, CrossSectionKind::Absorption)
    }

    /// Returns the cross-section of the given kind at each wavelength.
    ///
    /// Fails with `NonFiniteWavelength` if any query wavelength is NaN or
    /// infinite; otherwise every wavelength produces a value.
    pub fn cross_section(
        &self,
        wavelengths_nm: &[f64],
        kind: CrossSectionKind,
    ) -> Result<Vec<f64>> {
        wavelengths_nm
            .iter()
            .map(|&wl| self.cross_section_one(wl, kind))
            .collect()
    }

    fn cross_section_one(&self, wavelength_nm: f64, kind: CrossSectionKind) -> Result<f64> {
        if !wavelength_nm.is_finite() {
            return Err(FiberError::NonFiniteWavelength(wavelength_nm));
        }

        let (coeff, y2): (&[f64], &[f64]) = match kind {
            CrossSectionKind::Emission => (&EMISSION_PM2[..], &self.table.emission_spline),
            CrossSectionKind::Absorption => (&ABSORPTION_PM2[..], &self.table.absorption_spline),
        };

        Ok(spline::eval(&WAVELENGTHS_NM, coeff, y2, wavelength_nm))
    }

    /// The tabulated wavelength grid in nm.
    pub fn wavelengths(&self) -> &'static [f64] {
        &WAVELENGTHS_NM
    }

    /// First and last tabulated wavelength in nm.
    pub fn wavelength_range(&self) -> (f64, f64) {
        (WAVELENGTHS_NM[0], WAVELENGTHS_NM[WAVELENGTHS_NM.len() - 1])
    }
}

impl Default for Yb3Fiber {
    fn default() -> Self {
        Self::new()
    }
}
