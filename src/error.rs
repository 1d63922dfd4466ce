use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FiberError {
    /// Query wavelength was NaN or infinite.
    NonFiniteWavelength(f64),
}

pub type Result<T> = std::result::Result<T, FiberError>;

impl fmt::Display for FiberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteWavelength(wl) => {
                write!(f, "non-finite query wavelength: {wl}")
            }
        }
    }
}

impl std::error::Error for FiberError {}
