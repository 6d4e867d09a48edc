use crate::SectionError;
use std::{fmt, str::FromStr};

/// Pixel units per centimeter on the map at its digitization resolution.
const PX_PER_MAP_CM: f64 = 40.0;

/// Centimeters per kilometer.
const CM_PER_KM: f64 = 100_000.0;

/// A `1:N` map scale: one unit on the map is `N` units in reality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapScale(u32);

impl MapScale {
    /// Returns a new scale with the given denominator, the `N` in `1:N`.
    ///
    /// The denominator must be nonzero; text input is vetted by the
    /// [`FromStr`] impl, which rejects `0`.
    pub fn new(denominator: u32) -> Self {
        Self(denominator)
    }

    pub fn denominator(&self) -> u32 {
        self.0
    }

    /// Converts an on-map pixel distance to real-world kilometers.
    ///
    /// `PX_PER_MAP_CM` pixels equal one centimeter on the map, the scale
    /// denominator turns map centimeters into real centimeters, and
    /// `CM_PER_KM` brings the result to kilometers. No rounding: full
    /// floating-point precision is kept for interpolation.
    pub fn pixels_to_km(&self, pixels: f64) -> f64 {
        pixels / PX_PER_MAP_CM * f64::from(self.0) / CM_PER_KM
    }
}

impl fmt::Display for MapScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1:{}", self.0)
    }
}

impl FromStr for MapScale {
    type Err = SectionError;

    /// Accepts a bare denominator (`"50000"`) or ratio form (`"1:50000"`).
    fn from_str(s: &str) -> Result<Self, SectionError> {
        let denominator = match s.trim().split_once(':') {
            Some(("1", denominator)) => denominator,
            Some(_) => return Err(SectionError::Scale(s.to_owned())),
            None => s.trim(),
        };
        match denominator.trim().parse::<u32>() {
            Ok(denominator) if denominator > 0 => Ok(Self(denominator)),
            _ => Err(SectionError::Scale(s.to_owned())),
        }
    }
}
