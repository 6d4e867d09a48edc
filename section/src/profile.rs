use crate::{
    interp::PchipInterpolator,
    math::linspace,
    sample::{SampleSet, MIN_SAMPLES},
    scale::MapScale,
    SectionError,
};
use log::debug;

/// Number of grid points the profile curve is sampled on.
///
/// Fixed, so the rendered curve is equally smooth no matter how many
/// intersection points were digitized.
pub const GRID_LEN: usize = 600;

/// Display headroom below the lowest sample (meters).
const Y_PAD_BELOW_M: f64 = 25.0;

/// Display headroom above the highest sample (meters). Cross-sections
/// conventionally get more room above the ridge line than below the
/// valley floor.
const Y_PAD_ABOVE_M: f64 = 50.0;

/// A scaled, interpolated elevation cross-section.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Map scale the pixel measurements were converted under.
    pub scale: MapScale,

    /// Scaled knot distances (kilometers), strictly increasing.
    pub distances_km: Vec<f64>,

    /// Knot altitudes (meters).
    pub altitudes_m: Vec<f64>,

    /// Dense, evenly spaced distance grid spanning the knot range.
    pub x_grid: Vec<f64>,

    /// Interpolated altitude (meters) at each grid distance.
    pub y_smooth: Vec<f64>,

    /// Display floor (meters).
    pub y_min: f64,

    /// Display ceiling (meters).
    pub y_max: f64,
}

impl Profile {
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder {
            samples: None,
            scale: None,
        }
    }
}

pub struct ProfileBuilder {
    samples: Option<SampleSet>,

    scale: Option<MapScale>,
}

impl ProfileBuilder {
    /// Digitized measurements (required).
    #[must_use]
    pub fn samples(mut self, samples: SampleSet) -> Self {
        self.samples = Some(samples);
        self
    }

    /// Map scale of the source map (required).
    #[must_use]
    pub fn scale(mut self, scale: MapScale) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn build(&self) -> Result<Profile, SectionError> {
        let samples = self
            .samples
            .as_ref()
            .ok_or(SectionError::Builder("samples"))?;
        let scale = self.scale.ok_or(SectionError::Builder("scale"))?;

        if samples.len() < MIN_SAMPLES {
            return Err(SectionError::InsufficientSamples(samples.len()));
        }

        let distances_km: Vec<f64> = samples
            .pixel_distances()
            .iter()
            .map(|&px| scale.pixels_to_km(px))
            .collect();
        let altitudes_m = samples.altitudes_m().to_vec();

        // Rejects duplicate or decreasing distances before any grid work.
        let interp = PchipInterpolator::new(&distances_km, &altitudes_m)?;

        // Unwrap is fine: the sample gate above guarantees three or more knots.
        let x_grid: Vec<f64> =
            linspace(distances_km[0], *distances_km.last().unwrap(), GRID_LEN).collect();
        let y_smooth: Vec<f64> = x_grid.iter().map(|&x| interp.eval(x)).collect();

        let (y_floor, y_ceil) = altitudes_m
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &alt| {
                (lo.min(alt), hi.max(alt))
            });

        debug!(
            "profile; knots: {}, span: {:.3} km, alt: {y_floor}..{y_ceil} m",
            distances_km.len(),
            x_grid[GRID_LEN - 1] - x_grid[0],
        );

        Ok(Profile {
            scale,
            distances_km,
            altitudes_m,
            x_grid,
            y_smooth,
            y_min: y_floor - Y_PAD_BELOW_M,
            y_max: y_ceil + Y_PAD_ABOVE_M,
        })
    }
}
