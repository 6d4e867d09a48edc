use crate::SectionError;
use log::warn;

/// Minimum number of sample points needed to build a profile.
pub const MIN_SAMPLES: usize = 3;

/// Parallel pixel-distance and altitude measurements read off a map.
///
/// The two sequences are index-paired: `pixel_distances[i]` is the on-map
/// distance of the sample whose altitude is `altitudes_m[i]`. Equal length
/// is enforced at construction; everything else (strictly increasing
/// distances, enough points) is checked when a profile is built.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    pixel_distances: Vec<f64>,
    altitudes_m: Vec<f64>,
}

impl SampleSet {
    /// Parses two comma-separated number lists, e.g. `"0, 150, 300"` and
    /// `"600, 620, 640"`.
    ///
    /// Whitespace around tokens is ignored, as are empty tokens left by
    /// stray commas. Any other non-numeric token fails the whole parse.
    pub fn from_text(distances: &str, altitudes: &str) -> Result<Self, SectionError> {
        let pixel_distances = parse_values(distances)?;
        let altitudes_m = parse_values(altitudes)?;
        Self::new(pixel_distances, altitudes_m)
    }

    /// Returns a new `SampleSet` from already-numeric measurements.
    pub fn new(pixel_distances: Vec<f64>, altitudes_m: Vec<f64>) -> Result<Self, SectionError> {
        if pixel_distances.len() != altitudes_m.len() {
            return Err(SectionError::CountMismatch {
                distances: pixel_distances.len(),
                altitudes: altitudes_m.len(),
            });
        }
        if pixel_distances.len() < MIN_SAMPLES {
            // Soft limit; `ProfileBuilder::build` is the hard gate.
            warn!(
                "only {} sample(s); a profile needs at least {MIN_SAMPLES}",
                pixel_distances.len()
            );
        }
        Ok(Self {
            pixel_distances,
            altitudes_m,
        })
    }

    pub fn len(&self) -> usize {
        self.pixel_distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixel_distances.is_empty()
    }

    /// On-map distances, in pixel units of the digitized image.
    pub fn pixel_distances(&self) -> &[f64] {
        &self.pixel_distances
    }

    /// Altitudes in meters.
    pub fn altitudes_m(&self) -> &[f64] {
        &self.altitudes_m
    }
}

fn parse_values(text: &str) -> Result<Vec<f64>, SectionError> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| SectionError::Parse(token.to_owned()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::SampleSet;
    use crate::SectionError;

    #[test]
    fn test_from_text() {
        let samples = SampleSet::from_text("0, 150, 300, 450", "600, 620, 640, 680").unwrap();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples.pixel_distances(), &[0.0, 150.0, 300.0, 450.0]);
        assert_eq!(samples.altitudes_m(), &[600.0, 620.0, 640.0, 680.0]);
    }

    #[test]
    fn test_from_text_tolerates_stray_commas_and_whitespace() {
        let samples = SampleSet::from_text(" 0 ,150,  300 , ", "600,620,,640,").unwrap();
        assert_eq!(samples.pixel_distances(), &[0.0, 150.0, 300.0]);
        assert_eq!(samples.altitudes_m(), &[600.0, 620.0, 640.0]);
    }

    #[test]
    fn test_bad_token_reported() {
        let err = SampleSet::from_text("0, 150, ridge", "600, 620, 640").unwrap_err();
        assert!(matches!(err, SectionError::Parse(token) if token == "ridge"));
    }

    #[test]
    fn test_count_mismatch_rejected() {
        let err = SampleSet::from_text("0, 150, 300, 450", "600, 620, 640").unwrap_err();
        assert!(matches!(
            err,
            SectionError::CountMismatch {
                distances: 4,
                altitudes: 3,
            }
        ));
    }

    #[test]
    fn test_short_set_still_constructs() {
        // Too short to profile, but parsing succeeds; the profile builder
        // refuses it later.
        let samples = SampleSet::from_text("0, 150", "600, 620").unwrap();
        assert_eq!(samples.len(), 2);
    }
}
