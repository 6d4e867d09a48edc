//! Shape-preserving piecewise-cubic interpolation.
//!
//! Monotone cubic Hermite interpolation with Fritsch-Carlson slope
//! selection. Within each segment the curve stays inside the local data
//! range, so a terrain profile never overshoots a ridge or undercuts a
//! valley the way an unconstrained cubic spline can.

use num_traits::{Float, FromPrimitive};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpError {
    #[error("knot count mismatch: {xs} abscissas vs {ys} ordinates")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("need at least 2 knots, got {0}")]
    TooFewKnots(usize),

    #[error("knot abscissas must be strictly increasing (violated at knot {0})")]
    NotIncreasing(usize),
}

/// Monotone piecewise-cubic Hermite interpolant through a set of knots.
#[derive(Debug, Clone, PartialEq)]
pub struct PchipInterpolator<T = f64> {
    xs: Vec<T>,
    ys: Vec<T>,
    slopes: Vec<T>,
}

impl<T> PchipInterpolator<T>
where
    T: Float + FromPrimitive,
{
    /// Fits an interpolant through the knots `(xs[i], ys[i])`.
    ///
    /// `xs` must be strictly increasing, and both slices must have the
    /// same length of at least two.
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpError> {
        if xs.len() != ys.len() {
            return Err(InterpError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(InterpError::TooFewKnots(xs.len()));
        }
        for (i, pair) in xs.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(InterpError::NotIncreasing(i + 1));
            }
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            slopes: fritsch_carlson_slopes(xs, ys),
        })
    }

    /// Evaluates the interpolant at `x`.
    ///
    /// At a knot the knot's ordinate is reproduced exactly. Outside the
    /// knot range, the boundary segment's cubic is extended.
    pub fn eval(&self, x: T) -> T {
        let i = self.segment(x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let h = x1 - x0;
        let t = (x - x0) / h;
        let t2 = t * t;
        let t3 = t2 * t;

        let two = T::from(2).unwrap();
        let three = T::from(3).unwrap();

        let h00 = two * t3 - three * t2 + T::one();
        let h10 = t3 - two * t2 + t;
        let h01 = three * t2 - two * t3;
        let h11 = t3 - t2;

        h00 * self.ys[i]
            + h10 * h * self.slopes[i]
            + h01 * self.ys[i + 1]
            + h11 * h * self.slopes[i + 1]
    }

    /// Index of the segment `[xs[i], xs[i + 1]]` containing `x`, clamped
    /// to the boundary segments.
    fn segment(&self, x: T) -> usize {
        let n = self.xs.len();
        if x <= self.xs[0] {
            return 0;
        }
        if x >= self.xs[n - 1] {
            return n - 2;
        }
        self.xs.partition_point(|&knot| knot <= x) - 1
    }
}

/// Fritsch-Carlson knot slopes: a weighted harmonic mean of the adjacent
/// secants at interior knots, zero where the secants change sign (the
/// knot is a local extremum), and clamped one-sided estimates at the two
/// ends.
fn fritsch_carlson_slopes<T>(xs: &[T], ys: &[T]) -> Vec<T>
where
    T: Float + FromPrimitive,
{
    let n = xs.len();
    let h: Vec<T> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let secants: Vec<T> = h
        .iter()
        .zip(ys.windows(2))
        .map(|(&dx, w)| (w[1] - w[0]) / dx)
        .collect();

    // Two knots leave nothing to shape: the interpolant is the secant line.
    if n == 2 {
        return vec![secants[0]; 2];
    }

    let two = T::from(2).unwrap();
    let mut slopes = vec![T::zero(); n];
    for k in 1..n - 1 {
        let (d0, d1) = (secants[k - 1], secants[k]);
        if d0 * d1 > T::zero() {
            let w1 = two * h[k] + h[k - 1];
            let w2 = h[k] + two * h[k - 1];
            slopes[k] = (w1 + w2) / (w1 / d0 + w2 / d1);
        }
    }
    slopes[0] = edge_slope(h[0], h[1], secants[0], secants[1]);
    slopes[n - 1] = edge_slope(h[n - 2], h[n - 3], secants[n - 2], secants[n - 3]);
    slopes
}

/// One-sided three-point slope estimate for an end knot, with the two
/// Fritsch-Carlson clamps that keep the boundary segment monotone.
/// `h0`/`d0` belong to the interval nearest the end, `h1`/`d1` to the
/// next one in.
fn edge_slope<T>(h0: T, h1: T, d0: T, d1: T) -> T
where
    T: Float + FromPrimitive,
{
    let two = T::from(2).unwrap();
    let three = T::from(3).unwrap();

    let d = ((two * h0 + h1) * d0 - h0 * d1) / (h0 + h1);
    if sign(d) != sign(d0) {
        T::zero()
    } else if sign(d0) != sign(d1) && d.abs() > three * d0.abs() {
        three * d0
    } else {
        d
    }
}

fn sign<T: Float>(v: T) -> i8 {
    if v > T::zero() {
        1
    } else if v < T::zero() {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::{InterpError, PchipInterpolator};
    use approx::assert_relative_eq;

    #[test]
    fn test_knots_reproduced_exactly() {
        let xs = [0.0, 1.0, 2.5, 4.0, 7.0];
        let ys = [600.0, 620.0, 615.0, 680.0, 640.0];
        let interp = PchipInterpolator::new(&xs, &ys).unwrap();
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(interp.eval(x), y);
        }
    }

    #[test]
    fn test_two_knots_interpolate_linearly() {
        let interp = PchipInterpolator::new(&[0.0, 2.0], &[10.0, 30.0]).unwrap();
        assert_relative_eq!(interp.eval(0.5), 15.0);
        assert_relative_eq!(interp.eval(1.0), 20.0);
        assert_relative_eq!(interp.eval(1.5), 25.0);
    }

    #[test]
    fn test_monotone_data_yields_monotone_curve() {
        let xs = [0.0, 1.0, 3.0, 3.5, 6.0];
        let ys = [600.0, 610.0, 640.0, 641.0, 700.0];
        let interp = PchipInterpolator::new(&xs, &ys).unwrap();

        let mut prev = interp.eval(0.0);
        for k in 1..=500 {
            let x = 6.0 * f64::from(k) / 500.0;
            let y = interp.eval(x);
            assert!(y >= prev - 1e-9, "curve decreased at x = {x}");
            assert!((600.0..=700.0).contains(&y), "overshoot at x = {x}: {y}");
            prev = y;
        }
    }

    #[test]
    fn test_no_overshoot_at_local_extremum() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 10.0, 0.0];
        let interp = PchipInterpolator::new(&xs, &ys).unwrap();
        for k in 0..=200 {
            let y = interp.eval(2.0 * f64::from(k) / 200.0);
            assert!((-1e-9..=10.0 + 1e-9).contains(&y));
        }
    }

    #[test]
    fn test_flat_data_stays_flat() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [500.0; 4];
        let interp = PchipInterpolator::new(&xs, &ys).unwrap();
        for k in 0..=30 {
            assert_relative_eq!(interp.eval(0.1 * f64::from(k)), 500.0);
        }
    }

    #[test]
    fn test_duplicate_abscissa_rejected() {
        let err = PchipInterpolator::new(&[0.0, 1.0, 1.0, 2.0], &[0.0; 4]).unwrap_err();
        assert_eq!(err, InterpError::NotIncreasing(2));
    }

    #[test]
    fn test_decreasing_abscissa_rejected() {
        let err = PchipInterpolator::new(&[0.0, 2.0, 1.0], &[0.0; 3]).unwrap_err();
        assert_eq!(err, InterpError::NotIncreasing(2));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = PchipInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap_err();
        assert_eq!(err, InterpError::LengthMismatch { xs: 3, ys: 2 });
    }

    #[test]
    fn test_too_few_knots_rejected() {
        let err = PchipInterpolator::<f64>::new(&[0.0], &[0.0]).unwrap_err();
        assert_eq!(err, InterpError::TooFewKnots(1));
    }
}
