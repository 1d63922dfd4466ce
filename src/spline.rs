//! Natural cubic spline interpolation over tabulated data.
//!
//! The coefficient tables are empirical calibration data, so the interpolant
//! must pass exactly through every knot. A natural cubic spline (zero second
//! derivative at both boundary knots) does that while staying C² at interior
//! knots. Second derivatives are computed once per table and reused for
//! every lookup.

/// Computes spline second derivatives for knots `(x, y)`.
///
/// Tridiagonal forward sweep and back substitution for the natural
/// boundary condition.
///
/// # Panics
/// Panics if the lengths differ, fewer than 2 knots are given, or `x` is
/// not strictly increasing.
pub fn second_derivatives(x: &[f64], y: &[f64]) -> Vec<f64> {
    assert_eq!(x.len(), y.len(), "knot x and y lengths differ");
    assert!(x.len() >= 2, "need at least 2 knots");
    for i in 1..x.len() {
        assert!(
            x[i] > x[i - 1],
            "knot wavelengths must be strictly increasing at index {i}"
        );
    }

    let n = x.len();
    let mut y2 = vec![0.0; n];
    let mut u = vec![0.0; n - 1];

    for i in 1..n - 1 {
        let sig = (x[i] - x[i - 1]) / (x[i + 1] - x[i - 1]);
        let p = sig * y2[i - 1] + 2.0;
        y2[i] = (sig - 1.0) / p;
        let d = (y[i + 1] - y[i]) / (x[i + 1] - x[i]) - (y[i] - y[i - 1]) / (x[i] - x[i - 1]);
        u[i] = (6.0 * d / (x[i + 1] - x[i - 1]) - sig * u[i - 1]) / p;
    }

    for k in (0..n - 2).rev() {
        y2[k + 1] = y2[k + 1] * y2[k + 2] + u[k + 1];
    }

    y2
}

/// Evaluates the spline through `(x, y)` with precomputed second
/// derivatives `y2` at the query point `xq`.
///
/// Queries outside `[x[0], x[n-1]]` are evaluated on the boundary cubic
/// (extrapolation, no clamping).
pub fn eval(x: &[f64], y: &[f64], y2: &[f64], xq: f64) -> f64 {
    // Bracket via binary search; out-of-range queries land on the first
    // or last interval.
    let hi = match x.partition_point(|&v| v < xq) {
        i if i >= x.len() => x.len() - 1,
        0 => 1,
        i => i,
    };
    let lo = hi - 1;

    let h = x[hi] - x[lo];
    let a = (x[hi] - xq) / h;
    let b = (xq - x[lo]) / h;

    a * y[lo]
        + b * y[hi]
        + ((a * a * a - a) * y2[lo] + (b * b * b - b) * y2[hi]) * h * h / 6.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_through_knots() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![2.0, 3.0, 5.0, 4.0, 1.0];
        let y2 = second_derivatives(&x, &y);

        for (&xi, &yi) in x.iter().zip(y.iter()) {
            let result = eval(&x, &y, &y2, xi);
            assert!(
                (result - yi).abs() < 1e-10,
                "at x={xi}: got {result} expected {yi}"
            );
        }
    }

    #[test]
    fn test_recovers_linear_data() {
        // Collinear knots have zero curvature everywhere, so interior and
        // extrapolated queries are exact.
        let x = vec![0.0, 1.0, 2.0, 3.0];
        let y = vec![1.0, 3.0, 5.0, 7.0];
        let y2 = second_derivatives(&x, &y);

        for &xq in &[0.5, 1.25, 2.75, -1.0, 4.0] {
            let result = eval(&x, &y, &y2, xq);
            assert!(
                (result - (1.0 + 2.0 * xq)).abs() < 1e-10,
                "at x={xq}: got {result}"
            );
        }
    }

    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn test_rejects_unsorted_knots() {
        second_derivatives(&[1.0, 3.0, 2.0], &[0.0, 0.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "lengths differ")]
    fn test_rejects_mismatched_lengths() {
        second_derivatives(&[1.0, 2.0], &[0.0]);
    }
}
