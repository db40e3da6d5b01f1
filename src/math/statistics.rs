//! Goodness-of-fit statistics for empirical sample distributions

/// Pearson chi-square statistic of observed counts against the uniform distribution
///
/// With `n` categories the statistic has `n - 1` degrees of freedom. Returns
/// zero when there are no categories or no observations.
pub fn chi_square_uniform(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    if counts.is_empty() || total == 0 {
        return 0.0;
    }

    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&observed| {
            let deviation = observed as f64 - expected;
            deviation * deviation / expected
        })
        .sum()
}

/// Upper-tail critical value of the chi-square distribution
///
/// Uses the Wilson-Hilferty cube-root normal approximation, which is accurate
/// to a few percent once the degrees of freedom exceed a handful. `z` is the
/// standard normal quantile of the desired significance level.
pub fn chi_square_critical(degrees_of_freedom: usize, z: f64) -> f64 {
    if degrees_of_freedom == 0 {
        return 0.0;
    }
    let k = degrees_of_freedom as f64;
    let spread = 2.0 / (9.0 * k);
    let root = z.mul_add(spread.sqrt(), 1.0 - spread);
    k * root.powi(3)
}
