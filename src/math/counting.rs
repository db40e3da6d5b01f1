//! Exact tiling counts via MacMahon's box formula
//!
//! The number of lozenge tilings of an (a x b x c) hexagon is
//! the product over `1 <= i <= a`, `1 <= j <= b`, `1 <= k <= c` of
//! `(i + j + k - 1) / (i + j + k - 2)`. Factors are cancelled as prime
//! exponents so the result stays exact.

use std::collections::BTreeMap;

/// Number of lozenge tilings of an (a x b x c) hexagon
///
/// Returns `None` if the count does not fit in a `u128`. Any zero side
/// length leaves a degenerate hexagon with exactly one tiling.
pub fn macmahon_count(a: usize, b: usize, c: usize) -> Option<u128> {
    let mut exponents: BTreeMap<usize, i64> = BTreeMap::new();

    for i in 1..=a {
        for j in 1..=b {
            for k in 1..=c {
                let base = i + j + k;
                add_factors(&mut exponents, base - 1, 1);
                add_factors(&mut exponents, base - 2, -1);
            }
        }
    }

    let mut count: u128 = 1;
    for (prime, exponent) in exponents {
        let exponent = u32::try_from(exponent).ok()?;
        let power = (prime as u128).checked_pow(exponent)?;
        count = count.checked_mul(power)?;
    }
    Some(count)
}

fn add_factors(exponents: &mut BTreeMap<usize, i64>, mut n: usize, sign: i64) {
    let mut divisor = 2;
    while divisor * divisor <= n {
        while n % divisor == 0 {
            *exponents.entry(divisor).or_default() += sign;
            n /= divisor;
        }
        divisor += 1;
    }
    if n > 1 {
        *exponents.entry(n).or_default() += sign;
    }
}
