use tracing::trace;

use super::checked::{Checked, CheckedInt, Fault};
use super::fraction::Fraction;

/// `(m1 × m2 × …) / divisor`, postponing overflow where it can.
///
/// The straightforward product is tried first. If it overflows, common
/// factors between each multiplicand and what is left of the divisor are
/// cancelled before multiplying again. A second overflow is returned.
pub fn safer_multiply_divide(
  multiplicands: &[CheckedInt],
  divisor: CheckedInt,
) -> Checked<CheckedInt> {
  if divisor.is_zero() {
    return Err(Fault::DivisionByZero);
  }
  match product(multiplicands.iter().copied()) {
    Ok(product) => return product / divisor,
    Err(Fault::DivisionByZero) => return Err(Fault::DivisionByZero),
    Err(Fault::Overflow) => {}
  }

  let mut remaining = divisor;
  let mut reduced = Vec::with_capacity(multiplicands.len());
  for &multiplicand in multiplicands {
    let gcd = multiplicand.gcd(remaining)?;
    if gcd.is_zero() {
      reduced.push(multiplicand);
      continue;
    }
    reduced.push((multiplicand / gcd)?);
    remaining = (remaining / gcd)?;
  }
  trace!(?reduced, %remaining, "multiply-divide retried after cancelling");
  product(reduced)? / remaining
}

fn product(
  factors: impl IntoIterator<Item = CheckedInt>,
) -> Checked<CheckedInt> {
  factors
    .into_iter()
    .try_fold(CheckedInt::ONE, |product, factor| product * factor)
}

/// `(integer + numerator/denominator)^exponent` in exact arithmetic.
///
/// With `I + n/d` the result is `I^k + N/d^k`, where `N` sums
/// `C(k, i+1) · I^(k-1-i) · n^(i+1) · d^(k-1-i)`. Each term is derived from
/// the previous one by `× n / (I·d)`, which keeps the intermediate values
/// close to the size of the answer instead of the size of `(I·d + n)^k`.
pub fn binomial_series(base: Fraction, exponent: u64) -> Checked<Fraction> {
  if exponent == 0 {
    return Ok(Fraction::ONE);
  }
  let Fraction {
    integer,
    numerator,
    denominator,
  } = base;
  if numerator.is_zero() {
    return Ok(Fraction::from(integer.pow(exponent)?));
  }
  if integer.is_zero() {
    return Fraction::from_ratio(
      numerator.pow(exponent)?,
      denominator.pow(exponent)?,
    );
  }

  let k = i64::try_from(exponent)
    .map(CheckedInt::new)
    .map_err(|_| Fault::Overflow)?;
  let step_divisor = (integer * denominator)?;

  let mut coefficient = k;
  let mut previous = ((integer.pow(exponent - 1)? * numerator)?
    * denominator.pow(exponent - 1)?)?;
  let mut sum = CheckedInt::ZERO;
  for i in 0..exponent {
    sum = (sum + (coefficient * previous)?)?;
    if i + 1 == exponent {
      break;
    }
    let i = CheckedInt::new(i as i64);
    previous = safer_multiply_divide(&[previous, numerator], step_divisor)?;
    let remaining = ((k - i)? - CheckedInt::ONE)?;
    let next_index = (i + CheckedInt::new(2))?;
    coefficient = safer_multiply_divide(&[coefficient, remaining], next_index)?;
  }

  Fraction::new(integer.pow(exponent)?, sum, denominator.pow(exponent)?)
}
