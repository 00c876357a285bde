use tracing::debug;

use super::checked::{Checked, CheckedInt, Fault};
use super::factorise::factorise;
use super::fraction::Fraction;
use super::power::Power;
use super::series::binomial_series;
use super::simple_fraction::SimpleFraction;
use super::Number;
use crate::CalculatorError;

/// `base ^ exponent`, as exact as the operands allow.
///
/// Integer and fractional powers of rationals stay rational, roots are
/// reduced to a `Power` surd, and everything involving a double or an
/// existing surd is computed in floating point.
pub fn pow_num(
  base: &Number,
  exponent: &Number,
) -> Result<Number, CalculatorError> {
  if base.is_zero() && exponent.is_zero() {
    return Err(CalculatorError::PowerError);
  }
  match (*base, *exponent) {
    (Number::Integer(base), Number::Integer(exponent)) => {
      integer_power(base, exponent)
    }
    (Number::Fraction(base), Number::Integer(exponent)) => {
      fraction_power(base, exponent)
    }
    (Number::Integer(base), Number::Fraction(exponent)) => {
      root(Fraction::from(base), exponent)
    }
    (Number::Fraction(base), Number::Fraction(exponent)) => {
      root(base, exponent)
    }
    _ => float_power(base.to_f64(), exponent.to_f64()),
  }
}

fn integer_power(
  base: CheckedInt,
  exponent: CheckedInt,
) -> Result<Number, CalculatorError> {
  let raised = base.pow(exponent.unsigned_abs()).and_then(|raised| {
    if !exponent.is_negative() {
      return Ok(Number::Integer(raised));
    }
    Fraction::from_ratio(CheckedInt::ONE, raised).map(Number::from)
  });
  match raised {
    Ok(number) => Ok(number),
    Err(Fault::DivisionByZero) => Err(CalculatorError::DivisionByZero),
    Err(Fault::Overflow) => {
      debug!(%base, %exponent, "integer power kept symbolic");
      Ok(Number::Power(Power::unsimplified(
        SimpleFraction::from(base),
        SimpleFraction::from(exponent),
      )))
    }
  }
}

fn fraction_power(
  base: Fraction,
  exponent: CheckedInt,
) -> Result<Number, CalculatorError> {
  let flat = match SimpleFraction::try_from(base) {
    Ok(flat) => flat,
    Err(_) => return float_power(base.to_f64(), f64::from(exponent)),
  };
  let oriented = if exponent.is_negative() {
    flat.invert().map_err(division_fault)?
  } else {
    flat
  };
  match rational_power(oriented, exponent.unsigned_abs()) {
    Ok(raised) => Ok(Number::from(raised)),
    Err(Fault::DivisionByZero) => Err(CalculatorError::DivisionByZero),
    Err(Fault::Overflow) => {
      debug!(%flat, %exponent, "fractional power kept symbolic");
      Ok(Number::Power(Power::unsimplified(
        flat,
        SimpleFraction::from(exponent),
      )))
    }
  }
}

/// `(n/d)^k`, directly when both powers fit and through the binomial
/// expansion of the mixed form when they do not.
fn rational_power(base: SimpleFraction, exponent: u64) -> Checked<Fraction> {
  let direct = base.numerator.pow(exponent).and_then(|numerator| {
    Ok((numerator, base.denominator.pow(exponent)?))
  });
  match direct {
    Ok((numerator, denominator)) => {
      Fraction::from_ratio(numerator, denominator)
    }
    Err(Fault::Overflow) => {
      debug!(%base, exponent, "escalating to binomial series");
      binomial_series(Fraction::try_from(base)?, exponent)
    }
    Err(fault) => Err(fault),
  }
}

fn root(base: Fraction, exponent: Fraction) -> Result<Number, CalculatorError> {
  let (radicand, exponent) = match (
    SimpleFraction::try_from(base),
    SimpleFraction::try_from(exponent),
  ) {
    (Ok(radicand), Ok(exponent)) => (radicand, exponent),
    _ => return float_power(base.to_f64(), exponent.to_f64()),
  };
  if exponent.is_integer() {
    return fraction_power(base, exponent.numerator);
  }

  let (radicand, raise) = if exponent.is_negative() {
    let inverted = radicand.invert().map_err(division_fault)?;
    (inverted, exponent.numerator.unsigned_abs())
  } else {
    (radicand, exponent.numerator.unsigned_abs())
  };
  let index = exponent.denominator;
  if radicand.is_zero() {
    return Ok(Number::Integer(CheckedInt::ZERO));
  }
  if radicand.is_negative() && index.is_even() {
    return Err(CalculatorError::ComplexNumber);
  }

  let raised = if raise == 1 {
    radicand
  } else {
    let raised = rational_power(radicand, raise)
      .and_then(SimpleFraction::try_from);
    match raised {
      Ok(raised) => raised,
      Err(Fault::DivisionByZero) => {
        return Err(CalculatorError::DivisionByZero);
      }
      Err(Fault::Overflow) => {
        debug!(%radicand, raise, %index, "root of an overflowing power");
        let exponent = SimpleFraction::new(raise as i64, index)
          .map_err(division_fault)?;
        return Ok(Number::Power(Power::unsimplified(radicand, exponent)));
      }
    }
  };

  match extract_root(raised, index) {
    Ok(number) => Ok(number),
    Err(fault) => {
      debug!(?fault, radicand = %raised, %index, "root left unsimplified");
      let exponent =
        SimpleFraction::new(CheckedInt::ONE, index).map_err(division_fault)?;
      Ok(Number::Power(Power::unsimplified(raised, exponent)))
    }
  }
}

/// `(n/d)^(1/q)` with every whole q-th power pulled out in front.
///
/// The sign of an odd root moves into the multiplicand. What remains under
/// the root is folded into a single integer, `(n/d)^(1/q) = (n·d^(q-1))^(1/q)
/// / d`, so the resulting base is always a positive whole number.
fn extract_root(
  radicand: SimpleFraction,
  index: CheckedInt,
) -> Checked<Number> {
  let degree = index.unsigned_abs();
  let sign = if radicand.is_negative() {
    CheckedInt::MINUS_ONE
  } else {
    CheckedInt::ONE
  };
  let mut numerator = radicand.numerator.abs()?;
  let mut denominator = radicand.denominator;
  let outer_numerator = factorise(&mut numerator, degree);
  let outer_denominator = factorise(&mut denominator, degree);
  let multiplicand =
    Fraction::from_ratio((sign * outer_numerator)?, outer_denominator)?;
  if numerator == CheckedInt::ONE && denominator == CheckedInt::ONE {
    return Ok(Number::from(multiplicand));
  }

  let mut folded = (numerator * denominator.pow(degree - 1)?)?;
  let extracted = factorise(&mut folded, degree);
  let multiplicand =
    (multiplicand * Fraction::from_ratio(extracted, denominator)?)?;
  Ok(Number::Power(Power::new(
    multiplicand,
    SimpleFraction::from(folded),
    SimpleFraction::new(CheckedInt::ONE, index)?,
  )))
}

pub(crate) fn float_power(
  base: f64,
  exponent: f64,
) -> Result<Number, CalculatorError> {
  if !base.is_finite() || !exponent.is_finite() {
    return Err(CalculatorError::Overflow);
  }
  if base == 0.0 && exponent < 0.0 {
    return Err(CalculatorError::DivisionByZero);
  }
  if base < 0.0 && exponent.fract() != 0.0 {
    return Err(CalculatorError::ComplexNumber);
  }
  let result = base.powf(exponent);
  if !result.is_finite() {
    return Err(CalculatorError::Overflow);
  }
  Ok(Number::Double(result))
}

fn division_fault(fault: Fault) -> CalculatorError {
  match fault {
    Fault::DivisionByZero => CalculatorError::DivisionByZero,
    Fault::Overflow => CalculatorError::Overflow,
  }
}
