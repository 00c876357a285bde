use std::fmt;

use tracing::debug;

use super::checked::{Checked, Fault};
use super::fraction::Fraction;
use super::power::Power;
use super::Number;
use crate::CalculatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
  Plus,
  Minus,
  Times,
  Divide,
}

impl Operation {
  fn apply(self, lhs: f64, rhs: f64) -> f64 {
    match self {
      Operation::Plus => lhs + rhs,
      Operation::Minus => lhs - rhs,
      Operation::Times => lhs * rhs,
      Operation::Divide => lhs / rhs,
    }
  }
}

impl fmt::Display for Operation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let symbol = match self {
      Operation::Plus => '+',
      Operation::Minus => '-',
      Operation::Times => '*',
      Operation::Divide => '/',
    };
    write!(f, "{}", symbol)
  }
}

impl Number {
  pub fn plus(&self, rhs: &Number) -> Result<Number, CalculatorError> {
    combine(*self, *rhs, Operation::Plus)
  }

  pub fn minus(&self, rhs: &Number) -> Result<Number, CalculatorError> {
    combine(*self, *rhs, Operation::Minus)
  }

  pub fn times(&self, rhs: &Number) -> Result<Number, CalculatorError> {
    combine(*self, *rhs, Operation::Times)
  }

  /// Any divisor that is zero as a double is rejected before the tags are
  /// looked at, so `x / 0.0` never produces an infinity.
  pub fn divide(&self, rhs: &Number) -> Result<Number, CalculatorError> {
    if rhs.to_f64() == 0.0 {
      return Err(CalculatorError::DivisionByZero);
    }
    combine(*self, *rhs, Operation::Divide)
  }
}

fn combine(
  lhs: Number,
  rhs: Number,
  operation: Operation,
) -> Result<Number, CalculatorError> {
  match exact(lhs, rhs, operation) {
    Ok(Some(result)) => Ok(result),
    Err(Fault::DivisionByZero) => Err(CalculatorError::DivisionByZero),
    Ok(None) => {
      if !matches!(lhs, Number::Double(_)) && !matches!(rhs, Number::Double(_))
      {
        debug!(%lhs, %rhs, %operation, "no exact combination, using double");
      }
      float_fallback(lhs, rhs, operation)
    }
    Err(Fault::Overflow) => {
      debug!(%lhs, %rhs, %operation, "overflow, escalating to double");
      float_fallback(lhs, rhs, operation)
    }
  }
}

/// `Ok(None)` when the pair of tags has no exact rule for `operation`.
fn exact(
  lhs: Number,
  rhs: Number,
  operation: Operation,
) -> Checked<Option<Number>> {
  match (lhs, rhs) {
    (Number::Integer(a), Number::Integer(b)) => {
      let result = match operation {
        Operation::Plus => Number::Integer((a + b)?),
        Operation::Minus => Number::Integer((a - b)?),
        Operation::Times => Number::Integer((a * b)?),
        Operation::Divide => Number::from(Fraction::from_ratio(a, b)?),
      };
      Ok(Some(result))
    }
    (Number::Integer(a), Number::Fraction(b)) => {
      combine_fractions(Fraction::from(a), b, operation).map(Some)
    }
    (Number::Fraction(a), Number::Integer(b)) => {
      combine_fractions(a, Fraction::from(b), operation).map(Some)
    }
    (Number::Fraction(a), Number::Fraction(b)) => {
      combine_fractions(a, b, operation).map(Some)
    }
    (Number::Power(a), Number::Power(b)) => combine_powers(a, b, operation),
    _ => Ok(None),
  }
}

fn combine_fractions(
  a: Fraction,
  b: Fraction,
  operation: Operation,
) -> Checked<Number> {
  let result = match operation {
    Operation::Plus => (a + b)?,
    Operation::Minus => (a - b)?,
    Operation::Times => (a * b)?,
    Operation::Divide => quotient(a, b)?,
  };
  Ok(Number::from(result))
}

// (ai + an/ad) / (bi + bn/bd) = (ai·ad + an)·bd / ((bi·bd + bn)·ad)
fn quotient(a: Fraction, b: Fraction) -> Checked<Fraction> {
  let dividend = (((a.integer * a.denominator)? + a.numerator)?
    * b.denominator)?;
  let divisor = (((b.integer * b.denominator)? + b.numerator)?
    * a.denominator)?;
  Fraction::from_ratio(dividend, divisor)
}

/// Like terms add and subtract, products share a base or an exponent.
fn combine_powers(
  a: Power,
  b: Power,
  operation: Operation,
) -> Checked<Option<Number>> {
  let combined = match operation {
    Operation::Plus if a.is_like(&b) => Power {
      multiplicand: (a.multiplicand + b.multiplicand)?,
      ..a
    },
    Operation::Minus if a.is_like(&b) => Power {
      multiplicand: (a.multiplicand - b.multiplicand)?,
      ..a
    },
    Operation::Times if a.base == b.base => Power::new(
      (a.multiplicand * b.multiplicand)?,
      a.base,
      (a.exponent + b.exponent)?,
    ),
    Operation::Times if a.exponent == b.exponent => Power::new(
      (a.multiplicand * b.multiplicand)?,
      (a.base * b.base)?,
      a.exponent,
    ),
    _ => return Ok(None),
  };
  Ok(Some(combined.settle()))
}

fn float_fallback(
  lhs: Number,
  rhs: Number,
  operation: Operation,
) -> Result<Number, CalculatorError> {
  let (lhs, rhs) = (lhs.to_f64(), rhs.to_f64());
  let result = operation.apply(lhs, rhs);
  // A symbolic power past the range of a double has already overflowed.
  if !lhs.is_finite() || !rhs.is_finite() || !result.is_finite() {
    return Err(CalculatorError::Overflow);
  }
  Ok(Number::Double(result))
}
