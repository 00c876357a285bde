//! The numeric tower.
//!
//! Values start out as exact 64-bit integers or mixed fractions. Roots
//! that cannot be resolved become symbolic [`Power`]s, and only when no
//! exact representation is available does a value become a `Double`.

mod arithmetic;
mod checked;
mod factorise;
mod fraction;
mod pow;
mod power;
mod series;
mod simple_fraction;

pub use checked::*;
pub use factorise::*;
pub use fraction::*;
pub use pow::pow_num;
pub use power::*;
pub use series::*;
pub use simple_fraction::*;

use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use tracing::debug;

use crate::CalculatorError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
  Integer(CheckedInt),
  /// Always carries a non-zero proper part.
  Fraction(Fraction),
  Power(Power),
  /// Always finite.
  Double(f64),
}

impl Number {
  /// Builds a number from a decimal literal, optionally in scientific
  /// notation (`5.5e-1`).
  ///
  /// `decimal_point` is the byte offset of the `.` (or `,`) in `text`, if
  /// there is one. Literals that do not fit in 64 bits are read as
  /// doubles; past the range of a double they are an overflow, and below
  /// it they are zero.
  pub fn parse(
    text: &str,
    decimal_point: Option<usize>,
  ) -> Result<Number, CalculatorError> {
    let (mantissa, exponent) =
      match text.find(|c: char| c == 'e' || c == 'E') {
        Some(offset) => (&text[..offset], Some(&text[offset + 1..])),
        None => (text, None),
      };
    let (whole, fractional) = match decimal_point {
      Some(offset) => {
        let point = mantissa.get(offset..offset + 1);
        if !matches!(point, Some(".") | Some(",")) {
          return Err(CalculatorError::InvalidDecimalPoint);
        }
        (&mantissa[..offset], &mantissa[offset + 1..])
      }
      None => (mantissa, ""),
    };
    let digits = whole
      .strip_prefix(|c: char| c == '+' || c == '-')
      .unwrap_or(whole);
    let is_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
    if (digits.is_empty() && fractional.is_empty())
      || !is_digits(digits)
      || !is_digits(fractional)
    {
      return Err(CalculatorError::InvalidLiteral(text.to_string()));
    }

    let scale = match exponent.map(str::parse::<i32>) {
      None => Ok(0),
      Some(Ok(scale)) => Ok(scale),
      Some(Err(error)) if is_overflow(&error) => Err(Fault::Overflow),
      Some(Err(_)) => {
        return Err(CalculatorError::InvalidLiteral(text.to_string()))
      }
    };

    let negative = whole.starts_with('-');
    let fractional = fractional.trim_end_matches('0');
    let integer = if digits.is_empty() {
      Ok(0)
    } else {
      whole.parse::<i64>()
    };
    let exact = match integer {
      Ok(integer) => scale.and_then(|scale| {
        let literal =
          exact_literal(CheckedInt::new(integer), negative, fractional)?;
        scale_by_ten(literal, scale)
      }),
      Err(error) if is_overflow(&error) => Err(Fault::Overflow),
      Err(_) => return Err(CalculatorError::InvalidLiteral(text.to_string())),
    };
    match exact {
      Ok(fraction) => Ok(Number::from(fraction)),
      Err(_) => {
        debug!(literal = text, "literal does not fit, reading as double");
        let value = text
          .replace(',', ".")
          .parse::<f64>()
          .map_err(|_| CalculatorError::InvalidLiteral(text.to_string()))?;
        if value.is_infinite() {
          return Err(CalculatorError::Overflow);
        }
        if value == 0.0 {
          return Ok(Number::Integer(CheckedInt::ZERO));
        }
        Ok(Number::Double(value))
      }
    }
  }

  pub fn to_f64(&self) -> f64 {
    match self {
      Number::Integer(integer) => f64::from(*integer),
      Number::Fraction(fraction) => fraction.to_f64(),
      Number::Power(power) => power.to_f64(),
      Number::Double(double) => *double,
    }
  }

  pub fn is_zero(&self) -> bool {
    match self {
      Number::Integer(integer) => integer.is_zero(),
      Number::Fraction(fraction) => fraction.is_zero(),
      Number::Power(power) => {
        power.multiplicand.is_zero() || power.base.is_zero()
      }
      Number::Double(double) => *double == 0.0,
    }
  }

  /// Unary minus. Exact for every tag except the one integer that has no
  /// 64-bit negation.
  pub fn negate(&self) -> Number {
    match *self {
      Number::Integer(integer) => match -integer {
        Ok(negated) => Number::Integer(negated),
        Err(_) => Number::Double(-f64::from(integer)),
      },
      Number::Fraction(fraction) => match fraction.neg() {
        Ok(negated) => Number::from(negated),
        Err(_) => Number::Double(-fraction.to_f64()),
      },
      Number::Power(power) => match power.neg() {
        Ok(negated) => Number::Power(negated),
        Err(_) => Number::Double(-power.to_f64()),
      },
      Number::Double(double) => Number::Double(-double),
    }
  }

  pub fn pow(&self, exponent: &Number) -> Result<Number, CalculatorError> {
    pow_num(self, exponent)
  }
}

fn is_overflow(error: &ParseIntError) -> bool {
  matches!(
    error.kind(),
    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
  )
}

fn exact_literal(
  integer: CheckedInt,
  negative: bool,
  fractional: &str,
) -> Checked<Fraction> {
  if fractional.is_empty() {
    return Ok(Fraction::from(integer));
  }
  let numerator = fractional
    .parse::<i64>()
    .map(CheckedInt::new)
    .map_err(|_| Fault::Overflow)?;
  let numerator = if negative { (-numerator)? } else { numerator };
  let denominator = CheckedInt::ten_pow(fractional.len())?;
  Fraction::new(integer, numerator, denominator)
}

/// `literal × 10^scale`
fn scale_by_ten(literal: Fraction, scale: i32) -> Checked<Fraction> {
  if scale == 0 {
    return Ok(literal);
  }
  let flat = ((literal.integer * literal.denominator)? + literal.numerator)?;
  let power = usize::try_from(scale.unsigned_abs())
    .map_err(|_| Fault::Overflow)
    .and_then(CheckedInt::ten_pow)?;
  if scale > 0 {
    Fraction::from_ratio((flat * power)?, literal.denominator)
  } else {
    Fraction::from_ratio(flat, (literal.denominator * power)?)
  }
}

impl FromStr for Number {
  type Err = CalculatorError;

  fn from_str(text: &str) -> Result<Self, Self::Err> {
    let mut points = text.match_indices(|c: char| c == '.' || c == ',');
    let decimal_point = points.next().map(|(offset, _)| offset);
    if points.next().is_some() {
      return Err(CalculatorError::InvalidDecimalPoint);
    }
    Number::parse(text, decimal_point)
  }
}

/// Drops to `Integer` when the proper part is zero.
impl From<Fraction> for Number {
  fn from(fraction: Fraction) -> Self {
    if fraction.is_whole() {
      Number::Integer(fraction.integer)
    } else {
      Number::Fraction(fraction)
    }
  }
}

impl From<CheckedInt> for Number {
  fn from(integer: CheckedInt) -> Self {
    Number::Integer(integer)
  }
}

impl From<i64> for Number {
  fn from(integer: i64) -> Self {
    Number::Integer(CheckedInt::new(integer))
  }
}

impl fmt::Display for Number {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Number::Integer(integer) => write!(f, "{}", integer),
      Number::Fraction(fraction) => write!(f, "{}", fraction),
      Number::Power(power) => write!(f, "{}", power),
      Number::Double(double) => write!(f, "{}", double),
    }
  }
}
