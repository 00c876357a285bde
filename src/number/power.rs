use std::fmt;

use tracing::trace;

use super::checked::{Checked, CheckedInt};
use super::fraction::Fraction;
use super::pow::pow_num;
use super::simple_fraction::SimpleFraction;
use super::Number;

/// Closed-form value `multiplicand × base^exponent`.
///
/// `pow_num` produces these with `exponent = 1/q` and an integer-valued
/// base once the radicand has been reduced. A negative base is only ever
/// paired with an exponent whose denominator is odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Power {
  pub multiplicand: Fraction,
  pub base: SimpleFraction,
  pub exponent: SimpleFraction,
}

impl Power {
  pub fn new(
    multiplicand: Fraction,
    base: SimpleFraction,
    exponent: SimpleFraction,
  ) -> Self {
    Power {
      multiplicand,
      base,
      exponent,
    }
  }

  /// `1 × base^exponent`, kept exactly as given.
  pub fn unsimplified(base: SimpleFraction, exponent: SimpleFraction) -> Self {
    Power::new(Fraction::ONE, base, exponent)
  }

  /// Like terms share base and exponent.
  pub fn is_like(&self, other: &Power) -> bool {
    self.base == other.base && self.exponent == other.exponent
  }

  pub fn neg(self) -> Checked<Self> {
    Ok(Power {
      multiplicand: self.multiplicand.neg()?,
      ..self
    })
  }

  /// Real value of the power. Odd roots of negative bases stay real.
  pub fn to_f64(&self) -> f64 {
    let base = self.base.to_f64();
    let magnitude = base.abs().powf(self.exponent.to_f64());
    let odd_numerator = !self.exponent.numerator.is_even();
    let value = if base < 0.0 && odd_numerator {
      -magnitude
    } else {
      magnitude
    };
    self.multiplicand.to_f64() * value
  }

  /// Reduces a power that arithmetic has produced.
  ///
  /// A zero multiplicand is zero, and `base^exponent` is re-run through
  /// `pow_num` so exact results (`2^1`, `16^(1/2)`) fold into the
  /// multiplicand. Anything that cannot be reduced exactly is returned
  /// unchanged.
  pub fn settle(self) -> Number {
    if self.multiplicand.is_zero() {
      return Number::Integer(CheckedInt::ZERO);
    }
    let base = match Fraction::try_from(self.base) {
      Ok(base) => Number::from(base),
      Err(_) => return Number::Power(self),
    };
    let exponent = match Fraction::try_from(self.exponent) {
      Ok(exponent) => Number::from(exponent),
      Err(_) => return Number::Power(self),
    };
    let reduced = match pow_num(&base, &exponent) {
      Ok(reduced) => reduced,
      Err(_) => return Number::Power(self),
    };
    let settled = match reduced {
      Number::Integer(integer) => {
        (self.multiplicand * Fraction::from(integer)).map(Number::from)
      }
      Number::Fraction(fraction) => {
        (self.multiplicand * fraction).map(Number::from)
      }
      Number::Power(power) => {
        (self.multiplicand * power.multiplicand).map(|multiplicand| {
          Number::Power(Power {
            multiplicand,
            ..power
          })
        })
      }
      Number::Double(_) => return Number::Power(self),
    };
    settled.unwrap_or_else(|fault| {
      trace!(?fault, power = %self, "power kept unsettled");
      Number::Power(self)
    })
  }
}

impl fmt::Display for Power {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "({}+{}/{})*({})^({})",
      self.multiplicand.integer,
      self.multiplicand.numerator,
      self.multiplicand.denominator,
      self.base,
      self.exponent
    )
  }
}
