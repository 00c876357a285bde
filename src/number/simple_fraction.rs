use std::fmt;
use std::ops::{Add, Mul, Sub};

use super::checked::{Checked, CheckedInt, Fault};
use super::fraction::Fraction;

/// Plain reduced rational `numerator/denominator`, used for the base and
/// exponent of a [`super::Power`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimpleFraction {
  pub numerator: CheckedInt,
  pub denominator: CheckedInt,
}

impl SimpleFraction {
  pub fn new(
    numerator: impl Into<CheckedInt>,
    denominator: impl Into<CheckedInt>,
  ) -> Checked<Self> {
    let mut fraction = SimpleFraction {
      numerator: numerator.into(),
      denominator: denominator.into(),
    };
    fraction.normalise()?;
    Ok(fraction)
  }

  pub fn normalise(&mut self) -> Checked<()> {
    if self.denominator.is_zero() {
      return Err(Fault::DivisionByZero);
    }
    if self.denominator.is_negative() {
      self.numerator = (-self.numerator)?;
      self.denominator = (-self.denominator)?;
    }
    if self.numerator.is_zero() {
      self.denominator = CheckedInt::ONE;
      return Ok(());
    }
    let gcd = self.numerator.gcd(self.denominator)?;
    if gcd != CheckedInt::ONE {
      self.numerator = (self.numerator / gcd)?;
      self.denominator = (self.denominator / gcd)?;
    }
    Ok(())
  }

  pub fn is_zero(&self) -> bool {
    self.numerator.is_zero()
  }

  pub fn is_integer(&self) -> bool {
    self.denominator == CheckedInt::ONE
  }

  pub fn is_negative(&self) -> bool {
    self.numerator.is_negative()
  }

  pub fn neg(self) -> Checked<Self> {
    SimpleFraction::new((-self.numerator)?, self.denominator)
  }

  pub fn invert(self) -> Checked<Self> {
    SimpleFraction::new(self.denominator, self.numerator)
  }

  pub fn to_f64(&self) -> f64 {
    f64::from(self.numerator) / f64::from(self.denominator)
  }
}

impl From<CheckedInt> for SimpleFraction {
  fn from(integer: CheckedInt) -> Self {
    SimpleFraction {
      numerator: integer,
      denominator: CheckedInt::ONE,
    }
  }
}

/// Flattens `i + n/d` into `(n + d·i)/d`, which can overflow.
impl TryFrom<Fraction> for SimpleFraction {
  type Error = Fault;

  fn try_from(fraction: Fraction) -> Checked<Self> {
    let numerator =
      (fraction.numerator + (fraction.denominator * fraction.integer)?)?;
    SimpleFraction::new(numerator, fraction.denominator)
  }
}

impl TryFrom<SimpleFraction> for Fraction {
  type Error = Fault;

  fn try_from(fraction: SimpleFraction) -> Checked<Self> {
    Fraction::from_ratio(fraction.numerator, fraction.denominator)
  }
}

impl fmt::Display for SimpleFraction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.numerator, self.denominator)
  }
}

impl Add for SimpleFraction {
  type Output = Checked<SimpleFraction>;

  fn add(self, rhs: Self) -> Self::Output {
    let numerator = ((self.numerator * rhs.denominator)?
      + (rhs.numerator * self.denominator)?)?;
    SimpleFraction::new(numerator, (self.denominator * rhs.denominator)?)
  }
}

impl Sub for SimpleFraction {
  type Output = Checked<SimpleFraction>;

  fn sub(self, rhs: Self) -> Self::Output {
    let numerator = ((self.numerator * rhs.denominator)?
      - (rhs.numerator * self.denominator)?)?;
    SimpleFraction::new(numerator, (self.denominator * rhs.denominator)?)
  }
}

impl Mul for SimpleFraction {
  type Output = Checked<SimpleFraction>;

  fn mul(self, rhs: Self) -> Self::Output {
    SimpleFraction::new(
      (self.numerator * rhs.numerator)?,
      (self.denominator * rhs.denominator)?,
    )
  }
}
