use std::fmt;
use std::ops::{Add, Mul, Sub};

use super::checked::{Checked, CheckedInt, Fault};

/// Mixed rational `integer + numerator/denominator`.
///
/// Once normalised: `denominator > 0`, `0 <= numerator < denominator` and
/// the proper part is in lowest terms (zero is `0/1`). Negative values
/// therefore carry the sign in the integer part: `-0.5` is `-1 + 1/2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
  pub integer: CheckedInt,
  pub numerator: CheckedInt,
  pub denominator: CheckedInt,
}

impl Fraction {
  pub const ZERO: Fraction =
    Fraction::raw(CheckedInt::ZERO, CheckedInt::ZERO, CheckedInt::ONE);
  pub const ONE: Fraction =
    Fraction::raw(CheckedInt::ONE, CheckedInt::ZERO, CheckedInt::ONE);

  /// Builds and normalises.
  pub fn new(
    integer: impl Into<CheckedInt>,
    numerator: impl Into<CheckedInt>,
    denominator: impl Into<CheckedInt>,
  ) -> Checked<Self> {
    let mut fraction =
      Fraction::raw(integer.into(), numerator.into(), denominator.into());
    fraction.normalise()?;
    Ok(fraction)
  }

  /// Builds without normalising.
  pub const fn raw(
    integer: CheckedInt,
    numerator: CheckedInt,
    denominator: CheckedInt,
  ) -> Self {
    Fraction {
      integer,
      numerator,
      denominator,
    }
  }

  /// `numerator/denominator` as a mixed fraction.
  pub fn from_ratio(
    numerator: impl Into<CheckedInt>,
    denominator: impl Into<CheckedInt>,
  ) -> Checked<Self> {
    Fraction::new(CheckedInt::ZERO, numerator, denominator)
  }

  pub fn normalise(&mut self) -> Checked<()> {
    if self.denominator.is_zero() {
      return Err(Fault::DivisionByZero);
    }
    if self.denominator.is_negative() {
      self.numerator = (-self.numerator)?;
      self.denominator = (-self.denominator)?;
    }
    if self.denominator == CheckedInt::ONE {
      self.integer = (self.integer + self.numerator)?;
      self.numerator = CheckedInt::ZERO;
      return Ok(());
    }
    if self.numerator.is_negative() || self.numerator >= self.denominator {
      let carry = self.numerator.div_euclid(self.denominator)?;
      self.integer = (self.integer + carry)?;
      self.numerator = self.numerator.rem_euclid(self.denominator)?;
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
    self.integer.is_zero() && self.numerator.is_zero()
  }

  /// True when the proper part vanished and only the integer remains.
  pub fn is_whole(&self) -> bool {
    self.numerator.is_zero()
  }

  pub fn neg(self) -> Checked<Self> {
    Fraction::new((-self.integer)?, (-self.numerator)?, self.denominator)
  }

  /// Reciprocal: `d / (i*d + n)`.
  pub fn invert(self) -> Checked<Self> {
    let flat = ((self.integer * self.denominator)? + self.numerator)?;
    Fraction::from_ratio(self.denominator, flat)
  }

  pub fn to_f64(&self) -> f64 {
    f64::from(self.integer)
      + f64::from(self.numerator) / f64::from(self.denominator)
  }
}

impl From<CheckedInt> for Fraction {
  fn from(integer: CheckedInt) -> Self {
    Fraction::raw(integer, CheckedInt::ZERO, CheckedInt::ONE)
  }
}

impl From<i64> for Fraction {
  fn from(integer: i64) -> Self {
    Fraction::from(CheckedInt::new(integer))
  }
}

impl fmt::Display for Fraction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.numerator.is_zero() {
      write!(f, "{}", self.integer)
    } else {
      write!(f, "{}+{}/{}", self.integer, self.numerator, self.denominator)
    }
  }
}

impl Add for Fraction {
  type Output = Checked<Fraction>;

  fn add(self, rhs: Self) -> Self::Output {
    let integer = (self.integer + rhs.integer)?;
    let numerator = ((rhs.denominator * self.numerator)?
      + (rhs.numerator * self.denominator)?)?;
    let denominator = (rhs.denominator * self.denominator)?;
    Fraction::new(integer, numerator, denominator)
  }
}

impl Sub for Fraction {
  type Output = Checked<Fraction>;

  fn sub(self, rhs: Self) -> Self::Output {
    let integer = (self.integer - rhs.integer)?;
    let numerator = ((rhs.denominator * self.numerator)?
      - (rhs.numerator * self.denominator)?)?;
    let denominator = (rhs.denominator * self.denominator)?;
    Fraction::new(integer, numerator, denominator)
  }
}

impl Mul for Fraction {
  type Output = Checked<Fraction>;

  // (a + b/c)(d + e/f) = ad + (be + f·d·b + c·a·e) / cf
  fn mul(self, rhs: Self) -> Self::Output {
    let integer = (rhs.integer * self.integer)?;
    let cross = ((rhs.denominator * rhs.integer)? * self.numerator)?;
    let other_cross = ((self.denominator * self.integer)? * rhs.numerator)?;
    let numerator =
      (((rhs.numerator * self.numerator)? + cross)? + other_cross)?;
    let denominator = (rhs.denominator * self.denominator)?;
    Fraction::new(integer, numerator, denominator)
  }
}
