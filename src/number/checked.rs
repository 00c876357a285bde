use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Local control signal raised by exact arithmetic.
///
/// A fault never reaches a caller of the calculator: whoever receives one
/// either escalates to a more general representation or maps
/// `DivisionByZero` onto the public error explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
  /// The true result does not fit in 64 bits.
  Overflow,
  /// A zero divisor or denominator.
  DivisionByZero,
}

pub type Checked<T> = Result<T, Fault>;

/// 64-bit signed integer whose operators report overflow instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CheckedInt(i64);

impl CheckedInt {
  pub const ZERO: CheckedInt = CheckedInt(0);
  pub const ONE: CheckedInt = CheckedInt(1);
  pub const MINUS_ONE: CheckedInt = CheckedInt(-1);

  pub const fn new(value: i64) -> Self {
    CheckedInt(value)
  }

  pub const fn get(self) -> i64 {
    self.0
  }

  pub fn is_zero(self) -> bool {
    self.0 == 0
  }

  pub fn is_negative(self) -> bool {
    self.0 < 0
  }

  pub fn is_even(self) -> bool {
    self.0 % 2 == 0
  }

  pub fn unsigned_abs(self) -> u64 {
    self.0.unsigned_abs()
  }

  pub fn abs(self) -> Checked<Self> {
    self.0.checked_abs().map(CheckedInt).ok_or(Fault::Overflow)
  }

  /// Floor division, so that `rem_euclid` is never negative for a
  /// positive divisor.
  pub fn div_euclid(self, rhs: Self) -> Checked<Self> {
    if rhs.0 == 0 {
      return Err(Fault::DivisionByZero);
    }
    self.0.checked_div_euclid(rhs.0).map(CheckedInt).ok_or(Fault::Overflow)
  }

  pub fn rem_euclid(self, rhs: Self) -> Checked<Self> {
    if rhs.0 == 0 {
      return Err(Fault::DivisionByZero);
    }
    self.0.checked_rem_euclid(rhs.0).map(CheckedInt).ok_or(Fault::Overflow)
  }

  /// Raise to a non-negative power. Bases 0, 1 and -1 are answered for any
  /// exponent; everything else overflows past an exponent of 63.
  pub fn pow(self, exponent: u64) -> Checked<Self> {
    match self.0 {
      0 if exponent == 0 => Ok(CheckedInt::ONE),
      0 | 1 => Ok(self),
      -1 => Ok(if exponent % 2 == 0 {
        CheckedInt::ONE
      } else {
        CheckedInt::MINUS_ONE
      }),
      _ => {
        let exponent = u32::try_from(exponent).map_err(|_| Fault::Overflow)?;
        self.0.checked_pow(exponent).map(CheckedInt).ok_or(Fault::Overflow)
      }
    }
  }

  /// Greatest common divisor, always non-negative. `gcd(0, 0) == 0`.
  pub fn gcd(self, other: Self) -> Checked<Self> {
    let mut a = self.unsigned_abs();
    let mut b = other.unsigned_abs();
    while b != 0 {
      let temp = b;
      b = a % b;
      a = temp;
    }
    i64::try_from(a).map(CheckedInt).map_err(|_| Fault::Overflow)
  }

  /// Largest `r` with `r^index <= self`, for non-negative `self`.
  pub fn integer_root(self, index: u64) -> Checked<Self> {
    if self.0 < 0 || index == 0 {
      return Err(Fault::Overflow);
    }
    if index == 1 || self.0 < 2 {
      return Ok(self);
    }
    // The float estimate is only a starting point; the checked powers
    // below make the result exact.
    let estimate = (self.0 as f64).powf(1.0 / index as f64).round() as i64;
    let mut root = CheckedInt(estimate.max(1));
    while root.pow(index).map_or(true, |power| power > self) {
      root = CheckedInt(root.0 - 1);
    }
    loop {
      let next = CheckedInt(root.0 + 1);
      match next.pow(index) {
        Ok(power) if power <= self => root = next,
        _ => break,
      }
    }
    Ok(root)
  }

  /// `10^exponent`, used to scale decimal literals.
  pub fn ten_pow(exponent: usize) -> Checked<Self> {
    let exponent = u64::try_from(exponent).map_err(|_| Fault::Overflow)?;
    CheckedInt(10).pow(exponent)
  }
}

impl From<i64> for CheckedInt {
  fn from(value: i64) -> Self {
    CheckedInt(value)
  }
}

impl From<CheckedInt> for i64 {
  fn from(value: CheckedInt) -> Self {
    value.0
  }
}

impl From<CheckedInt> for f64 {
  fn from(value: CheckedInt) -> Self {
    value.0 as f64
  }
}

impl fmt::Display for CheckedInt {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Add for CheckedInt {
  type Output = Checked<CheckedInt>;

  fn add(self, rhs: Self) -> Self::Output {
    self.0.checked_add(rhs.0).map(CheckedInt).ok_or(Fault::Overflow)
  }
}

impl Sub for CheckedInt {
  type Output = Checked<CheckedInt>;

  fn sub(self, rhs: Self) -> Self::Output {
    self.0.checked_sub(rhs.0).map(CheckedInt).ok_or(Fault::Overflow)
  }
}

impl Mul for CheckedInt {
  type Output = Checked<CheckedInt>;

  fn mul(self, rhs: Self) -> Self::Output {
    self.0.checked_mul(rhs.0).map(CheckedInt).ok_or(Fault::Overflow)
  }
}

impl Div for CheckedInt {
  type Output = Checked<CheckedInt>;

  fn div(self, rhs: Self) -> Self::Output {
    if rhs.0 == 0 {
      return Err(Fault::DivisionByZero);
    }
    // i64::MIN / -1 is the only other failure
    self.0.checked_div(rhs.0).map(CheckedInt).ok_or(Fault::Overflow)
  }
}

impl Rem for CheckedInt {
  type Output = Checked<CheckedInt>;

  fn rem(self, rhs: Self) -> Self::Output {
    if rhs.0 == 0 {
      return Err(Fault::DivisionByZero);
    }
    self.0.checked_rem(rhs.0).map(CheckedInt).ok_or(Fault::Overflow)
  }
}

impl Neg for CheckedInt {
  type Output = Checked<CheckedInt>;

  fn neg(self) -> Self::Output {
    self.0.checked_neg().map(CheckedInt).ok_or(Fault::Overflow)
  }
}
