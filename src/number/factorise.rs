//! Trial division for extracting perfect powers out of a radicand.
//!
//! Candidates come from a table of small primes first and then from a
//! mod-30 wheel, which skips every multiple of 2, 3 and 5.

use tracing::trace;

use super::checked::{Checked, CheckedInt};

pub const SMALL_PRIMES: [i64; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

/// Gaps between the residues coprime to 30, starting from 31 (= 1 mod 30).
pub const WHEEL: [i64; 8] = [6, 4, 2, 4, 2, 4, 6, 2];

const WHEEL_START: i64 = 31;

/// Finds the largest `f` with `f^index` dividing `radicand`, divides it out
/// and returns `f`.
///
/// The search stops early when a candidate power cannot be computed in 64
/// bits; the factor extracted up to that point is still correct, just not
/// necessarily the largest. Non-positive radicands are left untouched.
pub fn factorise(radicand: &mut CheckedInt, index: u64) -> CheckedInt {
  let mut extracted = CheckedInt::ONE;
  if index < 2 || radicand.get() < 2 {
    return extracted;
  }
  if let Err(fault) = extract_all(radicand, index, &mut extracted) {
    trace!(?fault, %radicand, index, %extracted, "partial factorisation");
  }
  extracted
}

fn extract_all(
  radicand: &mut CheckedInt,
  index: u64,
  extracted: &mut CheckedInt,
) -> Checked<()> {
  let mut top = radicand.integer_root(index)?;

  // a perfect power needs no search at all
  if top.pow(index)? == *radicand {
    *extracted = (*extracted * top)?;
    *radicand = CheckedInt::ONE;
    return Ok(());
  }

  for prime in SMALL_PRIMES {
    if prime > top.get() {
      return Ok(());
    }
    extract(radicand, index, CheckedInt::new(prime), extracted, &mut top)?;
  }

  let mut candidate = WHEEL_START;
  loop {
    for step in WHEEL {
      if candidate > top.get() {
        return Ok(());
      }
      let candidate_int = CheckedInt::new(candidate);
      extract(radicand, index, candidate_int, extracted, &mut top)?;
      candidate += step;
    }
  }
}

/// Divides `candidate^index` out of the radicand as often as it goes,
/// shrinking the search bound after each hit.
fn extract(
  radicand: &mut CheckedInt,
  index: u64,
  candidate: CheckedInt,
  extracted: &mut CheckedInt,
  top: &mut CheckedInt,
) -> Checked<()> {
  let power = candidate.pow(index)?;
  while (*radicand % power)?.is_zero() {
    let grown = (*extracted * candidate)?;
    *radicand = (*radicand / power)?;
    *extracted = grown;
    *top = radicand.integer_root(index)?;
  }
  Ok(())
}
