// Substring search: a brute-force scan over candidate offsets, with an
// optional window restricting where matches may start and end.

use std::ops::{Bound, RangeBounds};

use crate::convert::{coerce_seq, Source};
use crate::core::{BitArray, Bits, BitsRef};
use crate::error::{Error, Result};

fn coerce_needle(src: Source<'_>) -> Result<Bits> {
  if let Source::Int(_) = src {
    return Err(Error::UnsupportedOperand { op: "find", kind: "int" })
  }
  coerce_seq(src)
}

fn window_bounds(window: impl RangeBounds<usize>, len: usize) -> (usize, usize) {
  let start = match window.start_bound() {
    Bound::Included(&s) => s,
    Bound::Excluded(&s) => s + 1,
    Bound::Unbounded => 0,
  };
  let end = match window.end_bound() {
    Bound::Included(&e) => e + 1,
    Bound::Excluded(&e) => e,
    Bound::Unbounded => len,
  };
  (start, end.min(len))
}

impl<'a> BitsRef<'a> {

  fn scan(self, needle: BitsRef<'_>, start: usize, end: usize) -> Option<usize> {
    // The window bounds candidate offsets; a match may run past `end`.
    let last = end.min((self.len + 1).saturating_sub(needle.len()));
    (start .. last).find(|&i| {
      (0 .. needle.len()).all(|k| self.bit_unchecked(i + k)
                                  == needle.bit_unchecked(k))
    })
  }

  /// Offset of the first occurrence of `needle`, or `None`.
  pub fn find<'s>(self, needle: impl Into<Source<'s>>) -> Result<Option<usize>> {
    self.find_in(needle, ..)
  }

  /// Like [`find`](Self::find), considering only match offsets inside
  /// `window`.
  pub fn find_in<'s>(self, needle: impl Into<Source<'s>>,
                     window: impl RangeBounds<usize>) -> Result<Option<usize>> {
    let needle = coerce_needle(needle.into())?;
    let (start, end) = window_bounds(window, self.len);
    Ok(self.scan(needle.as_ref(), start, end))
  }

  /// Strict search: not finding the needle is an error.
  pub fn index_of<'s>(self, needle: impl Into<Source<'s>>) -> Result<usize> {
    self.find(needle)?.ok_or(Error::NotFound)
  }

  pub fn contains<'s>(self, needle: impl Into<Source<'s>>) -> Result<bool> {
    Ok(self.find(needle)?.is_some())
  }
}

impl Bits {
  pub fn find<'s>(&self, needle: impl Into<Source<'s>>) -> Result<Option<usize>> {
    self.as_ref().find(needle)
  }
  pub fn find_in<'s>(&self, needle: impl Into<Source<'s>>,
                     window: impl RangeBounds<usize>) -> Result<Option<usize>> {
    self.as_ref().find_in(needle, window)
  }
  pub fn index_of<'s>(&self, needle: impl Into<Source<'s>>) -> Result<usize> {
    self.as_ref().index_of(needle)
  }
  pub fn contains<'s>(&self, needle: impl Into<Source<'s>>) -> Result<bool> {
    self.as_ref().contains(needle)
  }
}

impl BitArray {
  pub fn find<'s>(&self, needle: impl Into<Source<'s>>) -> Result<Option<usize>> {
    self.as_ref().find(needle)
  }
  pub fn find_in<'s>(&self, needle: impl Into<Source<'s>>,
                     window: impl RangeBounds<usize>) -> Result<Option<usize>> {
    self.as_ref().find_in(needle, window)
  }
  pub fn index_of<'s>(&self, needle: impl Into<Source<'s>>) -> Result<usize> {
    self.as_ref().index_of(needle)
  }
  pub fn contains<'s>(&self, needle: impl Into<Source<'s>>) -> Result<bool> {
    self.as_ref().contains(needle)
  }
}

#[cfg(test)]
mod test {
  use crate::proptest::*;
  use crate::{Bits, Error};

  fn b(s: &str) -> Bits { s.parse().unwrap() }

  #[test]
  fn test_find() {
    let x = b("1011");
    assert_eq!(x.find(&b("11")), Ok(Some(0)));
    assert_eq!(x.find(&b("00")), Ok(None));
    assert_eq!(x.find("01").unwrap(), Some(1));
    assert_eq!(x.find(true).unwrap(), Some(0));
    assert_eq!(b("1000").find(false).unwrap(), Some(0));
    assert_eq!(b("0111").find(false).unwrap(), Some(3));
    assert_eq!(
      x.find(5).unwrap_err(),
      Error::UnsupportedOperand { op: "find", kind: "int" },
    );
  }

  #[test]
  fn test_find_in() {
    // Sequence is 1,1,0,1 from bit 0 up.
    let x = b("1011");
    assert_eq!(x.find_in(&b("11"), 1..).unwrap(), None);
    assert_eq!(x.find_in(&b("1"), 1..).unwrap(), Some(1));
    assert_eq!(x.find_in(&b("1"), 2..).unwrap(), Some(3));
    // The end bound limits where a match may start, not where it ends.
    assert_eq!(x.find_in(&b("10"), ..2).unwrap(), None);
    assert_eq!(x.find_in(&b("10"), ..3).unwrap(), Some(2));
    assert_eq!(x.find_in(&b("1"), 9..).unwrap(), None);
    let y = b("101100101");
    assert_eq!(y.find_in(&b("10"), 0..).unwrap(), Some(1));
    assert_eq!(y.find_in(&b("10"), 2..).unwrap(), Some(4));
    assert_eq!(y.find_in(&b("10"), 5..).unwrap(), Some(7));
    assert_eq!(y.find_in(&b("10"), 8..).unwrap(), None);
  }

  #[test]
  fn test_empty_needle() {
    let x = b("1011");
    assert_eq!(x.find(&Bits::default()), Ok(Some(0)));
    assert_eq!(x.find_in(&Bits::default(), 3..).unwrap(), Some(3));
    assert_eq!(x.find_in(&Bits::default(), 4..).unwrap(), None);
    assert_eq!(Bits::default().find(&Bits::default()), Ok(None));
  }

  #[test]
  fn test_long_needle() {
    assert_eq!(b("11").find(&b("1011")), Ok(None));
    assert_eq!(Bits::default().find(&b("1")), Ok(None));
  }

  #[test]
  fn test_index_of() {
    assert_eq!(b("1011").index_of(&b("0")), Ok(2));
    assert_eq!(b("1011").index_of(&b("00")), Err(Error::NotFound));
    assert_eq!(b("1011").contains(&b("101")), Ok(true));
    assert_eq!(b("1011").contains(&b("010")), Ok(false));
  }

  #[test]
  fn find_self() {
    do_test(unary, |x: Bits| {
      if x.is_empty() { return Some(x.find(&x) == Ok(None)) }
      Some(x.find(&x) == Ok(Some(0)))
    })
  }

  #[test]
  fn find_slice() {
    do_test(bits_and2::<usize, usize>, |(x, s0, e0): (Bits, usize, usize)| {
      if x.is_empty() { return Some(true) }
      let s = s0 % (x.len() + 1);
      let e = s + e0 % (x.len() - s + 1);
      let sub = x.slice(s as isize .. e as isize).unwrap();
      match x.find(&sub).unwrap() {
        Some(i) => Some(i <= s && x.slice(i as isize .. (i + sub.len()) as isize)
                                   .unwrap() == sub),
        None => Some(false),
      }
    })
  }
}
