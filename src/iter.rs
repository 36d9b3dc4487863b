// Bit-by-bit traversal, LSB first.

use crate::core::{BitArray, Bits, BitsRef};

impl<'a> BitsRef<'a> {

  /// Iterate over the bits, bit 0 first. The view is `Copy`, so the
  /// traversal can be restarted by calling `iter` again; it yields the
  /// same values every time.
  pub fn iter(self) -> Iter<'a> {
    Iter { view: self, front: 0, back: self.len }
  }
}

impl Bits {
  pub fn iter(&self) -> Iter<'_> { self.as_ref().iter() }
}

impl BitArray {
  pub fn iter(&self) -> Iter<'_> { self.as_ref().iter() }
}

/// Borrowed bit traversal.
#[derive(Clone)]
pub struct Iter<'a> {
  view:  BitsRef<'a>,
  front: usize,
  back:  usize,
}

impl Iterator for Iter<'_> {
  type Item = bool;

  fn next(&mut self) -> Option<bool> {
    if self.front >= self.back { return None }
    let i = self.front;
    self.front += 1;
    Some(self.view.bit_unchecked(i))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = self.back - self.front;
    (n, Some(n))
  }
}

impl DoubleEndedIterator for Iter<'_> {
  fn next_back(&mut self) -> Option<bool> {
    if self.front >= self.back { return None }
    self.back -= 1;
    Some(self.view.bit_unchecked(self.back))
  }
}

impl ExactSizeIterator for Iter<'_> {}
impl std::iter::FusedIterator for Iter<'_> {}

/// Owned bit traversal.
#[derive(Clone)]
pub struct IntoIter {
  bits:  Bits,
  front: usize,
  back:  usize,
}

impl Iterator for IntoIter {
  type Item = bool;

  fn next(&mut self) -> Option<bool> {
    if self.front >= self.back { return None }
    let i = self.front;
    self.front += 1;
    Some(self.bits.as_ref().bit_unchecked(i))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = self.back - self.front;
    (n, Some(n))
  }
}

impl DoubleEndedIterator for IntoIter {
  fn next_back(&mut self) -> Option<bool> {
    if self.front >= self.back { return None }
    self.back -= 1;
    Some(self.bits.as_ref().bit_unchecked(self.back))
  }
}

impl ExactSizeIterator for IntoIter {}
impl std::iter::FusedIterator for IntoIter {}

impl<'a> IntoIterator for BitsRef<'a> {
  type Item = bool;
  type IntoIter = Iter<'a>;
  fn into_iter(self) -> Iter<'a> { self.iter() }
}

impl<'a> IntoIterator for &'a Bits {
  type Item = bool;
  type IntoIter = Iter<'a>;
  fn into_iter(self) -> Iter<'a> { self.iter() }
}

impl<'a> IntoIterator for &'a BitArray {
  type Item = bool;
  type IntoIter = Iter<'a>;
  fn into_iter(self) -> Iter<'a> { self.iter() }
}

impl IntoIterator for Bits {
  type Item = bool;
  type IntoIter = IntoIter;
  fn into_iter(self) -> IntoIter {
    IntoIter { front: 0, back: self.len(), bits: self }
  }
}

impl IntoIterator for BitArray {
  type Item = bool;
  type IntoIter = IntoIter;
  fn into_iter(self) -> IntoIter { Bits::from(self).into_iter() }
}
