// Single-bit access. Public entry points take signed indices, counted
// from the end when negative.

use crate::core::{BitArray, Bits, BitsRef};
use crate::error::{Error, Result};

/// Normalize a possibly-negative index against `len`.
pub(crate) fn norm_index(index: isize, len: usize) -> Result<usize> {
  let i = if index < 0 { index + len as isize } else { index };
  if i < 0 || i >= len as isize {
    return Err(Error::OutOfBounds { index, len })
  }
  Ok(i as usize)
}

fn bit_ref(bit: bool) -> &'static bool {
  if bit { &true } else { &false }
}

impl<'a> BitsRef<'a> {

  /// Extract the bit at an already-normalized, in-range index.
  pub(crate) fn bit_unchecked(self, i: usize) -> bool {
    self.bytes[i / 8] & (1 << (i % 8)) != 0
  }

  /// Extract a bit. Negative indices count from the end.
  pub fn bit(self, index: isize) -> Result<bool> {
    Ok(self.bit_unchecked(norm_index(index, self.len)?))
  }

  pub fn get(self, index: usize) -> Option<bool> {
    if index < self.len { Some(self.bit_unchecked(index)) } else { None }
  }

  pub fn first(self) -> Option<bool> { self.get(0) }

  pub fn last(self) -> Option<bool> {
    if self.len == 0 { None } else { Some(self.bit_unchecked(self.len - 1)) }
  }
}

impl Bits {
  pub fn bit(&self, index: isize) -> Result<bool> { self.as_ref().bit(index) }
  pub fn get(&self, index: usize) -> Option<bool> { self.as_ref().get(index) }
  pub fn first(&self) -> Option<bool> { self.as_ref().first() }
  pub fn last(&self) -> Option<bool> { self.as_ref().last() }
}

impl BitArray {
  pub fn bit(&self, index: isize) -> Result<bool> { self.as_ref().bit(index) }
  pub fn get(&self, index: usize) -> Option<bool> { self.as_ref().get(index) }
  pub fn first(&self) -> Option<bool> { self.as_ref().first() }
  pub fn last(&self) -> Option<bool> { self.as_ref().last() }

  /// Overwrite the bit at an already-normalized, in-range index.
  /// Clearing a bit cannot disturb the padding, so no re-mask here.
  pub(crate) fn set_unchecked(&mut self, i: usize, value: bool) {
    let bit = 1 << (i % 8);
    if value {
      self.bytes[i / 8] |= bit
    } else {
      self.bytes[i / 8] &= !bit
    }
  }

  /// Overwrite a bit. Negative indices count from the end.
  pub fn set(&mut self, index: isize, value: bool) -> Result<()> {
    let i = norm_index(index, self.len)?;
    self.set_unchecked(i, value);
    Ok(())
  }
}

impl std::ops::Index<usize> for Bits {
  type Output = bool;
  fn index(&self, index: usize) -> &bool {
    match self.get(index) {
      Some(bit) => bit_ref(bit),
      None => panic!("index {index} out of range for length {}", self.len),
    }
  }
}

impl std::ops::Index<usize> for BitArray {
  type Output = bool;
  fn index(&self, index: usize) -> &bool {
    match self.get(index) {
      Some(bit) => bit_ref(bit),
      None => panic!("index {index} out of range for length {}", self.len),
    }
  }
}
