// Two distinct transforms: full end-to-end reversal of the logical bit
// order, and per-byte reversal that keeps the byte order (only defined
// for byte-aligned lengths).

use crate::core::{BitArray, Bits, BitsRef, BYTE_REVERSE};
use crate::error::{Error, Result};

impl<'a> BitsRef<'a> {

  /// The sequence with its logical bit order reversed.
  pub fn reversed(self) -> Bits {
    if self.len % 8 == 0 {
      let bytes: Box<[u8]> =
        self.bytes.iter().rev().map(|&b| BYTE_REVERSE[b as usize]).collect();
      Bits::from_parts(self.len, bytes)
    } else {
      (0 .. self.len).rev().map(|i| self.bit_unchecked(i)).collect()
    }
  }

  /// Reverse the bit order within each byte, keeping the bytes where
  /// they are. Only defined when the length is a whole number of bytes.
  pub fn byte_reversed(self) -> Result<Bits> {
    if self.len % 8 != 0 {
      return Err(Error::NotByteAligned { len: self.len })
    }
    let bytes: Box<[u8]> =
      self.bytes.iter().map(|&b| BYTE_REVERSE[b as usize]).collect();
    Ok(Bits::from_parts(self.len, bytes))
  }
}

impl Bits {
  pub fn reversed(&self) -> Bits { self.as_ref().reversed() }
  pub fn byte_reversed(&self) -> Result<Bits> { self.as_ref().byte_reversed() }
}

impl BitArray {
  pub fn reversed(&self) -> BitArray { self.as_ref().reversed().into() }

  pub fn byte_reversed(&self) -> Result<BitArray> {
    self.as_ref().byte_reversed().map(BitArray::from)
  }

  /// Reverse the logical bit order in place.
  pub fn reverse(&mut self) {
    if self.len % 8 == 0 {
      for b in self.bytes.iter_mut() { *b = BYTE_REVERSE[*b as usize] }
      self.bytes.reverse();
    } else {
      *self = self.reversed();
    }
  }

  /// Reverse the bit order within each byte in place; the length must
  /// be a whole number of bytes.
  pub fn byte_reverse(&mut self) -> Result<()> {
    if self.len % 8 != 0 {
      return Err(Error::NotByteAligned { len: self.len })
    }
    for b in self.bytes.iter_mut() { *b = BYTE_REVERSE[*b as usize] }
    Ok(())
  }
}
