// In-place editing of a `BitArray`: append, insert, delete, span
// assignment, bulk fill. Every path that resizes the storage ends by
// re-establishing the padding invariant.

use crate::convert::{coerce_width, Source};
use crate::core::{byte_len, BitArray};
use crate::error::{Error, Result};
use crate::index::norm_index;
use crate::slice::Span;

impl BitArray {

  /// Grow or shrink to `new_len` bits. New bits are zero; shrinking
  /// re-masks the final byte.
  pub(crate) fn resize_bits(&mut self, new_len: usize) {
    self.bytes.resize(byte_len(new_len), 0);
    self.len = new_len;
    self.fix_padding();
  }

  /// Append one bit.
  pub fn push(&mut self, bit: bool) {
    if self.len % 8 == 0 { self.bytes.push(0) }
    if bit {
      let i = self.len;
      self.bytes[i / 8] |= 1 << (i % 8);
    }
    self.len += 1;
  }

  /// Drop bits from the tail; a no-op unless `new_len` is shorter.
  pub fn truncate(&mut self, new_len: usize) {
    if new_len < self.len { self.resize_bits(new_len) }
  }

  /// Reset to the empty sequence.
  pub fn clear(&mut self) {
    self.bytes.clear();
    self.len = 0;
  }

  /// Set every bit to `value`.
  pub fn fill(&mut self, value: bool) {
    let b = if value { 0xff } else { 0x00 };
    for x in self.bytes.iter_mut() { *x = b }
    if value { self.fix_padding() }
  }

  /// Insert a bit before position `index`. The index is clamped into
  /// `[0, len]` after negative normalization, so insertion never fails;
  /// `index == len` appends.
  pub fn insert(&mut self, index: isize, bit: bool) {
    let i = if index < 0 { index + self.len as isize } else { index };
    let i = i.clamp(0, self.len as isize) as usize;
    self.push(false);
    for k in (i .. self.len - 1).rev() {
      let b = self.as_ref().bit_unchecked(k);
      self.set_unchecked(k + 1, b);
    }
    self.set_unchecked(i, bit);
  }

  /// Remove and return the bit at `index`.
  pub fn remove(&mut self, index: isize) -> Result<bool> {
    let i = norm_index(index, self.len)?;
    let bit = self.as_ref().bit_unchecked(i);
    self.delete(i as isize .. i as isize + 1)?;
    Ok(bit)
  }

  /// Overwrite the bits selected by `span` with a bit-like source.
  ///
  /// Integers coerce masked to the span's element count. A stepped span
  /// requires the value to have exactly that count; a step-1 span may
  /// change the length.
  pub fn assign<'s>(&mut self, span: impl Into<Span>,
                    src: impl Into<Source<'s>>) -> Result<()> {
    let span = span.into().resolve(self.len)?;
    let value = coerce_width(src.into(), span.count)?;

    if span.step != 1 {
      if value.len() != span.count {
        return Err(Error::SliceSizeMismatch
                     { expect: span.count, got: value.len() })
      }
      for (k, bit) in value.iter().enumerate() {
        self.set_unchecked((span.start + k as isize * span.step) as usize, bit)
      }
      return Ok(())
    }

    let s = span.start as usize;
    // A reversed span selects nothing; it acts as an insertion point
    // at `start`.
    let e = span.end.max(span.start) as usize;
    let m = value.len();

    // Everything on byte boundaries: splice the storage directly.
    if s % 8 == 0 && e % 8 == 0 && m % 8 == 0 {
      self.bytes.splice(s / 8 .. e / 8, value.as_bytes().iter().copied());
      self.len = self.len - (e - s) + m;
      return Ok(())
    }

    // Aligned start, replacing through the tail.
    if e == self.len && s % 8 == 0 {
      self.bytes.truncate(s / 8);
      self.bytes.extend_from_slice(value.as_bytes());
      self.len = s + m;
      return Ok(())
    }

    // Same number of bits: overwrite in place.
    if m == e - s {
      for (k, bit) in value.iter().enumerate() {
        self.set_unchecked(s + k, bit)
      }
      return Ok(())
    }

    // Unaligned replace through the tail.
    if e == self.len {
      self.resize_bits(s + m);
      for (k, bit) in value.iter().enumerate() {
        self.set_unchecked(s + k, bit)
      }
      return Ok(())
    }

    // General length-changing interior case: keep the tail, cut, then
    // re-append value and tail.
    let tail = self.as_ref().slice(e as isize ..)?;
    self.resize_bits(s);
    self.append_bits(value.as_ref());
    self.append_bits(tail.as_ref());
    Ok(())
  }

  /// Delete the bits selected by `span`.
  pub fn delete(&mut self, span: impl Into<Span>) -> Result<()> {
    let span = span.into().resolve(self.len)?;
    if span.count == 0 { return Ok(()) }

    if span.step == 1 {
      let s = span.start as usize;
      let e = span.end as usize;

      if s % 8 == 0 && e % 8 == 0 {
        self.bytes.drain(s / 8 .. e / 8);
        self.len -= e - s;
        return Ok(())
      }

      if e == self.len {
        self.resize_bits(s);
        return Ok(())
      }

      let tail = self.as_ref().slice(e as isize ..)?;
      self.resize_bits(s);
      self.append_bits(tail.as_ref());
      return Ok(())
    }

    // Stepped delete: rebuild from the retained indices.
    let mut dead: Vec<usize> = span.indices().collect();
    dead.sort_unstable();
    let mut out = BitArray::default();
    out.bytes.reserve(byte_len(self.len - dead.len()));
    let mut d = 0;
    for i in 0 .. self.len {
      if d < dead.len() && dead[d] == i {
        d += 1;
        continue
      }
      out.push(self.as_ref().bit_unchecked(i));
    }
    *self = out;
    Ok(())
  }
}

impl Extend<bool> for BitArray {
  fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
    for bit in iter { self.push(bit) }
  }
}
