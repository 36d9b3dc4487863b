// Concatenation and repetition, with whole-byte fast paths when the
// accumulated length is byte aligned.

use crate::convert::{coerce_seq, Source};
use crate::core::{AsBitsRef, BitArray, Bits, BitsRef};
use crate::error::{Error, Result};

impl<'a> BitsRef<'a> {

  /// Concatenate: `other`'s bits follow `self`'s, at higher indices.
  pub fn append(self, other: BitsRef<'_>) -> Bits {
    if self.len % 8 == 0 {
      let mut bytes =
        Vec::with_capacity(self.bytes.len() + other.as_bytes().len());
      bytes.extend_from_slice(self.bytes);
      bytes.extend_from_slice(other.as_bytes());
      Bits::from_parts(self.len + other.len(), bytes.into_boxed_slice())
    } else {
      let mut out = self.to_array();
      out.append_bits(other);
      out.into()
    }
  }

  /// Concatenate any bit-like source. Integers and lone bit values are
  /// not sequences here; they are rejected.
  pub fn concat<'s>(self, rhs: impl Into<Source<'s>>) -> Result<Bits> {
    let src = rhs.into();
    match src {
      Source::Int(_) | Source::Bit(_) =>
        Err(Error::UnsupportedOperand { op: "concatenation", kind: src.kind() }),
      _ => {
        let rhs = coerce_seq(src)?;
        Ok(self.append(rhs.as_ref()))
      }
    }
  }

  /// The sequence repeated `count` times end to end.
  pub fn repeat(self, count: usize) -> Bits {
    if self.len % 8 == 0 {
      Bits::from_parts(self.len * count, self.bytes.repeat(count).into())
    } else {
      let mut out = BitArray::default();
      for _ in 0 .. count { out.append_bits(self) }
      out.into()
    }
  }
}

impl Bits {
  pub fn concat<'s>(&self, rhs: impl Into<Source<'s>>) -> Result<Bits> {
    self.as_ref().concat(rhs)
  }
  pub fn repeat(&self, count: usize) -> Bits {
    self.as_ref().repeat(count)
  }
}

impl BitArray {
  pub fn concat<'s>(&self, rhs: impl Into<Source<'s>>) -> Result<BitArray> {
    self.as_ref().concat(rhs).map(BitArray::from)
  }
  pub fn repeat(&self, count: usize) -> BitArray {
    self.as_ref().repeat(count).into()
  }

  /// Extend with another sequence's bits.
  pub(crate) fn append_bits(&mut self, other: BitsRef<'_>) {
    if self.len % 8 == 0 {
      self.bytes.extend_from_slice(other.as_bytes());
      self.len += other.len();
    } else {
      for bit in other.iter() { self.push(bit) }
    }
  }

  /// Extend with any bit-like source; same operand rules as `concat`.
  pub fn append<'s>(&mut self, rhs: impl Into<Source<'s>>) -> Result<()> {
    let src = rhs.into();
    match src {
      Source::Int(_) | Source::Bit(_) =>
        Err(Error::UnsupportedOperand { op: "concatenation", kind: src.kind() }),
      _ => {
        let rhs = coerce_seq(src)?;
        self.append_bits(rhs.as_ref());
        Ok(())
      }
    }
  }

  /// Repeat the contents `count` times in place; 0 clears.
  pub fn repeat_in_place(&mut self, count: usize) {
    match count {
      0 => self.clear(),
      1 => (),
      n if self.len % 8 == 0 => {
        self.bytes = self.bytes.repeat(n);
        self.len *= n;
      }
      n => {
        let copy = self.clone();
        for _ in 1 .. n { self.append_bits(copy.as_ref()) }
      }
    }
  }
}

macro_rules! do_append_op {
  ($lhs:ty, $rhs:ty, $out:ty) => {
    impl std::ops::Add<$rhs> for $lhs {
      type Output = $out;
      fn add(self, rhs: $rhs) -> $out {
        <$out>::from(self.view().append(rhs.view()))
      }
    }
  };
}

do_append_op!(BitsRef<'_>, BitsRef<'_>, Bits);
do_append_op!(&Bits, &Bits, Bits);
do_append_op!(Bits, Bits, Bits);
do_append_op!(&Bits, &BitArray, Bits);
do_append_op!(&BitArray, &Bits, BitArray);
do_append_op!(&BitArray, &BitArray, BitArray);
do_append_op!(BitArray, BitArray, BitArray);

macro_rules! do_append_assign {
  ($rhs:ty) => {
    impl std::ops::AddAssign<$rhs> for BitArray {
      fn add_assign(&mut self, rhs: $rhs) {
        self.append_bits(rhs.view())
      }
    }
  };
}

do_append_assign!(BitsRef<'_>);
do_append_assign!(&Bits);
do_append_assign!(&BitArray);

macro_rules! do_repeat_op {
  ($lhs:ty, $out:ty) => {
    impl std::ops::Mul<usize> for $lhs {
      type Output = $out;
      fn mul(self, count: usize) -> $out {
        <$out>::from(self.view().repeat(count))
      }
    }
  };
}

do_repeat_op!(BitsRef<'_>, Bits);
do_repeat_op!(&Bits, Bits);
do_repeat_op!(Bits, Bits);
do_repeat_op!(&BitArray, BitArray);
do_repeat_op!(BitArray, BitArray);

impl std::ops::MulAssign<usize> for BitArray {
  fn mul_assign(&mut self, count: usize) {
    self.repeat_in_place(count)
  }
}
