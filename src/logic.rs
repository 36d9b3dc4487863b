// Bitwise combination. Operator impls on already-typed operands assert
// equal widths; the named forms coerce any bit-like source and report a
// width mismatch as an error. The padding bits of both operands are
// zero, so AND/OR/XOR never disturb the invariant; NOT re-masks.

use crate::convert::{coerce_width, Source};
use crate::core::{mask_tail, AsBitsRef, BitArray, Bits, BitsRef};
use crate::error::{Error, Result};

impl<'a> BitsRef<'a> {

  /// Coerce a combination operand to exactly `self`'s width.
  pub(crate) fn coerce_operand(self, src: Source<'_>) -> Result<Bits> {
    let rhs = coerce_width(src, self.len)?;
    if rhs.len() != self.len {
      return Err(Error::WidthMismatch { left: self.len, right: rhs.len() })
    }
    Ok(rhs)
  }

  fn zip_bytes(self, rhs: BitsRef<'_>, f: fn(u8, u8) -> u8) -> Bits {
    let bytes: Box<[u8]> =
      self.bytes.iter().zip(rhs.bytes).map(|(&x, &y)| f(x, y)).collect();
    Bits::from_parts(self.len, bytes)
  }

  pub fn and<'s>(self, rhs: impl Into<Source<'s>>) -> Result<Bits> {
    let rhs = self.coerce_operand(rhs.into())?;
    Ok(self.zip_bytes(rhs.as_ref(), |x, y| x & y))
  }

  pub fn or<'s>(self, rhs: impl Into<Source<'s>>) -> Result<Bits> {
    let rhs = self.coerce_operand(rhs.into())?;
    Ok(self.zip_bytes(rhs.as_ref(), |x, y| x | y))
  }

  pub fn xor<'s>(self, rhs: impl Into<Source<'s>>) -> Result<Bits> {
    let rhs = self.coerce_operand(rhs.into())?;
    Ok(self.zip_bytes(rhs.as_ref(), |x, y| x ^ y))
  }
}

impl Bits {
  pub fn and<'s>(&self, rhs: impl Into<Source<'s>>) -> Result<Bits> {
    self.as_ref().and(rhs)
  }
  pub fn or<'s>(&self, rhs: impl Into<Source<'s>>) -> Result<Bits> {
    self.as_ref().or(rhs)
  }
  pub fn xor<'s>(&self, rhs: impl Into<Source<'s>>) -> Result<Bits> {
    self.as_ref().xor(rhs)
  }
}

impl BitArray {
  pub fn and<'s>(&self, rhs: impl Into<Source<'s>>) -> Result<BitArray> {
    self.as_ref().and(rhs).map(BitArray::from)
  }
  pub fn or<'s>(&self, rhs: impl Into<Source<'s>>) -> Result<BitArray> {
    self.as_ref().or(rhs).map(BitArray::from)
  }
  pub fn xor<'s>(&self, rhs: impl Into<Source<'s>>) -> Result<BitArray> {
    self.as_ref().xor(rhs).map(BitArray::from)
  }

  fn zip_assign(&mut self, rhs: BitsRef<'_>, f: fn(&mut u8, u8)) {
    for (x, &y) in self.bytes.iter_mut().zip(rhs.as_bytes()) { f(x, y) }
  }

  pub fn and_assign<'s>(&mut self, rhs: impl Into<Source<'s>>) -> Result<()> {
    let rhs = self.as_ref().coerce_operand(rhs.into())?;
    self.zip_assign(rhs.as_ref(), |x, y| *x &= y);
    Ok(())
  }

  pub fn or_assign<'s>(&mut self, rhs: impl Into<Source<'s>>) -> Result<()> {
    let rhs = self.as_ref().coerce_operand(rhs.into())?;
    self.zip_assign(rhs.as_ref(), |x, y| *x |= y);
    Ok(())
  }

  pub fn xor_assign<'s>(&mut self, rhs: impl Into<Source<'s>>) -> Result<()> {
    let rhs = self.as_ref().coerce_operand(rhs.into())?;
    self.zip_assign(rhs.as_ref(), |x, y| *x ^= y);
    Ok(())
  }

  /// Complement every bit in place.
  pub fn invert(&mut self) {
    for x in self.bytes.iter_mut() { *x = !*x }
    self.fix_padding()
  }
}

macro_rules! do_logic_eval {
  ($trait:ident, $method:ident, $lhs:ty, $rhs:ty, $out:ty) => {
    impl std::ops::$trait<$rhs> for $lhs {
      type Output = $out;
      fn $method(self, rhs: $rhs) -> $out {
        let lhs = self.view();
        let rhs = rhs.view();
        assert_eq!(lhs.len(), rhs.len(), "mismatched bitwise operator widths");
        <$out>::from(lhs.zip_bytes(rhs, |x, y| std::ops::$trait::$method(x, y)))
      }
    }
  };
}

macro_rules! do_logic_assign {
  ($trait:ident, $method:ident, $rhs:ty) => {
    impl std::ops::$trait<$rhs> for BitArray {
      fn $method(&mut self, rhs: $rhs) {
        let rhs = rhs.view();
        assert_eq!(self.len(), rhs.len(), "mismatched bitwise operator widths");
        self.zip_assign(rhs, |x, y| std::ops::$trait::$method(x, y))
      }
    }
  };
}

macro_rules! do_logic {
  ($trait:ident, $method:ident, $atrait:ident, $amethod:ident) => {
    do_logic_eval!($trait, $method, BitsRef<'_>, BitsRef<'_>, Bits);
    do_logic_eval!($trait, $method, &Bits, &Bits, Bits);
    do_logic_eval!($trait, $method, Bits, Bits, Bits);
    do_logic_eval!($trait, $method, &Bits, &BitArray, Bits);
    do_logic_eval!($trait, $method, &BitArray, &Bits, BitArray);
    do_logic_eval!($trait, $method, &BitArray, &BitArray, BitArray);
    do_logic_eval!($trait, $method, BitArray, BitArray, BitArray);
    do_logic_assign!($atrait, $amethod, BitsRef<'_>);
    do_logic_assign!($atrait, $amethod, &Bits);
    do_logic_assign!($atrait, $amethod, &BitArray);
  };
}

do_logic!(BitAnd, bitand, BitAndAssign, bitand_assign);
do_logic!(BitOr, bitor, BitOrAssign, bitor_assign);
do_logic!(BitXor, bitxor, BitXorAssign, bitxor_assign);

macro_rules! do_not {
  ($lhs:ty, $out:ty) => {
    impl std::ops::Not for $lhs {
      type Output = $out;
      fn not(self) -> $out {
        let lhs = self.view();
        let mut bytes: Box<[u8]> = lhs.as_bytes().iter().map(|&x| !x).collect();
        mask_tail(&mut bytes, lhs.len());
        <$out>::from(Bits::from_parts(lhs.len(), bytes))
      }
    }
  };
}

do_not!(BitsRef<'_>, Bits);
do_not!(&Bits, Bits);
do_not!(Bits, Bits);
do_not!(&BitArray, BitArray);
do_not!(BitArray, BitArray);
