// Constructing bit sequences from integers, text, bytes and bit values,
// and destructuring them back.

use num::bigint::Sign;
use num::{BigInt, BigUint, Zero};

use crate::core::{byte_len, BitArray, Bits, BitsRef};
use crate::error::{Error, Result};

/// A bit-like construction source: the operand categories accepted by
/// the generic constructors and by the coercing operations.
pub enum Source<'a> {
  /// An owned immutable sequence. `Bits::new` passes it through as an
  /// identity, without copying.
  Bits(Bits),
  /// A borrowed view of either sequence shape.
  View(BitsRef<'a>),
  /// An integer. Its width comes from context: explicit, minimal, or
  /// the left operand's width for bitwise coercion.
  Int(BigInt),
  /// MSB-first binary text.
  Str(&'a str),
  /// A packed LSB-first byte buffer.
  Bytes(&'a [u8]),
  /// Individual bit values, in LSB-first order.
  Bools(&'a [bool]),
  /// A single bit.
  Bit(bool),
}

impl Source<'_> {
  pub(crate) fn kind(&self) -> &'static str {
    match self {
      Source::Bits(_) | Source::View(_) => "bits",
      Source::Int(_) => "int",
      Source::Str(_) => "str",
      Source::Bytes(_) => "bytes",
      Source::Bools(_) => "an iterable",
      Source::Bit(_) => "a bool",
    }
  }
}

impl From<Bits> for Source<'_> {
  fn from(bits: Bits) -> Self { Source::Bits(bits) }
}

impl<'a> From<&'a Bits> for Source<'a> {
  fn from(bits: &'a Bits) -> Self { Source::View(bits.as_ref()) }
}

impl<'a> From<&'a BitArray> for Source<'a> {
  fn from(arr: &'a BitArray) -> Self { Source::View(arr.as_ref()) }
}

impl<'a> From<BitsRef<'a>> for Source<'a> {
  fn from(view: BitsRef<'a>) -> Self { Source::View(view) }
}

impl<'a> From<&'a str> for Source<'a> {
  fn from(text: &'a str) -> Self { Source::Str(text) }
}

impl<'a> From<&'a [u8]> for Source<'a> {
  fn from(bytes: &'a [u8]) -> Self { Source::Bytes(bytes) }
}

impl<'a> From<&'a [bool]> for Source<'a> {
  fn from(bools: &'a [bool]) -> Self { Source::Bools(bools) }
}

impl<'a, const N: usize> From<&'a [bool; N]> for Source<'a> {
  fn from(bools: &'a [bool; N]) -> Self { Source::Bools(bools) }
}

impl From<bool> for Source<'_> {
  fn from(bit: bool) -> Self { Source::Bit(bit) }
}

impl From<BigInt> for Source<'_> {
  fn from(value: BigInt) -> Self { Source::Int(value) }
}

impl From<BigUint> for Source<'_> {
  fn from(value: BigUint) -> Self { Source::Int(value.into()) }
}

macro_rules! int_source {
  ($($int:ty),*) => { $(
    impl From<$int> for Source<'_> {
      fn from(value: $int) -> Self { Source::Int(BigInt::from(value)) }
    }
  )* };
}

int_source!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

fn forbid_width(width: Option<usize>, kind: &'static str) -> Result<()> {
  match width {
    Some(_) => Err(Error::WidthForbidden(kind)),
    None => Ok(()),
  }
}

/// Little-endian storage for a value known to fit in `len` bits.
fn biguint_bytes(value: &BigUint, len: usize) -> Box<[u8]> {
  let mut bytes = value.to_bytes_le();
  bytes.resize(byte_len(len), 0);
  bytes.into_boxed_slice()
}

fn int_bits(value: BigInt, width: Option<usize>) -> Result<Bits> {
  match width {
    None => {
      if value.sign() == Sign::Minus {
        return Err(Error::NegativeInput(value))
      }
      let (_, mag) = value.into_parts();
      let len = mag.bits() as usize;
      Ok(Bits::from_parts(len, biguint_bytes(&mag, len)))
    }
    Some(width) => {
      let (sign, mag) = value.into_parts();
      let modulus = BigUint::from(1u8) << width;
      let mut rem = mag % &modulus;
      if sign == Sign::Minus && !rem.is_zero() { rem = modulus - rem }
      Ok(Bits::from_parts(width, biguint_bytes(&rem, width)))
    }
  }
}

fn collect_digits<I>(iter: I) -> Result<BitArray>
  where I: IntoIterator<Item = u8>
{
  let mut arr = BitArray::default();
  for digit in iter {
    match digit {
      0 => arr.push(false),
      1 => arr.push(true),
      other => return Err(Error::BadBitValue(other)),
    }
  }
  Ok(arr)
}

fn parse_binary(input: &str) -> Result<BitArray> {
  let mut digits = Vec::with_capacity(input.len());
  for c in input.chars() {
    if c.is_whitespace() || c == '_' { continue }
    match c {
      '0' => digits.push(false),
      '1' => digits.push(true),
      _ => return Err(Error::BadDigit(input.to_string())),
    }
  }
  // Text is MSB first; storage is LSB first.
  Ok(digits.into_iter().rev().collect())
}

fn check_buffer(bytes: &[u8], len: usize) -> Result<()> {
  if bytes.len() != byte_len(len) {
    return Err(Error::LengthMismatch { bytes: bytes.len(), bits: len })
  }
  if len % 8 != 0 && bytes[bytes.len() - 1] & (0xff << (len % 8)) != 0 {
    return Err(Error::BadPadding)
  }
  Ok(())
}

/// A one-bit sequence.
pub(crate) fn single(bit: bool) -> Bits {
  Bits::from_parts(1, vec![bit as u8].into_boxed_slice())
}

/// Coerce a source to a sequence using its intrinsic length. Integers
/// take their minimal width; callers that give integers a contextual
/// width, or reject them, handle `Source::Int` before calling this.
pub(crate) fn coerce_seq(src: Source<'_>) -> Result<Bits> {
  match src {
    Source::Bits(bits) => Ok(bits),
    Source::View(view) => Ok(view.to_bits()),
    Source::Int(value) => int_bits(value, None),
    Source::Str(text) => text.parse(),
    Source::Bytes(bytes) => Ok(Bits::from(bytes)),
    Source::Bools(bools) => Ok(bools.iter().copied().collect()),
    Source::Bit(bit) => Ok(single(bit)),
  }
}

/// Coerce a source to a sequence with a contextual width: integers are
/// masked to `width`, every other category keeps its intrinsic length.
pub(crate) fn coerce_width(src: Source<'_>, width: usize) -> Result<Bits> {
  match src {
    Source::Int(value) => int_bits(value, Some(width)),
    other => coerce_seq(other),
  }
}

impl Bits {

  /// Build from an integer.
  ///
  /// With an explicit width the value is reduced modulo `2^width`, so
  /// negative and over-wide inputs wrap silently. Without a width the
  /// value must be non-negative and the minimal width representing it
  /// is used (0 bits for the value 0).
  pub fn from_int<T: Into<BigInt>>(value: T, width: Option<usize>) -> Result<Bits> {
    int_bits(value.into(), width)
  }

  /// Build from integer bit values; each item must be 0 or 1.
  pub fn from_digits<I>(iter: I) -> Result<Bits>
    where I: IntoIterator<Item = u8>
  {
    collect_digits(iter).map(Bits::from)
  }

  /// Build from a packed byte buffer with an explicit bit length.
  ///
  /// The buffer must be exactly `ceil(len / 8)` bytes, and when `len`
  /// is not a multiple of 8 the unused high bits of the final byte must
  /// already be zero: this constructor validates, it does not mask.
  pub fn from_bytes(bytes: &[u8], len: usize) -> Result<Bits> {
    check_buffer(bytes, len)?;
    Ok(Bits::from_parts(len, bytes.into()))
  }

  /// Build from any bit-like source, routing on its category.
  ///
  /// A width is honored for integer and byte-buffer sources and
  /// rejected for the others, which define their own length. Passing an
  /// owned `Bits` with no width returns that very value.
  pub fn new<'a>(src: impl Into<Source<'a>>, width: Option<usize>) -> Result<Bits> {
    match src.into() {
      Source::Bits(bits) => { forbid_width(width, "bits")?; Ok(bits) }
      Source::View(view) => { forbid_width(width, "bits")?; Ok(view.to_bits()) }
      Source::Int(value) => int_bits(value, width),
      Source::Str(text) => { forbid_width(width, "str")?; text.parse() }
      Source::Bytes(bytes) => match width {
        Some(len) => Bits::from_bytes(bytes, len),
        None => Ok(Bits::from(bytes)),
      },
      Source::Bools(bools) => {
        forbid_width(width, "an iterable")?;
        Ok(bools.iter().copied().collect())
      }
      Source::Bit(bit) => { forbid_width(width, "a bool")?; Ok(single(bit)) }
    }
  }

  /// The sequence value as a non-negative integer.
  pub fn to_uint(&self) -> BigUint { self.as_ref().to_uint() }
}

impl BitArray {

  /// See [`Bits::from_int`].
  pub fn from_int<T: Into<BigInt>>(value: T, width: Option<usize>) -> Result<BitArray> {
    int_bits(value.into(), width).map(BitArray::from)
  }

  /// See [`Bits::from_digits`].
  pub fn from_digits<I>(iter: I) -> Result<BitArray>
    where I: IntoIterator<Item = u8>
  {
    collect_digits(iter)
  }

  /// See [`Bits::from_bytes`].
  pub fn from_bytes(bytes: &[u8], len: usize) -> Result<BitArray> {
    check_buffer(bytes, len)?;
    Ok(BitArray::from_parts(len, bytes.to_vec()))
  }

  /// Build from any bit-like source; see [`Bits::new`]. The mutable
  /// shape always owns fresh storage.
  pub fn new<'a>(src: impl Into<Source<'a>>, width: Option<usize>) -> Result<BitArray> {
    Bits::new(src, width).map(BitArray::from)
  }

  /// The sequence value as a non-negative integer.
  pub fn to_uint(&self) -> BigUint { self.as_ref().to_uint() }
}

impl BitsRef<'_> {
  /// The sequence value as a non-negative integer (bit 0 is the least
  /// significant bit).
  pub fn to_uint(self) -> BigUint { BigUint::from_bytes_le(self.bytes) }
}

impl std::str::FromStr for Bits {
  type Err = Error;

  /// Parse MSB-first binary text. ASCII whitespace and `_` separators
  /// are discarded; the remaining characters must be `0` or `1`.
  fn from_str(s: &str) -> Result<Bits> { parse_binary(s).map(Bits::from) }
}

impl std::str::FromStr for BitArray {
  type Err = Error;

  fn from_str(s: &str) -> Result<BitArray> { parse_binary(s) }
}

impl FromIterator<bool> for BitArray {
  fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> BitArray {
    let iter = iter.into_iter();
    let mut arr = BitArray::default();
    arr.bytes.reserve(byte_len(iter.size_hint().0));
    for bit in iter { arr.push(bit) }
    arr
  }
}

impl FromIterator<bool> for Bits {
  fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Bits {
    BitArray::from_iter(iter).into()
  }
}

impl From<&[u8]> for Bits {
  fn from(bytes: &[u8]) -> Bits {
    Bits::from_parts(bytes.len() * 8, bytes.into())
  }
}

impl From<Vec<u8>> for Bits {
  fn from(bytes: Vec<u8>) -> Bits {
    Bits::from_parts(bytes.len() * 8, bytes.into_boxed_slice())
  }
}

impl From<&[u8]> for BitArray {
  fn from(bytes: &[u8]) -> BitArray {
    BitArray::from_parts(bytes.len() * 8, bytes.to_vec())
  }
}

impl From<Vec<u8>> for BitArray {
  fn from(bytes: Vec<u8>) -> BitArray {
    BitArray::from_parts(bytes.len() * 8, bytes)
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::proptest::*;

  #[test]
  fn test_from_int() {
    assert_bits(&Bits::from_int(0, None).unwrap(), 0, 0b0);
    assert_bits(&Bits::from_int(1, None).unwrap(), 1, 0b1);
    assert_bits(&Bits::from_int(2, None).unwrap(), 2, 0b10);
    assert_bits(&Bits::from_int(2, Some(5)).unwrap(), 5, 0b00010);
    assert_bits(&Bits::from_int(0b110, Some(2)).unwrap(), 2, 0b10);
    assert_bits(&Bits::from_int(-1, Some(16)).unwrap(), 16, 0xffff);
    assert_bits(&Bits::from_int(-2, Some(4)).unwrap(), 4, 0b1110);
  }

  #[test]
  fn test_from_int_wrong() {
    assert_eq!(
      Bits::from_int(-1, None),
      Err(Error::NegativeInput(num::BigInt::from(-1))),
    );
  }

  #[test]
  fn test_parse() {
    assert_bits(&"".parse().unwrap(), 0, 0b0);
    assert_bits(&"0".parse().unwrap(), 1, 0b0);
    assert_bits(&"010".parse().unwrap(), 3, 0b010);
    assert_bits(&"0 1  011_100".parse().unwrap(), 8, 0b01011100);
    assert_bits(&"0 1 \t011_100".parse().unwrap(), 8, 0b01011100);
  }

  #[test]
  fn test_parse_wrong() {
    assert_eq!("-1".parse::<Bits>(), Err(Error::BadDigit("-1".into())));
    assert_eq!("23".parse::<Bits>(), Err(Error::BadDigit("23".into())));
  }

  #[test]
  fn test_from_bytes() {
    assert_bits(&Bits::from_bytes(b"\xa5", 8).unwrap(), 8, 0b10100101);
    assert_bits(&Bits::from_bytes(b"\xa5\x01", 9).unwrap(), 9, 0b1_10100101);
  }

  #[test]
  fn test_from_bytes_wrong() {
    assert_eq!(Bits::from_bytes(b"\xa5\xff", 9), Err(Error::BadPadding));
    assert_eq!(
      Bits::from_bytes(b"\xa5\xff", 20),
      Err(Error::LengthMismatch { bytes: 2, bits: 20 }),
    );
  }

  #[test]
  fn test_from_digits() {
    assert_bits(&Bits::from_digits([]).unwrap(), 0, 0b0);
    assert_bits(&Bits::from_digits([1, 1, 0, 1, 0, 0, 1]).unwrap(), 7, 0b1001011);
    assert_eq!(Bits::from_digits([1, 0, 2]), Err(Error::BadBitValue(2)));
  }

  #[test]
  fn test_new() {
    assert_bits(&Bits::new(10u8, None).unwrap(), 4, 0b1010);
    assert_bits(&Bits::new(10u8, Some(2)).unwrap(), 2, 0b10);
    assert_bits(&Bits::new("1001", None).unwrap(), 4, 0b1001);
    assert_bits(&Bits::new(&b"\xa5\x01"[..], Some(9)).unwrap(), 9, 0b1_10100101);
    assert_bits(&Bits::new(&b"\xa5\x01"[..], None).unwrap(), 16, 0b1_10100101);
    assert_bits(&Bits::new(&[true, true, false, true, false, false, true], None).unwrap(),
                7, 0b1001011);
    assert_bits(&Bits::new(true, None).unwrap(), 1, 0b1);
  }

  #[test]
  fn test_new_identity() {
    let some: Bits = "1001".parse().unwrap();
    let ptr = some.as_bytes().as_ptr();
    let again = Bits::new(some, None).unwrap();
    assert_eq!(again.as_bytes().as_ptr(), ptr);
  }

  #[test]
  fn test_new_wrong() {
    assert_eq!(Bits::new("1010", Some(5)), Err(Error::WidthForbidden("str")));
    assert_eq!(
      Bits::new(&[true, false][..], Some(5)),
      Err(Error::WidthForbidden("an iterable")),
    );
    let some: Bits = "1010".parse().unwrap();
    assert_eq!(Bits::new(&some, Some(4)), Err(Error::WidthForbidden("bits")));
  }

  #[test]
  fn test_to_uint() {
    let x: Bits = "1010".parse().unwrap();
    assert_eq!(x.to_uint(), BigUint::from(0b1010u8));
    assert_eq!(Bits::default().to_uint(), BigUint::from(0u8));
  }

  #[test]
  fn test_freeze_thaw() {
    let arr: BitArray = "10110".parse().unwrap();
    let bits = Bits::from(arr.clone());
    assert_eq!(bits, arr);
    assert_eq!(BitArray::from(bits), arr);
  }

  #[test]
  fn int_round_trip() {
    do_test(unary, |x: Bits| {
      let v = x.to_uint();
      Some(Bits::from_int(v, Some(x.len())).unwrap() == x)
    })
  }

  #[test]
  fn minimal_width_round_trip() {
    do_test(unary, |x: Bits| {
      let v = x.to_uint();
      let y = Bits::from_int(v.clone(), None).unwrap();
      assert_eq!(y.len(), v.bits() as usize);
      Some(y.to_uint() == v)
    })
  }

  #[test]
  fn bytes_round_trip() {
    do_test(unary, |x: Bits| {
      Some(Bits::from_bytes(x.as_bytes(), x.len()).unwrap() == x)
    })
  }

  #[test]
  fn str_round_trip() {
    do_test(unary, |x: Bits| {
      Some(x.to_string().parse::<Bits>().unwrap() == x)
    })
  }

  #[test]
  fn digits_round_trip() {
    do_test(unary, |x: Bits| {
      let digits: Vec<u8> = x.iter().map(u8::from).collect();
      Some(Bits::from_digits(digits).unwrap() == x)
    })
  }
}
