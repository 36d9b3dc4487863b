// Bit sequences of dynamic length, packed into byte storage.

/// Storage bytes needed for `bits` logical bits.
pub(crate) fn byte_len(bits: usize) -> usize { (bits + 7) / 8 }

/// Zero the unused high bits of the final storage byte.
/// Storage invariant: those bits are 0 at every observable moment.
pub(crate) fn mask_tail(bytes: &mut [u8], len: usize) {
  if len % 8 != 0 {
    if let Some(last) = bytes.last_mut() { *last &= (1 << (len % 8)) - 1 }
  }
}

const fn reverse_table() -> [u8; 256] {
  let mut table = [0u8; 256];
  let mut byte = 0;
  while byte < 256 {
    let mut bit = 0;
    while bit < 8 {
      table[byte] |= (((byte >> bit) & 1) as u8) << (7 - bit);
      bit += 1;
    }
    byte += 1;
  }
  table
}

/// Maps each byte to its bit-reversed value. Built at compile time and
/// never written afterwards; backs the whole-byte reversal fast paths.
pub(crate) static BYTE_REVERSE: [u8; 256] = reverse_table();

/// An immutable bit sequence; the bit analogue of `Box<[u8]>`.
///
/// The sequence is ordered from LSB to MSB: bit 0 is the least
/// significant bit of storage byte 0, and indexing, iteration, integer
/// conversion and byte conversion all follow that order. Conversion to
/// and from *strings* is the deliberate exception: text is written MSB
/// first, the way integer literals and datasheet register values are
/// written.
#[derive(Clone, Default)]
pub struct Bits {
  pub(crate) len:   usize,
  pub(crate) bytes: Box<[u8]>,
}

/// A mutable, resizable bit sequence; the bit analogue of `Vec<u8>`.
///
/// Layout and ordering rules are those of [`Bits`]. On top of the shared
/// read operations it supports in-place assignment of single bits and
/// spans, insertion, deletion, bulk fill, and in-place bitwise
/// combination. It cannot be hashed.
#[derive(Clone, Default)]
pub struct BitArray {
  pub(crate) len:   usize,
  pub(crate) bytes: Vec<u8>,
}

/// A borrowed, read-only view of a bit sequence.
///
/// Both owning types convert to this for free; every read-side
/// algorithm is implemented once against it.
#[derive(Clone, Copy)]
pub struct BitsRef<'a> {
  pub(crate) len:   usize,
  pub(crate) bytes: &'a [u8],
}

impl<'a> BitsRef<'a> {

  /// The logical length in bits.
  pub fn len(self) -> usize { self.len }

  pub fn is_empty(self) -> bool { self.len == 0 }

  /// The packed storage, `byte_len(len)` bytes, LSB-first. Unused high
  /// bits of the final byte are zero.
  pub fn as_bytes(self) -> &'a [u8] { self.bytes }

  /// Copy into an owned immutable sequence.
  pub fn to_bits(self) -> Bits {
    Bits { len: self.len, bytes: self.bytes.into() }
  }

  /// Copy into an owned mutable sequence.
  pub fn to_array(self) -> BitArray {
    BitArray { len: self.len, bytes: self.bytes.to_vec() }
  }

  /// Number of one bits.
  pub fn count_ones(self) -> usize {
    self.bytes.iter().map(|b| b.count_ones() as usize).sum()
  }

  /// Number of zero bits.
  pub fn count_zeros(self) -> usize { self.len - self.count_ones() }
}

impl Bits {

  pub(crate) fn from_parts(len: usize, bytes: Box<[u8]>) -> Bits {
    debug_assert_eq!(bytes.len(), byte_len(len));
    Bits { len, bytes }
  }

  pub fn as_ref(&self) -> BitsRef<'_> {
    BitsRef { len: self.len, bytes: &self.bytes }
  }

  pub fn len(&self) -> usize { self.len }

  pub fn is_empty(&self) -> bool { self.len == 0 }

  pub fn as_bytes(&self) -> &[u8] { &self.bytes }

  pub fn count_ones(&self) -> usize { self.as_ref().count_ones() }

  pub fn count_zeros(&self) -> usize { self.as_ref().count_zeros() }
}

impl BitArray {

  pub(crate) fn from_parts(len: usize, bytes: Vec<u8>) -> BitArray {
    debug_assert_eq!(bytes.len(), byte_len(len));
    BitArray { len, bytes }
  }

  pub fn as_ref(&self) -> BitsRef<'_> {
    BitsRef { len: self.len, bytes: &self.bytes }
  }

  pub fn len(&self) -> usize { self.len }

  pub fn is_empty(&self) -> bool { self.len == 0 }

  pub fn as_bytes(&self) -> &[u8] { &self.bytes }

  pub fn count_ones(&self) -> usize { self.as_ref().count_ones() }

  pub fn count_zeros(&self) -> usize { self.as_ref().count_zeros() }

  /// Re-establish the padding invariant on the final byte.
  pub(crate) fn fix_padding(&mut self) {
    mask_tail(&mut self.bytes, self.len)
  }
}

/// View extraction shared by the operator and comparison macros.
pub(crate) trait AsBitsRef {
  fn view(&self) -> BitsRef<'_>;
}

impl AsBitsRef for Bits {
  fn view(&self) -> BitsRef<'_> { self.as_ref() }
}

impl AsBitsRef for BitArray {
  fn view(&self) -> BitsRef<'_> { self.as_ref() }
}

impl AsBitsRef for BitsRef<'_> {
  fn view(&self) -> BitsRef<'_> { *self }
}

/// Freezing moves the storage; no copy.
impl From<BitArray> for Bits {
  fn from(arr: BitArray) -> Bits {
    Bits { len: arr.len, bytes: arr.bytes.into_boxed_slice() }
  }
}

/// Thawing moves the storage; no copy.
impl From<Bits> for BitArray {
  fn from(bits: Bits) -> BitArray {
    BitArray { len: bits.len, bytes: bits.bytes.into_vec() }
  }
}
