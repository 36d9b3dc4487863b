// Value comparison across all three sequence shapes.

use std::hash::{Hash, Hasher};

use crate::core::{AsBitsRef, BitArray, Bits, BitsRef};

impl<'a> BitsRef<'a> {

  /// Same length, same packed bytes. The padding invariant makes the
  /// byte comparison exact.
  pub fn equal(self, other: BitsRef<'_>) -> bool {
    self.len() == other.len() && self.as_bytes() == other.as_bytes()
  }
}

macro_rules! do_eq {
  ($lhs:ty, $rhs:ty) => {
    impl PartialEq<$rhs> for $lhs {
      fn eq(&self, other: &$rhs) -> bool {
        self.view().equal(other.view())
      }
    }
  };
}

do_eq!(Bits, Bits);
do_eq!(Bits, BitArray);
do_eq!(Bits, BitsRef<'_>);
do_eq!(BitArray, BitArray);
do_eq!(BitArray, Bits);
do_eq!(BitArray, BitsRef<'_>);
do_eq!(BitsRef<'_>, BitsRef<'_>);
do_eq!(BitsRef<'_>, Bits);
do_eq!(BitsRef<'_>, BitArray);

impl Eq for Bits {}
impl Eq for BitArray {}
impl Eq for BitsRef<'_> {}

/// Only the immutable shape hashes; a growable sequence makes a poor
/// map key.
impl Hash for Bits {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.len.hash(state);
    self.bytes.hash(state);
  }
}

#[cfg(test)]
mod test {
  use std::collections::hash_map::DefaultHasher;
  use std::hash::{Hash, Hasher};

  use crate::{BitArray, Bits};

  fn hash_of(x: &Bits) -> u64 {
    let mut h = DefaultHasher::new();
    x.hash(&mut h);
    h.finish()
  }

  #[test]
  fn test_eq() {
    let x: Bits = "0101".parse().unwrap();
    let y: BitArray = "0101".parse().unwrap();
    assert_eq!(x, y);
    assert_eq!(y, x);
    assert_eq!(x, x.as_ref());
    assert_eq!(x.as_ref(), y);
    assert_ne!(x, "1101".parse::<Bits>().unwrap());
    // Same value, different length.
    assert_ne!(x, "00101".parse::<Bits>().unwrap());
    assert_eq!(Bits::default(), BitArray::default());
  }

  #[test]
  fn test_hash() {
    let x: Bits = "100110".parse().unwrap();
    assert_eq!(hash_of(&x), hash_of(&x.clone()));
    assert_ne!(hash_of(&x), hash_of(&"0100110".parse().unwrap()));
  }
}
