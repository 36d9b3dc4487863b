// Textual form. Text lists bits most-significant-first, the way
// numeral literals are written; this is the one place the internal
// LSB-first order is reversed.

use std::fmt;

use crate::core::{BitArray, Bits, BitsRef};

fn digits(x: BitsRef<'_>) -> String {
  let mut s = String::with_capacity(x.len());
  for b in x.iter().rev() {
    s.push(if b { '1' } else { '0' })
  }
  s
}

impl fmt::Display for BitsRef<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad(&digits(*self))
  }
}

impl fmt::Display for Bits {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Display::fmt(&self.as_ref(), f)
  }
}

impl fmt::Display for BitArray {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Display::fmt(&self.as_ref(), f)
  }
}

impl fmt::Binary for BitsRef<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let mut s = digits(*self);
    if s.is_empty() {
      s.push('0'); // special case so that we see something.
    }
    f.pad_integral(true, "0b", &s)
  }
}

impl fmt::Binary for Bits {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Binary::fmt(&self.as_ref(), f)
  }
}

impl fmt::Binary for BitArray {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Binary::fmt(&self.as_ref(), f)
  }
}

impl fmt::Debug for BitsRef<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "BitsRef(\"{self}\")")
  }
}

impl fmt::Debug for Bits {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Bits(\"{self}\")")
  }
}

impl fmt::Debug for BitArray {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "BitArray(\"{self}\")")
  }
}
