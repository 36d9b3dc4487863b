// Extracting sub-sequences: arbitrary start/stop/step spans with
// whole-byte fast paths for the aligned cases.

use crate::core::{byte_len, BitArray, Bits, BitsRef, BYTE_REVERSE};
use crate::error::{Error, Result};

/// A start/stop/step selection over a sequence, before normalization.
/// `None` endpoints take the step-dependent defaults; negative
/// endpoints count from the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
  pub start: Option<isize>,
  pub end:   Option<isize>,
  pub step:  isize,
}

impl Span {

  pub fn new(start: impl Into<Option<isize>>,
             end:   impl Into<Option<isize>>,
             step:  isize) -> Span {
    Span { start: start.into(), end: end.into(), step }
  }

  /// Same endpoints, different step.
  pub fn by(self, step: isize) -> Span {
    Span { step, ..self }
  }

  /// Normalize against a sequence of `len` bits. Negative endpoints
  /// wrap once, then clamp; the defaults and the clamp limits depend
  /// on the step sign, exactly as a standard range clip would have it.
  pub fn resolve(self, len: usize) -> Result<ResolvedSpan> {
    let n = len as isize;
    let step = self.step;
    if step == 0 { return Err(Error::ZeroStep) }

    let clip = |ix: Option<isize>, def: isize| -> isize {
      match ix {
        None => def,
        Some(mut i) => {
          if i < 0 {
            i += n;
            if i < 0 { i = if step < 0 { -1 } else { 0 } }
          } else if i >= n {
            i = if step < 0 { n - 1 } else { n }
          }
          i
        }
      }
    };

    let (def_start, def_end) = if step > 0 { (0, n) } else { (n - 1, -1) };
    let start = clip(self.start, def_start);
    let end   = clip(self.end, def_end);

    let count =
      if step > 0 && start < end {
        ((end - start - 1) / step + 1) as usize
      } else if step < 0 && start > end {
        ((start - end - 1) / -step + 1) as usize
      } else {
        0
      };

    Ok(ResolvedSpan { start, end, step, count })
  }
}

impl From<std::ops::Range<isize>> for Span {
  fn from(r: std::ops::Range<isize>) -> Span {
    Span::new(r.start, r.end, 1)
  }
}

impl From<std::ops::RangeFrom<isize>> for Span {
  fn from(r: std::ops::RangeFrom<isize>) -> Span {
    Span::new(r.start, None, 1)
  }
}

impl From<std::ops::RangeTo<isize>> for Span {
  fn from(r: std::ops::RangeTo<isize>) -> Span {
    Span::new(None, r.end, 1)
  }
}

impl From<std::ops::RangeFull> for Span {
  fn from(_: std::ops::RangeFull) -> Span {
    Span::new(None, None, 1)
  }
}

/// A span normalized against a concrete length. `start` and `end` are
/// in `[0, len]` for a positive step and in `[-1, len - 1]` for a
/// negative one; the selected indices are `start, start + step, ...`,
/// `count` of them, all within `[0, len)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedSpan {
  pub start: isize,
  pub end:   isize,
  pub step:  isize,
  pub count: usize,
}

impl ResolvedSpan {

  /// The selected indices, in selection order.
  pub fn indices(self) -> impl Iterator<Item = usize> {
    (0 .. self.count).map(move |k| (self.start + k as isize * self.step) as usize)
  }
}

impl<'a> BitsRef<'a> {

  /// Extract the sub-sequence selected by a span.
  pub fn slice(self, span: impl Into<Span>) -> Result<Bits> {
    Ok(self.slice_resolved(span.into().resolve(self.len)?))
  }

  pub(crate) fn slice_resolved(self, span: ResolvedSpan) -> Bits {
    if span.count == 0 { return Bits::default() }

    // Whole-byte reversal: step -1 with both endpoints on byte
    // boundaries (the exclusive `end` may be the virtual -1).
    if span.step == -1 && span.start % 8 == 7
       && (span.end == -1 || span.end % 8 == 7) {
      let lo = ((span.end + 1) / 8) as usize;
      let hi = ((span.start + 1) / 8) as usize;
      let bytes: Box<[u8]> =
        self.bytes[lo .. hi].iter().rev()
            .map(|&b| BYTE_REVERSE[b as usize]).collect();
      return Bits::from_parts(span.count, bytes)
    }

    // Whole-byte copy: step 1 from a byte boundary to a byte boundary
    // or to the end of the sequence.
    if span.step == 1 && span.start % 8 == 0
       && (span.end % 8 == 0 || span.end == self.len as isize) {
      let lo = (span.start / 8) as usize;
      let hi = byte_len(span.end as usize);
      return Bits::from_parts(span.count, self.bytes[lo .. hi].into())
    }

    self.slice_generic(span)
  }

  /// One logical bit at a time; the reference the fast paths must agree
  /// with.
  pub(crate) fn slice_generic(self, span: ResolvedSpan) -> Bits {
    span.indices().map(|i| self.bit_unchecked(i)).collect()
  }
}

impl Bits {
  pub fn slice(&self, span: impl Into<Span>) -> Result<Bits> {
    self.as_ref().slice(span)
  }
}

impl BitArray {
  pub fn slice(&self, span: impl Into<Span>) -> Result<BitArray> {
    self.as_ref().slice(span).map(BitArray::from)
  }
}
