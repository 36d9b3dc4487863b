use num::BigInt;
use thiserror::Error;

/// Everything that can go wrong while building or editing a bit sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("invalid negative input: '{0}'")]
  NegativeInput(BigInt),

  #[error("invalid input: '{0}' is not a binary string")]
  BadDigit(String),

  #[error("bit value must be 0 or 1, got {0}")]
  BadBitValue(u8),

  #[error("length must not be provided when converting from {0}")]
  WidthForbidden(&'static str),

  #[error("wrong bytes length {bytes} for bit length {bits}")]
  LengthMismatch { bytes: usize, bits: usize },

  #[error("wrong padding in the last byte")]
  BadPadding,

  #[error("mismatched bitwise operator widths: {left} vs {right}")]
  WidthMismatch { left: usize, right: usize },

  #[error("index {index} out of range for length {len}")]
  OutOfBounds { index: isize, len: usize },

  #[error("attempt to assign sequence of size {got} to extended slice of size {expect}")]
  SliceSizeMismatch { expect: usize, got: usize },

  #[error("slice step cannot be zero")]
  ZeroStep,

  #[error("length {len} is not divisible by 8")]
  NotByteAligned { len: usize },

  #[error("unsupported operand for {op}: {kind}")]
  UnsupportedOperand { op: &'static str, kind: &'static str },

  #[error("substring not found")]
  NotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
