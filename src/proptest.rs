use num::BigUint;
use proptest::arbitrary::*;
use proptest::prelude::*;
use proptest::strategy::*;
use proptest::test_runner::*;
use proptest::prelude::RngCore;

use crate::core::{byte_len, mask_tail};
use crate::{BitArray, Bits, BitsRef};

impl ValueTree for Bits {
  type Value = Bits;

  fn current(&self) -> Bits { self.clone() }

  fn simplify(&mut self) -> bool { false }
  fn complicate(&mut self) -> bool { false }
}

impl ValueTree for BitArray {
  type Value = BitArray;

  fn current(&self) -> BitArray { self.clone() }

  fn simplify(&mut self) -> bool { false }
  fn complicate(&mut self) -> bool { false }
}

fn random_bytes(bits: usize, runner: &mut TestRunner) -> Vec<u8> {
  let mut bytes = vec![0u8; byte_len(bits)];
  let rng = runner.rng();
  for b in bytes.iter_mut() {
    *b = rng.next_u32() as u8;
  }
  mask_tail(&mut bytes, bits);
  bytes
}

#[derive(Debug)]
pub struct BitsStrategy { pub bits: usize }

impl Strategy for BitsStrategy {
  type Tree  = Bits;
  type Value = Bits;

  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    let bytes = random_bytes(self.bits, runner);
    Ok(Bits::from_parts(self.bits, bytes.into_boxed_slice()))
  }
}

impl Arbitrary for Bits {
  type Parameters = usize;
  type Strategy   = BitsStrategy;

  fn arbitrary_with(bits: usize) -> Self::Strategy {
    BitsStrategy { bits }
  }
}

#[derive(Debug)]
pub struct BitArrayStrategy { pub bits: usize }

impl Strategy for BitArrayStrategy {
  type Tree  = BitArray;
  type Value = BitArray;

  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    let bytes = random_bytes(self.bits, runner);
    Ok(BitArray::from_parts(self.bits, bytes))
  }
}

impl Arbitrary for BitArray {
  type Parameters = usize;
  type Strategy   = BitArrayStrategy;

  fn arbitrary_with(bits: usize) -> Self::Strategy {
    BitArrayStrategy { bits }
  }
}

pub fn do_test<T: Arbitrary>
    ( s: fn (usize) -> StrategyFor<T>
    , p: fn(T)      -> Option<bool>
    ) {
  for bits in 0 .. 130 {
    let mut cfg: Config = <_>::default();
    cfg.failure_persistence = None;
    let mut runner = TestRunner::new(cfg);
    let strategy = s(bits);
    runner.run(&strategy, |arg| {
      match p(arg) {
        Some(result) =>
          if result { Ok(()) }
          else {
            Err(TestCaseError::Fail("unexpected result".into()))
          },
        None => Err(TestCaseError::Reject("invalid input".into()))
      }
    }).unwrap()
  }
}

impl Bits {
  pub fn sem<'a>(&'a self) -> (BitsRef<'a>, BigUint) {
    let x = self.as_ref();
    (x, x.to_uint())
  }
}

pub fn pow2(bits: usize) -> BigUint {
  let x: BigUint = 2_u64.into();
  x.pow(bits as u32)
}

pub fn unary(bits: usize) -> StrategyFor<Bits> {
  arbitrary_with(bits)
}

pub fn binary(bits: usize) -> StrategyFor<(Bits,Bits)> {
  arbitrary_with((bits,bits))
}

pub fn array(bits: usize) -> StrategyFor<BitArray> {
  arbitrary_with(bits)
}

pub fn bits_and<T>(bits: usize) -> StrategyFor<(Bits,T)>
  where T: Arbitrary<Parameters=()> {
  arbitrary_with((bits,()))
}

pub fn bits_and2<S,T>(bits: usize) -> StrategyFor<(Bits,S,T)>
  where
  S: Arbitrary<Parameters=()> ,
  T: Arbitrary<Parameters=()> {
  arbitrary_with((bits,(),()))
}

pub fn bits_and3<S,T,U>(bits: usize) -> StrategyFor<(Bits,S,T,U)>
  where
  S: Arbitrary<Parameters=()> ,
  T: Arbitrary<Parameters=()> ,
  U: Arbitrary<Parameters=()> {
  arbitrary_with((bits,(),(),()))
}

pub fn array_and<T>(bits: usize) -> StrategyFor<(BitArray,T)>
  where T: Arbitrary<Parameters=()> {
  arbitrary_with((bits,()))
}

pub fn array_and2<S,T>(bits: usize) -> StrategyFor<(BitArray,S,T)>
  where
  S: Arbitrary<Parameters=()> ,
  T: Arbitrary<Parameters=()> {
  arbitrary_with((bits,(),()))
}

/// Bit-list semantics, for properties easier to state over a plain
/// vector than over an integer.
pub fn bools(x: BitsRef<'_>) -> Vec<bool> {
  x.iter().collect()
}

pub fn assert_bits(x: &Bits, len: usize, value: u128) {
  assert_eq!(x.len(), len, "length of {x:?}");
  assert_eq!(x.to_uint(), BigUint::from(value), "value of {x:?}");
}

/// Audit the storage invariants: exact byte count and zero padding.
pub fn check_invariants(x: &BitArray) {
  assert_eq!(x.as_bytes().len(), byte_len(x.len()), "storage size of {x:?}");
  if x.len() % 8 != 0 {
    let last = *x.as_bytes().last().unwrap();
    assert_eq!(last & (0xffu8 << (x.len() % 8)), 0, "padding of {x:?}");
  }
}
