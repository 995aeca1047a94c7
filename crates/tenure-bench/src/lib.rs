//! Benchmark workloads for the Tenure ownership primitives.
//!
//! Provides deterministic, seeded operation sequences so benchmark runs
//! are comparable across machines and commits:
//!
//! - [`mixed_array_ops`]: push/pop/read mix for `DynArray`
//! - [`run_array_ops`]: apply a mix and fold a checksum
//! - [`churn_steps`]: clone/drop interleaving for `Shared`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use tenure_array::DynArray;
use tenure_ptr::Shared;

/// A single operation in a mixed array workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayOp {
    /// Append the carried value.
    Push(i32),
    /// Remove the last element (no-op on an empty array).
    Pop,
    /// Checked read at the carried index, taken modulo the current
    /// length (skipped while empty).
    Read(usize),
}

/// Generate a deterministic mixed workload: roughly 60% pushes,
/// 20% pops, 20% reads.
///
/// Identical `(seed, len)` inputs produce identical sequences.
pub fn mixed_array_ops(seed: u64, len: usize) -> Vec<ArrayOp> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| match rng.gen_range(0..10u8) {
            0..=5 => ArrayOp::Push(rng.gen()),
            6..=7 => ArrayOp::Pop,
            _ => ArrayOp::Read(rng.gen()),
        })
        .collect()
}

/// Apply a workload to a fresh [`DynArray`] and fold the values read
/// or removed into a checksum (keeps the work observable).
pub fn run_array_ops(ops: &[ArrayOp]) -> i64 {
    let mut array = DynArray::new();
    let mut checksum = 0i64;
    for op in ops {
        match *op {
            ArrayOp::Push(value) => array.push(value),
            ArrayOp::Pop => {
                if let Ok(value) = array.pop() {
                    checksum = checksum.wrapping_add(value as i64);
                }
            }
            ArrayOp::Read(index) => {
                if !array.is_empty() {
                    let value = array.at(index % array.len()).expect("index reduced modulo len");
                    checksum = checksum.wrapping_add(*value as i64);
                }
            }
        }
    }
    checksum
}

/// Generate a deterministic clone/drop interleaving for [`Shared`]
/// churn: `true` clones an existing handle, `false` drops one.
pub fn churn_steps(seed: u64, len: usize) -> Vec<bool> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_bool(0.6)).collect()
}

/// Apply a churn sequence starting from one handle; returns the final
/// live-handle count.
pub fn run_churn(steps: &[bool]) -> usize {
    let mut handles = vec![Shared::new(0u64)];
    for &grow in steps {
        if grow {
            let last = handles.last().expect("at least one handle").clone();
            handles.push(last);
        } else if handles.len() > 1 {
            handles.pop();
        }
    }
    handles.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workloads_are_deterministic() {
        assert_eq!(mixed_array_ops(42, 500), mixed_array_ops(42, 500));
        assert_eq!(churn_steps(42, 500), churn_steps(42, 500));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(mixed_array_ops(1, 500), mixed_array_ops(2, 500));
    }

    #[test]
    fn run_array_ops_is_reproducible() {
        let ops = mixed_array_ops(7, 1000);
        assert_eq!(run_array_ops(&ops), run_array_ops(&ops));
    }

    #[test]
    fn churn_keeps_at_least_one_handle() {
        let steps = churn_steps(9, 1000);
        assert!(run_churn(&steps) >= 1);
    }
}
