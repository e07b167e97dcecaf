// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

use serde::{Deserialize, Serialize};

/// Bit vector used as filter mask and null map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BitVec {
	bits: Vec<bool>,
}

impl BitVec {
	pub fn new() -> Self {
		Self {
			bits: Vec::new(),
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			bits: Vec::with_capacity(capacity),
		}
	}

	pub fn repeat(len: usize, value: bool) -> Self {
		Self {
			bits: vec![value; len],
		}
	}

	pub fn from_slice(bits: &[bool]) -> Self {
		Self {
			bits: bits.to_vec(),
		}
	}

	pub fn len(&self) -> usize {
		self.bits.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bits.is_empty()
	}

	/// Out-of-range reads are false, matching an all-absent suffix.
	pub fn get(&self, idx: usize) -> bool {
		self.bits.get(idx).copied().unwrap_or(false)
	}

	pub fn set(&mut self, idx: usize, value: bool) {
		self.bits[idx] = value;
	}

	pub fn push(&mut self, value: bool) {
		self.bits.push(value);
	}

	pub fn pop(&mut self) -> Option<bool> {
		self.bits.pop()
	}

	pub fn truncate(&mut self, len: usize) {
		self.bits.truncate(len);
	}

	pub fn count_ones(&self) -> usize {
		self.bits.iter().filter(|b| **b).count()
	}

	pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
		self.bits.iter().copied()
	}

	pub fn extend(&mut self, other: &BitVec) {
		self.bits.extend_from_slice(&other.bits);
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_repeat_and_count() {
		let bits = BitVec::repeat(4, true);
		assert_eq!(bits.len(), 4);
		assert_eq!(bits.count_ones(), 4);
	}

	#[test]
	fn test_from_slice_get() {
		let bits = BitVec::from_slice(&[true, false, true]);
		assert!(bits.get(0));
		assert!(!bits.get(1));
		assert!(bits.get(2));
		// out of range reads as false
		assert!(!bits.get(3));
	}

	#[test]
	fn test_push_pop_truncate() {
		let mut bits = BitVec::new();
		bits.push(true);
		bits.push(false);
		bits.push(true);
		assert_eq!(bits.pop(), Some(true));
		bits.truncate(1);
		assert_eq!(bits.len(), 1);
		assert!(bits.get(0));
	}

	#[test]
	fn test_extend() {
		let mut lhs = BitVec::from_slice(&[true]);
		let rhs = BitVec::from_slice(&[false, true]);
		lhs.extend(&rhs);
		assert_eq!(lhs, BitVec::from_slice(&[true, false, true]));
	}
}
