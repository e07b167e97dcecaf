// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

use std::cmp::Ordering;

use basalt_type::{BitVec, ColumnError, InvariantViolation, Result, Value};
use bumpalo::Bump;
use serde::{Deserialize, Serialize};
use tracing::trace;
use xxhash_rust::xxh3::xxh3_64;

use super::Column;
use crate::collation::Collator;

/// Variable-length byte container: all row payloads concatenated in
/// `chars`, delimited by the exclusive-end `offsets` index.
///
/// Invariants: `offsets` is non-decreasing, `chars.len()` equals the
/// last offset (zero when there are no rows), and every mutation leaves
/// both arrays consistent before returning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VarlenContainer {
	chars: Vec<u8>,
	offsets: Vec<u64>,
}

impl VarlenContainer {
	pub fn new() -> Self {
		Self {
			chars: Vec::new(),
			offsets: Vec::new(),
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			chars: Vec::with_capacity(capacity),
			offsets: Vec::with_capacity(capacity),
		}
	}

	pub fn from_values<'a>(values: impl IntoIterator<Item = &'a [u8]>) -> Self {
		let mut container = Self::new();
		for value in values {
			container.push(value);
		}
		container
	}

	pub fn len(&self) -> usize {
		self.offsets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.offsets.is_empty()
	}

	/// Total payload bytes currently stored.
	pub fn byte_size(&self) -> usize {
		self.chars.len()
	}

	pub fn chars(&self) -> &[u8] {
		&self.chars
	}

	pub fn offsets(&self) -> &[u64] {
		&self.offsets
	}

	/// Start byte position of `row`; row 0 starts at zero.
	pub fn offset_at(&self, row: usize) -> usize {
		if row == 0 {
			0
		} else {
			self.offsets[row - 1] as usize
		}
	}

	pub fn size_at(&self, row: usize) -> usize {
		self.offsets[row] as usize - self.offset_at(row)
	}

	pub fn value_at(&self, row: usize) -> &[u8] {
		&self.chars[self.offset_at(row)..self.offsets[row] as usize]
	}

	pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
		(0..self.len()).map(|row| self.value_at(row))
	}

	pub fn push(&mut self, value: &[u8]) {
		self.chars.extend_from_slice(value);
		self.offsets.push(self.chars.len() as u64);
	}

	pub fn push_empty(&mut self) {
		self.offsets.push(self.chars.len() as u64);
	}

	pub fn push_many_empty(&mut self, n: usize) {
		let last = self.chars.len() as u64;
		self.offsets.reserve(n);
		for _ in 0..n {
			self.offsets.push(last);
		}
	}

	pub fn reserve(&mut self, n: usize) {
		self.offsets.reserve(n);
		self.chars.reserve(n);
	}

	/// Shrinking truncates rows (and their bytes); growing appends empty
	/// rows.
	pub fn resize(&mut self, n: usize) {
		let current = self.len();
		if n < current {
			let new_byte_len = if n == 0 {
				0
			} else {
				self.offsets[n - 1] as usize
			};
			self.offsets.truncate(n);
			self.chars.truncate(new_byte_len);
		} else if n > current {
			self.push_many_empty(n - current);
		}
	}

	pub fn remove_last(&mut self, n: usize) {
		self.resize(self.len().saturating_sub(n));
	}

	/// Copy of the first `to_size` rows; when `to_size` exceeds the row
	/// count the remainder is filled with empty rows. The result never
	/// aliases `self`.
	pub fn clone_resized(&self, to_size: usize) -> Self {
		let mut res = Self::new();
		if to_size == 0 {
			return res;
		}

		let from_size = self.len();
		if to_size <= from_size {
			res.offsets.extend_from_slice(&self.offsets[..to_size]);
			res.chars.extend_from_slice(&self.chars[..self.offsets[to_size - 1] as usize]);
		} else {
			res.offsets.extend_from_slice(&self.offsets);
			res.chars.extend_from_slice(&self.chars);
			res.push_many_empty(to_size - from_size);
		}
		res
	}

	/// Append `length` rows of `src` beginning at `start`, re-basing the
	/// copied offsets onto this container's running total.
	pub fn insert_range_from(&mut self, src: &Self, start: usize, length: usize) -> Result<()> {
		if length == 0 {
			return Ok(());
		}
		if start + length > src.len() {
			return Err(InvariantViolation::RangeOutOfBounds {
				start,
				length,
				size: src.len(),
			}
			.into());
		}

		let nested_offset = src.offset_at(start);
		let nested_length = src.offsets[start + length - 1] as usize - nested_offset;
		trace!(rows = length, bytes = nested_length, "insert_range_from");

		self.chars.extend_from_slice(&src.chars[nested_offset..nested_offset + nested_length]);

		let prev_max_offset = self.offsets.last().copied().unwrap_or(0);
		self.offsets.reserve(length);
		for i in 0..length {
			self.offsets.push(src.offsets[start + i] - nested_offset as u64 + prev_max_offset);
		}
		Ok(())
	}

	/// Gather single rows of `src`; `None` appends a default (empty) row.
	/// Used to materialize dictionary-coded or gathered column refs.
	pub fn insert_indices_from(&mut self, src: &Self, indices: &[Option<u64>]) -> Result<()> {
		for index in indices {
			match index {
				None => self.push_empty(),
				Some(i) => {
					let i = *i as usize;
					if i >= src.len() {
						return Err(InvariantViolation::RangeOutOfBounds {
							start: i,
							length: 1,
							size: src.len(),
						}
						.into());
					}
					self.push(src.value_at(i));
				}
			}
		}
		Ok(())
	}

	/// Rows whose mask bit is set, in stored order. The mask must cover
	/// every row; `size_hint` only pre-sizes the offset index, never
	/// affects the result.
	pub fn filter(&self, mask: &BitVec, size_hint: Option<usize>) -> Result<Self> {
		if mask.len() != self.len() {
			return Err(InvariantViolation::FilterMaskMismatch {
				mask: mask.len(),
				rows: self.len(),
			}
			.into());
		}

		let mut res = Self::new();
		if self.is_empty() {
			return Ok(res);
		}

		let mut kept_rows = 0;
		let mut kept_bytes = 0;
		for (row, keep) in mask.iter().enumerate().take(self.len()) {
			if keep {
				kept_rows += 1;
				kept_bytes += self.size_at(row);
			}
		}

		res.offsets.reserve(size_hint.unwrap_or(kept_rows));
		res.chars.reserve(kept_bytes);
		for (row, keep) in mask.iter().enumerate().take(self.len()) {
			if keep {
				res.push(self.value_at(row));
			}
		}
		Ok(res)
	}

	/// New container with row `i` = source row `perm[i]` for the first
	/// `limit` output rows; `limit == 0` means all rows.
	pub fn permute(&self, perm: &[u64], limit: usize) -> Result<Self> {
		let size = self.len();
		let limit = if limit == 0 {
			size
		} else {
			limit.min(size)
		};

		if perm.len() < limit {
			return Err(InvariantViolation::PermutationTooShort {
				required: limit,
				actual: perm.len(),
			}
			.into());
		}
		self.gather(&perm[..limit])
	}

	/// Same as [`permute`](Self::permute) over an arbitrary index
	/// sequence, which may repeat or omit rows.
	pub fn index(&self, indexes: &[u64], limit: usize) -> Result<Self> {
		let limit = if limit == 0 {
			indexes.len()
		} else {
			limit
		};

		if indexes.len() < limit {
			return Err(InvariantViolation::PermutationTooShort {
				required: limit,
				actual: indexes.len(),
			}
			.into());
		}
		self.gather(&indexes[..limit])
	}

	fn gather(&self, indices: &[u64]) -> Result<Self> {
		// exact output size before the copy pass, so the byte buffer
		// never grows mid-copy
		let mut new_chars_size = 0;
		for &index in indices {
			let index = index as usize;
			if index >= self.len() {
				return Err(InvariantViolation::RangeOutOfBounds {
					start: index,
					length: 1,
					size: self.len(),
				}
				.into());
			}
			new_chars_size += self.size_at(index);
		}

		let mut res = Self::new();
		res.chars.reserve(new_chars_size);
		res.offsets.reserve(indices.len());
		for &index in indices {
			res.push(self.value_at(index as usize));
		}
		Ok(res)
	}

	/// Row `i` repeated `counts[i]` times, in order.
	pub fn replicate(&self, counts: &[u64]) -> Result<Self> {
		if counts.len() != self.len() {
			return Err(InvariantViolation::ReplicateCountMismatch {
				counts: counts.len(),
				rows: self.len(),
			}
			.into());
		}

		let mut res = Self::new();
		if self.is_empty() {
			return Ok(res);
		}
		self.replicate_into(counts, &mut res);
		Ok(res)
	}

	/// Replication into a caller-supplied output container.
	pub fn replicate_into(&self, counts: &[u64], out: &mut Self) {
		debug_assert_eq!(counts.len(), self.len());

		let total_rows: u64 = counts.iter().sum();
		let total_bytes: usize =
			counts.iter().enumerate().map(|(row, &count)| count as usize * self.size_at(row)).sum();
		trace!(rows = total_rows, bytes = total_bytes, "replicate");

		out.offsets.reserve(total_rows as usize);
		out.chars.reserve(total_bytes);
		for (row, &count) in counts.iter().enumerate() {
			for _ in 0..count {
				out.push(self.value_at(row));
			}
		}
	}

	/// Length-prefixed copy of the row written into `arena`: 8-byte
	/// little-endian length followed by the raw bytes. The returned view
	/// borrows from the arena and cannot outlive it.
	pub fn serialize_value_into_arena<'a>(&self, row: usize, arena: &'a Bump) -> &'a [u8] {
		let value = self.value_at(row);
		let dst = arena.alloc_slice_fill_copy(size_of::<u64>() + value.len(), 0u8);
		dst[..size_of::<u64>()].copy_from_slice(&(value.len() as u64).to_le_bytes());
		dst[size_of::<u64>()..].copy_from_slice(value);
		dst
	}

	/// Consume one length-prefixed value from `buf`, append it as a new
	/// row and return the remaining bytes.
	pub fn deserialize_and_insert_from_arena<'a>(&mut self, buf: &'a [u8]) -> Result<&'a [u8]> {
		if buf.len() < size_of::<u64>() {
			return Err(ColumnError::SerializedValueTruncated {
				expected: size_of::<u64>() as u64,
				remaining: buf.len(),
			}
			.into());
		}
		let (head, rest) = buf.split_at(size_of::<u64>());
		let mut raw = [0u8; size_of::<u64>()];
		raw.copy_from_slice(head);
		let length = u64::from_le_bytes(raw) as usize;

		if rest.len() < length {
			return Err(ColumnError::SerializedValueTruncated {
				expected: length as u64,
				remaining: rest.len(),
			}
			.into());
		}
		self.push(&rest[..length]);
		Ok(&rest[length..])
	}

	/// Row indices ordered by unsigned byte-lexicographic comparison of
	/// the payloads. `limit > 0` orders only the first `limit` positions
	/// relative to the rest; `limit == 0` or `limit >= len` sorts fully.
	/// Ties are unordered.
	pub fn get_permutation(&self, reverse: bool, limit: usize) -> Vec<u64> {
		self.sorted_indices(reverse, limit, |lhs, rhs| self.value_at(lhs).cmp(self.value_at(rhs)))
	}

	/// Like [`get_permutation`](Self::get_permutation) but ordered by the
	/// injected collator.
	pub fn get_permutation_with_collation(
		&self,
		collator: &dyn Collator,
		reverse: bool,
		limit: usize,
	) -> Vec<u64> {
		self.sorted_indices(reverse, limit, |lhs, rhs| {
			collator.compare(self.value_at(lhs), self.value_at(rhs))
		})
	}

	fn sorted_indices(
		&self,
		reverse: bool,
		limit: usize,
		compare: impl Fn(usize, usize) -> Ordering,
	) -> Vec<u64> {
		let size = self.len();
		let mut res: Vec<u64> = (0..size as u64).collect();
		let limit = if limit >= size {
			0
		} else {
			limit
		};

		let ordering = |lhs: &u64, rhs: &u64| {
			let ord = compare(*lhs as usize, *rhs as usize);
			if reverse {
				ord.reverse()
			} else {
				ord
			}
		};

		if limit > 0 {
			res.select_nth_unstable_by(limit, ordering);
			res[..limit].sort_unstable_by(ordering);
		} else {
			res.sort_unstable_by(ordering);
		}
		res
	}

	pub fn compare_at(&self, n: usize, m: usize, rhs: &Self) -> Ordering {
		self.value_at(n).cmp(rhs.value_at(m))
	}

	pub fn compare_at_with_collation(&self, n: usize, m: usize, rhs: &Self, collator: &dyn Collator) -> Ordering {
		collator.compare(self.value_at(n), rhs.value_at(m))
	}

	/// Byte-lexicographically smallest and largest row values in one
	/// scan; an empty column yields the empty-bytes sentinel for both.
	pub fn get_extremes(&self) -> (Value, Value) {
		if self.is_empty() {
			return (Value::empty_bytes(), Value::empty_bytes());
		}

		let mut min_idx = 0;
		let mut max_idx = 0;
		for row in 1..self.len() {
			if self.value_at(row) < self.value_at(min_idx) {
				min_idx = row;
			} else if self.value_at(max_idx) < self.value_at(row) {
				max_idx = row;
			}
		}
		(Value::bytes(self.value_at(min_idx)), Value::bytes(self.value_at(max_idx)))
	}

	/// xxh3 of every row payload, for hash/group passes alongside the
	/// arena key encoding.
	pub fn hash_rows(&self, hashes: &mut [u64]) {
		debug_assert_eq!(hashes.len(), self.len());
		for (row, hash) in hashes.iter_mut().enumerate().take(self.len()) {
			*hash = xxh3_64(self.value_at(row));
		}
	}
}

impl Column for VarlenContainer {
	fn len(&self) -> usize {
		self.offsets.len()
	}

	fn push_default(&mut self) {
		self.push_empty();
	}

	fn pop_back(&mut self, n: usize) {
		self.remove_last(n);
	}

	fn as_any(&self) -> &dyn std::any::Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
		self
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::collation::CaseInsensitive;

	fn sample() -> VarlenContainer {
		VarlenContainer::from_values([b"foo".as_slice(), b"x".as_slice(), b"".as_slice(), b"quux".as_slice()])
	}

	#[test]
	fn test_push_and_value_at() {
		let container = sample();
		assert_eq!(container.len(), 4);
		assert_eq!(container.value_at(0), b"foo");
		assert_eq!(container.value_at(1), b"x");
		assert_eq!(container.value_at(2), b"");
		assert_eq!(container.value_at(3), b"quux");
		assert_eq!(container.byte_size(), 8);
		assert_eq!(container.offsets(), &[3, 4, 4, 8]);
	}

	#[test]
	fn test_clone_resized_truncates() {
		let container = sample();
		let truncated = container.clone_resized(2);
		assert_eq!(truncated.len(), 2);
		assert_eq!(truncated.value_at(0), b"foo");
		assert_eq!(truncated.value_at(1), b"x");
		assert_eq!(truncated.byte_size(), 4);
	}

	#[test]
	fn test_clone_resized_pads_with_empty_rows() {
		let container = sample();
		let grown = container.clone_resized(6);
		assert_eq!(grown.len(), 6);
		for row in 0..4 {
			assert_eq!(grown.value_at(row), container.value_at(row));
		}
		assert_eq!(grown.value_at(4), b"");
		assert_eq!(grown.value_at(5), b"");
		// empty rows carry no bytes
		assert_eq!(grown.byte_size(), container.byte_size());
	}

	#[test]
	fn test_clone_resized_zero() {
		assert_eq!(sample().clone_resized(0), VarlenContainer::new());
	}

	#[test]
	fn test_insert_range_from_rebases_offsets() {
		let src = sample();
		let mut dst = VarlenContainer::from_values([b"pre".as_slice()]);
		dst.insert_range_from(&src, 1, 2).unwrap();
		assert_eq!(dst.len(), 3);
		assert_eq!(dst.value_at(0), b"pre");
		assert_eq!(dst.value_at(1), b"x");
		assert_eq!(dst.value_at(2), b"");
		assert_eq!(dst.offsets(), &[3, 4, 4]);
	}

	#[test]
	fn test_insert_range_from_out_of_bounds_is_invariant_violation() {
		let src = sample();
		let mut dst = VarlenContainer::new();
		let err = dst.insert_range_from(&src, 2, 3).unwrap_err();
		assert!(err.is_invariant_violation());
		// nothing was committed
		assert_eq!(dst.len(), 0);
	}

	#[test]
	fn test_insert_indices_from() {
		let src = sample();
		let mut dst = VarlenContainer::new();
		dst.insert_indices_from(&src, &[Some(3), None, Some(0)]).unwrap();
		assert_eq!(dst.len(), 3);
		assert_eq!(dst.value_at(0), b"quux");
		assert_eq!(dst.value_at(1), b"");
		assert_eq!(dst.value_at(2), b"foo");
	}

	#[test]
	fn test_filter_all_true_is_identity() {
		let container = sample();
		let filtered = container.filter(&BitVec::repeat(4, true), None).unwrap();
		assert_eq!(filtered, container);
	}

	#[test]
	fn test_filter_all_false_is_empty() {
		let filtered = sample().filter(&BitVec::repeat(4, false), Some(16)).unwrap();
		assert!(filtered.is_empty());
		assert_eq!(filtered.byte_size(), 0);
	}

	#[test]
	fn test_filter_keeps_relative_order() {
		let filtered = sample().filter(&BitVec::from_slice(&[true, false, false, true]), None).unwrap();
		assert_eq!(filtered.len(), 2);
		assert_eq!(filtered.value_at(0), b"foo");
		assert_eq!(filtered.value_at(1), b"quux");
	}

	#[test]
	fn test_filter_short_mask_is_invariant_violation() {
		let err = sample().filter(&BitVec::repeat(2, true), None).unwrap_err();
		assert!(err.is_invariant_violation());
		assert_eq!(err.code(), "INVARIANT_005");
	}

	#[test]
	fn test_permute_roundtrip_through_inverse() {
		let container = sample();
		let perm = [2u64, 0, 3, 1];
		let mut inverse = vec![0u64; perm.len()];
		for (i, &p) in perm.iter().enumerate() {
			inverse[p as usize] = i as u64;
		}

		let permuted = container.permute(&perm, 0).unwrap();
		assert_eq!(permuted.value_at(0), b"");
		assert_eq!(permuted.value_at(1), b"foo");
		let restored = permuted.permute(&inverse, 0).unwrap();
		assert_eq!(restored, container);
	}

	#[test]
	fn test_permute_short_permutation_is_invariant_violation() {
		let err = sample().permute(&[1, 0], 0).unwrap_err();
		assert!(err.is_invariant_violation());
	}

	#[test]
	fn test_permute_limit_caps_output() {
		let permuted = sample().permute(&[3, 0], 2).unwrap();
		assert_eq!(permuted.len(), 2);
		assert_eq!(permuted.value_at(0), b"quux");
		assert_eq!(permuted.value_at(1), b"foo");
	}

	#[test]
	fn test_index_may_repeat_rows() {
		let gathered = sample().index(&[1, 1, 3], 0).unwrap();
		assert_eq!(gathered.len(), 3);
		assert_eq!(gathered.value_at(0), b"x");
		assert_eq!(gathered.value_at(1), b"x");
		assert_eq!(gathered.value_at(2), b"quux");
	}

	#[test]
	fn test_index_out_of_bounds_is_invariant_violation() {
		let err = sample().index(&[9], 0).unwrap_err();
		assert!(err.is_invariant_violation());
	}

	#[test]
	fn test_replicate_ones_is_identity() {
		let container = sample();
		let replicated = container.replicate(&[1, 1, 1, 1]).unwrap();
		assert_eq!(replicated, container);
	}

	#[test]
	fn test_replicate_counts() {
		let replicated = sample().replicate(&[2, 0, 1, 3]).unwrap();
		assert_eq!(replicated.len(), 6);
		assert_eq!(replicated.value_at(0), b"foo");
		assert_eq!(replicated.value_at(1), b"foo");
		assert_eq!(replicated.value_at(2), b"");
		assert_eq!(replicated.value_at(3), b"quux");
		assert_eq!(replicated.value_at(5), b"quux");
	}

	#[test]
	fn test_replicate_count_mismatch_is_invariant_violation() {
		let err = sample().replicate(&[1, 1]).unwrap_err();
		assert!(err.is_invariant_violation());
	}

	#[test]
	fn test_replicate_into_appends() {
		let container = sample();
		let mut out = VarlenContainer::from_values([b"seed".as_slice()]);
		container.replicate_into(&[0, 1, 0, 1], &mut out);
		assert_eq!(out.len(), 3);
		assert_eq!(out.value_at(0), b"seed");
		assert_eq!(out.value_at(1), b"x");
		assert_eq!(out.value_at(2), b"quux");
	}

	#[test]
	fn test_arena_roundtrip() {
		let container = sample();
		let arena = Bump::new();

		let mut encoded = Vec::new();
		for row in 0..container.len() {
			encoded.extend_from_slice(container.serialize_value_into_arena(row, &arena));
		}

		let mut restored = VarlenContainer::new();
		let mut rest = encoded.as_slice();
		while !rest.is_empty() {
			rest = restored.deserialize_and_insert_from_arena(rest).unwrap();
		}
		assert_eq!(restored, container);
	}

	#[test]
	fn test_arena_deserialize_truncated() {
		let mut container = VarlenContainer::new();
		let mut encoded = 32u64.to_le_bytes().to_vec();
		encoded.extend_from_slice(b"short");
		let err = container.deserialize_and_insert_from_arena(&encoded).unwrap_err();
		assert_eq!(err.code(), "SERDE_001");
		assert_eq!(container.len(), 0);
	}

	#[test]
	fn test_get_permutation_orders_bytes() {
		let container = sample();
		let perm = container.get_permutation(false, 0);
		let sorted = container.permute(&perm, 0).unwrap();
		for row in 1..sorted.len() {
			assert!(sorted.value_at(row - 1) <= sorted.value_at(row));
		}
		assert_eq!(sorted.value_at(0), b"");
	}

	#[test]
	fn test_get_permutation_reverse() {
		let container = sample();
		let perm = container.get_permutation(true, 0);
		let sorted = container.permute(&perm, 0).unwrap();
		for row in 1..sorted.len() {
			assert!(sorted.value_at(row - 1) >= sorted.value_at(row));
		}
	}

	#[test]
	fn test_get_permutation_partial_prefix_is_correct() {
		let container = VarlenContainer::from_values([
			b"pear".as_slice(),
			b"apple".as_slice(),
			b"zoo".as_slice(),
			b"fig".as_slice(),
			b"beet".as_slice(),
		]);
		let limit = 2;
		let partial = container.get_permutation(false, limit);
		let full = container.get_permutation(false, 0);
		for i in 0..limit {
			assert_eq!(container.value_at(partial[i] as usize), container.value_at(full[i] as usize));
		}
	}

	#[test]
	fn test_get_permutation_limit_at_least_len_sorts_fully() {
		let container = sample();
		assert_eq!(container.get_permutation(false, 10), container.get_permutation(false, 0));
	}

	#[test]
	fn test_get_extremes() {
		let (min, max) = sample().get_extremes();
		assert_eq!(min, Value::bytes(*b""));
		assert_eq!(max, Value::bytes(*b"x"));
	}

	#[test]
	fn test_get_extremes_empty_column() {
		let (min, max) = VarlenContainer::new().get_extremes();
		assert_eq!(min, Value::empty_bytes());
		assert_eq!(max, Value::empty_bytes());
	}

	#[test]
	fn test_get_permutation_with_collation_orders_case_insensitively() {
		let container = VarlenContainer::from_values([
			b"Banana".as_slice(),
			b"apple".as_slice(),
			b"Cherry".as_slice(),
		]);
		let collated = container.get_permutation_with_collation(&CaseInsensitive, false, 0);
		assert_eq!(collated, vec![1, 0, 2]);
		// the raw byte ordering puts the uppercase rows first
		assert_eq!(container.get_permutation(false, 0), vec![0, 2, 1]);
	}

	#[test]
	fn test_get_permutation_with_collation_reverse_and_limit() {
		let container = VarlenContainer::from_values([
			b"Banana".as_slice(),
			b"apple".as_slice(),
			b"Cherry".as_slice(),
		]);
		let reversed = container.get_permutation_with_collation(&CaseInsensitive, true, 0);
		assert_eq!(reversed, vec![2, 0, 1]);

		let partial = container.get_permutation_with_collation(&CaseInsensitive, false, 2);
		assert_eq!(&partial[..2], &[1, 0]);
	}

	#[test]
	fn test_compare_at_with_collation() {
		let lhs = VarlenContainer::from_values([b"Apple".as_slice()]);
		let rhs = VarlenContainer::from_values([b"aPPLE".as_slice(), b"banana".as_slice()]);
		assert_eq!(lhs.compare_at_with_collation(0, 0, &rhs, &CaseInsensitive), Ordering::Equal);
		assert_eq!(lhs.compare_at_with_collation(0, 1, &rhs, &CaseInsensitive), Ordering::Less);
		// the raw byte comparison sees the case difference
		assert_eq!(lhs.compare_at(0, 0, &rhs), Ordering::Less);
	}

	#[test]
	fn test_compare_at() {
		let lhs = VarlenContainer::from_values([b"abc".as_slice()]);
		let rhs = VarlenContainer::from_values([b"abd".as_slice(), b"abc".as_slice()]);
		assert_eq!(lhs.compare_at(0, 0, &rhs), Ordering::Less);
		assert_eq!(lhs.compare_at(0, 1, &rhs), Ordering::Equal);
		assert_eq!(rhs.compare_at(0, 0, &lhs), Ordering::Greater);
	}

	#[test]
	fn test_resize_truncates_bytes() {
		let mut container = sample();
		container.resize(1);
		assert_eq!(container.len(), 1);
		assert_eq!(container.byte_size(), 3);
		container.resize(3);
		assert_eq!(container.len(), 3);
		assert_eq!(container.value_at(2), b"");
	}

	#[test]
	fn test_hash_rows_equal_payloads_hash_equal() {
		let container = VarlenContainer::from_values([b"dup".as_slice(), b"other".as_slice(), b"dup".as_slice()]);
		let mut hashes = vec![0u64; 3];
		container.hash_rows(&mut hashes);
		assert_eq!(hashes[0], hashes[2]);
		assert_ne!(hashes[0], hashes[1]);
	}
}
