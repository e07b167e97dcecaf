// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

use super::Column;

/// Nested-list column: a flat element column plus exclusive-end offsets,
/// one offset per list row. Map columns hold two of these with equal
/// cardinality.
#[derive(Debug)]
pub struct ArrayColumn {
	data: Box<dyn Column>,
	offsets: Vec<u64>,
}

impl ArrayColumn {
	pub fn new(data: Box<dyn Column>) -> Self {
		Self {
			data,
			offsets: Vec::new(),
		}
	}

	pub fn len(&self) -> usize {
		self.offsets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.offsets.is_empty()
	}

	pub fn offsets(&self) -> &[u64] {
		&self.offsets
	}

	pub fn offset_at(&self, row: usize) -> usize {
		if row == 0 {
			0
		} else {
			self.offsets[row - 1] as usize
		}
	}

	/// Number of elements in the list at `row`.
	pub fn size_at(&self, row: usize) -> usize {
		self.offsets[row] as usize - self.offset_at(row)
	}

	pub fn nested(&self) -> &dyn Column {
		self.data.as_ref()
	}

	pub fn nested_mut(&mut self) -> &mut dyn Column {
		self.data.as_mut()
	}

	/// Commit one list row covering the `count` elements most recently
	/// appended to the nested column.
	pub fn push_row(&mut self, count: usize) {
		let last = self.offsets.last().copied().unwrap_or(0);
		let new_last = last + count as u64;
		debug_assert_eq!(self.data.len() as u64, new_last);
		self.offsets.push(new_last);
	}

	/// Used by block deserialization, after the nested elements have
	/// already been appended. Offsets arrive pre-rebased.
	pub(crate) fn extend_offsets(&mut self, offsets: impl IntoIterator<Item = u64>) {
		self.offsets.extend(offsets);
		debug_assert_eq!(self.data.len() as u64, self.offsets.last().copied().unwrap_or(0));
	}
}

impl Column for ArrayColumn {
	fn len(&self) -> usize {
		self.offsets.len()
	}

	fn push_default(&mut self) {
		// an empty list, not a null
		self.offsets.push(self.offsets.last().copied().unwrap_or(0));
	}

	fn pop_back(&mut self, n: usize) {
		let remaining = self.offsets.len().saturating_sub(n);
		let kept_elements = if remaining == 0 {
			0
		} else {
			self.offsets[remaining - 1] as usize
		};
		self.data.pop_back(self.data.len().saturating_sub(kept_elements));
		self.offsets.truncate(remaining);
	}

	fn as_any(&self) -> &dyn std::any::Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
		self
	}
}
