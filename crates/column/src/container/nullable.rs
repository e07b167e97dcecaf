// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

use basalt_type::BitVec;

use super::Column;

/// Wraps any column with a per-row null mask. A set bit means the row is
/// null; the nested column still holds a default value in that slot so
/// both sides stay aligned row for row.
#[derive(Debug)]
pub struct NullableColumn {
	data: Box<dyn Column>,
	null_map: BitVec,
}

impl NullableColumn {
	pub fn new(data: Box<dyn Column>) -> Self {
		let mut null_map = BitVec::new();
		for _ in 0..data.len() {
			null_map.push(false);
		}
		Self {
			data,
			null_map,
		}
	}

	pub fn len(&self) -> usize {
		self.null_map.len()
	}

	pub fn is_empty(&self) -> bool {
		self.null_map.is_empty()
	}

	pub fn is_null_at(&self, row: usize) -> bool {
		self.null_map.get(row)
	}

	pub fn null_map(&self) -> &BitVec {
		&self.null_map
	}

	pub fn nested(&self) -> &dyn Column {
		self.data.as_ref()
	}

	pub fn nested_mut(&mut self) -> &mut dyn Column {
		self.data.as_mut()
	}

	/// Append a null row: the nested column gets a default value so its
	/// cardinality keeps matching the mask.
	pub fn push_null(&mut self) {
		self.data.push_default();
		self.null_map.push(true);
	}

	/// Mark the just-pushed nested row as non-null. The caller pushes
	/// the value through [`nested_mut`](Self::nested_mut) first.
	pub fn commit_row(&mut self) {
		debug_assert_eq!(self.data.len(), self.null_map.len() + 1);
		self.null_map.push(false);
	}

	/// Used by block deserialization, after the nested rows have already
	/// been appended.
	pub(crate) fn extend_null_map(&mut self, flags: impl IntoIterator<Item = bool>) {
		for flag in flags {
			self.null_map.push(flag);
		}
		debug_assert_eq!(self.data.len(), self.null_map.len());
	}
}

impl Column for NullableColumn {
	fn len(&self) -> usize {
		self.null_map.len()
	}

	fn push_default(&mut self) {
		self.push_null();
	}

	fn pop_back(&mut self, n: usize) {
		self.data.pop_back(n);
		self.null_map.truncate(self.null_map.len().saturating_sub(n));
	}

	fn as_any(&self) -> &dyn std::any::Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
		self
	}
}
