// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

use basalt_type::{InvariantViolation, Result};

use super::{ArrayColumn, Column};

/// Composite key/value column: two nested-list columns that must stay at
/// equal cardinality. Entry `i` pairs the i-th key list with the i-th
/// value list position by position.
#[derive(Debug)]
pub struct MapColumn {
	keys: ArrayColumn,
	values: ArrayColumn,
}

impl MapColumn {
	pub fn new(key_elements: Box<dyn Column>, value_elements: Box<dyn Column>) -> Self {
		Self {
			keys: ArrayColumn::new(key_elements),
			values: ArrayColumn::new(value_elements),
		}
	}

	/// Assemble from two pre-built list columns. Unequal cardinality is a
	/// construction bug upstream, reported as an invariant violation.
	pub fn try_from_arrays(keys: ArrayColumn, values: ArrayColumn) -> Result<Self> {
		if keys.len() != values.len() {
			return Err(InvariantViolation::CardinalityMismatch {
				keys: keys.len(),
				values: values.len(),
			}
			.into());
		}
		Ok(Self {
			keys,
			values,
		})
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.keys.len(), self.values.len());
		self.keys.len()
	}

	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	/// Number of entries in the map at `row`.
	pub fn size_at(&self, row: usize) -> usize {
		self.keys.size_at(row)
	}

	pub fn keys(&self) -> &ArrayColumn {
		&self.keys
	}

	pub fn values(&self) -> &ArrayColumn {
		&self.values
	}

	pub fn keys_mut(&mut self) -> &mut ArrayColumn {
		&mut self.keys
	}

	pub fn values_mut(&mut self) -> &mut ArrayColumn {
		&mut self.values
	}

	/// Append an empty map row to both sides.
	pub fn insert_default(&mut self) {
		self.keys.push_default();
		self.values.push_default();
	}
}

impl Column for MapColumn {
	fn len(&self) -> usize {
		self.keys.len()
	}

	fn push_default(&mut self) {
		self.insert_default();
	}

	fn pop_back(&mut self, n: usize) {
		self.keys.pop_back(n);
		self.values.pop_back(n);
	}

	fn as_any(&self) -> &dyn std::any::Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
		self
	}
}
