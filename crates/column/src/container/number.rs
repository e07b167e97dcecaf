// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

use serde::{Deserialize, Serialize};

use super::Column;

/// Fixed-width signed 64-bit column, the numeric counterpart of
/// [`VarlenContainer`](super::VarlenContainer). Kept minimal: it exists
/// so composite columns can nest a non-textual element type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Int8Container {
	data: Vec<i64>,
}

impl Int8Container {
	pub fn new() -> Self {
		Self {
			data: Vec::new(),
		}
	}

	pub fn from_values(values: impl IntoIterator<Item = i64>) -> Self {
		Self {
			data: values.into_iter().collect(),
		}
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn get(&self, row: usize) -> i64 {
		self.data[row]
	}

	pub fn push(&mut self, value: i64) {
		self.data.push(value);
	}

	pub fn data(&self) -> &[i64] {
		&self.data
	}

	pub fn iter(&self) -> impl Iterator<Item = &i64> + '_ {
		self.data.iter()
	}
}

impl Column for Int8Container {
	fn len(&self) -> usize {
		self.data.len()
	}

	fn push_default(&mut self) {
		self.data.push(0);
	}

	fn pop_back(&mut self, n: usize) {
		self.data.truncate(self.data.len().saturating_sub(n));
	}

	fn as_any(&self) -> &dyn std::any::Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
		self
	}
}
