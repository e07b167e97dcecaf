// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

mod array;
mod map;
mod nullable;
mod number;
mod varlen;

use std::{any::Any, fmt::Debug};

pub use array::ArrayColumn;
pub use map::MapColumn;
pub use nullable::NullableColumn;
pub use number::Int8Container;
pub use varlen::VarlenContainer;

/// The narrow seam the logical-type layer works through. Concrete
/// containers expose their full surface directly; the trait only carries
/// what nested delegation needs.
pub trait Column: Debug {
	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Append one default (empty/zero/null) row.
	fn push_default(&mut self);

	/// Remove the last `n` rows.
	fn pop_back(&mut self, n: usize);

	fn as_any(&self) -> &dyn Any;

	fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Columns are always produced by their own type descriptor, so a
/// mismatch here is a construction bug, not a runtime condition.
pub(crate) fn downcast_ref<T: 'static>(column: &dyn Column) -> &T {
	column.as_any().downcast_ref::<T>().expect("column downcast mismatch")
}

pub(crate) fn downcast_mut<T: 'static>(column: &mut dyn Column) -> &mut T {
	column.as_any_mut().downcast_mut::<T>().expect("column downcast mismatch")
}
