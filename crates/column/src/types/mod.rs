// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

pub mod array;
pub mod int;
pub mod map;
pub mod meta;
pub mod nullable;
mod slot;
pub mod utf8;

use std::{any::Any, fmt::Debug, sync::Arc};

use basalt_type::{ColumnError, Result, Type};

pub use array::ArrayType;
pub use int::Int8Type;
pub use map::MapType;
pub use meta::ColumnMeta;
pub use nullable::NullableType;
pub use utf8::Utf8Type;

use crate::container::Column;

/// A logical type: the interpreter that gives meaning to a physical
/// column's raw storage. Descriptors are immutable and shared as
/// [`DataTypeRef`]; one descriptor serves every column instance of that
/// type.
pub trait DataType: Debug + Send + Sync {
	fn type_tag(&self) -> Type;

	fn name(&self) -> String;

	fn is_nullable(&self) -> bool {
		false
	}

	/// Textual types get quoted when rendered inside composite literals.
	fn is_textual(&self) -> bool {
		false
	}

	/// An empty physical column matching this logical type.
	fn create_column(&self) -> Box<dyn Column>;

	fn to_string_row(&self, column: &dyn Column, row: usize) -> String;

	/// Parse one textual value and append it as a new row. On failure the
	/// column is left exactly as it was.
	fn from_string_row(&self, buffer: &str, column: &mut dyn Column) -> Result<()>;

	/// Append this column's native binary encoding to `out`.
	fn serialize(&self, column: &dyn Column, out: &mut Vec<u8>);

	/// Consume one encoded block from `buf`, append its rows to `column`
	/// and return the remaining bytes.
	fn deserialize<'a>(&self, buf: &'a [u8], column: &mut dyn Column) -> Result<&'a [u8]>;

	fn uncompressed_serialized_bytes(&self, column: &dyn Column) -> usize;

	/// Structural equality. A type never equals a type with a different
	/// tag.
	fn equals(&self, other: &dyn DataType) -> bool;

	/// Metadata tree node for schema exchange.
	fn to_column_meta(&self) -> ColumnMeta;

	fn as_any(&self) -> &dyn Any;
}

pub type DataTypeRef = Arc<dyn DataType>;

/// Wrap in [`NullableType`] unless the type is already nullable.
pub fn make_nullable(data_type: DataTypeRef) -> DataTypeRef {
	if data_type.is_nullable() {
		data_type
	} else {
		Arc::new(NullableType::new(data_type))
	}
}

pub(crate) fn write_u64(out: &mut Vec<u8>, value: u64) {
	out.extend_from_slice(&value.to_le_bytes());
}

pub(crate) fn read_u64(buf: &[u8]) -> Result<(u64, &[u8])> {
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
	Ok((u64::from_le_bytes(raw), rest))
}

/// The row count read off the wire is untrusted: bound it by the bytes
/// actually remaining before it sizes any allocation.
pub(crate) fn check_block_rows(rows: u64, bytes_per_row: usize, remaining: usize) -> Result<usize> {
	let expected = rows.saturating_mul(bytes_per_row as u64);
	if expected > remaining as u64 {
		return Err(ColumnError::SerializedValueTruncated {
			expected,
			remaining,
		}
		.into());
	}
	Ok(rows as usize)
}

pub(crate) fn take_bytes(buf: &[u8], n: usize) -> Result<(&[u8], &[u8])> {
	if buf.len() < n {
		return Err(ColumnError::SerializedValueTruncated {
			expected: n as u64,
			remaining: buf.len(),
		}
		.into());
	}
	Ok(buf.split_at(n))
}
