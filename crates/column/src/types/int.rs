// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

use std::any::Any;

use basalt_type::{ColumnError, Fragment, Result, Type};

use super::{ColumnMeta, DataType, check_block_rows, read_u64, take_bytes, write_u64};
use crate::container::{Column, Int8Container, downcast_mut, downcast_ref};

/// Signed 64-bit integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Int8Type;

impl DataType for Int8Type {
	fn type_tag(&self) -> Type {
		Type::Int8
	}

	fn name(&self) -> String {
		"int8".to_string()
	}

	fn create_column(&self) -> Box<dyn Column> {
		Box::new(Int8Container::new())
	}

	fn to_string_row(&self, column: &dyn Column, row: usize) -> String {
		downcast_ref::<Int8Container>(column).get(row).to_string()
	}

	fn from_string_row(&self, buffer: &str, column: &mut dyn Column) -> Result<()> {
		let value = buffer.trim().parse::<i64>().map_err(|_| ColumnError::InvalidNumberFormat {
			fragment: Fragment::internal(buffer),
		})?;
		downcast_mut::<Int8Container>(column).push(value);
		Ok(())
	}

	// [rows u64][values i64 x rows]
	fn serialize(&self, column: &dyn Column, out: &mut Vec<u8>) {
		let container = downcast_ref::<Int8Container>(column);
		write_u64(out, container.len() as u64);
		for &value in container.data() {
			out.extend_from_slice(&value.to_le_bytes());
		}
	}

	fn deserialize<'a>(&self, buf: &'a [u8], column: &mut dyn Column) -> Result<&'a [u8]> {
		let container = downcast_mut::<Int8Container>(column);
		let (rows, rest) = read_u64(buf)?;
		let rows = check_block_rows(rows, size_of::<i64>(), rest.len())?;
		let (data, rest) = take_bytes(rest, rows * size_of::<i64>())?;
		for chunk in data.chunks_exact(size_of::<i64>()) {
			let mut raw = [0u8; size_of::<i64>()];
			raw.copy_from_slice(chunk);
			container.push(i64::from_le_bytes(raw));
		}
		Ok(rest)
	}

	fn uncompressed_serialized_bytes(&self, column: &dyn Column) -> usize {
		size_of::<u64>() + column.len() * size_of::<i64>()
	}

	fn equals(&self, other: &dyn DataType) -> bool {
		other.as_any().is::<Int8Type>()
	}

	fn to_column_meta(&self) -> ColumnMeta {
		ColumnMeta::leaf(Type::Int8, false)
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_parse_and_render() {
		let mut column = Int8Type.create_column();
		Int8Type.from_string_row(" -42 ", column.as_mut()).unwrap();
		assert_eq!(Int8Type.to_string_row(column.as_ref(), 0), "-42");
	}

	#[test]
	fn test_parse_junk_is_user_error() {
		let mut column = Int8Type.create_column();
		let err = Int8Type.from_string_row("abc", column.as_mut()).unwrap_err();
		assert_eq!(err.code(), "NUMBER_001");
		assert!(!err.is_invariant_violation());
		assert_eq!(column.len(), 0);
	}

	#[test]
	fn test_deserialize_huge_row_count_is_error() {
		let mut out = Vec::new();
		write_u64(&mut out, u64::MAX);
		out.extend_from_slice(&7i64.to_le_bytes());

		let mut restored = Int8Type.create_column();
		let err = Int8Type.deserialize(&out, restored.as_mut()).unwrap_err();
		assert_eq!(err.code(), "SERDE_001");
		assert_eq!(restored.len(), 0);
	}

	#[test]
	fn test_binary_roundtrip() {
		let mut column = Int8Type.create_column();
		for value in ["0", "9223372036854775807", "-1"] {
			Int8Type.from_string_row(value, column.as_mut()).unwrap();
		}

		let mut out = Vec::new();
		Int8Type.serialize(column.as_ref(), &mut out);
		assert_eq!(out.len(), Int8Type.uncompressed_serialized_bytes(column.as_ref()));

		let mut restored = Int8Type.create_column();
		let rest = Int8Type.deserialize(&out, restored.as_mut()).unwrap();
		assert!(rest.is_empty());
		assert_eq!(
			downcast_ref::<Int8Container>(restored.as_ref()).data(),
			downcast_ref::<Int8Container>(column.as_ref()).data()
		);
	}
}
