// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

use std::any::Any;

use basalt_type::{ColumnError, Result, Type};

use super::{ColumnMeta, DataType, DataTypeRef, read_u64, take_bytes, write_u64};
use crate::container::{Column, NullableColumn, downcast_mut, downcast_ref};

/// Nullability wrapper around any element type. The physical column
/// pairs the nested storage with a per-row null mask.
#[derive(Debug)]
pub struct NullableType {
	nested: DataTypeRef,
}

impl NullableType {
	pub fn new(nested: DataTypeRef) -> Self {
		Self {
			nested,
		}
	}

	pub fn nested_type(&self) -> &DataTypeRef {
		&self.nested
	}
}

impl DataType for NullableType {
	fn type_tag(&self) -> Type {
		Type::Nullable
	}

	fn name(&self) -> String {
		format!("nullable({})", self.nested.name())
	}

	fn is_nullable(&self) -> bool {
		true
	}

	fn is_textual(&self) -> bool {
		self.nested.is_textual()
	}

	fn create_column(&self) -> Box<dyn Column> {
		Box::new(NullableColumn::new(self.nested.create_column()))
	}

	fn to_string_row(&self, column: &dyn Column, row: usize) -> String {
		let nullable = downcast_ref::<NullableColumn>(column);
		if nullable.is_null_at(row) {
			"null".to_string()
		} else {
			self.nested.to_string_row(nullable.nested(), row)
		}
	}

	/// The literal `null` (any case) parses as a null row; anything else
	/// goes to the nested parser.
	fn from_string_row(&self, buffer: &str, column: &mut dyn Column) -> Result<()> {
		let nullable = downcast_mut::<NullableColumn>(column);
		if buffer.trim().eq_ignore_ascii_case("null") {
			nullable.push_null();
			return Ok(());
		}
		self.nested.from_string_row(buffer, nullable.nested_mut())?;
		nullable.commit_row();
		Ok(())
	}

	// [rows u64][null bytes x rows][nested block]
	fn serialize(&self, column: &dyn Column, out: &mut Vec<u8>) {
		let nullable = downcast_ref::<NullableColumn>(column);
		write_u64(out, nullable.len() as u64);
		for null in nullable.null_map().iter() {
			out.push(null as u8);
		}
		self.nested.serialize(nullable.nested(), out);
	}

	fn deserialize<'a>(&self, buf: &'a [u8], column: &mut dyn Column) -> Result<&'a [u8]> {
		let (rows, rest) = read_u64(buf)?;
		let (null_bytes, rest) = take_bytes(rest, rows as usize)?;

		let nullable = downcast_mut::<NullableColumn>(column);
		let nested_before = nullable.nested().len();
		let rest = self.nested.deserialize(rest, nullable.nested_mut())?;

		let decoded = (nullable.nested().len() - nested_before) as u64;
		if decoded != rows {
			nullable.nested_mut().pop_back(decoded as usize);
			return Err(ColumnError::SerializedBlockMismatch {
				declared: rows,
				decoded,
			}
			.into());
		}

		nullable.extend_null_map(null_bytes.iter().map(|&b| b != 0));
		Ok(rest)
	}

	fn uncompressed_serialized_bytes(&self, column: &dyn Column) -> usize {
		let nullable = downcast_ref::<NullableColumn>(column);
		size_of::<u64>() + nullable.len() + self.nested.uncompressed_serialized_bytes(nullable.nested())
	}

	fn equals(&self, other: &dyn DataType) -> bool {
		match other.as_any().downcast_ref::<NullableType>() {
			Some(other) => self.nested.equals(other.nested.as_ref()),
			None => false,
		}
	}

	fn to_column_meta(&self) -> ColumnMeta {
		let mut meta = self.nested.to_column_meta();
		meta.nullable = true;
		meta
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
