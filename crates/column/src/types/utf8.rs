// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

use std::any::Any;

use basalt_type::{ColumnError, Result, Type};

use super::{ColumnMeta, DataType, check_block_rows, read_u64, take_bytes, write_u64};
use crate::container::{Column, VarlenContainer, downcast_mut, downcast_ref};

/// Variable-length text. Stored bytes are taken as-is; rendering uses a
/// lossy UTF-8 view.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Type;

impl DataType for Utf8Type {
	fn type_tag(&self) -> Type {
		Type::Utf8
	}

	fn name(&self) -> String {
		"utf8".to_string()
	}

	fn is_textual(&self) -> bool {
		true
	}

	fn create_column(&self) -> Box<dyn Column> {
		Box::new(VarlenContainer::new())
	}

	fn to_string_row(&self, column: &dyn Column, row: usize) -> String {
		let container = downcast_ref::<VarlenContainer>(column);
		String::from_utf8_lossy(container.value_at(row)).into_owned()
	}

	fn from_string_row(&self, buffer: &str, column: &mut dyn Column) -> Result<()> {
		downcast_mut::<VarlenContainer>(column).push(buffer.as_bytes());
		Ok(())
	}

	// [rows u64][offsets u64 x rows][chars]
	fn serialize(&self, column: &dyn Column, out: &mut Vec<u8>) {
		let container = downcast_ref::<VarlenContainer>(column);
		write_u64(out, container.len() as u64);
		for &offset in container.offsets() {
			write_u64(out, offset);
		}
		out.extend_from_slice(container.chars());
	}

	fn deserialize<'a>(&self, buf: &'a [u8], column: &mut dyn Column) -> Result<&'a [u8]> {
		let container = downcast_mut::<VarlenContainer>(column);
		let (rows, mut rest) = read_u64(buf)?;
		let rows = check_block_rows(rows, size_of::<u64>(), rest.len())?;

		let mut offsets = Vec::with_capacity(rows);
		let mut previous = 0u64;
		for _ in 0..rows {
			let (offset, next) = read_u64(rest)?;
			if offset < previous {
				return Err(ColumnError::SerializedOffsetsCorrupt {
					previous,
					next: offset,
				}
				.into());
			}
			previous = offset;
			offsets.push(offset);
			rest = next;
		}

		let total_bytes = offsets.last().copied().unwrap_or(0) as usize;
		let (chars, rest) = take_bytes(rest, total_bytes)?;
		let mut start = 0;
		for &offset in &offsets {
			container.push(&chars[start..offset as usize]);
			start = offset as usize;
		}
		Ok(rest)
	}

	fn uncompressed_serialized_bytes(&self, column: &dyn Column) -> usize {
		let container = downcast_ref::<VarlenContainer>(column);
		size_of::<u64>() + container.len() * size_of::<u64>() + container.byte_size()
	}

	fn equals(&self, other: &dyn DataType) -> bool {
		other.as_any().is::<Utf8Type>()
	}

	fn to_column_meta(&self) -> ColumnMeta {
		ColumnMeta::leaf(Type::Utf8, false)
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
