// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

use std::any::Any;

use basalt_type::{ColumnError, Fragment, Result, Type};

use super::slot::next_slot_from_string;
use super::{ColumnMeta, DataType, DataTypeRef, check_block_rows, read_u64, write_u64};
use crate::container::{ArrayColumn, Column, downcast_mut, downcast_ref};

const ELEMENT_SEPARATORS: &[u8] = &[b','];

/// Nested-list type over any element type. Map columns are built from a
/// pair of these.
#[derive(Debug)]
pub struct ArrayType {
	nested: DataTypeRef,
}

impl ArrayType {
	pub fn new(nested: DataTypeRef) -> Self {
		Self {
			nested,
		}
	}

	pub fn nested_type(&self) -> &DataTypeRef {
		&self.nested
	}
}

impl DataType for ArrayType {
	fn type_tag(&self) -> Type {
		Type::Array
	}

	fn name(&self) -> String {
		format!("array({})", self.nested.name())
	}

	fn create_column(&self) -> Box<dyn Column> {
		Box::new(ArrayColumn::new(self.nested.create_column()))
	}

	fn to_string_row(&self, column: &dyn Column, row: usize) -> String {
		let array = downcast_ref::<ArrayColumn>(column);
		let start = array.offset_at(row);
		let mut out = String::from("[");
		for i in 0..array.size_at(row) {
			if i > 0 {
				out.push_str(", ");
			}
			out.push_str(&super::map::render_element(self.nested.as_ref(), array.nested(), start + i));
		}
		out.push(']');
		out
	}

	fn from_string_row(&self, buffer: &str, column: &mut dyn Column) -> Result<()> {
		if !buffer.starts_with('[') || !buffer.ends_with(']') {
			return Err(ColumnError::ArrayMissingBrackets {
				fragment: Fragment::internal(buffer),
			}
			.into());
		}

		let array = downcast_mut::<ArrayColumn>(column);
		let elements_before = array.nested().len();

		let interior = &buffer[1..buffer.len() - 1];
		if interior.trim().is_empty() {
			array.push_row(0);
			return Ok(());
		}

		let mut element_num = 0;
		let mut rest = &buffer[1..];
		while !rest.is_empty() {
			let parsed = next_slot_from_string(rest, ELEMENT_SEPARATORS, b']')
				.ok_or_else(|| ColumnError::ArrayInvalidSlot {
					fragment: Fragment::internal(rest),
				})
				.and_then(|(slot, next)| {
					self.nested.from_string_row(slot, array.nested_mut()).map_err(|_| {
						ColumnError::ArrayInvalidSlot {
							fragment: Fragment::internal(slot),
						}
					})?;
					Ok(next)
				});
			match parsed {
				Ok(next) => {
					element_num += 1;
					rest = next;
				}
				Err(err) => {
					let inserted = array.nested().len() - elements_before;
					array.nested_mut().pop_back(inserted);
					return Err(err.into());
				}
			}
		}

		array.push_row(element_num);
		Ok(())
	}

	// [rows u64][offsets u64 x rows][nested block]
	fn serialize(&self, column: &dyn Column, out: &mut Vec<u8>) {
		let array = downcast_ref::<ArrayColumn>(column);
		write_u64(out, array.len() as u64);
		for &offset in array.offsets() {
			write_u64(out, offset);
		}
		self.nested.serialize(array.nested(), out);
	}

	fn deserialize<'a>(&self, buf: &'a [u8], column: &mut dyn Column) -> Result<&'a [u8]> {
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

		let array = downcast_mut::<ArrayColumn>(column);
		let base = array.offsets().last().copied().unwrap_or(0);
		let elements_before = array.nested().len();
		let rest = self.nested.deserialize(rest, array.nested_mut())?;

		let declared = offsets.last().copied().unwrap_or(0);
		let decoded = (array.nested().len() - elements_before) as u64;
		if decoded != declared {
			array.nested_mut().pop_back(decoded as usize);
			return Err(ColumnError::SerializedBlockMismatch {
				declared,
				decoded,
			}
			.into());
		}

		array.extend_offsets(offsets.into_iter().map(|offset| offset + base));
		Ok(rest)
	}

	fn uncompressed_serialized_bytes(&self, column: &dyn Column) -> usize {
		let array = downcast_ref::<ArrayColumn>(column);
		size_of::<u64>()
			+ array.len() * size_of::<u64>()
			+ self.nested.uncompressed_serialized_bytes(array.nested())
	}

	fn equals(&self, other: &dyn DataType) -> bool {
		match other.as_any().downcast_ref::<ArrayType>() {
			Some(other) => self.nested.equals(other.nested.as_ref()),
			None => false,
		}
	}

	fn to_column_meta(&self) -> ColumnMeta {
		ColumnMeta {
			type_tag: Type::Array,
			nullable: false,
			children: vec![self.nested.to_column_meta()],
		}
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
