// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

use std::any::Any;
use std::sync::Arc;

use basalt_type::{ColumnError, Fragment, Result, Type};

use super::slot::next_slot_from_string;
use super::{ArrayType, ColumnMeta, DataType, DataTypeRef, make_nullable};
use crate::container::{Column, MapColumn, NullableColumn, downcast_mut, downcast_ref};

const PAIR_SEPARATORS: &[u8] = &[b':', b','];

/// Map composite type: entries are key/value pairs, stored physically as
/// two nested-list columns of equal cardinality. Both element types are
/// coerced to nullable at construction; a map may hold null keys or null
/// values even though each entry belongs to exactly one row.
#[derive(Debug)]
pub struct MapType {
	key_type: DataTypeRef,
	value_type: DataTypeRef,
	keys: Arc<ArrayType>,
	values: Arc<ArrayType>,
}

impl MapType {
	pub fn new(key_type: DataTypeRef, value_type: DataTypeRef) -> Self {
		let key_type = make_nullable(key_type);
		let value_type = make_nullable(value_type);
		Self {
			keys: Arc::new(ArrayType::new(key_type.clone())),
			values: Arc::new(ArrayType::new(value_type.clone())),
			key_type,
			value_type,
		}
	}

	pub fn key_type(&self) -> &DataTypeRef {
		&self.key_type
	}

	pub fn value_type(&self) -> &DataTypeRef {
		&self.value_type
	}
}

/// Render one element of a composite literal: `null` when the element is
/// null, quoted when the element type is textual, otherwise the element
/// type's own rendering. No escaping; this is a display format.
pub(crate) fn render_element(element_type: &dyn DataType, column: &dyn Column, row: usize) -> String {
	if element_type.is_nullable() {
		let nullable = downcast_ref::<NullableColumn>(column);
		if nullable.is_null_at(row) {
			return "null".to_string();
		}
	}
	let rendered = element_type.to_string_row(column, row);
	if element_type.is_textual() {
		format!("'{}'", rendered)
	} else {
		rendered
	}
}

impl DataType for MapType {
	fn type_tag(&self) -> Type {
		Type::Map
	}

	fn name(&self) -> String {
		format!("map({}, {})", self.key_type.name(), self.value_type.name())
	}

	fn create_column(&self) -> Box<dyn Column> {
		Box::new(MapColumn::new(self.key_type.create_column(), self.value_type.create_column()))
	}

	fn to_string_row(&self, column: &dyn Column, row: usize) -> String {
		let map = downcast_ref::<MapColumn>(column);
		let start = map.keys().offset_at(row);
		let mut out = String::from("{");
		for i in 0..map.size_at(row) {
			if i > 0 {
				out.push_str(", ");
			}
			out.push_str(&render_element(self.key_type.as_ref(), map.keys().nested(), start + i));
			out.push(':');
			out.push_str(&render_element(self.value_type.as_ref(), map.values().nested(), start + i));
		}
		out.push('}');
		out
	}

	/// Whole-buffer parse of one `{k:v, ...}` row. Either the row commits
	/// fully (one new offset on both sides) or every element inserted for
	/// it is rolled back and nothing is visible.
	fn from_string_row(&self, buffer: &str, column: &mut dyn Column) -> Result<()> {
		if !buffer.starts_with('{') {
			return Err(ColumnError::MapMissingOpeningBrace {
				fragment: Fragment::internal(buffer),
			}
			.into());
		}
		if !buffer.ends_with('}') {
			return Err(ColumnError::MapMissingClosingBrace {
				fragment: Fragment::internal(buffer),
			}
			.into());
		}

		let map = downcast_mut::<MapColumn>(column);
		// only the literal {} is an empty map; "{ }" falls through to the
		// slot scan and fails like any other malformed pair
		if buffer.len() == 2 {
			map.keys_mut().push_row(0);
			map.values_mut().push_row(0);
			return Ok(());
		}

		let keys_before = map.keys().nested().len();
		let values_before = map.values().nested().len();
		let rollback = |map: &mut MapColumn| {
			let keys_inserted = map.keys().nested().len() - keys_before;
			map.keys_mut().nested_mut().pop_back(keys_inserted);
			let values_inserted = map.values().nested().len() - values_before;
			map.values_mut().nested_mut().pop_back(values_inserted);
		};

		let mut element_num = 0;
		let mut rest = &buffer[1..];
		while !rest.is_empty() {
			rest = match parse_element(self.key_type.as_ref(), map.keys_mut().nested_mut(), rest) {
				Some(next) => next,
				None => {
					let fragment = Fragment::internal(rest);
					rollback(map);
					return Err(ColumnError::MapInvalidKeySlot {
						fragment,
					}
					.into());
				}
			};
			rest = match parse_element(self.value_type.as_ref(), map.values_mut().nested_mut(), rest) {
				Some(next) => next,
				None => {
					let fragment = Fragment::internal(rest);
					rollback(map);
					return Err(ColumnError::MapInvalidValueSlot {
						fragment,
					}
					.into());
				}
			};
			element_num += 1;
		}

		map.keys_mut().push_row(element_num);
		map.values_mut().push_row(element_num);
		Ok(())
	}

	// keys block then values block, nothing in between: the receiver
	// splits the stream by knowing both nested layouts from the shared
	// logical type
	fn serialize(&self, column: &dyn Column, out: &mut Vec<u8>) {
		let map = downcast_ref::<MapColumn>(column);
		self.keys.serialize(map.keys(), out);
		self.values.serialize(map.values(), out);
	}

	fn deserialize<'a>(&self, buf: &'a [u8], column: &mut dyn Column) -> Result<&'a [u8]> {
		let map = downcast_mut::<MapColumn>(column);
		let rest = self.keys.deserialize(buf, map.keys_mut())?;
		self.values.deserialize(rest, map.values_mut())
	}

	fn uncompressed_serialized_bytes(&self, column: &dyn Column) -> usize {
		let map = downcast_ref::<MapColumn>(column);
		self.keys.uncompressed_serialized_bytes(map.keys())
			+ self.values.uncompressed_serialized_bytes(map.values())
	}

	fn equals(&self, other: &dyn DataType) -> bool {
		match other.as_any().downcast_ref::<MapType>() {
			Some(other) => {
				self.key_type.equals(other.key_type.as_ref())
					&& self.value_type.equals(other.value_type.as_ref())
			}
			None => false,
		}
	}

	fn to_column_meta(&self) -> ColumnMeta {
		ColumnMeta {
			type_tag: Type::Map,
			nullable: false,
			children: vec![self.key_type.to_column_meta(), self.value_type.to_column_meta()],
		}
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// Tokenize one slot and hand it to the element parser. `None` covers
/// both a malformed slot and an element the type cannot parse; the
/// caller still holds the unconsumed text for the diagnostic.
fn parse_element<'a>(element_type: &dyn DataType, column: &mut dyn Column, rest: &'a str) -> Option<&'a str> {
	let (slot, next) = next_slot_from_string(rest, PAIR_SEPARATORS, b'}')?;
	element_type.from_string_row(slot, column).ok()?;
	Some(next)
}

#[cfg(test)]
pub mod tests {
	use super::super::{Int8Type, Utf8Type};
	use super::*;

	fn map_utf8_int() -> MapType {
		MapType::new(Arc::new(Utf8Type), Arc::new(Int8Type))
	}

	#[test]
	fn test_construction_coerces_nullable() {
		let map = map_utf8_int();
		assert!(map.key_type().is_nullable());
		assert!(map.value_type().is_nullable());
		assert_eq!(map.name(), "map(nullable(utf8), nullable(int8))");
	}

	#[test]
	fn test_roundtrip_two_pairs() {
		let map = map_utf8_int();
		let mut column = map.create_column();
		map.from_string_row("{\"a\":1,\"b\":2}", column.as_mut()).unwrap();

		assert_eq!(column.len(), 1);
		assert_eq!(map.to_string_row(column.as_ref(), 0), "{'a':1, 'b':2}");
	}

	#[test]
	fn test_empty_map_inserts_zero_element_row() {
		let map = map_utf8_int();
		let mut column = map.create_column();
		map.from_string_row("{}", column.as_mut()).unwrap();

		let map_column = downcast_ref::<MapColumn>(column.as_ref());
		assert_eq!(map_column.len(), 1);
		assert_eq!(map_column.size_at(0), 0);
		assert_eq!(map.to_string_row(column.as_ref(), 0), "{}");
	}

	#[test]
	fn test_whitespace_interior_is_not_an_empty_map() {
		let map = map_utf8_int();
		let mut column = map.create_column();
		let err = map.from_string_row("{ }", column.as_mut()).unwrap_err();
		assert_eq!(err.code(), "MAP_004");

		let map_column = downcast_ref::<MapColumn>(column.as_ref());
		assert_eq!(map_column.len(), 0);
		assert_eq!(map_column.keys().nested().len(), 0);
		assert_eq!(map_column.values().nested().len(), 0);
	}

	#[test]
	fn test_null_values_and_keys() {
		let map = map_utf8_int();
		let mut column = map.create_column();
		map.from_string_row("{'a':null, null:2}", column.as_mut()).unwrap();
		assert_eq!(map.to_string_row(column.as_ref(), 0), "{'a':null, null:2}");
	}

	#[test]
	fn test_missing_opening_brace() {
		let map = map_utf8_int();
		let mut column = map.create_column();
		let err = map.from_string_row("\"a\":1}", column.as_mut()).unwrap_err();
		assert_eq!(err.code(), "MAP_001");
		assert_eq!(column.len(), 0);
	}

	#[test]
	fn test_missing_closing_brace_inserts_nothing() {
		let map = map_utf8_int();
		let mut column = map.create_column();
		let err = map.from_string_row("{\"a\":1", column.as_mut()).unwrap_err();
		assert_eq!(err.code(), "MAP_002");

		let map_column = downcast_ref::<MapColumn>(column.as_ref());
		assert_eq!(map_column.len(), 0);
		assert_eq!(map_column.keys().nested().len(), 0);
	}

	#[test]
	fn test_missing_separator_rolls_back_elements() {
		let map = map_utf8_int();
		let mut column = map.create_column();
		map.from_string_row("{'x':9}", column.as_mut()).unwrap();

		// key "a" tokenizes, then '1}' cannot follow a closed quote
		let err = map.from_string_row("{\"a\"1}", column.as_mut()).unwrap_err();
		assert_eq!(err.code(), "MAP_003");

		let map_column = downcast_ref::<MapColumn>(column.as_ref());
		assert_eq!(map_column.len(), 1);
		assert_eq!(map_column.keys().nested().len(), 1);
		assert_eq!(map_column.values().nested().len(), 1);
	}

	#[test]
	fn test_bad_value_rolls_back_parsed_key() {
		let map = map_utf8_int();
		let mut column = map.create_column();
		let err = map.from_string_row("{\"a\":junk}", column.as_mut()).unwrap_err();
		assert_eq!(err.code(), "MAP_004");

		let map_column = downcast_ref::<MapColumn>(column.as_ref());
		assert_eq!(map_column.len(), 0);
		assert_eq!(map_column.keys().nested().len(), 0);
		assert_eq!(map_column.values().nested().len(), 0);
	}

	#[test]
	fn test_binary_roundtrip_shares_descriptor() {
		let map = map_utf8_int();
		let mut column = map.create_column();
		map.from_string_row("{\"a\":1,\"b\":2}", column.as_mut()).unwrap();
		map.from_string_row("{}", column.as_mut()).unwrap();
		map.from_string_row("{null:null}", column.as_mut()).unwrap();

		let mut out = Vec::new();
		map.serialize(column.as_ref(), &mut out);
		assert_eq!(out.len(), map.uncompressed_serialized_bytes(column.as_ref()));

		let mut restored = map.create_column();
		let rest = map.deserialize(&out, restored.as_mut()).unwrap();
		assert!(rest.is_empty());
		for row in 0..3 {
			assert_eq!(map.to_string_row(restored.as_ref(), row), map.to_string_row(column.as_ref(), row));
		}
	}

	#[test]
	fn test_equals_is_structural() {
		let lhs = map_utf8_int();
		let rhs = MapType::new(make_nullable(Arc::new(Utf8Type)), Arc::new(Int8Type));
		assert!(lhs.equals(&rhs));

		let different = MapType::new(Arc::new(Int8Type), Arc::new(Int8Type));
		assert!(!lhs.equals(&different));
		assert!(!lhs.equals(&Utf8Type));
	}

	#[test]
	fn test_meta_has_two_children() {
		let meta = map_utf8_int().to_column_meta();
		assert_eq!(meta.type_tag, Type::Map);
		assert_eq!(meta.children.len(), 2);
		assert_eq!(meta.children[0].type_tag, Type::Utf8);
		assert!(meta.children[0].nullable);
		assert_eq!(meta.children[1].type_tag, Type::Int8);
	}
}
