// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

pub mod collation;
pub mod container;
pub mod types;

pub use collation::{CaseInsensitive, Collator};
pub use container::{ArrayColumn, Column, Int8Container, MapColumn, NullableColumn, VarlenContainer};
pub use types::{
	ArrayType, ColumnMeta, DataType, DataTypeRef, Int8Type, MapType, NullableType, Utf8Type, make_nullable,
};
