// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

use basalt_type::Type;
use serde::{Deserialize, Serialize};

/// Type-metadata tree node handed to schema exchange. Composite types
/// carry their element types as children; a map node has exactly two,
/// key type then value type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMeta {
	pub type_tag: Type,
	pub nullable: bool,
	pub children: Vec<ColumnMeta>,
}

impl ColumnMeta {
	pub fn leaf(type_tag: Type, nullable: bool) -> Self {
		Self {
			type_tag,
			nullable,
			children: Vec::new(),
		}
	}
}
