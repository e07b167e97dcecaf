// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Tag identifying a logical type. Composite types carry their element
/// descriptors separately; the tag only names the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	Utf8,
	Int8,
	Nullable,
	Array,
	Map,
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Type::Utf8 => f.write_str("Utf8"),
			Type::Int8 => f.write_str("Int8"),
			Type::Nullable => f.write_str("Nullable"),
			Type::Array => f.write_str("Array"),
			Type::Map => f.write_str("Map"),
		}
	}
}
