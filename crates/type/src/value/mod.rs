// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

pub mod r#type;

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

pub use r#type::Type;

/// A single materialized value pulled out of a column, e.g. by
/// `get_extremes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
	Undefined,
	Int8(i64),
	Utf8(String),
	Bytes(Vec<u8>),
}

impl Value {
	pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
		Value::Bytes(data.into())
	}

	/// The empty-bytes sentinel returned for extremes of an empty column.
	pub fn empty_bytes() -> Self {
		Value::Bytes(Vec::new())
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Int8(v) => write!(f, "{}", v),
			Value::Utf8(v) => f.write_str(v),
			Value::Bytes(v) => write!(f, "{}", String::from_utf8_lossy(v)),
		}
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_empty_bytes_sentinel() {
		assert_eq!(Value::empty_bytes(), Value::Bytes(vec![]));
	}

	#[test]
	fn test_display() {
		assert_eq!(Value::Int8(-3).to_string(), "-3");
		assert_eq!(Value::bytes(*b"abc").to_string(), "abc");
	}
}
