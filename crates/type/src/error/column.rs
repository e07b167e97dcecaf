// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

use super::{Diagnostic, Error, IntoDiagnostic};
use crate::fragment::Fragment;

/// Recoverable errors caused by malformed user data. The caller decides
/// whether to abort the batch, skip the row or surface the message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColumnError {
	#[error("map does not start with '{{' character")]
	MapMissingOpeningBrace {
		fragment: Fragment,
	},

	#[error("map does not end with '}}' character")]
	MapMissingClosingBrace {
		fragment: Fragment,
	},

	#[error("cannot read map key from text '{}'", fragment.text())]
	MapInvalidKeySlot {
		fragment: Fragment,
	},

	#[error("cannot read map value from text '{}'", fragment.text())]
	MapInvalidValueSlot {
		fragment: Fragment,
	},

	#[error("array is not enclosed in '[' and ']'")]
	ArrayMissingBrackets {
		fragment: Fragment,
	},

	#[error("cannot read array element from text '{}'", fragment.text())]
	ArrayInvalidSlot {
		fragment: Fragment,
	},

	#[error("'{}' is not a valid integer", fragment.text())]
	InvalidNumberFormat {
		fragment: Fragment,
	},

	#[error("serialized value needs {expected} bytes but only {remaining} remain")]
	SerializedValueTruncated {
		expected: u64,
		remaining: usize,
	},

	#[error("serialized offsets decrease from {previous} to {next}")]
	SerializedOffsetsCorrupt {
		previous: u64,
		next: u64,
	},

	#[error("serialized block declares {declared} nested rows but {decoded} were decoded")]
	SerializedBlockMismatch {
		declared: u64,
		decoded: u64,
	},
}

impl IntoDiagnostic for ColumnError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			ColumnError::MapMissingOpeningBrace {
				fragment,
			} => Diagnostic {
				code: "MAP_001".to_string(),
				message: "map does not start with '{' character".to_string(),
				fragment,
				label: Some("malformed map literal".to_string()),
				help: Some("a map literal has the form {key:value, ...}".to_string()),
				notes: vec!["valid: {}".to_string(), "valid: {'a':1, 'b':2}".to_string()],
				cause: None,
			},

			ColumnError::MapMissingClosingBrace {
				fragment,
			} => Diagnostic {
				code: "MAP_002".to_string(),
				message: "map does not end with '}' character".to_string(),
				fragment,
				label: Some("malformed map literal".to_string()),
				help: Some("a map literal has the form {key:value, ...}".to_string()),
				notes: vec![],
				cause: None,
			},

			ColumnError::MapInvalidKeySlot {
				fragment,
			} => Diagnostic {
				code: "MAP_003".to_string(),
				message: format!("cannot read map key from text '{}'", fragment.text()),
				fragment,
				label: Some("malformed map key".to_string()),
				help: Some(
					"keys may be quoted with \" or ' and must be followed by ':'".to_string(),
				),
				notes: vec![],
				cause: None,
			},

			ColumnError::MapInvalidValueSlot {
				fragment,
			} => Diagnostic {
				code: "MAP_004".to_string(),
				message: format!("cannot read map value from text '{}'", fragment.text()),
				fragment,
				label: Some("malformed map value".to_string()),
				help: Some(
					"values may be quoted with \" or ' and must be followed by ',' or '}'"
						.to_string(),
				),
				notes: vec![],
				cause: None,
			},

			ColumnError::ArrayMissingBrackets {
				fragment,
			} => Diagnostic {
				code: "ARRAY_001".to_string(),
				message: "array is not enclosed in '[' and ']'".to_string(),
				fragment,
				label: Some("malformed array literal".to_string()),
				help: Some("an array literal has the form [element, ...]".to_string()),
				notes: vec![],
				cause: None,
			},

			ColumnError::ArrayInvalidSlot {
				fragment,
			} => Diagnostic {
				code: "ARRAY_002".to_string(),
				message: format!("cannot read array element from text '{}'", fragment.text()),
				fragment,
				label: Some("malformed array element".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},

			ColumnError::InvalidNumberFormat {
				fragment,
			} => Diagnostic {
				code: "NUMBER_001".to_string(),
				message: "invalid number format".to_string(),
				label: Some(format!("'{}' is not a valid integer", fragment.text())),
				fragment,
				help: Some("use integer format (e.g., 123, -456)".to_string()),
				notes: vec!["valid: 123".to_string(), "valid: -456".to_string()],
				cause: None,
			},

			ColumnError::SerializedValueTruncated {
				expected,
				remaining,
			} => Diagnostic {
				code: "SERDE_001".to_string(),
				message: format!(
					"serialized value needs {} bytes but only {} remain",
					expected, remaining
				),
				fragment: Fragment::None,
				label: Some("truncated serialized value".to_string()),
				help: Some(
					"the buffer must contain a full [length][bytes] encoded value".to_string(),
				),
				notes: vec![],
				cause: None,
			},

			ColumnError::SerializedOffsetsCorrupt {
				previous,
				next,
			} => Diagnostic {
				code: "SERDE_002".to_string(),
				message: format!("serialized offsets decrease from {} to {}", previous, next),
				fragment: Fragment::None,
				label: Some("corrupt serialized block".to_string()),
				help: Some("offsets in an encoded block must be non-decreasing".to_string()),
				notes: vec![],
				cause: None,
			},

			ColumnError::SerializedBlockMismatch {
				declared,
				decoded,
			} => Diagnostic {
				code: "SERDE_003".to_string(),
				message: format!(
					"serialized block declares {} nested rows but {} were decoded",
					declared, decoded
				),
				fragment: Fragment::None,
				label: Some("corrupt serialized block".to_string()),
				help: Some(
					"the nested block's row count must match the enclosing block's layout"
						.to_string(),
				),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<ColumnError> for Error {
	fn from(err: ColumnError) -> Self {
		Error(err.into_diagnostic())
	}
}
