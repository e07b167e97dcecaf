// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

use tracing::error;

use super::{Diagnostic, Error, IntoDiagnostic};
use crate::fragment::Fragment;

/// Caller contract breaches. These indicate a bug in the calling code,
/// not bad user data: processing must stop, never retry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvariantViolation {
	#[error("row range {start}..{} exceeds source row count {size}", start + length)]
	RangeOutOfBounds {
		start: usize,
		length: usize,
		size: usize,
	},

	#[error("permutation holds {actual} indices but {required} are required")]
	PermutationTooShort {
		required: usize,
		actual: usize,
	},

	#[error("replicate counts length {counts} does not match row count {rows}")]
	ReplicateCountMismatch {
		counts: usize,
		rows: usize,
	},

	#[error("map keys array has {keys} rows but values array has {values}")]
	CardinalityMismatch {
		keys: usize,
		values: usize,
	},

	#[error("filter mask covers {mask} rows but the column holds {rows}")]
	FilterMaskMismatch {
		mask: usize,
		rows: usize,
	},
}

impl IntoDiagnostic for InvariantViolation {
	fn into_diagnostic(self) -> Diagnostic {
		let (code, message) = match &self {
			InvariantViolation::RangeOutOfBounds {
				..
			} => ("INVARIANT_001", self.to_string()),
			InvariantViolation::PermutationTooShort {
				..
			} => ("INVARIANT_002", self.to_string()),
			InvariantViolation::ReplicateCountMismatch {
				..
			} => ("INVARIANT_003", self.to_string()),
			InvariantViolation::CardinalityMismatch {
				..
			} => ("INVARIANT_004", self.to_string()),
			InvariantViolation::FilterMaskMismatch {
				..
			} => ("INVARIANT_005", self.to_string()),
		};

		Diagnostic {
			code: code.to_string(),
			message,
			fragment: Fragment::None,
			label: Some("invariant violated".to_string()),
			help: Some("this is a caller bug - please report this issue".to_string()),
			notes: vec![],
			cause: None,
		}
	}
}

impl From<InvariantViolation> for Error {
	fn from(err: InvariantViolation) -> Self {
		error!("invariant violated: {}", err);
		Error(err.into_diagnostic())
	}
}
