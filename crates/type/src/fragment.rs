// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

use serde::{Deserialize, Serialize};

/// A snippet of the input a diagnostic points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fragment {
	/// No fragment information available
	None,

	/// Fragment from internal/runtime code
	Internal {
		text: String,
	},
}

impl Fragment {
	/// Create a new Internal fragment
	pub fn internal(text: impl Into<String>) -> Self {
		Fragment::Internal {
			text: text.into(),
		}
	}

	/// Get the text value of the fragment
	pub fn text(&self) -> &str {
		match self {
			Fragment::None => "",
			Fragment::Internal {
				text,
			} => text,
		}
	}
}

impl Default for Fragment {
	fn default() -> Self {
		Fragment::None
	}
}
