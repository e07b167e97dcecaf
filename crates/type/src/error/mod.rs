// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

mod column;
mod invariant;

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

pub use column::ColumnError;
pub use invariant::InvariantViolation;

use crate::fragment::Fragment;

/// A fully rendered error: stable code, human message and the input
/// fragment it refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub fragment: Fragment,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Error(pub Diagnostic);

impl Error {
	pub fn diagnostic(&self) -> &Diagnostic {
		&self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}

	/// Invariant violations indicate a caller bug; they are never
	/// retried or downgraded to user input errors.
	pub fn is_invariant_violation(&self) -> bool {
		self.0.code.starts_with("INVARIANT_")
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "[{}] {}", self.0.code, self.0.message)?;
		if !self.0.fragment.text().is_empty() {
			write!(f, ": '{}'", self.0.fragment.text())?;
		}
		Ok(())
	}
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
