// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

use std::cmp::Ordering;

/// Injected ordering for textual payloads. The default (non-collated)
/// paths compare raw bytes; a collator replaces that with a
/// locale-or-convention aware ordering while leaving the stored bytes
/// untouched.
pub trait Collator: Send + Sync {
	fn compare(&self, lhs: &[u8], rhs: &[u8]) -> Ordering;
}

/// ASCII case-insensitive ordering: bytes compare through
/// `to_ascii_lowercase`, non-ASCII bytes compare as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseInsensitive;

impl Collator for CaseInsensitive {
	fn compare(&self, lhs: &[u8], rhs: &[u8]) -> Ordering {
		let lhs = lhs.iter().map(u8::to_ascii_lowercase);
		let rhs = rhs.iter().map(u8::to_ascii_lowercase);
		lhs.cmp(rhs)
	}
}
