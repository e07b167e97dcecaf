// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

pub mod error;
pub mod fragment;
pub mod util;
pub mod value;

pub use error::{ColumnError, Diagnostic, Error, IntoDiagnostic, InvariantViolation, Result};
pub use fragment::Fragment;
pub use util::bitvec::BitVec;
pub use value::{Type, Value};
