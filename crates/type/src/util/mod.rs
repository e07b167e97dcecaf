// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Basalt

pub mod bitvec;
