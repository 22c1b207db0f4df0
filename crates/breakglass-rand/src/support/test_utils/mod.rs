// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for mocking entropy sources.
//!
//! Provides a failing mock and a deterministic source for reproducible splits.

mod fixed_entropy_source;
mod mock_entropy_source;

pub use fixed_entropy_source::FixedEntropySource;
pub use mock_entropy_source::{MockEntropySource, MockEntropySourceBehaviour};
