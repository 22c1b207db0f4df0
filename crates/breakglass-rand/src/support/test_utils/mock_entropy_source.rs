// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Failure plan for [`MockEntropySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Every call succeeds with OS randomness.
    None,
    /// Every call fails.
    FailAlways,
    /// Only call number `n` fails (1-indexed).
    FailAtNthFillBytes(usize),
}

impl MockEntropySourceBehaviour {
    fn fails_at(self, call: usize) -> bool {
        match self {
            Self::None => false,
            Self::FailAlways => true,
            Self::FailAtNthFillBytes(n) => call == n,
        }
    }
}

/// OS randomness with scripted failures and a call counter.
///
/// Failed calls leave the destination untouched and still count.
#[derive(Debug)]
pub struct MockEntropySource {
    behaviour: MockEntropySourceBehaviour,
    calls: Cell<usize>,
}

impl MockEntropySource {
    /// Creates a mock following `behaviour`.
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self {
            behaviour,
            calls: Cell::new(0),
        }
    }

    /// Switches to a new failure plan. The call counter keeps running.
    pub fn change_behaviour(&mut self, behaviour: MockEntropySourceBehaviour) {
        self.behaviour = behaviour;
    }

    /// Sets the call counter back to zero.
    pub fn reset_count(&self) {
        self.calls.set(0);
    }

    /// Number of `fill_bytes` calls so far, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let call = self.calls.get() + 1;
        self.calls.set(call);

        if self.behaviour.fails_at(call) {
            return Err(EntropyError::EntropyNotAvailable);
        }

        SystemEntropySource {}.fill_bytes(dest)
    }
}
