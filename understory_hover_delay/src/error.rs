// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding errors.

use core::fmt;

/// Error returned when a hover binding cannot be registered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BindError {
    /// A selector binding was requested with an empty or blank selector.
    EmptySelector,
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySelector => f.write_str("hover binding requires a non-empty selector"),
        }
    }
}

impl core::error::Error for BindError {}
