// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

use thiserror::Error;

/// The library's error type
#[derive(Error, Debug)]
pub enum Spake2Error {
    /// Error for when the source of randomness could not produce the ephemeral key
    #[error("Could not obtain randomness for the ephemeral key")]
    AllocationError(#[from] rand_core::Error),
    /// Error for when the peer's message is malformed or fails validation. Does
    /// not say which check failed.
    #[error("Invalid protocol message")]
    InvalidMessage,
    /// Error for when an operation is attempted on a destroyed context
    #[error("The context was destroyed")]
    Destroyed,
    /// Error for when an operation is not valid in the current protocol state
    #[error("Operation not valid in the current protocol state")]
    NotReady,
    /// Error for when an empty password is supplied
    #[error("The password must not be empty")]
    EmptyPassword,
}
