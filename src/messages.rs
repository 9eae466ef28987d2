// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

//! The message and output types exchanged in the SPAKE2 protocol

use crate::errors::Spake2Error;
use core::fmt;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size in bytes of a protocol message (a compressed edwards25519 point)
pub const MESSAGE_SIZE: usize = 32;

/// Size in bytes of the derived shared key (a SHA-512 output)
pub const KEY_SIZE: usize = 64;

/// The single message each party sends to the other
///
/// A message is the encoding of the sender's blinded ephemeral point. It is not
/// secret, but a received message is only trusted once
/// [`Spake2Engine::process_message`](crate::Spake2Engine::process_message) has
/// validated it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Message(pub(crate) [u8; MESSAGE_SIZE]);

impl Message {
    /// Parses a message received over the wire. Only the length is checked here;
    /// point validation happens when the message is processed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Spake2Error> {
        let arr: [u8; MESSAGE_SIZE] = bytes
            .try_into()
            .map_err(|_| Spake2Error::InvalidMessage)?;
        Ok(Self(arr))
    }

    /// The serialized form of the message, to be sent to the peer
    pub fn as_bytes(&self) -> &[u8; MESSAGE_SIZE] {
        &self.0
    }

    /// Consumes the message, returning its serialized form
    pub fn to_bytes(self) -> [u8; MESSAGE_SIZE] {
        self.0
    }
}

impl AsRef<[u8]> for Message {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; MESSAGE_SIZE]> for Message {
    fn from(bytes: [u8; MESSAGE_SIZE]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Message(")?;
        for byte in self.0.iter() {
            write!(f, "{byte:02x}")?;
        }
        f.write_str(")")
    }
}

/// The output of the SPAKE2 protocol
///
/// Both parties end up with equal keys if and only if they used the same
/// password and agreed on the bound identities. The key is wiped from memory
/// when dropped and compares in constant time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedKey(pub(crate) [u8; KEY_SIZE]);

impl SharedKey {
    /// The raw key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    /// Length of the key in bytes, always [`KEY_SIZE`]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl AsRef<[u8]> for SharedKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl ConstantTimeEq for SharedKey {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for SharedKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SharedKey {}

impl fmt::Debug for SharedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedKey(..)")
    }
}
