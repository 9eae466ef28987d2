// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

//! Transcript hashing for the final key derivation

use crate::messages::{Message, SharedKey, KEY_SIZE};
use crate::protocol::Role;
use sha2::{Digest, Sha512};

/// Feeds `data` into the hash, preceded by its length as a little-endian u64
pub(crate) fn update_with_length_prefix(hasher: &mut Sha512, data: &[u8]) {
    hasher.update((data.len() as u64).to_le_bytes());
    hasher.update(data);
}

/*
key = SHA-512(
    lp(alice_name) || lp(bob_name) ||
    lp(alice_message) || lp(bob_message) ||
    lp(K) || lp(SHA-512(password))
)

Each party maps (my, their) onto (alice, bob) according to its own role, so
both ends hash identical bytes.
*/
pub(crate) fn derive_key(
    role: Role,
    my_name: &[u8],
    their_name: &[u8],
    my_message: &Message,
    their_message: &Message,
    shared_point: &[u8; 32],
    password_hash: &[u8; 64],
) -> SharedKey {
    let (alice_name, bob_name, alice_message, bob_message) = match role {
        Role::Alice => (my_name, their_name, my_message, their_message),
        Role::Bob => (their_name, my_name, their_message, my_message),
    };

    let mut hasher = Sha512::new();
    for field in [
        alice_name,
        bob_name,
        alice_message.as_bytes().as_slice(),
        bob_message.as_bytes().as_slice(),
        shared_point.as_slice(),
        password_hash.as_slice(),
    ] {
        update_with_length_prefix(&mut hasher, field);
    }

    let mut key = SharedKey([0u8; KEY_SIZE]);
    key.0.copy_from_slice(&hasher.finalize());
    key
}
