// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

use spake2_engine::rand_core::OsRng;
use spake2_engine::Message;
use spake2_engine::Role;
use spake2_engine::Spake2Engine;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let password = b"correct horse battery staple";

    let mut alice_rng = OsRng;
    let mut alice = Spake2Engine::new_with_rng(Role::Alice, b"alice", b"bob", &mut alice_rng)
        .expect("Error with Spake2Engine::new_with_rng()");
    let mut bob =
        Spake2Engine::new(Role::Bob, b"bob", b"alice").expect("Error with Spake2Engine::new()");

    let alice_message_serialized = alice
        .generate_message(password)
        .expect("Error with Spake2Engine::generate_message()")
        .to_bytes();
    println!(
        "alice message ({} bytes): {:?}",
        alice_message_serialized.len(),
        hex::encode(alice_message_serialized)
    );

    let bob_message_serialized = bob
        .generate_message(password)
        .expect("Error with Spake2Engine::generate_message()")
        .to_bytes();
    println!(
        "bob message ({} bytes): {:?}",
        bob_message_serialized.len(),
        hex::encode(bob_message_serialized)
    );

    let bob_message_deserialized =
        Message::from_bytes(&bob_message_serialized).expect("Error with Message::from_bytes()");
    let alice_key = alice
        .process_message(bob_message_deserialized.as_bytes())
        .expect("Error with Spake2Engine::process_message()");
    let bob_key = bob
        .process_message(&alice_message_serialized)
        .expect("Error with Spake2Engine::process_message()");

    println!(
        "alice key ({} bytes): {:?}",
        alice_key.len(),
        hex::encode(alice_key.as_bytes())
    );

    alice.destroy();
    bob.destroy();

    assert_eq!(alice_key, bob_key);
}
