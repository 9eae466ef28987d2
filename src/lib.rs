// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

//! An implementation of the SPAKE2 password authenticated key exchange (PAKE)
//! over edwards25519
//!
//! ⚠️ **Warning**: This implementation has not been audited. Use at your own risk!
//!
//! # Overview
//!
//! SPAKE2 is a protocol between two parties, Alice and Bob, who share a
//! (possibly low-entropy) password. Each party sends exactly one message to the
//! other. Afterwards both hold a [`SharedKey`]. If the two participants used the
//! same password and agree on each other's names, their keys match. Otherwise
//! the keys will not match, and are (computationally) uncorrelated.
//!
//! A passive observer learns nothing about the password, and an active attacker
//! learns at most whether a single guessed password was right per exchange.
//!
//! # Setup
//!
//! Each party creates a [`Spake2Engine`] for its [`Role`]. The two parties must
//! take opposite roles, and pass their own name first:
//!
//! ```
//! use spake2_engine::{Role, Spake2Engine};
//!
//! let alice = Spake2Engine::new(Role::Alice, b"alice", b"bob")
//!     .expect("Error with Spake2Engine::new()");
//! let bob = Spake2Engine::new(Role::Bob, b"bob", b"alice")
//!     .expect("Error with Spake2Engine::new()");
//! ```
//!
//! The ephemeral key is drawn from the operating system's RNG. Use
//! [`Spake2Engine::new_with_rng`] to supply another source of randomness.
//!
//! # Protocol Execution
//!
//! ## Generating messages
//!
//! Each party produces its message from the password, and sends it to the
//! other party:
//!
//! ```
//! # use spake2_engine::{Role, Spake2Engine};
//! # let mut alice = Spake2Engine::new(Role::Alice, b"alice", b"bob")
//! #     .expect("Error with Spake2Engine::new()");
//! # let mut bob = Spake2Engine::new(Role::Bob, b"bob", b"alice")
//! #     .expect("Error with Spake2Engine::new()");
//! let alice_message = alice
//!     .generate_message(b"correct horse battery staple")
//!     .expect("Error with Spake2Engine::generate_message()");
//! let alice_message_bytes = alice_message.as_bytes();
//! // Send alice_message_bytes over the wire to Bob
//!
//! let bob_message = bob
//!     .generate_message(b"correct horse battery staple")
//!     .expect("Error with Spake2Engine::generate_message()");
//! let bob_message_bytes = bob_message.as_bytes();
//! // Send bob_message_bytes over the wire to Alice
//! ```
//!
//! ## Processing messages
//!
//! Each party then processes the message it received, which yields the shared
//! key:
//!
//! ```
//! # use spake2_engine::{Role, Spake2Engine};
//! # let mut alice = Spake2Engine::new(Role::Alice, b"alice", b"bob")
//! #     .expect("Error with Spake2Engine::new()");
//! # let mut bob = Spake2Engine::new(Role::Bob, b"bob", b"alice")
//! #     .expect("Error with Spake2Engine::new()");
//! # let alice_message = alice
//! #     .generate_message(b"correct horse battery staple")
//! #     .expect("Error with Spake2Engine::generate_message()");
//! # let alice_message_bytes = alice_message.as_bytes();
//! # let bob_message = bob
//! #     .generate_message(b"correct horse battery staple")
//! #     .expect("Error with Spake2Engine::generate_message()");
//! # let bob_message_bytes = bob_message.as_bytes();
//! let alice_key = alice
//!     .process_message(bob_message_bytes)
//!     .expect("Error with Spake2Engine::process_message()");
//! let bob_key = bob
//!     .process_message(alice_message_bytes)
//!     .expect("Error with Spake2Engine::process_message()");
//!
//! assert_eq!(alice_key, bob_key);
//! assert_eq!(alice_key.len(), spake2_engine::KEY_SIZE);
//! ```
//!
//! Matching keys are not reported by the protocol itself: a wrong password does
//! not cause an error, it causes a different key. Applications typically
//! confirm the key before relying on it.
//!
//! ## Teardown
//!
//! Secrets are wiped as soon as the key is derived, and again when the context
//! is dropped. [`Spake2Engine::destroy`] wipes them explicitly; afterwards
//! every operation fails with [`Spake2Error::Destroyed`]:
//!
//! ```
//! # use spake2_engine::{Role, Spake2Engine, Spake2Error};
//! let mut alice = Spake2Engine::new(Role::Alice, b"alice", b"bob")
//!     .expect("Error with Spake2Engine::new()");
//! alice.destroy();
//! assert!(alice.is_destroyed());
//! assert!(matches!(
//!     alice.generate_message(b"password"),
//!     Err(Spake2Error::Destroyed)
//! ));
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(clippy::doc_markdown, missing_docs, rustdoc::all)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod errors;
mod group;
mod messages;
mod protocol;
mod transcript;

#[cfg(test)]
mod tests;

pub use errors::Spake2Error;
pub use messages::{Message, SharedKey, KEY_SIZE, MESSAGE_SIZE};
pub use protocol::{Role, Spake2Engine, Spake2State};
pub use rand_core;
