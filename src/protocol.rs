// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

//! The protocol implementation

use crate::errors::Spake2Error;
use crate::group;
use crate::messages::{Message, SharedKey};
use crate::transcript;
use core::fmt;
use curve25519_dalek::Scalar;
use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

type Result<T> = core::result::Result<T, Spake2Error>;

/// The role a party plays in the protocol
///
/// The two parties must take opposite roles. The role decides which constant
/// point blinds the party's message and where its values sit in the transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Party A, blinds with the constant M
    Alice,
    /// Party B, blinds with the constant N
    Bob,
}

impl Role {
    /// The role the other party must take
    pub fn peer(self) -> Self {
        match self {
            Role::Alice => Role::Bob,
            Role::Bob => Role::Alice,
        }
    }
}

/// Lifecycle of a [`Spake2Engine`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Spake2State {
    /// The ephemeral key exists but no message has been produced
    Created,
    /// The outbound message has been produced
    MessageGenerated,
    /// The shared key has been derived; the session's secrets are gone
    KeyDerived,
    /// The context was destroyed, explicitly or after a rejected message
    Destroyed,
}

#[derive(Zeroize)]
struct Secrets {
    private_scalar: Scalar,
    password_scalar: Scalar,
    password_hash: [u8; 64],
}

/// One party's side of a single SPAKE2 exchange
///
/// A context is single-use: it produces one message, accepts one message from
/// the peer and yields one [`SharedKey`]. All secret material is zeroized once
/// the key is derived, when a peer message is rejected, on [`destroy`] and on
/// drop.
///
/// Every operation that changes the context takes `&mut self`. Sharing one
/// context between threads therefore needs external synchronization.
///
/// [`destroy`]: Spake2Engine::destroy
pub struct Spake2Engine {
    role: Role,
    my_name: Vec<u8>,
    their_name: Vec<u8>,
    secrets: Secrets,
    my_message: Option<Message>,
    state: Spake2State,
}

impl Spake2Engine {
    /// Creates a context for `role`, drawing the ephemeral key from the
    /// operating system's RNG.
    ///
    /// `my_name` and `their_name` are bound into the derived key; the peer
    /// must pass the same two values with the order swapped. Either may be
    /// empty.
    #[cfg(feature = "getrandom")]
    pub fn new(role: Role, my_name: &[u8], their_name: &[u8]) -> Result<Self> {
        Self::new_with_rng(role, my_name, their_name, &mut rand_core::OsRng)
    }

    /// Creates a context for `role`, drawing the ephemeral key from `rng`
    pub fn new_with_rng<R: RngCore + CryptoRng>(
        role: Role,
        my_name: &[u8],
        their_name: &[u8],
        rng: &mut R,
    ) -> Result<Self> {
        let private_scalar = group::random_scalar(rng).map_err(|e| {
            tracing::warn!(?role, "could not draw an ephemeral scalar");
            e
        })?;

        tracing::debug!(?role, "created SPAKE2 context");

        Ok(Self {
            role,
            my_name: my_name.to_vec(),
            their_name: their_name.to_vec(),
            secrets: Secrets {
                private_scalar,
                password_scalar: Scalar::ZERO,
                password_hash: [0u8; 64],
            },
            my_message: None,
            state: Spake2State::Created,
        })
    }

    /// Produces the message to send to the peer.
    ///
    /// Calling this again with the same password returns the same message. The
    /// ephemeral key is never regenerated, so a different password is refused
    /// with [`Spake2Error::NotReady`]: two messages blinded with different
    /// passwords under one key would let an observer test guesses offline.
    pub fn generate_message(&mut self, password: &[u8]) -> Result<Message> {
        match self.state {
            Spake2State::Destroyed => return Err(Spake2Error::Destroyed),
            Spake2State::KeyDerived => return Err(Spake2Error::NotReady),
            Spake2State::Created | Spake2State::MessageGenerated => {}
        }
        if password.is_empty() {
            return Err(Spake2Error::EmptyPassword);
        }

        let mut password_hash = Zeroizing::new([0u8; 64]);
        password_hash.copy_from_slice(&Sha512::digest(password));

        if let Some(message) = self.my_message {
            if bool::from(self.secrets.password_hash[..].ct_eq(&password_hash[..])) {
                return Ok(message);
            }
            tracing::debug!(role = ?self.role, "refused to blind a second password");
            return Err(Spake2Error::NotReady);
        }

        let password_scalar = group::password_scalar(&password_hash);
        let mut blinded = group::blind(
            &self.secrets.private_scalar,
            &password_scalar,
            group::blinding_point(self.role),
        );
        let message = Message(blinded.compress().to_bytes());
        blinded.zeroize();

        self.secrets.password_hash = *password_hash;
        self.secrets.password_scalar = password_scalar;
        self.my_message = Some(message);
        self.state = Spake2State::MessageGenerated;

        tracing::debug!(role = ?self.role, "generated outbound message");
        Ok(message)
    }

    /// Consumes the peer's message and derives the shared key.
    ///
    /// Only valid after [`generate_message`](Self::generate_message). Any
    /// problem with the peer's message is reported as
    /// [`Spake2Error::InvalidMessage`] and ends the session: the context is
    /// destroyed and no key is returned. A mismatched password is not an error
    /// here; it yields a key that differs from the peer's.
    pub fn process_message(&mut self, their_message: &[u8]) -> Result<SharedKey> {
        let my_message = match (self.state, self.my_message) {
            (Spake2State::Destroyed, _) => return Err(Spake2Error::Destroyed),
            (Spake2State::MessageGenerated, Some(message)) => message,
            _ => return Err(Spake2Error::NotReady),
        };

        let result = self.derive_key(&my_message, their_message);
        self.secrets.zeroize();

        match result {
            Ok(key) => {
                self.state = Spake2State::KeyDerived;
                tracing::debug!(role = ?self.role, "derived shared key");
                Ok(key)
            }
            Err(e) => {
                self.state = Spake2State::Destroyed;
                tracing::debug!(role = ?self.role, "rejected peer message, session aborted");
                Err(e)
            }
        }
    }

    fn derive_key(&self, my_message: &Message, their_message: &[u8]) -> Result<SharedKey> {
        let their_message = Message::from_bytes(their_message)?;
        let (their_element, acceptable) = group::decode_element(their_message.as_bytes());

        let mut shared_point = group::unblind(
            &self.secrets.private_scalar,
            &their_element,
            group::blinding_point(self.role.peer()),
            &self.secrets.password_scalar,
        );
        let acceptable = acceptable & !group::is_identity(&shared_point);
        let shared_point_bytes = Zeroizing::new(shared_point.compress().to_bytes());
        shared_point.zeroize();

        let key = transcript::derive_key(
            self.role,
            &self.my_name,
            &self.their_name,
            my_message,
            &their_message,
            &shared_point_bytes,
            &self.secrets.password_hash,
        );

        if bool::from(acceptable) {
            Ok(key)
        } else {
            Err(Spake2Error::InvalidMessage)
        }
    }

    /// Zeroizes all secret material and marks the context as destroyed.
    /// Idempotent; every other operation fails with [`Spake2Error::Destroyed`]
    /// afterwards.
    pub fn destroy(&mut self) {
        self.secrets.zeroize();
        if self.state != Spake2State::Destroyed {
            self.state = Spake2State::Destroyed;
            tracing::debug!(role = ?self.role, "destroyed SPAKE2 context");
        }
    }

    /// Whether [`destroy`](Self::destroy) has been called, or the session was
    /// aborted after a rejected message
    pub fn is_destroyed(&self) -> bool {
        self.state == Spake2State::Destroyed
    }

    /// The role this context was created with
    pub fn role(&self) -> Role {
        self.role
    }

    /// The current lifecycle state
    pub fn state(&self) -> Spake2State {
        self.state
    }

    #[cfg(test)]
    pub(crate) fn secrets_are_zeroed(&self) -> bool {
        self.secrets.private_scalar == Scalar::ZERO
            && self.secrets.password_scalar == Scalar::ZERO
            && self.secrets.password_hash.iter().all(|byte| *byte == 0)
    }
}

impl Drop for Spake2Engine {
    fn drop(&mut self) {
        self.secrets.zeroize();
    }
}

impl fmt::Debug for Spake2Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spake2Engine")
            .field("role", &self.role)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
