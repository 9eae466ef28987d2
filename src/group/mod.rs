// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

//! edwards25519 operations used by SPAKE2


use crate::errors::Spake2Error;
use crate::protocol::Role;
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::traits::Identity;
use curve25519_dalek::Scalar;
use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use std::sync::OnceLock;
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroizing;

/// Seeds for the two blinding constants. Alice blinds with M, Bob with N.
pub(crate) const SEED_M: &[u8] = b"edwards25519 point generation seed (M)";
pub(crate) const SEED_N: &[u8] = b"edwards25519 point generation seed (N)";

const COFACTOR: u8 = 8;

/*
Nothing-up-my-sleeve point generation:

def genpoint(seed):
    v = sha256(seed)
    while True:
        try:
            return decodepoint(v)
        except NotOnCurve:
            v = sha256(v)
*/
pub(crate) fn generate_point(seed: &[u8]) -> EdwardsPoint {
    let mut candidate = [0u8; 32];
    candidate.copy_from_slice(&Sha256::digest(seed));
    loop {
        if let Some(point) = CompressedEdwardsY(candidate).decompress() {
            return point;
        }
        let next = Sha256::digest(candidate);
        candidate.copy_from_slice(&next);
    }
}

/// Projects a point onto the prime-order subgroup, dropping its torsion component.
///
/// Scaling the raw constant by a password scalar that is a multiple of the
/// cofactor gives the same point as scaling this projection by the reduced
/// password scalar, so messages stay in the prime-order subgroup.
pub(crate) fn prime_order_component(point: &EdwardsPoint) -> EdwardsPoint {
    point.mul_by_cofactor() * Scalar::from(COFACTOR).invert()
}

/// The constant point used to blind messages sent by `role`
pub(crate) fn blinding_point(role: Role) -> &'static EdwardsPoint {
    static M: OnceLock<EdwardsPoint> = OnceLock::new();
    static N: OnceLock<EdwardsPoint> = OnceLock::new();

    match role {
        Role::Alice => M.get_or_init(|| prime_order_component(&generate_point(SEED_M))),
        Role::Bob => N.get_or_init(|| prime_order_component(&generate_point(SEED_N))),
    }
}

/// Samples a uniformly random scalar from 64 bytes of the given RNG
pub(crate) fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Scalar, Spake2Error> {
    let mut wide = Zeroizing::new([0u8; 64]);
    rng.try_fill_bytes(&mut wide[..])?;
    Ok(Scalar::from_bytes_mod_order_wide(&wide))
}

/// Reduces the SHA-512 hash of the password to a scalar
pub(crate) fn password_scalar(password_hash: &[u8; 64]) -> Scalar {
    Scalar::from_bytes_mod_order_wide(password_hash)
}

/// `T = (8x)·G + pw·constant`
///
/// The ephemeral scalar is multiplied by the cofactor so that the same factor
/// clears any torsion in the peer's point in [`unblind`].
pub(crate) fn blind(x: &Scalar, pw: &Scalar, constant: &EdwardsPoint) -> EdwardsPoint {
    EdwardsPoint::mul_base(x).mul_by_cofactor() + constant * pw
}

/// Decodes a peer element, reporting whether it is acceptable.
///
/// An element is acceptable when it decompresses, its encoding is canonical,
/// it is not of small order (this covers the identity) and it lies in the
/// prime-order subgroup. An undecodable element is replaced by the identity so
/// that callers can run the rest of the computation unconditionally.
pub(crate) fn decode_element(bytes: &[u8; 32]) -> (EdwardsPoint, Choice) {
    let (point, decoded) = match CompressedEdwardsY(*bytes).decompress() {
        Some(point) => (point, Choice::from(1)),
        None => (EdwardsPoint::identity(), Choice::from(0)),
    };

    let canonical = point.compress().as_bytes()[..].ct_eq(&bytes[..]);
    let small_order = Choice::from(u8::from(point.is_small_order()));
    let torsion_free = Choice::from(u8::from(point.is_torsion_free()));

    (point, decoded & canonical & !small_order & torsion_free)
}

/// `K = x·(8·(peer − pw·constant))`, the Diffie-Hellman point of the exchange
pub(crate) fn unblind(
    x: &Scalar,
    peer: &EdwardsPoint,
    constant: &EdwardsPoint,
    pw: &Scalar,
) -> EdwardsPoint {
    (peer - constant * pw).mul_by_cofactor() * x
}

pub(crate) fn is_identity(point: &EdwardsPoint) -> Choice {
    point.ct_eq(&EdwardsPoint::identity())
}
