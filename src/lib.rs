#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

//! Stateful hash-based signatures after RFC 8554: Leighton-Micali one-time
//! signature trees (LMS) and their hierarchical composition (HSS).
//!
//! Keys are stateful. Every signature consumes one leaf of the bottom tree,
//! so a signing key must never be copied or restored from an old snapshot
//! once it has issued signatures. All randomness is drawn from an explicit
//! [`EntropySource`] passed by the caller.
//!
//! ```
//! use lms_hss::{keygen, HssParameter, LmotsAlgorithm, LmsAlgorithm};
//! use lms_hss::{FixedEntropy, Sha256};
//! use lms_hss::signature::{SignerMut, Verifier};
//!
//! let entropy_stream = [1u8; 128];
//! let (mut signing_key, verifying_key) = keygen::<Sha256, _>(
//!     &[HssParameter::new(LmotsAlgorithm::LmotsW4, LmsAlgorithm::LmsH5)],
//!     FixedEntropy::new(&entropy_stream),
//! )
//! .unwrap();
//!
//! let signature = signing_key.try_sign(b"hello").unwrap();
//! assert!(verifying_key.verify(b"hello", &signature).is_ok());
//! ```

#[cfg(test)]
extern crate std;

use tinyvec::ArrayVec;

mod constants;
mod error;
pub mod hasher;
mod hss;
mod lm_ots;
mod lms;
mod random;
mod seed;
mod util;

pub use signature;

pub use crate::constants::{
    MAX_HSS_LEVELS, MAX_HSS_PRIVATE_KEY_LENGTH, MAX_HSS_PUBLIC_KEY_LENGTH,
    MAX_HSS_SIGNATURE_LENGTH, MAX_TREE_HEIGHT,
};
pub use crate::error::LmsError;
pub use crate::hasher::{sha256::Sha256, shake256::Shake256, HashChain};
pub use crate::hss::parameter::HssParameter;
pub use crate::lm_ots::parameters::LmotsAlgorithm;
pub use crate::lms::parameters::LmsAlgorithm;
pub use crate::random::{EntropySource, FixedEntropy};
#[cfg(feature = "rand")]
pub use crate::random::RngEntropy;
pub use crate::seed::Seed;

use crate::hss::definitions::{HssPrivateKey, HssPublicKey};
use crate::hss::signing::HssSignature;

/// Generates an HSS key pair with one tree per entry of `parameters`
/// (ordered root first). The entropy source is consumed by key generation
/// and then kept inside the [`SigningKey`] for later leaf rollovers and
/// signature randomizers.
pub fn keygen<H: HashChain, E: EntropySource>(
    parameters: &[HssParameter<H>],
    mut entropy: E,
) -> Result<(SigningKey<H, E>, VerifyingKey<H>), LmsError> {
    let private_key = HssPrivateKey::generate(parameters, &mut entropy)?;
    let public_key = private_key.get_public_key();

    Ok((
        SigningKey {
            private_key,
            entropy,
        },
        VerifyingKey { public_key },
    ))
}

/// Stateful signing key of a hierarchy, bundled with its entropy source.
///
/// Signing mutates the key. The borrow checker enforces the single-writer
/// discipline within one process; persisting the key after each signature
/// (and never restoring an older encoding) is the caller's duty.
#[derive(Debug)]
pub struct SigningKey<H: HashChain, E: EntropySource> {
    private_key: HssPrivateKey<H>,
    entropy: E,
}

impl<H: HashChain, E: EntropySource> SigningKey<H, E> {
    /// Number of signatures this key can still produce, counting future
    /// regenerations of subordinate trees.
    pub fn remaining_signatures(&self) -> u64 {
        self.private_key.remaining_signatures()
    }

    pub fn verifying_key(&self) -> VerifyingKey<H> {
        VerifyingKey {
            public_key: self.private_key.get_public_key(),
        }
    }

    /// Encodes the private key including its leaf counters and cached
    /// chaining signatures. The encoding contains the secret seeds.
    pub fn to_bytes(&self) -> ArrayVec<[u8; MAX_HSS_PRIVATE_KEY_LENGTH]> {
        self.private_key.to_binary_representation()
    }

    /// Restores a signing key from [`SigningKey::to_bytes`] output, pairing
    /// it with a fresh entropy source.
    pub fn from_bytes(data: &[u8], entropy: E) -> Result<Self, LmsError> {
        let private_key = HssPrivateKey::from_binary_representation(data)?;
        Ok(SigningKey {
            private_key,
            entropy,
        })
    }

    /// Signs `message`, consuming one leaf. Like [`signature::SignerMut`]
    /// but with the crate's typed error, so exhaustion stays distinguishable.
    pub fn sign(&mut self, message: &[u8]) -> Result<Signature, LmsError> {
        let signature = HssSignature::sign(&mut self.private_key, message, &mut self.entropy)?;

        Ok(Signature {
            bytes: signature.to_binary_representation(),
        })
    }
}

impl<H: HashChain, E: EntropySource> signature::SignerMut<Signature> for SigningKey<H, E> {
    fn try_sign(&mut self, message: &[u8]) -> Result<Signature, signature::Error> {
        Ok(self.sign(message)?)
    }
}

/// Public key of a hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyingKey<H: HashChain> {
    public_key: HssPublicKey<H>,
}

impl<H: HashChain> VerifyingKey<H> {
    pub fn to_bytes(&self) -> ArrayVec<[u8; MAX_HSS_PUBLIC_KEY_LENGTH]> {
        self.public_key.to_binary_representation()
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, LmsError> {
        let public_key = HssPublicKey::from_binary_representation(data)?;
        Ok(VerifyingKey { public_key })
    }

    /// Verifies an encoded signature against `message`.
    pub fn verify_bytes(&self, message: &[u8], signature: &[u8]) -> Result<(), LmsError> {
        let signature =
            HssSignature::from_binary_representation(signature, self.public_key.levels)?;
        hss::verify::verify_signature(&signature, &self.public_key, message)
    }
}

impl<H: HashChain> signature::Verifier<Signature> for VerifyingKey<H> {
    fn verify(&self, message: &[u8], signature: &Signature) -> Result<(), signature::Error> {
        Ok(self.verify_bytes(message, signature.as_ref())?)
    }
}

/// Encoded HSS signature.
///
/// Construction only bounds the length; structural validation happens during
/// verification, where the expected hierarchy depth is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    bytes: ArrayVec<[u8; MAX_HSS_SIGNATURE_LENGTH]>,
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        self.bytes.as_slice()
    }
}

impl signature::Signature for Signature {
    fn from_bytes(bytes: &[u8]) -> Result<Self, signature::Error> {
        if bytes.len() > MAX_HSS_SIGNATURE_LENGTH {
            return Err(signature::Error::new());
        }

        let mut buffer = ArrayVec::new();
        buffer.extend_from_slice(bytes);
        Ok(Signature { bytes: buffer })
    }
}
