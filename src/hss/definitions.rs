use tinyvec::ArrayVec;

use crate::{
    constants::{MAX_HSS_LEVELS, MAX_HSS_PRIVATE_KEY_LENGTH, MAX_HSS_PUBLIC_KEY_LENGTH},
    error::LmsError,
    hasher::HashChain,
    lms::{
        definitions::{LmsPrivateKey, LmsPublicKey},
        signing::LmsSignature,
    },
    random::EntropySource,
    util::composer::{Composer, Parser},
};

use super::parameter::HssParameter;

/// Private key of the whole hierarchy.
///
/// Level 0 is the root of trust. Each level's cached chaining signature
/// authenticates the public key of the level below it; the caches stay valid
/// until the subordinate tree is regenerated.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HssPrivateKey<H: HashChain> {
    pub private_keys: ArrayVec<[LmsPrivateKey<H>; MAX_HSS_LEVELS]>,
    pub public_keys: ArrayVec<[LmsPublicKey<H>; MAX_HSS_LEVELS]>,
    pub signatures: ArrayVec<[LmsSignature<H>; MAX_HSS_LEVELS]>,
}

impl<H: HashChain> HssPrivateKey<H> {
    /// Generates the hierarchy bottom-up: the deepest tree is built first,
    /// then each level above it is built and immediately signs its child's
    /// encoded public key. Every tree draws a fresh identifier and seed from
    /// the entropy source.
    pub fn generate<E: EntropySource>(
        parameters: &[HssParameter<H>],
        entropy: &mut E,
    ) -> Result<Self, LmsError> {
        if parameters.is_empty() || parameters.len() > MAX_HSS_LEVELS {
            return Err(LmsError::InvalidFormat("invalid number of levels"));
        }

        let mut hss_private_key = HssPrivateKey::default();

        for parameter in parameters.iter().rev() {
            let private_key = LmsPrivateKey::generate(
                *parameter.get_lms_parameter(),
                *parameter.get_lmots_parameter(),
                entropy,
            )?;
            let public_key = LmsPublicKey::from_private_key(&private_key);

            hss_private_key.private_keys.insert(0, private_key);
            hss_private_key.public_keys.insert(0, public_key);

            if hss_private_key.public_keys.len() > 1 {
                let child_public_key = hss_private_key.public_keys[1].to_binary_representation();
                let signature = LmsSignature::sign(
                    &mut hss_private_key.private_keys[0],
                    child_public_key.as_slice(),
                    entropy,
                )?;
                hss_private_key.signatures.insert(0, signature);
            }
        }

        Ok(hss_private_key)
    }

    pub fn get_levels(&self) -> usize {
        self.private_keys.len()
    }

    pub fn get_public_key(&self) -> HssPublicKey<H> {
        HssPublicKey {
            public_key: self.public_keys[0].clone(),
            levels: self.get_levels() as u32,
        }
    }

    /// Total number of signatures the key can still produce, counting the
    /// regenerable capacity of every level: each leaf of a tree above the
    /// bottom certifies a complete fresh subtree.
    pub fn remaining_signatures(&self) -> u64 {
        let mut remaining: u64 = 0;

        for private_key in self.private_keys.iter() {
            let num_leafs = private_key.lms_parameter.number_of_lm_ots_keys() as u64;
            remaining = remaining * num_leafs + private_key.remaining_signatures() as u64;
        }

        remaining
    }

    pub fn to_binary_representation(&self) -> ArrayVec<[u8; MAX_HSS_PRIVATE_KEY_LENGTH]> {
        let mut composer =
            Composer::<MAX_HSS_PRIVATE_KEY_LENGTH>::new().u32str(self.get_levels() as u32);

        for private_key in self.private_keys.iter() {
            composer = composer.bytes(private_key.to_binary_representation().as_slice());
        }

        for signature in self.signatures.iter() {
            composer = composer.bytes(signature.to_binary_representation().as_slice());
        }

        composer.build()
    }

    /// Restores a private key from its persisted form. The per-level public
    /// keys are rebuilt deterministically from the seeds; the cached chaining
    /// signatures are taken from the encoding so no leaf is re-issued.
    pub fn from_binary_representation(data: &[u8]) -> Result<Self, LmsError> {
        let mut parser = Parser::new(data);

        let levels = parser.u32str()? as usize;
        if levels == 0 || levels > MAX_HSS_LEVELS {
            return Err(LmsError::InvalidFormat("invalid number of levels"));
        }

        let mut hss_private_key = HssPrivateKey::default();

        for _ in 0..levels {
            let private_key = LmsPrivateKey::from_parser(&mut parser)?;
            let public_key = LmsPublicKey::from_private_key(&private_key);

            hss_private_key.private_keys.push(private_key);
            hss_private_key.public_keys.push(public_key);
        }

        for _ in 0..levels - 1 {
            hss_private_key
                .signatures
                .push(LmsSignature::from_parser(&mut parser)?);
        }

        parser.finish()?;

        Ok(hss_private_key)
    }
}

/// Public key of the hierarchy: the root tree's public key plus the depth.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HssPublicKey<H: HashChain> {
    pub public_key: LmsPublicKey<H>,
    pub levels: u32,
}

impl<H: HashChain> HssPublicKey<H> {
    pub fn to_binary_representation(&self) -> ArrayVec<[u8; MAX_HSS_PUBLIC_KEY_LENGTH]> {
        Composer::<MAX_HSS_PUBLIC_KEY_LENGTH>::new()
            .u32str(self.levels)
            .bytes(self.public_key.to_binary_representation().as_slice())
            .build()
    }

    pub fn from_binary_representation(data: &[u8]) -> Result<Self, LmsError> {
        let mut parser = Parser::new(data);

        let levels = parser.u32str()?;
        if levels == 0 || levels as usize > MAX_HSS_LEVELS {
            return Err(LmsError::InvalidFormat("invalid number of levels"));
        }

        let public_key = LmsPublicKey::from_parser(&mut parser)?;
        parser.finish()?;

        Ok(HssPublicKey { public_key, levels })
    }
}

#[cfg(test)]
mod tests {
    use super::{HssPrivateKey, HssPublicKey};
    use crate::error::LmsError;
    use crate::hasher::sha256::Sha256;
    use crate::hss::parameter::HssParameter;
    use crate::lm_ots::parameters::LmotsAlgorithm;
    use crate::lms::parameters::LmsAlgorithm;
    use crate::random::FixedEntropy;

    fn depth_two_parameters() -> [HssParameter<Sha256>; 2] {
        [
            HssParameter::new(LmotsAlgorithm::LmotsW4, LmsAlgorithm::LmsH5),
            HssParameter::new(LmotsAlgorithm::LmotsW2, LmsAlgorithm::LmsH5),
        ]
    }

    #[test]
    fn fresh_depth_two_key_has_chained_capacity() {
        let entropy_stream = [1u8; 256];
        let mut entropy = FixedEntropy::new(&entropy_stream);
        let private_key =
            HssPrivateKey::generate(&depth_two_parameters(), &mut entropy).unwrap();

        assert_eq!(private_key.get_levels(), 2);
        assert_eq!(private_key.signatures.len(), 1);
        // Root leaf 0 is spent certifying the bottom tree; its 31 remaining
        // leaves are each worth a fresh 32-leaf subtree.
        assert_eq!(private_key.remaining_signatures(), 1024);
    }

    #[test]
    fn container_round_trip_is_byte_identical() {
        let entropy_stream = [77u8; 256];
        let mut entropy = FixedEntropy::new(&entropy_stream);
        let private_key =
            HssPrivateKey::generate(&depth_two_parameters(), &mut entropy).unwrap();

        let encoded = private_key.to_binary_representation();
        let decoded =
            HssPrivateKey::<Sha256>::from_binary_representation(encoded.as_slice()).unwrap();

        assert_eq!(decoded, private_key);
        assert_eq!(
            decoded.to_binary_representation().as_slice(),
            encoded.as_slice()
        );
    }

    #[test]
    fn zero_level_container_is_rejected() {
        assert_eq!(
            HssPrivateKey::<Sha256>::from_binary_representation(&[0, 0, 0, 0]),
            Err(LmsError::InvalidFormat("invalid number of levels"))
        );
        assert_eq!(
            HssPublicKey::<Sha256>::from_binary_representation(&[0, 0, 0, 0]),
            Err(LmsError::InvalidFormat("invalid number of levels"))
        );
    }

    #[test]
    fn public_key_round_trip() {
        let entropy_stream = [5u8; 256];
        let mut entropy = FixedEntropy::new(&entropy_stream);
        let private_key =
            HssPrivateKey::generate(&depth_two_parameters(), &mut entropy).unwrap();

        let public_key = private_key.get_public_key();
        let encoded = public_key.to_binary_representation();
        let decoded =
            HssPublicKey::<Sha256>::from_binary_representation(encoded.as_slice()).unwrap();
        assert_eq!(decoded, public_key);
    }
}
