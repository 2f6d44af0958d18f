#![feature(test)]
extern crate test;

#[cfg(test)]
mod tests {
    use rand::{rngs::OsRng, RngCore};
    use test::Bencher;

    use lms_hss::{
        keygen, EntropySource, HssParameter, LmotsAlgorithm, LmsAlgorithm, LmsError, Sha256,
    };
    use lms_hss::{
        signature::{SignerMut, Verifier},
        Signature, SigningKey, VerifyingKey,
    };

    const MESSAGE: [u8; 17] = [
        32u8, 48, 2, 1, 48, 58, 20, 57, 9, 83, 99, 255, 0, 34, 2, 1, 0,
    ];

    struct OsEntropy;

    impl EntropySource for OsEntropy {
        fn fill(&mut self, dest: &mut [u8]) -> Result<(), LmsError> {
            OsRng.fill_bytes(dest);
            Ok(())
        }
    }

    fn generate_signing_key() -> SigningKey<Sha256, OsEntropy> {
        let (signing_key, _) = keygen::<Sha256, _>(
            &[
                HssParameter::new(LmotsAlgorithm::LmotsW2, LmsAlgorithm::LmsH5),
                HssParameter::new(LmotsAlgorithm::LmotsW2, LmsAlgorithm::LmsH5),
            ],
            OsEntropy,
        )
        .unwrap();

        signing_key
    }

    fn generate_verifying_key_and_signature() -> (VerifyingKey<Sha256>, Signature) {
        let (mut signing_key, verifying_key) = keygen::<Sha256, _>(
            &[HssParameter::new(
                LmotsAlgorithm::LmotsW2,
                LmsAlgorithm::LmsH5,
            )],
            OsEntropy,
        )
        .unwrap();

        let signature = signing_key.try_sign(&MESSAGE).unwrap();

        (verifying_key, signature)
    }

    #[bench]
    fn keygen_depth_two(b: &mut Bencher) {
        b.iter(|| {
            let _ = generate_signing_key();
        });
    }

    #[bench]
    fn sign(b: &mut Bencher) {
        let mut signing_key = generate_signing_key();

        b.iter(|| {
            let _ = signing_key.try_sign(&MESSAGE).unwrap();
        });
    }

    #[bench]
    fn verify(b: &mut Bencher) {
        let (verifying_key, signature) = generate_verifying_key_and_signature();

        b.iter(|| {
            let _ = verifying_key.verify(&MESSAGE, &signature).is_ok();
        });
    }
}
