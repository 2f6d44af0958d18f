use lms_hss::signature::{Signature as _, SignerMut, Verifier};
use lms_hss::{
    keygen, FixedEntropy, HssParameter, LmotsAlgorithm, LmsAlgorithm, Sha256, Shake256,
    Signature,
};

#[test]
fn signer_mut_and_verifier_round_trip() {
    let entropy_stream = [17u8; 1024];
    let (mut signing_key, verifying_key) = keygen::<Sha256, _>(
        &[
            HssParameter::new(LmotsAlgorithm::LmotsW8, LmsAlgorithm::LmsH5),
            HssParameter::new(LmotsAlgorithm::LmotsW4, LmsAlgorithm::LmsH5),
        ],
        FixedEntropy::new(&entropy_stream),
    )
    .unwrap();

    let signature = signing_key.try_sign(b"trait surface").unwrap();
    verifying_key.verify(b"trait surface", &signature).unwrap();

    // The signature survives a pass through its encoded form.
    let reparsed = Signature::from_bytes(signature.as_ref()).unwrap();
    assert_eq!(reparsed, signature);
    verifying_key.verify(b"trait surface", &reparsed).unwrap();

    assert!(verifying_key.verify(b"other message", &signature).is_err());
}

#[test]
fn foreign_key_rejects_the_signature() {
    let parameters = [HssParameter::<Sha256>::new(
        LmotsAlgorithm::LmotsW4,
        LmsAlgorithm::LmsH5,
    )];

    let entropy_stream = [23u8; 256];
    let (mut signing_key, _) =
        keygen(&parameters, FixedEntropy::new(&entropy_stream)).unwrap();

    let foreign_stream = [24u8; 256];
    let (_, foreign_key) = keygen(&parameters, FixedEntropy::new(&foreign_stream)).unwrap();

    let signature = signing_key.try_sign(b"message").unwrap();
    assert!(foreign_key.verify(b"message", &signature).is_err());
}

#[test]
fn shake256_backend_signs_and_verifies() {
    let entropy_stream = [29u8; 256];
    let (mut signing_key, verifying_key) = keygen::<Shake256, _>(
        &[HssParameter::new(LmotsAlgorithm::LmotsW2, LmsAlgorithm::LmsH5)],
        FixedEntropy::new(&entropy_stream),
    )
    .unwrap();

    let signature = signing_key.try_sign(b"xof backend").unwrap();
    verifying_key.verify(b"xof backend", &signature).unwrap();
}
