use lms_hss::{
    keygen, FixedEntropy, HssParameter, LmotsAlgorithm, LmsAlgorithm, LmsError, Sha256,
    SigningKey, VerifyingKey,
};

const REFERENCE_PUBLIC_KEY: &str = "0000000200000005000000030101010101010101010101010101010166BF6F5816EEE4BBF33C50ACB480E09B4169EBB533372959BC4315C388E501AC";

fn depth_two_parameters() -> [HssParameter<Sha256>; 2] {
    [
        HssParameter::new(LmotsAlgorithm::LmotsW4, LmsAlgorithm::LmsH5),
        HssParameter::new(LmotsAlgorithm::LmotsW2, LmsAlgorithm::LmsH5),
    ]
}

#[test]
fn reference_key_pair_from_all_ones_entropy() {
    let entropy_stream = [1u8; 8192];
    let (mut signing_key, verifying_key) =
        keygen::<Sha256, _>(&depth_two_parameters(), FixedEntropy::new(&entropy_stream))
            .unwrap();

    assert_eq!(
        hex::encode_upper(verifying_key.to_bytes().as_slice()),
        REFERENCE_PUBLIC_KEY
    );

    let message = [0xAB, 0xCD, 0xEF];
    let signature = signing_key.sign(&message).unwrap();
    verifying_key.verify_bytes(&message, signature.as_ref()).unwrap();

    // Any single-bit flip in the message must break verification.
    for byte in 0..message.len() {
        for bit in 0..8 {
            let mut mutated = message;
            mutated[byte] ^= 1u8 << bit;
            assert!(verifying_key
                .verify_bytes(&mutated, signature.as_ref())
                .is_err());
        }
    }

    // Sampled single-bit flips across the whole encoded signature.
    let encoded = signature.as_ref();
    for byte in (0..encoded.len()).step_by(41) {
        let mut mutated = encoded.to_vec();
        mutated[byte] ^= 1u8 << (byte % 8);
        assert!(verifying_key.verify_bytes(&message, &mutated).is_err());
    }

    // Flipping public key bits must break either decoding or verification.
    let encoded_public_key = verifying_key.to_bytes();
    for byte in 0..encoded_public_key.len() {
        let mut mutated = encoded_public_key.as_slice().to_vec();
        mutated[byte] ^= 1u8 << (byte % 8);
        match VerifyingKey::<Sha256>::from_bytes(&mutated) {
            Ok(mutated_key) => assert!(mutated_key
                .verify_bytes(&message, signature.as_ref())
                .is_err()),
            Err(LmsError::InvalidFormat(_)) => {}
            Err(error) => panic!("unexpected error: {}", error),
        }
    }
}

#[test]
fn identical_entropy_reproduces_the_public_key() {
    let entropy_stream = [42u8; 256];
    let (_, first) =
        keygen::<Sha256, _>(&depth_two_parameters(), FixedEntropy::new(&entropy_stream))
            .unwrap();
    let (_, second) =
        keygen::<Sha256, _>(&depth_two_parameters(), FixedEntropy::new(&entropy_stream))
            .unwrap();

    assert_eq!(first.to_bytes().as_slice(), second.to_bytes().as_slice());

    let other_stream = [43u8; 256];
    let (_, third) =
        keygen::<Sha256, _>(&depth_two_parameters(), FixedEntropy::new(&other_stream)).unwrap();
    assert_ne!(first.to_bytes().as_slice(), third.to_bytes().as_slice());
}

#[test]
fn depth_one_key_exhausts_after_all_leaves() {
    let entropy_stream = [9u8; 4096];
    let (mut signing_key, verifying_key) = keygen::<Sha256, _>(
        &[HssParameter::new(LmotsAlgorithm::LmotsW4, LmsAlgorithm::LmsH5)],
        FixedEntropy::new(&entropy_stream),
    )
    .unwrap();

    assert_eq!(signing_key.remaining_signatures(), 32);

    for index in 0..32u32 {
        let message = index.to_be_bytes();
        let signature = signing_key.sign(&message).unwrap();
        verifying_key
            .verify_bytes(&message, signature.as_ref())
            .unwrap();
        assert_eq!(signing_key.remaining_signatures(), 31 - index as u64);
    }

    assert_eq!(signing_key.sign(b"one too many"), Err(LmsError::KeyExhausted));
    assert_eq!(signing_key.remaining_signatures(), 0);
    assert_eq!(signing_key.sign(b"still spent"), Err(LmsError::KeyExhausted));
}

#[test]
fn signing_key_survives_persistence() {
    let entropy_stream = [3u8; 1024];
    let mut entropy = FixedEntropy::new(&entropy_stream);
    let (mut signing_key, verifying_key) =
        keygen::<Sha256, _>(&depth_two_parameters(), entropy.clone()).unwrap();

    // Skip the bytes keygen consumed so the restored key continues the
    // stream instead of replaying it.
    let mut skip = [0u8; 128];
    lms_hss::EntropySource::fill(&mut entropy, &mut skip).unwrap();

    let first = signing_key.sign(b"before persistence").unwrap();
    verifying_key
        .verify_bytes(b"before persistence", first.as_ref())
        .unwrap();

    let persisted = signing_key.to_bytes();
    let mut restored =
        SigningKey::<Sha256, _>::from_bytes(persisted.as_slice(), entropy).unwrap();

    assert_eq!(
        restored.remaining_signatures(),
        signing_key.remaining_signatures()
    );
    assert_eq!(restored.to_bytes().as_slice(), persisted.as_slice());
    assert_eq!(
        restored.verifying_key().to_bytes().as_slice(),
        verifying_key.to_bytes().as_slice()
    );

    let second = restored.sign(b"after persistence").unwrap();
    verifying_key
        .verify_bytes(b"after persistence", second.as_ref())
        .unwrap();
}

#[test]
fn exhausted_entropy_fails_key_generation() {
    // Depth 2 needs two identifiers, two seeds and one randomizer.
    let entropy_stream = [1u8; 100];
    assert_eq!(
        keygen::<Sha256, _>(&depth_two_parameters(), FixedEntropy::new(&entropy_stream))
            .err(),
        Some(LmsError::EntropyFailure)
    );
}

#[test]
fn signature_of_wrong_depth_is_rejected_as_format_error() {
    let entropy_stream = [5u8; 4096];
    let (mut signing_key, _) = keygen::<Sha256, _>(
        &[HssParameter::new(LmotsAlgorithm::LmotsW4, LmsAlgorithm::LmsH5)],
        FixedEntropy::new(&entropy_stream),
    )
    .unwrap();
    let signature = signing_key.sign(b"depth one").unwrap();

    let other_stream = [5u8; 4096];
    let (_, depth_two_key) =
        keygen::<Sha256, _>(&depth_two_parameters(), FixedEntropy::new(&other_stream)).unwrap();

    assert_eq!(
        depth_two_key.verify_bytes(b"depth one", signature.as_ref()),
        Err(LmsError::InvalidFormat("level count mismatch"))
    );
}
