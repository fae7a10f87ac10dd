use utxo_settle::identity::{Keypair, KeypairError, PublicKey};

#[test]
fn test_keypairs_are_unique() {
    let kp1 = Keypair::generate();
    let kp2 = Keypair::generate();

    assert_ne!(kp1.public_key(), kp2.public_key());
}

#[test]
fn test_public_key_length() {
    let kp = Keypair::generate();
    assert_eq!(kp.public_key().as_bytes().len(), 32);
}

#[test]
fn test_public_key_bytes_roundtrip() {
    let kp = Keypair::generate();
    let pk = kp.public_key();

    let restored = PublicKey::from_bytes(pk.as_bytes()).unwrap();
    assert_eq!(pk, restored);
}

#[test]
fn test_public_key_postcard_serialization() {
    let pk = Keypair::generate().public_key();

    let bytes = postcard::to_allocvec(&pk).unwrap();
    let decoded: PublicKey = postcard::from_bytes(&bytes).unwrap();

    assert_eq!(pk, decoded);
}

#[test]
fn test_invalid_keypair_bytes_fails() {
    let result = Keypair::from_bytes(&[1, 2, 3]);
    assert!(matches!(
        result,
        Err(KeypairError::InvalidLength { expected: 32, got: 3 })
    ));
}

#[test]
fn test_invalid_public_key_bytes_fails() {
    assert!(PublicKey::from_bytes(&[0u8; 33]).is_err());
    assert!(PublicKey::from_bytes(&[]).is_err());
}
