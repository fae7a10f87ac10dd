use utxo_settle::identity::{Keypair, Signature, SignatureError, Signer};

#[test]
fn test_sign_message() {
    let keypair = Keypair::generate();
    let signature = Signer::sign(&keypair, b"spend output 0");

    assert_eq!(signature.as_bytes().len(), 64);
}

#[test]
fn test_verify_valid_signature() {
    let keypair = Keypair::generate();
    let message = b"spend output 0";
    let signature = Signer::sign(&keypair, message);

    assert!(Signer::verify(&keypair.public_key(), message, &signature));
}

#[test]
fn test_tampered_message_fails() {
    let keypair = Keypair::generate();
    let signature = Signer::sign(&keypair, b"spend output 0");

    assert!(!Signer::verify(&keypair.public_key(), b"spend output 1", &signature));
}

/// Test: a signature from one key does not authorize another key's output
#[test]
fn test_wrong_public_key_fails() {
    let owner = Keypair::generate();
    let thief = Keypair::generate();
    let message = b"spend output 0";

    let signature = Signer::sign(&thief, message);

    assert!(!Signer::verify(&owner.public_key(), message, &signature));
}

#[test]
fn test_corrupted_signature_fails() {
    let keypair = Keypair::generate();
    let message = b"spend output 0";
    let signature = Signer::sign(&keypair, message);

    let mut bytes = *signature.as_bytes();
    bytes[0] ^= 0xFF;
    let corrupted = Signature::from_bytes(&bytes).unwrap();

    assert!(!Signer::verify(&keypair.public_key(), message, &corrupted));
}

#[test]
fn test_signing_deterministic() {
    let keypair = Keypair::generate();

    let sig1 = Signer::sign(&keypair, b"payload");
    let sig2 = Signer::sign(&keypair, b"payload");

    // Ed25519 signatures are deterministic
    assert_eq!(sig1, sig2);
}

#[test]
fn test_invalid_signature_bytes_fails() {
    let result = Signature::from_bytes(&[0u8; 63]);
    assert!(matches!(result, Err(SignatureError::InvalidLength(63))));
}
