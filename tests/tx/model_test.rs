use utxo_settle::identity::{Keypair, Signer};
use utxo_settle::ledger::UtxoRef;
use utxo_settle::tx::{Transaction, TxError, TxHash};

fn genesis() -> TxHash {
    TxHash::digest(b"genesis")
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn test_new_transaction_is_empty() {
    let tx = Transaction::new();
    assert_eq!(tx.num_inputs(), 0);
    assert_eq!(tx.num_outputs(), 0);
    assert!(tx.try_hash().is_none());
}

#[test]
fn test_input_references_output() {
    let mut tx = Transaction::new();
    tx.add_input(genesis(), 3);

    let input = tx.input(0).unwrap();
    assert_eq!(input.utxo_ref(), UtxoRef::new(genesis(), 3));
    assert!(input.signature().is_none());
}

#[test]
fn test_remove_input_by_index_and_ref() {
    let mut tx = Transaction::new();
    tx.add_input(genesis(), 0);
    tx.add_input(genesis(), 1);
    tx.add_input(genesis(), 2);

    assert!(tx.remove_input(5).is_none());
    assert_eq!(tx.remove_input(0).unwrap().output_index(), 0);

    let removed = tx.remove_input_ref(&UtxoRef::new(genesis(), 2)).unwrap();
    assert_eq!(removed.output_index(), 2);
    assert_eq!(tx.num_inputs(), 1);
    assert_eq!(tx.input(0).unwrap().output_index(), 1);
}

#[test]
fn test_add_signature_out_of_range() {
    let kp = Keypair::generate();
    let mut tx = Transaction::new();
    tx.add_input(genesis(), 0);

    let sig = Signer::sign(&kp, b"x");
    assert_eq!(
        tx.add_signature(sig, 1),
        Err(TxError::InputIndexOutOfRange { index: 1, len: 1 })
    );
}

// ============================================================================
// SIGNING PAYLOAD
// ============================================================================

#[test]
fn test_signing_payload_differs_per_input() {
    let kp = Keypair::generate();
    let mut tx = Transaction::new();
    tx.add_input(genesis(), 0);
    tx.add_input(genesis(), 1);
    tx.add_output(4, kp.public_key());

    assert_ne!(tx.signing_payload(0).unwrap(), tx.signing_payload(1).unwrap());
}

#[test]
fn test_signing_payload_covers_outputs() {
    let kp = Keypair::generate();
    let mut tx = Transaction::new();
    tx.add_input(genesis(), 0);
    tx.add_output(4, kp.public_key());
    let before = tx.signing_payload(0).unwrap();

    tx.add_output(1, kp.public_key());
    assert_ne!(before, tx.signing_payload(0).unwrap());
}

#[test]
fn test_signing_payload_layout() {
    let kp = Keypair::generate();
    let mut tx = Transaction::new();
    tx.add_input(genesis(), 7);
    tx.add_output(-2, kp.public_key());

    let payload = tx.signing_payload(0).unwrap();
    assert_eq!(payload.len(), 32 + 4 + 8 + 32);
    assert_eq!(&payload[..32], genesis().as_bytes());
    assert_eq!(&payload[32..36], &7u32.to_le_bytes());
    assert_eq!(&payload[36..44], &(-2i64).to_le_bytes());
    assert_eq!(&payload[44..], kp.public_key().as_bytes());
}

#[test]
fn test_signing_payload_missing_input() {
    let tx = Transaction::new();
    assert!(tx.signing_payload(0).is_err());
}

// ============================================================================
// CONTENT HASH
// ============================================================================

#[test]
fn test_finalize_is_deterministic() {
    let kp = Keypair::generate();
    let mut tx1 = Transaction::new();
    tx1.add_input(genesis(), 0);
    tx1.add_output(5, kp.public_key());
    let mut tx2 = tx1.clone();

    assert_eq!(tx1.finalize(), tx2.finalize());
    assert_eq!(tx1.hash(), &TxHash::digest(&tx1.raw_bytes()));
}

#[test]
fn test_hash_covers_signatures() {
    let kp = Keypair::generate();
    let mut tx = Transaction::new();
    tx.add_input(genesis(), 0);
    tx.add_output(5, kp.public_key());
    let unsigned = tx.finalize();

    let payload = tx.signing_payload(0).unwrap();
    tx.add_signature(Signer::sign(&kp, &payload), 0).unwrap();
    let signed = tx.finalize();

    assert_ne!(unsigned, signed);
}

#[test]
fn test_total_output_value() {
    let kp = Keypair::generate();
    let mut tx = Transaction::new();
    tx.add_output(i64::MAX, kp.public_key());
    tx.add_output(i64::MAX, kp.public_key());

    assert_eq!(tx.total_output_value(), 2 * i128::from(i64::MAX));
}

#[test]
fn test_is_finalized_tracks_content() {
    let kp = Keypair::generate();
    let mut tx = Transaction::new();
    tx.add_output(5, kp.public_key());
    assert!(!tx.is_finalized());

    tx.finalize();
    assert!(tx.is_finalized());

    tx.add_output(1, kp.public_key());
    assert!(!tx.is_finalized());
}
