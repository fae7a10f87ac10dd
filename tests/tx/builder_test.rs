use utxo_settle::identity::{Keypair, Signer};
use utxo_settle::tx::{TransactionBuilder, TxHash};

#[test]
fn test_builder_signs_every_input() {
    let alice = Keypair::generate();
    let bob = Keypair::generate();
    let source = TxHash::digest(b"source");

    let tx = TransactionBuilder::new()
        .input(source, 0, &alice)
        .input(source, 1, &bob)
        .output(10, bob.public_key())
        .build()
        .unwrap();

    let owners = [alice.public_key(), bob.public_key()];
    for (index, owner) in owners.iter().enumerate() {
        let signature = tx.input(index).unwrap().signature().unwrap();
        let payload = tx.signing_payload(index).unwrap();
        assert!(Signer::verify(owner, &payload, signature));
    }
}

#[test]
fn test_builder_finalizes() {
    let alice = Keypair::generate();

    let tx = TransactionBuilder::new()
        .input(TxHash::digest(b"source"), 0, &alice)
        .output(1, alice.public_key())
        .build()
        .unwrap();

    assert_eq!(tx.hash(), &TxHash::digest(&tx.raw_bytes()));
}

#[test]
fn test_builder_unsigned_input() {
    let alice = Keypair::generate();

    let tx = TransactionBuilder::new()
        .unsigned_input(TxHash::digest(b"source"), 0)
        .output(1, alice.public_key())
        .build()
        .unwrap();

    assert!(tx.input(0).unwrap().signature().is_none());
}

#[test]
fn test_builder_empty_transaction() {
    let tx = TransactionBuilder::new().build().unwrap();

    assert_eq!(tx.num_inputs(), 0);
    assert_eq!(tx.num_outputs(), 0);
    assert!(tx.try_hash().is_some());
}
