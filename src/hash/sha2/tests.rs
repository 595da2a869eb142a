use super::*;
use crate::hash::HashFunction;

#[test]
fn sha256_empty() {
    assert_eq!(
        hex::encode(Sha256::digest(b"")),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn sha256_abc() {
    assert_eq!(
        hex::encode(Sha256::digest(b"abc")),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn sha256_two_blocks() {
    // 56-byte message forces the length into a second padding block
    assert_eq!(
        hex::encode(Sha256::digest(
            b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"
        )),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
}

#[test]
fn sha256_incremental_matches_oneshot() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let mut hasher = Sha256::new();
    for chunk in data.chunks(7) {
        hasher.update(chunk);
    }
    assert_eq!(hasher.finalize(), Sha256::digest(data));
}

#[test]
fn sha256_million_a() {
    let mut hasher = Sha256::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        hasher.update(&chunk);
    }
    assert_eq!(
        hex::encode(hasher.finalize()),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

#[test]
fn sha384_empty() {
    assert_eq!(
        hex::encode(Sha384::digest(b"")),
        "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b"
    );
}

#[test]
fn sha384_abc() {
    assert_eq!(
        hex::encode(Sha384::digest(b"abc")),
        "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7"
    );
}

#[test]
fn sha384_two_blocks() {
    assert_eq!(
        hex::encode(Sha384::digest(
            b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmno\
              ijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu"
        )),
        "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712fcc7c71a557e2db966c3e9fa91746039"
    );
}

#[test]
fn sha384_incremental_matches_oneshot() {
    let data = vec![0x5au8; 300];
    let mut hasher = Sha384::new();
    hasher.update(&data[..129]);
    hasher.update(&data[129..]);
    assert_eq!(hasher.finalize(), Sha384::digest(&data));
}

#[test]
fn sizes() {
    assert_eq!(Sha256::output_size(), 32);
    assert_eq!(Sha256::block_size(), 64);
    assert_eq!(Sha384::output_size(), 48);
    assert_eq!(Sha384::block_size(), 128);
}
