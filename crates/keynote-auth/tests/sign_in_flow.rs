//! End-to-end use of the primitives the CLI combines at sign-in.

use keynote_auth::{IssuedSession, hash_password, hash_token, token_store, verify_password};
use rstest::rstest;

#[rstest]
#[case("secret1", true)]
#[case("Secret1", false)]
#[case("secret1 ", false)]
#[case("", false)]
fn verify_is_exact(#[case] attempt: &str, #[case] ok: bool) {
    let stored = hash_password("secret1").expect("hash");
    assert_eq!(verify_password(attempt, &stored).expect("verify"), ok);
}

#[test]
fn stored_token_resolves_to_same_digest() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let path = tmp.path().join("session");

    let session = IssuedSession::mint(168).expect("mint");
    token_store::store_at(&path, &session.token).expect("store");

    let loaded = token_store::load_from(&path).expect("token present");
    assert_eq!(hash_token(&loaded), session.token_hash);
}
