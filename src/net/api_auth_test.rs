use super::*;

#[test]
fn login_payload_carries_credentials() {
    let payload = login_payload("a@b.c", "pw");
    assert_eq!(payload["email"], "a@b.c");
    assert_eq!(payload["password"], "pw");
}

#[test]
fn register_payload_includes_nickname() {
    let payload = register_payload("a@b.c", "pw", "ann");
    assert_eq!(payload["nickname"], "ann");
}
