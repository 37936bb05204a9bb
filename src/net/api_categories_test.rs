use super::*;

#[test]
fn category_payload_uses_backend_field_names() {
    let payload = category_payload("PETS", "Pets", "orange", true);
    assert_eq!(payload["name"], "PETS");
    assert_eq!(payload["label"], "Pets");
    assert_eq!(payload["color"], "orange");
    assert_eq!(payload["hasStatus"], true);
}

#[test]
fn approve_payload_has_no_name_field() {
    let payload = approve_payload("Pets", "blue", false);
    assert!(payload.get("name").is_none());
    assert_eq!(payload["hasStatus"], false);
}
