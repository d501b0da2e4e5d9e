use super::*;

#[test]
fn lookup_known_codes() {
    let roles = lookup("account_role").expect("account_role");
    assert_eq!(roles.len(), 3);
    assert_eq!(roles[0].value, Scalar::Str("admin"));
    assert_eq!(lookup("locator_type").map(<[OptionItem]>::len), Some(3));
}

#[test]
fn lookup_unknown_code_is_none() {
    assert!(lookup("nope").is_none());
}

#[test]
fn codes_lists_every_dictionary() {
    let all: Vec<_> = codes().collect();
    assert_eq!(all, vec!["account_role", "action_type", "locator_type"]);
}
