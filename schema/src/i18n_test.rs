use super::*;

#[test]
fn builtin_locales_parse() {
    let en = Catalog::builtin(Locale::En).expect("en catalog");
    let zh = Catalog::builtin(Locale::ZhCn).expect("zh-CN catalog");
    assert_eq!(en.locale(), "en");
    assert_eq!(zh.locale(), "zh-CN");
    assert!(en.contains("form.invalidInteger"));
    assert!(zh.contains("form.invalidInteger"));
}

#[test]
fn nested_keys_flatten_to_dotted_paths() {
    let en = Catalog::builtin(Locale::En).unwrap();
    assert_eq!(en.t("common.enableText"), "Enabled");
    assert_eq!(en.t("common.project.name"), "Project Name");
    assert_eq!(en.t("common.yes"), "Yes");
}

#[test]
fn unknown_keys_translate_to_themselves() {
    let en = Catalog::builtin(Locale::En).unwrap();
    assert_eq!(en.t("hover"), "hover");
    assert_eq!(KeyTranslator.t("common.enableText"), "common.enableText");
}

#[test]
fn scalar_leaves_are_stringified() {
    let cat = Catalog::from_yaml("x", "a:\n  n: 3\n  b: true\n  skip: ~\n").unwrap();
    assert_eq!(cat.t("a.n"), "3");
    assert_eq!(cat.t("a.b"), "true");
    assert!(!cat.contains("a.skip"));
}

#[test]
fn sequences_are_rejected() {
    let err = Catalog::from_yaml("x", "a:\n  - one\n").unwrap_err();
    assert!(matches!(err, CatalogError::InvalidEntry(ref k) if k == "a"));
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let err = Catalog::from_yaml("x", "a: [unclosed").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn locale_parsing() {
    assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
    assert_eq!("zh-CN".parse::<Locale>().unwrap(), Locale::ZhCn);
    assert!("fr".parse::<Locale>().is_err());
}
