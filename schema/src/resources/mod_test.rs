use super::*;
use crate::form::FieldError;
use crate::i18n::{Catalog, KeyTranslator, Locale};
use serde_json::json;

fn values(v: Value) -> Map<String, Value> {
    v.as_object().cloned().unwrap()
}

#[test]
fn prefixes_live_under_api_root() {
    for kind in ResourceKind::ALL {
        let prefix = kind.path_prefix();
        assert!(prefix.starts_with(API_ROOT), "{prefix}");
        assert_eq!(prefix, format!("{API_ROOT}/{}", kind.as_str()));
    }
    assert_eq!(ResourceKind::Project.path_prefix(), "/runner/api/v1/project");
    assert_eq!(ResourceKind::Task.path_prefix(), "/runner/api/v1/task");
}

#[test]
fn kinds_round_trip_through_strings() {
    for kind in ResourceKind::ALL {
        assert_eq!(kind.as_str().parse::<ResourceKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), kind.as_str());
        assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.as_str()));
    }
    assert_eq!("page-object".parse::<ResourceKind>().unwrap(), ResourceKind::PageObject);
    assert_eq!("testsuite".parse::<ResourceKind>().unwrap(), ResourceKind::Suite);
    assert_eq!("nope".parse::<ResourceKind>(), Err(UnknownResource("nope".into())));
}

#[test]
fn schema_kind_matches_registry() {
    for kind in ResourceKind::ALL {
        assert_eq!(kind.schema().kind, kind);
    }
}

#[test]
fn every_column_is_backed_by_a_form_field_or_derived_field() {
    for kind in ResourceKind::ALL {
        let schema = kind.schema();
        for col in schema.columns {
            assert!(schema.is_backed(col.data_index), "{kind}: column `{}` has no backing field", col.data_index);
        }
    }
}

#[test]
fn every_edit_form_has_hidden_id() {
    for kind in ResourceKind::ALL {
        let id = kind.schema().field("id").expect("id field");
        assert!(!id.visible, "{kind}");
    }
}

#[test]
fn dependent_fields_declare_a_source() {
    for kind in ResourceKind::ALL {
        for field in kind.schema().edit_form {
            assert_eq!(field.component.uses_source(), field.source.is_some(), "{kind}.{}", field.field);
            if let Some(OptionSource::Dictionary { code }) = field.source {
                assert!(crate::dictionary::lookup(code).is_some(), "{kind}.{}: {code}", field.field);
            }
        }
    }
}

#[test]
fn every_label_key_has_a_translation() {
    let en = Catalog::builtin(Locale::En).unwrap();
    let zh = Catalog::builtin(Locale::ZhCn).unwrap();
    for kind in ResourceKind::ALL {
        let schema = kind.schema();
        let keys = schema
            .columns
            .iter()
            .map(|c| c.title)
            .chain(schema.search_form.iter().chain(schema.edit_form).filter(|f| f.visible).map(|f| f.label));
        for key in keys {
            assert!(en.contains(key), "en missing {key}");
            assert!(zh.contains(key), "zh-CN missing {key}");
        }
    }
}

#[test]
fn project_status_column_and_defaults() {
    let schema = ResourceKind::Project.schema();
    assert_eq!(schema.column("status").and_then(|c| c.render), Some(CellRender::StatusTag));
    assert_eq!(schema.field("status").and_then(|f| f.default_value), Some(Scalar::Int(1)));
    assert!(schema.field("name").is_some_and(|f| f.required));
}

#[test]
fn validate_rejects_missing_required_fields() {
    let err = ResourceKind::Project.validate(&values(json!({"status": 1}))).unwrap_err();
    assert_eq!(err.fields(), vec!["name"]);
    assert!(ResourceKind::Project.validate(&values(json!({"name": "demo", "status": 0}))).is_ok());
}

#[test]
fn validate_rejects_unknown_status_option() {
    let err = ResourceKind::Project.validate(&values(json!({"name": "demo", "status": 3}))).unwrap_err();
    assert_eq!(err.0[0].code, "not_an_option");
}

#[test]
fn pageobject_requires_url_or_locator() {
    let err = ResourceKind::PageObject.validate(&values(json!({"name": "login"}))).unwrap_err();
    assert_eq!(err.0, vec![FieldError::new("url", "form.urlOrLocator", "url_or_locator")]);

    assert!(ResourceKind::PageObject.validate(&values(json!({"name": "login", "url": "/login"}))).is_ok());
    assert!(
        ResourceKind::PageObject
            .validate(&values(json!({"name": "btn", "locator": "#go", "locator_type": "css"})))
            .is_ok()
    );
    assert!(ResourceKind::PageObject.validate(&values(json!({"name": "btn", "locator_type": "xpath"}))).is_ok());
}

#[test]
fn pageobject_cross_check_runs_after_field_rules() {
    let err = ResourceKind::PageObject.validate(&values(json!({"locator_type": "bogus"}))).unwrap_err();
    assert_eq!(err.fields(), vec!["name", "locator_type"]);
}

#[test]
fn account_validation() {
    let ok = values(json!({"account": "qa", "role": "tester", "email": "qa@example.com", "status": true}));
    assert!(ResourceKind::Account.validate(&ok).is_ok());
    let bad = values(json!({"account": "qa", "email": "nope", "status": 1}));
    let err = ResourceKind::Account.validate(&bad).unwrap_err();
    assert_eq!(err.fields(), vec!["email", "role", "status"]);
}

#[test]
fn case_order_must_be_a_whole_number() {
    let err = ResourceKind::Case.validate(&values(json!({"order": "first"}))).unwrap_err();
    assert_eq!(err.0[0].code, "invalid_integer");
    let err = ResourceKind::Case.validate(&values(json!({"order": 2.5}))).unwrap_err();
    assert_eq!(err.0, vec![FieldError::new("order", "form.invalidInteger", "invalid_integer")]);
    assert!(ResourceKind::Case.validate(&values(json!({"order": 2, "url_override": 1}))).is_ok());
    assert!(ResourceKind::Case.validate(&values(json!({"order": "2", "url_override": "1"}))).is_ok());
}

#[test]
fn suite_validation_and_sources() {
    let ok = values(json!({"name": "smoke", "case_id": [3, 1, "2"]}));
    assert!(ResourceKind::Suite.validate(&ok).is_ok());
    let err = ResourceKind::Suite.validate(&values(json!({"case_id": [1, "x"]}))).unwrap_err();
    assert_eq!(err.fields(), vec!["name", "case_id"]);
    assert_eq!(err.0[1].code, "invalid_integer");

    let schema = ResourceKind::Suite.schema();
    assert_eq!(schema.field("status").and_then(|f| f.default_value), Some(Scalar::Str("draft")));
    assert!(matches!(
        schema.field("case_id").and_then(|f| f.source),
        Some(OptionSource::Resource { resource: ResourceKind::Case, .. })
    ));
}

#[test]
fn task_suite_field_is_sourced_from_suites() {
    let field = ResourceKind::Task.schema().field("test_suite").unwrap();
    assert_eq!(field.component, ComponentKind::ApiSelect);
    assert!(matches!(field.source, Some(OptionSource::Resource { resource: ResourceKind::Suite, .. })));
    let err = ResourceKind::Task.validate(&values(json!({"task_name": "nightly", "test_suite": 1.5}))).unwrap_err();
    assert_eq!(err.0[0].code, "invalid_integer");
}

#[test]
fn localize_translates_labels_and_keeps_shape() {
    let en = Catalog::builtin(Locale::En).unwrap();
    let localized = ResourceKind::Project.schema().localize(&en);
    assert_eq!(localized.path_prefix, "/runner/api/v1/project");
    assert_eq!(localized.columns[0].title, "Project Name");
    assert_eq!(localized.edit_form[2].options[0].label, "Enabled");

    let json = serde_json::to_value(&localized).unwrap();
    assert_eq!(json["resource"], "project");
    assert_eq!(json["columns"][1]["dataIndex"], "status");
    assert_eq!(json["columns"][1]["render"], "status_tag");
    assert_eq!(json["editForm"][0]["show"], false);
    assert_eq!(json["editForm"][2]["defaultValue"], 1);
    assert_eq!(json["searchForm"][0]["colSpan"], 6);
}

#[test]
fn localize_exports_option_sources() {
    let json = serde_json::to_value(ResourceKind::Account.schema().localize(&KeyTranslator)).unwrap();
    let project = json["editForm"].as_array().unwrap().iter().find(|f| f["field"] == "project_id").unwrap();
    assert_eq!(project["component"], "ApiSelect");
    assert_eq!(project["api"]["type"], "resource");
    assert_eq!(project["api"]["resource"], "project");
    assert_eq!(project["api"]["label_field"], "name");
}
