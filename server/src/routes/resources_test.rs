use client::{ListParams, RunnerClient, SaveMode};
use schema::{Account, PageObject, Project, Suite};
use serde_json::json;

use super::*;
use crate::routes::app;

// =============================================================================
// PURE HELPERS
// =============================================================================

fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn paging_defaults_and_clamps() {
    let config = ServerConfig::default();
    assert_eq!(paging(&query(&[]), &config).unwrap(), Paging { page: 1, page_size: 10 });
    assert_eq!(
        paging(&query(&[("page", "0"), ("pageSize", "1000")]), &config).unwrap(),
        Paging { page: 1, page_size: 100 }
    );
    assert_eq!(paging(&query(&[("pageSize", "")]), &config).unwrap().page_size, 10);
    assert!(matches!(paging(&query(&[("page", "two")]), &config), Err(ApiError::BadRequest(_))));
}

#[test]
fn filters_only_use_search_form_fields() {
    let q = query(&[("name", "al"), ("status", " "), ("create_time", "2024"), ("page", "1")]);
    assert_eq!(filters(ResourceKind::Project, &q), vec![("name", "al")]);
}

#[test]
fn filter_matching_by_value_type() {
    let Value::Object(row) = json!({"name": "alpha", "status": 1, "active": true, "remark": null}) else {
        unreachable!()
    };
    assert!(matches_filter(&row, "name", "lph"));
    assert!(!matches_filter(&row, "name", "Alpha"));
    assert!(matches_filter(&row, "status", "1"));
    assert!(!matches_filter(&row, "status", "0"));
    assert!(matches_filter(&row, "active", "true"));
    assert!(!matches_filter(&row, "remark", "x"));
    assert!(!matches_filter(&row, "missing", "x"));
}

// =============================================================================
// END TO END
// =============================================================================

async fn spawn() -> (String, RunnerClient) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app(AppState::new(ServerConfig::default()));
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    let base = format!("http://{addr}");
    let runner = RunnerClient::new(client::ClientConfig::new(&base).unwrap()).unwrap();
    (base, runner)
}

#[tokio::test]
async fn healthz_answers_ok() {
    let (_, runner) = spawn().await;
    runner.ping().await.unwrap();
}

#[tokio::test]
async fn create_then_list_returns_stamped_record() {
    let (_, runner) = spawn().await;
    let projects = runner.projects();

    let created = projects
        .create(&Project { name: "alpha".into(), status: 1, ..Project::default() })
        .await
        .unwrap();
    assert_eq!(created.id, Some(1));
    let stamp = created.create_time.clone().unwrap();
    assert_eq!(stamp.len(), "2024-01-01 00:00:00".len());

    let page = projects.list(&ListParams::default()).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items, vec![created]);
}

#[tokio::test]
async fn list_filters_pages_and_orders_newest_first() {
    let (_, runner) = spawn().await;
    let projects = runner.projects();
    for (name, status) in [("alpha", 1), ("beta", 0), ("alphabet", 1), ("gamma", 1)] {
        projects
            .create(&Project { name: name.into(), status, ..Project::default() })
            .await
            .unwrap();
    }

    let page = projects.list(&ListParams::page(1, 2)).await.unwrap();
    assert_eq!(page.total, 4);
    let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["gamma", "alphabet"]);

    let filtered = projects
        .list(&ListParams::default().filter("name", "alpha").filter("status", "1"))
        .await
        .unwrap();
    let names: Vec<&str> = filtered.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["alphabet", "alpha"]);
}

#[tokio::test]
async fn update_preserves_timestamp_and_delete_removes() {
    let (_, runner) = spawn().await;
    let accounts = runner.accounts();

    let created = accounts
        .create(&Account { account: "qa".into(), role: Some("tester".into()), ..Account::default() })
        .await
        .unwrap();
    let stamp = created.created_at.clone();
    assert!(stamp.is_some());
    assert!(created.status);

    let mut changed = created.clone();
    changed.nickname = Some("Quinn".into());
    changed.created_at = None;
    let updated = accounts.save(&changed, SaveMode::Update).await.unwrap();
    assert_eq!(updated.nickname.as_deref(), Some("Quinn"));
    assert_eq!(updated.created_at, stamp);
    assert_eq!(accounts.get(1).await.unwrap(), updated);

    accounts.delete(1).await.unwrap();
    let err = accounts.get(1).await.unwrap_err();
    assert!(matches!(err, client::ApiError::Response { status: 404, .. }));
}

#[tokio::test]
async fn invalid_payload_lists_every_violation() {
    let (_, runner) = spawn().await;
    let bad = Account {
        account: String::new(),
        email: Some("not-an-email".into()),
        role: Some("root".into()),
        ..Account::default()
    };
    let err = runner.accounts().create(&bad).await.unwrap_err();
    let detail = err.field_errors().unwrap();
    let fields: Vec<&str> = detail.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, ["account", "email", "role"]);
}

#[tokio::test]
async fn page_object_cross_field_rule_is_enforced() {
    let (_, runner) = spawn().await;
    let err = runner
        .page_objects()
        .create(&PageObject { name: "login".into(), ..PageObject::default() })
        .await
        .unwrap_err();
    let detail = err.field_errors().unwrap();
    assert_eq!(detail[0].code, "url_or_locator");
}

#[tokio::test]
async fn raw_http_errors_use_envelope_shape() {
    let (base, _) = spawn().await;
    let http = reqwest::Client::new();

    let missing = http.put(format!("{base}/runner/api/v1/case/7")).json(&json!({"order": 1})).send().await.unwrap();
    assert_eq!(missing.status(), 404);
    let body: Value = missing.json().await.unwrap();
    assert_eq!(body["code"], 404);
    assert_eq!(body["errors"], json!({"resource": "case", "id": 7}));

    let unknown = http.get(format!("{base}/runner/api/v1/widget")).send().await.unwrap();
    assert_eq!(unknown.status(), 404);
    let body: Value = unknown.json().await.unwrap();
    assert_eq!(body["errors"], json!({"resource": "widget"}));

    let bad_page = http.get(format!("{base}/runner/api/v1/task?page=x")).send().await.unwrap();
    assert_eq!(bad_page.status(), 400);
}

#[tokio::test]
async fn extractor_rejections_use_envelope_shape() {
    let (base, _) = spawn().await;
    let http = reqwest::Client::new();

    let bad_id = http
        .put(format!("{base}/runner/api/v1/project/abc"))
        .json(&json!({"name": "alpha"}))
        .send()
        .await
        .unwrap();
    let malformed = http
        .post(format!("{base}/runner/api/v1/project"))
        .header("content-type", "application/json")
        .body("not json")
        .send()
        .await
        .unwrap();
    let untyped = http.post(format!("{base}/runner/api/v1/project")).body(r#"{"name":"alpha"}"#).send().await.unwrap();
    let bad_read = http.get(format!("{base}/runner/api/v1/case/1.5")).send().await.unwrap();
    let bad_delete = http.delete(format!("{base}/runner/api/v1/case/x")).send().await.unwrap();

    for response in [bad_id, malformed, untyped, bad_read, bad_delete] {
        assert_eq!(response.status(), 400, "{}", response.url());
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["code"], 400);
        assert!(body["message"].as_str().is_some_and(|m| m.starts_with("bad request")), "{body}");
        assert!(body["errors"]["detail"].is_string(), "{body}");
    }
}

#[tokio::test]
async fn numeric_strings_and_fractions_on_integer_fields() {
    let (base, runner) = spawn().await;
    let http = reqwest::Client::new();

    let created = http
        .post(format!("{base}/runner/api/v1/project"))
        .json(&json!({"name": "alpha", "status": "1"}))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), 200);
    let project = runner.projects().get(1).await.unwrap();
    assert_eq!(project.status, 1);

    let fractional = http
        .post(format!("{base}/runner/api/v1/case"))
        .json(&json!({"order": 2.5}))
        .send()
        .await
        .unwrap();
    assert_eq!(fractional.status(), 422);
    let body: Value = fractional.json().await.unwrap();
    assert_eq!(body["errors"]["detail"][0]["field"], "order");
    assert_eq!(body["errors"]["detail"][0]["code"], "invalid_integer");
}

#[tokio::test]
async fn suites_are_served_and_feed_task_options() {
    let (_, runner) = spawn().await;
    let suite = Suite { name: "smoke".into(), case_id: vec![2, 1], ..Suite::default() };
    let created = runner.suites().save(&suite, SaveMode::Create).await.unwrap();
    assert_eq!(created.id, Some(1));
    assert_eq!(created.status, "draft");
    assert!(created.created_at.is_some());

    let field = ResourceKind::Task.schema().field("test_suite").unwrap();
    let options = runner.field_options(field, &schema::KeyTranslator).await.unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].label, "smoke");
    assert_eq!(options[0].value, json!(1));
}

#[tokio::test]
async fn legacy_task_keys_are_accepted() {
    let (base, runner) = spawn().await;
    let http = reqwest::Client::new();
    let response = http
        .post(format!("{base}/runner/api/v1/task"))
        .json(&json!({"name": "nightly", "executor": "ci", "suite_id": 4}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let task = runner.tasks().get(1).await.unwrap();
    assert_eq!(task.task_name, "nightly");
    assert_eq!(task.test_suite, Some(4));
}
