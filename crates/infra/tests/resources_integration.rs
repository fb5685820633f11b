//! Integration tests for resource clients
//!
//! **Coverage:**
//! - Single-entity calls without an id fail before any request is made
//! - Ids travel in the path and never in bodies
//! - Scoped resources build parent paths
//! - Receipt upload: multipart part name, filename and token placement
//! - Report ranges render as query parameters
//! - DELETE success regardless of status

#![allow(dead_code)]

#[path = "support.rs"]
mod support;

use chrono::NaiveDate;
use harvest_domain::{HarvestError, ReceiptUpload, Record, ReportRange};
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{any, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn missing_ids_fail_without_requests() {
    let server = MockServer::start().await;
    Mock::given(any()).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let harvest = support::basic_client(&server);
    let blank = Record::new().field("notes", "no id here");

    let cases = [
        (harvest.expenses().get(&blank).await, "retrieving a single expense requires an id"),
        (harvest.expenses().update(&blank).await, "updating a single expense requires an id"),
        (harvest.projects().delete(&blank).await, "deleting a single project requires an id"),
        (harvest.people().reset_password(&blank).await, "resetting a password requires an id"),
        (harvest.clients().toggle_activation(&blank).await, "toggling a client requires an id"),
        (
            harvest.expense_categories().toggle_activation(&blank).await,
            "toggling an expense category requires an id",
        ),
        (harvest.time_tracking().toggle_timer(&blank).await, "toggling a timer requires an id"),
        (harvest.expenses().get_receipt(&blank).await, "getting a receipt requires an id"),
        (harvest.invoice_payments().get(8, &blank).await, "retrieving a single payment requires an id"),
    ];

    for (result, message) in cases {
        assert_eq!(result.unwrap_err(), HarvestError::Validation(message.to_string()));
    }
}

#[tokio::test]
async fn receipt_validation_happens_before_io() {
    let server = MockServer::start().await;
    Mock::given(any()).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let harvest = support::basic_client(&server);
    let upload = ReceiptUpload::new("/tmp/receipt.png", "receipt.png");

    let err = harvest.expenses().attach_receipt(&Record::new(), &upload).await.unwrap_err();
    assert_eq!(err, HarvestError::Validation("attaching a receipt requires an id".into()));

    let nameless = ReceiptUpload::new("/tmp/receipt.png", "");
    let err = harvest.expenses().attach_receipt(&Record::with_id(5), &nameless).await.unwrap_err();
    assert!(matches!(err, HarvestError::Validation(_)));
}

#[tokio::test]
async fn missing_receipt_file_is_io_error() {
    let server = MockServer::start().await;
    let harvest = support::basic_client(&server);
    let upload = ReceiptUpload::new("/nonexistent/receipt.png", "receipt.png");

    let err = harvest.expenses().attach_receipt(&Record::with_id(5), &upload).await.unwrap_err();
    assert!(matches!(err, HarvestError::Io(_)), "got {err:?}");
}

#[tokio::test]
async fn attach_receipt_sends_multipart_with_query_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/expenses/42/receipt"))
        .and(query_param("access_token", "tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"receipt": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("upload-tmp-123");
    std::fs::write(&file, "receipt-bytes").unwrap();

    let harvest = support::oauth_client(&server);
    harvest.set_access_token("tok-1");

    let record = Record::from_value(json!({"id": "42"})).unwrap();
    let upload = ReceiptUpload::new(&file, "taxi.jpg");
    let value = harvest.expenses().attach_receipt(&record, &upload).await.unwrap();
    assert_eq!(value, json!({"receipt": "ok"}));

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    assert!(support::header(request, "authorization").is_none());
    assert!(support::header(request, "content-type").unwrap().starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains(r#"name="expense[receipt]""#), "body: {body}");
    assert!(body.contains(r#"filename="taxi.jpg""#), "body: {body}");
    assert!(body.contains("receipt-bytes"));
}

#[tokio::test]
async fn attach_receipt_without_token_uses_basic_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/expenses/7/receipt"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("r.txt");
    std::fs::write(&file, "x").unwrap();

    let harvest = support::basic_client(&server);
    harvest
        .expenses()
        .attach_receipt(&Record::with_id(7), &ReceiptUpload::new(&file, "r.txt"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().is_none());
    assert!(support::header(&requests[0], "authorization").unwrap().starts_with("Basic "));
}

#[tokio::test]
async fn create_strips_id_and_update_puts_it_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clients"))
        .and(body_json(json!({"client": {"name": "Acme"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 11})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/clients/11"))
        .and(body_json(json!({"client": {"name": "Acme Ltd"}})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let harvest = support::basic_client(&server);
    let created = harvest
        .clients()
        .create(&Record::from_value(json!({"id": 99, "client": {"name": "Acme"}})).unwrap())
        .await
        .unwrap();
    assert_eq!(created, json!({"id": 11}));

    let update = Record::with_id(11).field("client", json!({"name": "Acme Ltd"}));
    assert_eq!(harvest.clients().update(&update).await.unwrap(), Value::Null);
}

#[tokio::test]
async fn time_tracking_uses_verb_paths() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/daily/60/2024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"day_entries": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/daily/update/5"))
        .and(body_json(json!({"hours": 1.5})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let harvest = support::basic_client(&server);
    let day = NaiveDate::from_ymd_opt(2024, 2, 29);
    harvest.time_tracking().daily(day).await.unwrap();
    harvest.time_tracking().update(&Record::with_id(5).field("hours", 1.5)).await.unwrap();
}

#[tokio::test]
async fn scoped_resources_build_parent_paths() {
    let server = MockServer::start().await;
    for route in [
        "/projects/3/user_assignments",
        "/projects/3/task_assignments/8",
        "/clients/4/contacts",
        "/invoices/6/payments",
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
    }

    let harvest = support::basic_client(&server);
    harvest.user_assignments().list(3).await.unwrap();
    harvest.task_assignments().get(3, &Record::with_id(8)).await.unwrap();
    harvest.client_contacts().list_by_client(4).await.unwrap();
    harvest.invoice_payments().list(6).await.unwrap();
}

#[tokio::test]
async fn toggles_use_resource_specific_verbs() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/projects/2/toggle"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/clients/2/toggle"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/tasks/2/activate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let harvest = support::basic_client(&server);
    let record = Record::with_id(2);
    harvest.projects().toggle_activation(&record).await.unwrap();
    harvest.clients().toggle_activation(&record).await.unwrap();
    harvest.tasks().activate(&record).await.unwrap();
}

#[tokio::test]
async fn reports_render_range_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/people/9/expenses"))
        .and(query_param("from", "20240101"))
        .and(query_param("to", "20240131"))
        .and(query_param("billable", "yes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"expense": {"id": 1}}])))
        .expect(1)
        .mount(&server)
        .await;

    let harvest = support::basic_client(&server);
    let range = ReportRange::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
    )
    .billable(true);

    let value = harvest.reports().expenses_by_user(9, &range).await.unwrap();
    assert_eq!(value, json!([{"expense": {"id": 1}}]));
}

#[tokio::test]
async fn inverted_report_range_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(any()).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let harvest = support::basic_client(&server);
    let range = ReportRange::new(
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    );

    let err = harvest.reports().time_entries_by_project(1, &range).await.unwrap_err();
    assert!(matches!(err, HarvestError::Validation(_)));
}

#[tokio::test]
async fn delete_reports_success_even_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/invoices/5"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/invoices/5"))
        .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
        .expect(1)
        .mount(&server)
        .await;

    let harvest = support::basic_client(&server);
    let record = Record::with_id(5);

    assert_eq!(harvest.invoices().delete(&record).await.unwrap(), json!("oops"));
    assert_eq!(
        harvest.invoices().get(&record).await.unwrap_err(),
        HarvestError::Http { status: 404, body: "missing".into() }
    );
}
