//! Controller driven against a mock job store over HTTP

use jobtrack_client::JobStoreClient;
use jobtrack_controller::{ControllerError, DeleteOutcome, JobListController};
use jobtrack_core::domain::job::{JobId, JobRecord, JobStatus};
use mockito::{Matcher, Server};

fn job(id: u64, company: &str, title: &str, status: JobStatus) -> JobRecord {
    JobRecord {
        id: Some(JobId::Number(id)),
        company: company.to_string(),
        title: title.to_string(),
        status,
        applied_date: None,
        notes: None,
    }
}

#[tokio::test]
async fn test_update_status_scenario() {
    let mut server = Server::new_async().await;
    let list = server
        .mock("GET", "/jobs")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":1,"company":"Acme","title":"Eng","status":"applied"}]"#)
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/jobs/1")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "company": "Acme",
            "title": "Eng",
            "status": "interview"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":1,"company":"Acme","title":"Eng","status":"interview"}"#)
        .create_async()
        .await;

    let mut controller = JobListController::new(JobStoreClient::new(server.url()));
    controller.load_all().await.unwrap();
    controller.open_for_edit(&JobId::Number(1)).unwrap().status = JobStatus::Interview;
    controller.submit().await.unwrap();

    assert_eq!(
        controller.state().jobs(),
        vec![job(1, "Acme", "Eng", JobStatus::Interview)]
    );

    list.assert_async().await;
    update.assert_async().await;
}

#[tokio::test]
async fn test_create_into_empty_list_scenario() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/jobs")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "company": "X",
            "title": "Y",
            "status": "applied"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":7,"company":"X","title":"Y","status":"applied"}"#)
        .create_async()
        .await;

    let mut controller = JobListController::new(JobStoreClient::new(server.url()));
    let draft = controller.open_for_create().unwrap();
    draft.company = "X".to_string();
    draft.title = "Y".to_string();
    controller.submit().await.unwrap();

    assert_eq!(
        controller.state().jobs(),
        vec![job(7, "X", "Y", JobStatus::Applied)]
    );

    create.assert_async().await;
}

#[tokio::test]
async fn test_null_list_scenario() {
    let mut server = Server::new_async().await;
    let list = server
        .mock("GET", "/jobs")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("null")
        .create_async()
        .await;

    let controller = JobListController::new(JobStoreClient::new(server.url()));
    controller.load_all().await.unwrap();

    let state = controller.state().snapshot();
    assert!(state.jobs.is_empty());
    assert!(state.error.is_none());

    list.assert_async().await;
}

#[tokio::test]
async fn test_loose_records_still_load() {
    let mut server = Server::new_async().await;
    let list = server
        .mock("GET", "/jobs")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{"id":1,"company":"Acme","title":"Eng","status":"","applied_date":"soon"},
                {"id":2,"company":"Globex","title":"SRE","status":"Interview"},
                {"id":3,"company":"Initech","title":"QA","status":"on hold"}]"#,
        )
        .create_async()
        .await;

    let controller = JobListController::new(JobStoreClient::new(server.url()));
    controller.load_all().await.unwrap();

    let state = controller.state().snapshot();
    assert!(state.error.is_none());
    assert_eq!(
        state.jobs,
        vec![
            job(1, "Acme", "Eng", JobStatus::Applied),
            job(2, "Globex", "SRE", JobStatus::Interview),
            job(3, "Initech", "QA", JobStatus::Other("on hold".to_string())),
        ]
    );

    list.assert_async().await;
}

#[tokio::test]
async fn test_unknown_status_survives_edit() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/jobs")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":3,"company":"Initech","title":"QA","status":"on hold"}]"#)
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/jobs/3")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "notes": "pinged recruiter",
            "status": "on hold"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":3,"company":"Initech","title":"QA","status":"on hold","notes":"pinged recruiter"}"#)
        .create_async()
        .await;

    let mut controller = JobListController::new(JobStoreClient::new(server.url()));
    controller.load_all().await.unwrap();
    controller.open_for_edit(&JobId::Number(3)).unwrap().notes = "pinged recruiter".to_string();
    let saved = controller.submit().await.unwrap();

    assert_eq!(saved.status, JobStatus::Other("on hold".to_string()));
    update.assert_async().await;
}

#[tokio::test]
async fn test_delete_failure_surfaces_banner() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/jobs")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":4,"company":"Acme","title":"Eng","status":"offer"}]"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/jobs/4")
        .with_status(500)
        .create_async()
        .await;

    let controller = JobListController::new(JobStoreClient::new(server.url()));
    controller.load_all().await.unwrap();

    let err = controller
        .delete(&JobId::Number(4), |_| true)
        .await
        .unwrap_err();

    assert!(matches!(err, ControllerError::Remote(_)));
    assert_eq!(
        controller.state().error().map(|e| e.to_string()),
        Some("Failed to delete job: HTTP error! status: 500".to_string())
    );
    assert_eq!(controller.state().jobs().len(), 1);

    delete.assert_async().await;
}

#[tokio::test]
async fn test_declined_delete_makes_no_request() {
    let mut server = Server::new_async().await;
    let delete = server
        .mock("DELETE", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let controller = JobListController::new(JobStoreClient::new(server.url()));
    let outcome = controller.delete(&JobId::Number(1), |_| false).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Declined);
    delete.assert_async().await;
}
