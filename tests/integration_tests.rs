use argos_file_manager::{
    RetryPolicy,
    adapters::inbound::http::{
        dto::{ErrorResponseDto, ListFilesResponseDto, ObjectInfoDto, ProjectUploadResponseDto},
        router::{AppState, create_router},
    },
    create_in_memory_app,
};
use axum::http::StatusCode;
use axum_test::TestServer;
use bytes::Bytes;
use std::sync::Arc;

fn setup_test_server() -> TestServer {
    let services = create_in_memory_app().unwrap();
    let file_service = services.file_service.with_retry_policy(RetryPolicy::none());

    let state = AppState {
        file_service: Arc::new(file_service),
    };

    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_report_scenario_end_to_end() {
    let server = setup_test_server();

    // Upload a CSV report.
    let response = server
        .put("/files/reports/2024/q1.csv")
        .content_type("text/csv")
        .bytes(Bytes::from_static(b"a,b,c\n1,2,3"))
        .await;
    response.assert_status(StatusCode::CREATED);

    let metadata: ObjectInfoDto = response.json();
    assert_eq!(metadata.key, "reports/2024/q1.csv");
    assert_eq!(metadata.size, 11);
    assert_eq!(metadata.content_type.as_deref(), Some("text/csv"));

    // Listing under the prefix must include it.
    let response = server.get("/files").add_query_param("prefix", "reports/2024/").await;
    response.assert_status_ok();
    let listing: ListFilesResponseDto = response.json();
    assert_eq!(listing.count, 1);
    assert_eq!(listing.files[0].key, "reports/2024/q1.csv");

    // Prefix matching is by string, not path segment.
    let response = server.get("/files").add_query_param("prefix", "reports/20").await;
    response.assert_status_ok();
    let listing: ListFilesResponseDto = response.json();
    assert_eq!(listing.count, 1);
    assert_eq!(listing.files[0].key, "reports/2024/q1.csv");

    // Download must return the exact bytes with the stored content type.
    let response = server.get("/files/reports/2024/q1.csv").await;
    response.assert_status_ok();
    assert_eq!(response.into_bytes().as_ref(), b"a,b,c\n1,2,3");

    // Delete, then download must yield 404.
    let response = server.delete("/files/reports/2024/q1.csv").await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = server.get("/files/reports/2024/q1.csv").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_download_unknown_key_is_404() {
    let server = setup_test_server();

    let response = server.get("/files/never/uploaded.bin").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: ErrorResponseDto = response.json();
    assert_eq!(body.error, "not_found");
}

#[tokio::test]
async fn test_upload_overwrites_and_content_type_is_inferred() {
    let server = setup_test_server();

    server
        .put("/files/notes/todo.txt")
        .bytes(Bytes::from_static(b"first"))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .put("/files/notes/todo.txt")
        .bytes(Bytes::from_static(b"second"))
        .await;
    response.assert_status(StatusCode::CREATED);

    // No content type was sent, so it is inferred from the extension.
    let metadata: ObjectInfoDto = response.json();
    assert_eq!(metadata.content_type.as_deref(), Some("text/plain"));

    let response = server.get("/files/notes/todo.txt").await;
    response.assert_status_ok();
    assert_eq!(response.into_bytes().as_ref(), b"second");
}

#[tokio::test]
async fn test_invalid_keys_and_prefixes_are_rejected() {
    // Dot-segment paths are normalized away by HTTP clients before they
    // reach the wire, so traversal rejection is exercised on ObjectKey
    // directly; these cases all survive a request line intact.
    let server = setup_test_server();

    let response = server
        .put("/files/a//b.txt")
        .bytes(Bytes::from_static(b"x"))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ErrorResponseDto = response.json();
    assert_eq!(body.error, "invalid_input");

    let response = server
        .put("/files/trailing-slash/")
        .bytes(Bytes::from_static(b"x"))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // Query strings are not dot-normalized, so traversal prefixes do
    // arrive verbatim.
    let response = server.get("/files").add_query_param("prefix", "../up/").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server.get("/files").add_query_param("prefix", "a//b").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_missing_key_is_idempotent() {
    let server = setup_test_server();

    let response = server.delete("/files/never/uploaded.bin").await;
    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_list_without_matches_is_empty_array() {
    let server = setup_test_server();

    let response = server.get("/files").add_query_param("prefix", "empty/").await;
    response.assert_status_ok();
    let listing: ListFilesResponseDto = response.json();
    assert_eq!(listing.count, 0);
    assert!(listing.files.is_empty());
}

fn project_multipart_body(boundary: &str) -> Bytes {
    let body = format!(
        "--{b}\r\n\
         Content-Disposition: form-data; name=\"files\"; filename=\"src/main.rs\"\r\n\
         Content-Type: text/x-rust\r\n\r\n\
         fn main() {{}}\r\n\
         --{b}\r\n\
         Content-Disposition: form-data; name=\"files\"; filename=\"README.md\"\r\n\r\n\
         # readme\r\n\
         --{b}--\r\n",
        b = boundary
    );
    Bytes::from(body)
}

#[tokio::test]
async fn test_project_upload_and_listing() {
    let server = setup_test_server();
    let boundary = "argos-test-boundary";

    let response = server
        .post("/projects")
        .content_type(&format!("multipart/form-data; boundary={}", boundary))
        .bytes(project_multipart_body(boundary))
        .await;
    response.assert_status(StatusCode::CREATED);

    let report: ProjectUploadResponseDto = response.json();
    assert_eq!(report.upload_results.len(), 2);
    let expected_key = format!("projects/{}/src/main.rs", report.project_id);
    assert_eq!(
        report.upload_results.get(&expected_key).map(String::as_str),
        Some("uploaded")
    );

    // Files are listed per project.
    let response = server
        .get(&format!("/projects/{}/files", report.project_id))
        .await;
    response.assert_status_ok();
    let listing: ListFilesResponseDto = response.json();
    assert_eq!(listing.count, 2);

    // And downloadable through the plain file surface.
    let response = server
        .get(&format!("/files/projects/{}/README.md", report.project_id))
        .await;
    response.assert_status_ok();
    assert_eq!(response.into_bytes().as_ref(), b"# readme");
}

#[tokio::test]
async fn test_project_upload_without_files_is_rejected() {
    let server = setup_test_server();
    let boundary = "argos-test-boundary";

    // One non-file form field only.
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"comment\"\r\n\r\nhello\r\n--{b}--\r\n",
        b = boundary
    );

    let response = server
        .post("/projects")
        .content_type(&format!("multipart/form-data; boundary={}", boundary))
        .bytes(Bytes::from(body))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_project_listing_is_404() {
    let server = setup_test_server();

    let response = server.get("/projects/no-such-project/files").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_concurrent_uploads_to_same_key() {
    let server = Arc::new(setup_test_server());

    let a = {
        let server = server.clone();
        tokio::spawn(async move {
            server
                .put("/files/contended.bin")
                .bytes(Bytes::from_static(b"payload-a"))
                .await
                .assert_status(StatusCode::CREATED);
        })
    };
    let b = {
        let server = server.clone();
        tokio::spawn(async move {
            server
                .put("/files/contended.bin")
                .bytes(Bytes::from_static(b"payload-b"))
                .await
                .assert_status(StatusCode::CREATED);
        })
    };
    a.await.unwrap();
    b.await.unwrap();

    let response = server.get("/files/contended.bin").await;
    response.assert_status_ok();
    let bytes = response.into_bytes();
    assert!(
        bytes.as_ref() == b"payload-a" || bytes.as_ref() == b"payload-b",
        "exactly one concurrent payload must be visible"
    );
}
