use axum_test::TestServer;
use http::StatusCode;
use serde_json::{json, Value};

mod common;

/// A second employee with an already registered email is rejected with 409
#[tokio::test]
async fn test_duplicate_employee_creation_returns_409_conflict() {
    let (app, backend) = common::setup_test_app().await.unwrap();
    let server = TestServer::new(app).unwrap();

    let employee_data = json!({
        "firstName": "Tom",
        "lastName": "lin",
        "email": "lin@gmail.com"
    });

    // First creation should succeed (201 Created)
    let response1 = server.post(common::SERVICE_URL).json(&employee_data).await;

    response1.assert_status(StatusCode::CREATED);
    let created: Value = response1.json();
    assert!(created["id"].as_i64().unwrap() > 0);

    // Second creation with the same email should fail (409 Conflict)
    let response2 = server
        .post(common::SERVICE_URL)
        .json(&json!({
            "firstName": "Tim",
            "lastName": "lang",
            "email": "lin@gmail.com"
        }))
        .await;

    response2.assert_status(StatusCode::CONFLICT);
    let error_response: Value = response2.json();
    assert!(error_response["error"]
        .as_str()
        .unwrap()
        .contains("lin@gmail.com"));

    assert_eq!(backend.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_email_match_is_case_sensitive() {
    let (app, backend) = common::setup_test_app().await.unwrap();
    let server = TestServer::new(app).unwrap();

    server
        .post(common::SERVICE_URL)
        .json(&json!({ "firstName": "Tom", "lastName": "lin", "email": "lin@gmail.com" }))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .post(common::SERVICE_URL)
        .json(&json!({ "firstName": "Tom", "lastName": "lin", "email": "Lin@gmail.com" }))
        .await
        .assert_status(StatusCode::CREATED);

    assert_eq!(backend.find_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_email_is_free_again_after_delete() {
    let (app, _backend) = common::setup_test_app().await.unwrap();
    let server = TestServer::new(app).unwrap();
    let employee = common::employee_json(&common::new_employee());

    let created: Value = server.post(common::SERVICE_URL).json(&employee).await.json();
    let id = created["id"].as_i64().unwrap();

    server
        .delete(&common::employee_url(id))
        .await
        .assert_status(StatusCode::OK);

    server
        .post(common::SERVICE_URL)
        .json(&employee)
        .await
        .assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_update_keeping_own_email_is_not_a_duplicate() {
    let (app, backend) = common::setup_test_app().await.unwrap();
    let server = TestServer::new(app).unwrap();
    let saved = backend.save(&common::new_employee()).await.unwrap();

    let response = server
        .put(&common::employee_url(saved.id.unwrap()))
        .json(&json!({
            "firstName": "Renamed",
            "lastName": saved.last_name,
            "email": saved.email
        }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["firstName"], "Renamed");
}
