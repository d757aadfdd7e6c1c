//! Integration tests for the user record endpoints.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_admin_lists_users() {
    let app = helpers::TestApp::new();
    app.register("root", "pw", "admin").await;
    app.register("alice", "pw", "patient").await;
    app.register("bob", "pw", "patient").await;
    let token = app.login("root", "pw").await;

    let all = app.request("GET", "/users", None, Some(&token)).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body.as_array().unwrap().len(), 3);

    let page = app
        .request("GET", "/users?skip=1&limit=1", None, Some(&token))
        .await;
    let page = page.body.as_array().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["username"], "alice");
}

#[tokio::test]
async fn test_patient_cannot_list() {
    let app = helpers::TestApp::new();
    app.register("alice", "pw", "patient").await;
    let token = app.login("alice", "pw").await;

    let response = app.request("GET", "/users", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.detail(), "Not enough permissions");
}

#[tokio::test]
async fn test_read_own_and_others() {
    let app = helpers::TestApp::new();
    let root = app.register("root", "pw", "admin").await;
    let alice = app.register("alice", "pw", "patient").await;
    let alice_token = app.login("alice", "pw").await;
    let root_token = app.login("root", "pw").await;

    let own = app
        .request("GET", &format!("/users/{alice}"), None, Some(&alice_token))
        .await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(own.body["username"], "alice");

    let other = app
        .request("GET", &format!("/users/{root}"), None, Some(&alice_token))
        .await;
    assert_eq!(other.status, StatusCode::FORBIDDEN);

    let by_admin = app
        .request("GET", &format!("/users/{alice}"), None, Some(&root_token))
        .await;
    assert_eq!(by_admin.status, StatusCode::OK);
}

#[tokio::test]
async fn test_permission_precedes_existence() {
    let app = helpers::TestApp::new();
    app.register("root", "pw", "admin").await;
    app.register("alice", "pw", "patient").await;
    let alice_token = app.login("alice", "pw").await;
    let root_token = app.login("root", "pw").await;

    let patient = app
        .request("GET", "/users/999", None, Some(&alice_token))
        .await;
    assert_eq!(patient.status, StatusCode::FORBIDDEN);

    let admin = app
        .request("GET", "/users/999", None, Some(&root_token))
        .await;
    assert_eq!(admin.status, StatusCode::NOT_FOUND);
    assert_eq!(admin.detail(), "User not found");
}

#[tokio::test]
async fn test_update_own_password() {
    let app = helpers::TestApp::new();
    let alice = app.register("alice", "pw1", "patient").await;
    let token = app.login("alice", "pw1").await;

    let updated = app
        .request(
            "PUT",
            &format!("/users/{alice}"),
            Some(serde_json::json!({
                "full_name": "Alice Liddell",
                "password": "pw2",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["full_name"], "Alice Liddell");
    assert_eq!(updated.body["email"], "alice@test.com");
    assert!(updated.body["updated_at"].is_string());

    assert_eq!(
        app.login_response("alice", "pw1").await.status,
        StatusCode::UNAUTHORIZED
    );
    app.login("alice", "pw2").await;
}

#[tokio::test]
async fn test_update_other_forbidden_for_patient() {
    let app = helpers::TestApp::new();
    let alice = app.register("alice", "pw", "patient").await;
    app.register("bob", "pw", "patient").await;
    let bob_token = app.login("bob", "pw").await;

    let response = app
        .request(
            "PUT",
            &format!("/users/{alice}"),
            Some(serde_json::json!({ "is_active": false })),
            Some(&bob_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_invalid_path_id_is_unprocessable() {
    let app = helpers::TestApp::new();
    app.register("alice", "pw", "patient").await;
    let token = app.login("alice", "pw").await;

    let response = app
        .request("GET", "/users/abc", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!response.detail().is_empty());
}
