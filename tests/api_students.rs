mod common;

use axum::http::StatusCode;
use common::{app, draft, json_body, send};
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn creating_a_student_yields_201_and_a_generated_id(pool: PgPool) {
    let app = app(pool).await;

    let payload = json!({
        "name": "Sarah",
        "surname": "Wilson",
        "email": "sarah.wilson@example.com",
        "dateOfBirth": "2000-01-18",
        "fieldOfStudy": "Biology",
    });
    let response = send(&app, "POST", "/students", Some(payload)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = json_body(response).await;
    let id = created["id"].as_i64().unwrap();
    assert!(id >= 1);
    assert_eq!(created["email"], "sarah.wilson@example.com");
    assert_eq!(created["fieldOfStudy"], "Biology");

    let response = send(&app, "GET", &format!("/students/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn creating_a_duplicate_email_yields_409_and_no_second_row(pool: PgPool) {
    let app = app(pool).await;

    let first = send(&app, "POST", "/students", Some(draft("Ann", "Lee", "ann@example.com"))).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second =
        send(&app, "POST", "/students", Some(draft("Other", "Person", "ann@example.com"))).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = json_body(second).await;
    assert_eq!(body["error"], "A student with this email already exists");

    let all = json_body(send(&app, "GET", "/students", None).await).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn missing_or_empty_required_fields_yield_400_without_inserting(pool: PgPool) {
    let app = app(pool).await;

    let incomplete_payloads = [
        json!({ "surname": "Lee", "email": "ann@example.com" }),
        json!({ "name": "Ann", "email": "ann@example.com" }),
        json!({ "name": "Ann", "surname": "Lee" }),
        json!({ "name": "", "surname": "Lee", "email": "ann@example.com" }),
        json!({ "name": "Ann", "surname": "Lee", "email": "" }),
    ];
    for payload in incomplete_payloads {
        let response = send(&app, "POST", "/students", Some(payload)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Name, surname, and email are required");
    }

    let all = json_body(send(&app, "GET", "/students", None).await).await;
    assert!(all.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn a_malformed_date_of_birth_yields_400(pool: PgPool) {
    let app = app(pool).await;

    let mut payload = draft("Ann", "Lee", "ann@example.com");
    payload["dateOfBirth"] = Value::from("18/01/2000");
    let response = send(&app, "POST", "/students", Some(payload)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let all = json_body(send(&app, "GET", "/students", None).await).await;
    assert!(all.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn an_unknown_id_yields_404_for_every_verb(pool: PgPool) {
    let app = app(pool).await;

    let get = send(&app, "GET", "/students/9999", None).await;
    assert_eq!(get.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(get).await["error"], "Student not found");

    let put = send(&app, "PUT", "/students/9999", Some(draft("Ann", "Lee", "ann@example.com"))).await;
    assert_eq!(put.status(), StatusCode::NOT_FOUND);

    let delete = send(&app, "DELETE", "/students/9999", None).await;
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn a_non_integer_id_yields_400_for_every_verb(pool: PgPool) {
    let app = app(pool).await;

    let get = send(&app, "GET", "/students/abc", None).await;
    assert_eq!(get.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(get).await["error"], "Invalid student ID");

    let put = send(&app, "PUT", "/students/abc", Some(draft("Ann", "Lee", "ann@example.com"))).await;
    assert_eq!(put.status(), StatusCode::BAD_REQUEST);

    let delete = send(&app, "DELETE", "/students/abc", None).await;
    assert_eq!(delete.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn date_of_birth_round_trips_without_drift(pool: PgPool) {
    let app = app(pool).await;

    let mut payload = draft("Sarah", "Wilson", "sarah.wilson@example.com");
    payload["dateOfBirth"] = Value::from("2000-01-18");
    let created = json_body(send(&app, "POST", "/students", Some(payload)).await).await;
    let id = created["id"].as_i64().unwrap();

    let fetched = json_body(send(&app, "GET", &format!("/students/{id}"), None).await).await;
    assert_eq!(fetched["dateOfBirth"], "2000-01-18");
}

#[sqlx::test(migrations = "./migrations")]
async fn put_replaces_every_editable_field(pool: PgPool) {
    let app = app(pool).await;

    let mut payload = draft("Ann", "Lee", "ann@example.com");
    payload["dateOfBirth"] = Value::from("1999-08-22");
    payload["fieldOfStudy"] = Value::from("Mathematics");
    let created = json_body(send(&app, "POST", "/students", Some(payload)).await).await;
    let id = created["id"].as_i64().unwrap();

    let replacement = draft("Anne", "Leigh", "anne.leigh@example.com");
    let response = send(&app, "PUT", &format!("/students/{id}"), Some(replacement)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = json_body(response).await;
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["name"], "Anne");
    assert_eq!(updated["email"], "anne.leigh@example.com");
    assert_eq!(updated["dateOfBirth"], Value::Null);
    assert_eq!(updated["fieldOfStudy"], Value::Null);
}

#[sqlx::test(migrations = "./migrations")]
async fn updating_to_an_existing_email_yields_409_and_changes_neither_row(pool: PgPool) {
    let app = app(pool).await;

    let ann = json_body(send(&app, "POST", "/students", Some(draft("Ann", "Lee", "ann@example.com"))).await).await;
    let bob = json_body(send(&app, "POST", "/students", Some(draft("Bob", "Ray", "bob@example.com"))).await).await;
    let bob_id = bob["id"].as_i64().unwrap();

    let takeover = draft("Bob", "Ray", "ann@example.com");
    let response = send(&app, "PUT", &format!("/students/{bob_id}"), Some(takeover)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let ann_after =
        json_body(send(&app, "GET", &format!("/students/{}", ann["id"]), None).await).await;
    let bob_after =
        json_body(send(&app, "GET", &format!("/students/{bob_id}"), None).await).await;
    assert_eq!(ann_after, ann);
    assert_eq!(bob_after, bob);
}

#[sqlx::test(migrations = "./migrations")]
async fn deleting_then_fetching_yields_404(pool: PgPool) {
    let app = app(pool).await;

    let created = json_body(send(&app, "POST", "/students", Some(draft("Ann", "Lee", "ann@example.com"))).await).await;
    let id = created["id"].as_i64().unwrap();

    let response = send(&app, "DELETE", &format!("/students/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await["message"],
        "Student deleted successfully"
    );

    let response = send(&app, "GET", &format!("/students/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn the_collection_is_ordered_by_name_ascending(pool: PgPool) {
    let app = app(pool).await;

    for (name, email) in [
        ("Bob", "bob@example.com"),
        ("Ann", "ann@example.com"),
        ("Zoe", "zoe@example.com"),
    ] {
        let response = send(&app, "POST", "/students", Some(draft(name, "Lee", email))).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let all = json_body(send(&app, "GET", "/students", None).await).await;
    let names = all
        .as_array()
        .unwrap()
        .iter()
        .map(|student| student["name"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(names, ["Ann", "Bob", "Zoe"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn unsupported_verbs_yield_405_with_an_allow_header(pool: PgPool) {
    let app = app(pool).await;

    let response = send(&app, "DELETE", "/students", None).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let allow = response.headers()["allow"].to_str().unwrap().to_string();
    assert!(allow.contains("GET") && allow.contains("POST"), "Allow: {allow}");

    let response = send(&app, "POST", "/students/1", Some(draft("Ann", "Lee", "ann@example.com"))).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let allow = response.headers()["allow"].to_str().unwrap().to_string();
    assert!(
        allow.contains("GET") && allow.contains("PUT") && allow.contains("DELETE"),
        "Allow: {allow}"
    );
}
