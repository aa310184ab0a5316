#![allow(dead_code)] //not every test binary uses every helper

use axum::{
    Router,
    body::Body,
    http::{Request, header},
    response::Response,
};
use rollbook::{routes, state::AppState};
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt as _;

pub async fn app(pool: PgPool) -> Router {
    let state = AppState::new(pool).await.unwrap();
    routes::router(state)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let request = builder.body(body).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn text_body(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn draft(name: &str, surname: &str, email: &str) -> Value {
    json!({ "name": name, "surname": surname, "email": email })
}
