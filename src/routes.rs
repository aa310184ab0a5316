use crate::state::AppState;
use axum::{
    Router,
    routing::get,
};
use tower_http::trace::TraceLayer;

pub mod add_student;
pub mod api_students;
pub mod edit_student;
pub mod index;
pub mod list;

/// Builds the whole application: the three student pages, the landing
/// page, and the JSON API. Method routing gives unsupported verbs a 405
/// with an `Allow` header for free.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::get_index_route))
        .route("/list", get(list::get_list_page))
        .route("/add-student", get(add_student::get_add_student_page))
        .route("/edit-student/{id}", get(edit_student::get_edit_student_page))
        .route(
            "/students",
            get(api_students::get_students).post(api_students::post_new_student),
        )
        .route(
            "/students/{id}",
            get(api_students::get_student)
                .put(api_students::put_student)
                .delete(api_students::delete_student),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
