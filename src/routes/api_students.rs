use crate::{
    data::student::{Student, StudentDraft},
    error::{MissingStudentSnafu, ParseStudentIdSnafu, RollbookResult},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use snafu::{OptionExt, ResultExt};

/// Path ids arrive as raw strings so a non-integer segment maps to our own
/// 400 instead of the extractor's rejection, before any store access.
fn parse_student_id(raw: &str) -> RollbookResult<i32> {
    raw.parse().context(ParseStudentIdSnafu)
}

pub async fn get_students(State(state): State<AppState>) -> RollbookResult<Json<Vec<Student>>> {
    Ok(Json(Student::get_all(&state).await?))
}

#[axum::debug_handler]
pub async fn post_new_student(
    State(state): State<AppState>,
    Json(draft): Json<StudentDraft>,
) -> RollbookResult<(StatusCode, Json<Student>)> {
    let valid = draft.validate()?;
    let created =
        Student::insert_into_database(valid, &mut *state.get_connection().await?).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_student(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> RollbookResult<Json<Student>> {
    let id = parse_student_id(&raw_id)?;
    let student = Student::get_from_db_by_id(id, &mut *state.get_connection().await?)
        .await?
        .context(MissingStudentSnafu { id })?;
    Ok(Json(student))
}

pub async fn put_student(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(draft): Json<StudentDraft>,
) -> RollbookResult<Json<Student>> {
    let id = parse_student_id(&raw_id)?;
    let valid = draft.validate()?;
    let updated = Student::update_in_database(id, valid, &mut *state.get_connection().await?)
        .await?
        .context(MissingStudentSnafu { id })?;
    Ok(Json(updated))
}

pub async fn delete_student(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> RollbookResult<Json<Value>> {
    let id = parse_student_id(&raw_id)?;
    let deleted = Student::remove_from_database(id, &mut *state.get_connection().await?).await?;
    snafu::ensure!(deleted, MissingStudentSnafu { id });
    Ok(Json(json!({ "message": "Student deleted successfully" })))
}
