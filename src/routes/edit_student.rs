use crate::{
    data::{Student, student::FIELDS_OF_STUDY},
    maud_conveniences::{error_banner, select_form_element, simple_form_element, submit_as_json, title},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use maud::{Markup, html};

fn not_found_page(state: &AppState) -> (StatusCode, Markup) {
    (
        StatusCode::NOT_FOUND,
        state.render(html! {
            div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-md w-full text-center" {
                (title("Student not found"))
                a href="/list" class="text-blue-400 hover:underline" {"← Back to List"}
            }
        }),
    )
}

/// Unlike the API, every failure mode here (non-integer id, missing row,
/// store error) collapses into the page's own not-found response.
pub async fn get_edit_student_page(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> (StatusCode, Markup) {
    let Ok(id) = raw_id.parse::<i32>() else {
        return not_found_page(&state);
    };

    let student = match state.get_connection().await {
        Ok(mut conn) => Student::get_from_db_by_id(id, &mut conn).await,
        Err(e) => Err(e),
    };
    let student = match student {
        Ok(Some(student)) => student,
        Ok(None) => return not_found_page(&state),
        Err(e) => {
            error!(?e, id, "Unable to fetch student for the edit page");
            return not_found_page(&state);
        }
    };

    let date_of_birth = student
        .date_of_birth
        .map(|date| date.format("%Y-%m-%d").to_string());

    let markup = state.render(html! {
        div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-md w-full" {
            (title("Edit Student"))
            p class="mb-4 text-gray-300" {"Update the student information below."}

            (error_banner())

            form id="student-form" class="p-4" {
                (simple_form_element("name", "Name", true, None, student.name.as_deref()))
                (simple_form_element("surname", "Surname", true, None, student.surname.as_deref()))
                (simple_form_element("email", "Email", true, Some("email"), Some(&student.email)))
                (simple_form_element("dateOfBirth", "Date of Birth", false, Some("date"), date_of_birth.as_deref()))
                (select_form_element("fieldOfStudy", "Field of Study", "Select a field", &FIELDS_OF_STUDY, student.field_of_study.as_deref()))

                div class="flex items-center justify-between" {
                    button type="submit" class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
                        "Update Student"
                    }
                }
            }

            (submit_as_json("PUT", &format!("/students/{id}")))

            a href="/list" class="block mt-6 text-blue-400 hover:underline" {"← Back to List"}
        }
    });

    (StatusCode::OK, markup)
}
