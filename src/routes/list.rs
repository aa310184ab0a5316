use crate::{
    data::Student,
    maud_conveniences::{escape, render_table, title},
    state::AppState,
};
use axum::extract::State;
use maud::{Markup, html};

const PLACEHOLDER: &str = "N/A";

fn cell(value: Option<String>) -> Markup {
    escape(value.unwrap_or_else(|| PLACEHOLDER.to_string()))
}

/// Reads straight from the store rather than going through the API. A
/// store failure degrades to an empty table; the error only reaches the
/// logs.
pub async fn get_list_page(State(state): State<AppState>) -> Markup {
    let students = match Student::get_all(&state).await {
        Ok(students) => students,
        Err(e) => {
            error!(?e, "Unable to fetch students for the list page");
            Vec::new()
        }
    };
    let total = students.len();

    let rows = students
        .into_iter()
        .map(|student| {
            [
                escape(student.id.to_string()),
                cell(student.name),
                cell(student.surname),
                escape(student.email),
                cell(
                    student
                        .date_of_birth
                        .map(|date| date.format("%Y-%m-%d").to_string()),
                ),
                cell(student.field_of_study),
            ]
        })
        .collect::<Vec<_>>();

    state.render(html! {
        div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-4xl w-full flex flex-col space-y-4" {
            div class="flex flex-row items-center justify-between" {
                (title("Students List"))
                a href="/add-student" class="bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded" {
                    "Add Student"
                }
            }

            @if rows.is_empty() {
                div class="text-center py-12" {
                    p class="text-gray-300 text-lg" {"No students found"}
                    p class="text-gray-400 mt-2" {"Add some students to see them here"}
                }
            } @else {
                (render_table(["ID", "Name", "Surname", "Email", "Date of Birth", "Field of Study"], rows))
            }

            p class="text-center text-gray-300" {
                "Total students: "
                span class="font-semibold" {(total)}
            }
        }
    })
}
