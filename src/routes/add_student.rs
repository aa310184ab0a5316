use crate::{
    data::student::FIELDS_OF_STUDY,
    maud_conveniences::{error_banner, select_form_element, simple_form_element, submit_as_json, title},
    state::AppState,
};
use axum::extract::State;
use maud::{Markup, html};

pub async fn get_add_student_page(State(state): State<AppState>) -> Markup {
    state.render(html! {
        div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-md w-full" {
            (title("Add New Student"))
            p class="mb-4 text-gray-300" {"Fill in the information below to add a new student."}

            (error_banner())

            form id="student-form" class="p-4" {
                (simple_form_element("name", "Name", true, None, None))
                (simple_form_element("surname", "Surname", true, None, None))
                (simple_form_element("email", "Email", true, Some("email"), None))
                (simple_form_element("dateOfBirth", "Date of Birth", false, Some("date"), None))
                (select_form_element("fieldOfStudy", "Field of Study", "Select a field", &FIELDS_OF_STUDY, None))

                div class="flex items-center justify-between" {
                    button type="submit" class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
                        "Add Student"
                    }
                }
            }

            (submit_as_json("POST", "/students"))

            a href="/list" class="block mt-6 text-blue-400 hover:underline" {"← Back to List"}
        }
    })
}
