use crate::state::AppState;
use axum::extract::State;
use maud::{Markup, html};

pub async fn get_index_route(State(state): State<AppState>) -> Markup {
    state.render(html! {
        div class="bg-gray-800 p-8 rounded shadow-md max-w-md w-full" {
            h1 class="text-2xl font-semibold mb-6 text-center" {
                "Rollbook"
            }
            p class="text-gray-300 mb-6 text-center" {
                "A small student records manager."
            }

            div class="flex flex-row space-x-4 justify-center" {
                a href="/list" class="bg-slate-600 hover:bg-slate-800 font-bold py-2 px-4 rounded" {
                    "View Students"
                }
                a href="/add-student" class="bg-slate-600 hover:bg-slate-800 font-bold py-2 px-4 rounded" {
                    "Add Student"
                }
            }
        }
    })
}
