use maud::{Escaper, Markup, PreEscaped, Render, html};
use std::fmt::Write;

const INPUT_CLASSES: &str = "shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600";

pub fn render_table<const N: usize>(titles: [&'static str; N], items: Vec<[Markup; N]>) -> Markup {
    html! {
        div class="overflow-x-auto" {
            table class="min-w-full bg-gray-800 rounded shadow-md" {
                thead class="bg-gray-700" {
                    tr {
                        @for title in titles {
                            th class="py-2 px-4 text-left font-semibold text-gray-300" {(title)}
                        }
                    }
                }
                tbody {
                    @for row in items {
                        tr {
                            @for col in row {
                                td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(col)}
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn escape(s: impl AsRef<str>) -> PreEscaped<String> {
    let mut output = String::new();
    Escaper::new(&mut output).write_str(s.as_ref()).unwrap(); //this method always succeeds - strange api!
    PreEscaped(output)
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-2xl font-semibold mb-4" {(s)}
    }
}

pub fn render_nav() -> Markup {
    html! {
        nav class="w-full bg-gray-800 shadow-md mb-8" {
            div class="container mx-auto flex flex-row items-center space-x-6 py-3 px-4" {
                a href="/" class="font-bold text-lg hover:text-blue-400" {"Rollbook"}
                a href="/list" class="hover:text-blue-400" {"Students"}
                a href="/add-student" class="hover:text-blue-400" {"Add Student"}
            }
        }
    }
}

pub fn form_element(id: &str, label: &str, inner: Markup) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class="block text-sm font-bold mb-2 text-gray-300" {(label)}
            (inner)
        }
    }
}

pub fn simple_form_element(
    id: &str,
    label: &str,
    required: bool,
    input_type: Option<&str>,
    value: Option<&str>,
) -> Markup {
    form_element(
        id,
        label,
        html! {
            input required[required] type=(input_type.unwrap_or("text")) id=(id) name=(id) value=[value] class=(INPUT_CLASSES) {}
        },
    )
}

pub fn select_form_element(
    id: &str,
    label: &str,
    placeholder: &str,
    options: &[&str],
    selected: Option<&str>,
) -> Markup {
    form_element(
        id,
        label,
        html! {
            select id=(id) name=(id) class=(INPUT_CLASSES) {
                option value="" {(placeholder)}
                @for option in options {
                    option value=(option) selected[selected == Some(*option)] {(option)}
                }
            }
        },
    )
}

/// Hidden until the submit script fills it in.
pub fn error_banner() -> Markup {
    html! {
        div id="form-error" class="hidden bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {}
    }
}

/// Client-side half of the form pages: serialises the five student fields
/// to JSON, disables the submit button for the duration, and either
/// navigates to the list or surfaces the server's `error` string inline.
pub fn submit_as_json(method: &str, url: &str) -> Markup {
    const TEMPLATE: &str = r#"
const form = document.getElementById('student-form');
const errorBox = document.getElementById('form-error');
form.addEventListener('submit', async (event) => {
    event.preventDefault();
    const submit = form.querySelector('button[type="submit"]');
    submit.disabled = true;
    errorBox.classList.add('hidden');
    const fields = new FormData(form);
    const payload = {
        name: fields.get('name'),
        surname: fields.get('surname'),
        email: fields.get('email'),
        dateOfBirth: fields.get('dateOfBirth') || null,
        fieldOfStudy: fields.get('fieldOfStudy') || null,
    };
    try {
        const response = await fetch('__URL__', {
            method: '__METHOD__',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify(payload),
        });
        if (response.ok) {
            window.location.href = '/list';
            return;
        }
        const body = await response.json().catch(() => null);
        errorBox.textContent = body && body.error ? body.error : 'Something went wrong, please try again';
        errorBox.classList.remove('hidden');
    } catch (_) {
        errorBox.textContent = 'Something went wrong, please try again';
        errorBox.classList.remove('hidden');
    }
    submit.disabled = false;
});
"#;

    let script = TEMPLATE.replace("__URL__", url).replace("__METHOD__", method);
    html! {
        script { (PreEscaped(script)) }
    }
}
