use crate::{
    data::student::{Student, ValidStudent},
    error::{ParseDateSnafu, RollbookResult},
    state::AppState,
};
use chrono::NaiveDate;
use snafu::ResultExt;

/// Demo rows loaded by the `seed` binary. Keyed by email, so re-running the
/// seed leaves an already-populated store untouched.
const SAMPLE_STUDENTS: [(&str, &str, &str, &str, &str); 5] = [
    ("John", "Doe", "john.doe@example.com", "1998-05-15", "Computer Science"),
    ("Jane", "Smith", "jane.smith@example.com", "1999-08-22", "Mathematics"),
    ("Mike", "Johnson", "mike.johnson@example.com", "1997-12-03", "Physics"),
    ("Sarah", "Wilson", "sarah.wilson@example.com", "2000-01-18", "Biology"),
    ("Alex", "Brown", "alex.brown@example.com", "1998-09-10", "Chemistry"),
];

/// Upserts every sample student, returning how many rows were newly
/// inserted (zero on a second run).
pub async fn seed_sample_students(state: &AppState) -> RollbookResult<usize> {
    let mut conn = state.get_connection().await?;
    let mut inserted = 0;

    for (name, surname, email, date_of_birth, field_of_study) in SAMPLE_STUDENTS {
        let student = ValidStudent {
            name: name.to_string(),
            surname: surname.to_string(),
            email: email.to_string(),
            date_of_birth: Some(
                NaiveDate::parse_from_str(date_of_birth, "%Y-%m-%d").context(ParseDateSnafu {
                    original: date_of_birth,
                })?,
            ),
            field_of_study: Some(field_of_study.to_string()),
        };
        if Student::upsert_by_email(student, &mut conn).await? {
            inserted += 1;
        }
    }

    Ok(inserted)
}
