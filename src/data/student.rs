use crate::error::{
    MakeQuerySnafu, MissingRequiredFieldsSnafu, ParseDateSnafu, RollbookError, RollbookResult,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use sqlx::{PgConnection, Pool, Postgres};

/// Suggested values for the field-of-study dropdown. The store accepts any
/// free text; this list only feeds the UI.
pub const FIELDS_OF_STUDY: [&str; 10] = [
    "Computer Science",
    "Engineering",
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "Business",
    "Economics",
    "Psychology",
    "Other",
];

const STUDENT_COLUMNS: &str = "id, email, name, surname, date_of_birth, field_of_study";

/// A student row as persisted. `name` and `surname` are required on every
/// create/update but stay nullable in the schema for legacy rows.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub field_of_study: Option<String>,
}

/// Incoming create/update payload, everything optional so that presence
/// checks happen in [`StudentDraft::validate`] rather than at
/// deserialisation time.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub field_of_study: Option<String>,
}

/// A draft that has passed validation: required fields present and
/// non-empty, the date parsed, empty optionals normalised to NULL.
#[derive(Debug, Clone)]
pub struct ValidStudent {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub field_of_study: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl StudentDraft {
    pub fn validate(self) -> RollbookResult<ValidStudent> {
        let (Some(name), Some(surname), Some(email)) = (
            non_empty(self.name),
            non_empty(self.surname),
            non_empty(self.email),
        ) else {
            return MissingRequiredFieldsSnafu.fail();
        };

        let date_of_birth = match non_empty(self.date_of_birth) {
            Some(raw) => Some(
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .context(ParseDateSnafu { original: raw })?,
            ),
            None => None,
        };

        Ok(ValidStudent {
            name,
            surname,
            email,
            date_of_birth,
            field_of_study: non_empty(self.field_of_study),
        })
    }
}

/// The one store-enforced invariant is email uniqueness, so a unique
/// violation on write is always the duplicate-email conflict. Everything
/// else stays an unclassified query failure.
fn classify_write_error(source: sqlx::Error) -> RollbookError {
    if source
        .as_database_error()
        .is_some_and(|db_error| db_error.is_unique_violation())
    {
        RollbookError::DuplicateEmail
    } else {
        RollbookError::MakeQuery { source }
    }
}

impl Student {
    pub async fn get_from_db_by_id(
        id: i32,
        conn: &mut PgConnection,
    ) -> RollbookResult<Option<Self>> {
        sqlx::query_as::<_, Self>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM public.students WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(conn)
        .await
        .context(MakeQuerySnafu)
    }

    pub async fn get_all(pool: &Pool<Postgres>) -> RollbookResult<Vec<Self>> {
        sqlx::query_as::<_, Self>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM public.students ORDER BY name ASC"
        ))
        .fetch_all(pool)
        .await
        .context(MakeQuerySnafu)
    }

    pub async fn insert_into_database(
        to_be_added: ValidStudent,
        conn: &mut PgConnection,
    ) -> RollbookResult<Self> {
        sqlx::query_as::<_, Self>(&format!(
            "INSERT INTO public.students (name, surname, email, date_of_birth, field_of_study) VALUES ($1, $2, $3, $4, $5) RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(to_be_added.name)
        .bind(to_be_added.surname)
        .bind(to_be_added.email)
        .bind(to_be_added.date_of_birth)
        .bind(to_be_added.field_of_study)
        .fetch_one(conn)
        .await
        .map_err(classify_write_error)
    }

    /// Full replace of the editable fields. `Ok(None)` means no row has
    /// that id.
    pub async fn update_in_database(
        id: i32,
        replacement: ValidStudent,
        conn: &mut PgConnection,
    ) -> RollbookResult<Option<Self>> {
        sqlx::query_as::<_, Self>(&format!(
            "UPDATE public.students SET name = $1, surname = $2, email = $3, date_of_birth = $4, field_of_study = $5 WHERE id = $6 RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(replacement.name)
        .bind(replacement.surname)
        .bind(replacement.email)
        .bind(replacement.date_of_birth)
        .bind(replacement.field_of_study)
        .bind(id)
        .fetch_optional(conn)
        .await
        .map_err(classify_write_error)
    }

    /// Returns whether a row was actually deleted.
    pub async fn remove_from_database(id: i32, conn: &mut PgConnection) -> RollbookResult<bool> {
        let deleted = sqlx::query("DELETE FROM public.students WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(conn)
            .await
            .context(MakeQuerySnafu)?;
        Ok(deleted.is_some())
    }

    /// Insert-if-absent keyed by email; an existing row is left untouched.
    /// Returns whether a row was inserted.
    pub async fn upsert_by_email(
        to_be_added: ValidStudent,
        conn: &mut PgConnection,
    ) -> RollbookResult<bool> {
        let result = sqlx::query(
            "INSERT INTO public.students (name, surname, email, date_of_birth, field_of_study) VALUES ($1, $2, $3, $4, $5) ON CONFLICT (email) DO NOTHING"
        )
        .bind(to_be_added.name)
        .bind(to_be_added.surname)
        .bind(to_be_added.email)
        .bind(to_be_added.date_of_birth)
        .bind(to_be_added.field_of_study)
        .execute(conn)
        .await
        .context(MakeQuerySnafu)?;
        Ok(result.rows_affected() > 0)
    }
}
