use rollbook::{data::Student, seed::seed_sample_students, state::AppState};
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn seeding_twice_leaves_exactly_the_five_sample_rows(pool: PgPool) {
    let state = AppState::new(pool).await.unwrap();

    assert_eq!(seed_sample_students(&state).await.unwrap(), 5);
    assert_eq!(seed_sample_students(&state).await.unwrap(), 0);

    let students = Student::get_all(&state).await.unwrap();
    assert_eq!(students.len(), 5);

    let mut emails = students
        .iter()
        .map(|student| student.email.as_str())
        .collect::<Vec<_>>();
    emails.sort_unstable();
    assert_eq!(
        emails,
        [
            "alex.brown@example.com",
            "jane.smith@example.com",
            "john.doe@example.com",
            "mike.johnson@example.com",
            "sarah.wilson@example.com",
        ]
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn seeding_does_not_overwrite_an_existing_row(pool: PgPool) {
    let state = AppState::new(pool.clone()).await.unwrap();

    sqlx::query("INSERT INTO public.students (name, surname, email) VALUES ($1, $2, $3)")
        .bind("Johnny")
        .bind("Doe")
        .bind("john.doe@example.com")
        .execute(&pool)
        .await
        .unwrap();

    assert_eq!(seed_sample_students(&state).await.unwrap(), 4);

    let students = Student::get_all(&state).await.unwrap();
    let john = students
        .iter()
        .find(|student| student.email == "john.doe@example.com")
        .unwrap();
    assert_eq!(john.name.as_deref(), Some("Johnny"));
    assert_eq!(john.date_of_birth, None);
}
