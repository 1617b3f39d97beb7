use sqlx::FromRow;

/// Database model for user
///
/// Users are provisioned out of band (seed SQL or admin tooling); this
/// service only reads them.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
}
