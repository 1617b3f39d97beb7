pub mod assignments;
pub mod comments;
pub mod risks;
pub mod users;
