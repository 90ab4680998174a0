pub mod auth;
pub mod classes;
pub mod selections;
pub mod users;

pub use self::users::model::User;
