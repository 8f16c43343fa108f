pub mod films;
pub mod health;
pub mod users;
