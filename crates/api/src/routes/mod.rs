pub mod health;
pub mod well;
