pub mod well;
