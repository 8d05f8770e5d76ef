pub mod about;
pub mod dashboard;
