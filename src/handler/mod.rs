pub mod admin;
pub mod auth;
pub mod complaint;
pub mod dashboard;
pub mod employer;
pub mod job;
pub mod worker;
