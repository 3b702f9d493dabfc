pub mod appointments_repository;
pub mod newsletter_repository;
pub mod pool;
