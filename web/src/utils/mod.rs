pub mod clock;
pub mod download;
