#[cfg(feature = "ssr")]
pub mod cloudinary;
