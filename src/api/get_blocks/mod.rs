pub mod models;
pub mod src;
