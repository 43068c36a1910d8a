pub mod aggregate;
pub mod endpoints;
pub mod errors;
