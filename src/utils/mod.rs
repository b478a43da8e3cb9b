pub mod aggregate;
pub mod validation;
