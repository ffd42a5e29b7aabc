pub mod cast;
pub mod movie;
