pub mod domains;
pub mod filters;
