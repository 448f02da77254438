pub mod compare;
pub mod schema;
pub mod shell;
