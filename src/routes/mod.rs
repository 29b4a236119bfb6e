pub mod recipe;
pub mod routes;
pub mod user;
