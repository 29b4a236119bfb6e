// src/models/mod.rs

pub mod user;
pub mod session;
pub mod tag;
