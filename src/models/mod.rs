// src/models/mod.rs
pub mod assignment;
pub mod course;
pub mod submission;
pub mod user;
