// src/lib.rs
pub mod api;
pub mod banner;
pub mod builder;
pub mod config;
pub mod database;
pub mod errors;
pub mod grading;
pub mod models;
pub mod seed;
pub mod store;
