//! Core translation engine module

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod lang;
pub mod languages;
pub mod models;
