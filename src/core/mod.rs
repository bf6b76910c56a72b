//! Configuration and domain types shared by the handlers

pub mod config;
pub mod models;
