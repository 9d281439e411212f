//! HTTP request handlers

pub mod dashboard;
pub mod forecast;
pub mod health;
