//! Core domain types
//!
//! This module contains the structures the platform returns while a job is
//! scheduled, matched against resources and launched. They are shared between
//! the HTTP client (decodes them) and the CLI (negotiates and reports on them).

pub mod job;
pub mod platform;
pub mod resource;
