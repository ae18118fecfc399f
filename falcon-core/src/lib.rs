//! Falcon Core
//!
//! Core types shared by the Falcon launch client crates.
//!
//! This crate contains:
//! - Domain types: schedule results, matched resources, job records
//! - DTOs: request and response bodies exchanged with the platform API

pub mod domain;
pub mod dto;
