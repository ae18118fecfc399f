//! Data Transfer Objects for platform communication
//!
//! Request bodies sent to the platform API and the thin response envelopes
//! that wrap domain types on the way back.

pub mod cluster;
pub mod job;
