//! Core library for the Easily job portal.
//!
//! The `board` module holds the entire state layer: two in-memory stores
//! (recruiter accounts and job postings with their embedded applicants) plus
//! the collaborator traits the HTTP service plugs adapters into. Config,
//! telemetry, and the application error type round out the service plumbing.

pub mod board;
pub mod config;
pub mod error;
pub mod telemetry;
