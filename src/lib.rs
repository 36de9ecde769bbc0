//! HRMS engine: salary structures, attendance and leave rules
//!
//! This crate computes salary component amounts from a monthly wage and a
//! set of percentages (and recovers the percentages from stored amounts),
//! resolves an employee's check-in state for today, summarizes monthly
//! attendance, and applies the leave request rules. An axum service in
//! [`api`] exposes the same functions over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
