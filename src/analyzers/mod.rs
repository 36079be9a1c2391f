//! Rental aggregation and reporting.
//!
//! This module filters the loaded tables to a date range, groups and sums
//! the rental counts into zero-filled summary tables, and assembles them
//! into a [`report::Report`] for display.

pub mod aggregate;
pub mod correlation;
pub mod report;
pub mod types;
pub mod utility;
