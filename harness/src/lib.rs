//! Trailhead Harness: concrete problem domains and a traced runner.
//!
//! Domains implement [`trailhead_search::problem::Problem`] and nothing
//! else; the runner owns strategy selection and report packaging.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod problems;
pub mod runner;
