//! FitFuel Client Library
//!
//! HTTP clients for the exercise, recipe and video APIs, plus the services
//! the `fitfuel` binary is built on. Exposed as a library for tests.

pub mod config;
pub mod error;
pub mod repositories;
pub mod services;
pub mod state;
