// src/lib.rs

//! subtraffic Library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod services;
pub mod utils;
