//! Health Fit Tracker Library
//!
//! Core functionality for BMI calculation, classification, and the
//! measurement form that drives it.

pub mod app;
pub mod bmi;
pub mod form;
pub mod models;
pub mod tui;
