//! UI utilities for terminal output
//!
//! Progress spinners shown while network calls are in flight.

mod spinner;

pub use spinner::{create_spinner, finish_spinner};
