//! Quizdesk - terminal client for a local quiz API
//!
//! Three triggers, one request each:
//! - `c` POSTs a sample question to `question/create`
//! - `r` GETs `random` and shows the number
//! - `p` GETs `hello` and shows the greeting
//!
//! Outcomes the UI does not show (failures, question bodies) go to the
//! diagnostic channel.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod diagnostics;
pub mod effect;
pub mod error;
pub mod logging;
pub mod question;
pub mod reducer;
pub mod state;
