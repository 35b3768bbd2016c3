//! PayStream: a real-time monthly salary counter.
//!
//! This crate accrues a monthly salary over the elapsed fraction of the
//! current calendar month, converts it between ARS and USD, and animates the
//! displayed amounts toward the exact values one cent per tick.

#![warn(missing_docs)]

pub mod api;
pub mod app;
pub mod calculation;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod rates;
pub mod scheduler;
pub mod settings;
