//! Mobile phone specs & prices dashboard.

pub mod app;
pub mod color;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
