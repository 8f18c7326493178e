//! egui rendering. Panels only read [`crate::state::AppState`] and report
//! interactions as [`crate::state::Event`]s.

pub mod panels;
pub mod plot;
pub mod table;
