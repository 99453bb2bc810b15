//! Modal confirm/alert dialog for the workout log
//!
//! [`dialog`] holds the UI-agnostic state machine behind a [`dialog::DialogView`]
//! seam; [`tui`] provides the ratatui view and a small host screen.

pub mod cli;
pub mod config;
pub mod dialog;
pub mod tui;
