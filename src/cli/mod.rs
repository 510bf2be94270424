//! CLI infrastructure for the noughts binary
//!
//! This module provides the command-line interface for interactive play
//! and scripted replays of click sequences.

pub mod commands;
pub mod output;
