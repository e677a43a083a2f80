//! # Connect Four Bot
//!
//! A bitboard Connect Four engine with an alpha-beta minimax opponent, plus the
//! thin layer that persists a game and applies text commands to it.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: bitboard position, win detection, state, snapshots
//! - [`ai`] — Agent trait, minimax search, random baseline
//! - [`command`] — `connect4|drop|red|4` commands and the runner that applies them
//! - [`render`] — Grid and text output of the board
//! - [`store`] — Saved game file
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod command;
pub mod config;
pub mod error;
pub mod game;
pub mod render;
pub mod store;
