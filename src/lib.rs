//! Grid snake with a per-meal speed ramp.
//!
//! The game core (`game`, `snake`, `food`, `game_loop`) is plain data plus a
//! discrete-time state machine; the terminal front end (`renderer`, `ui`,
//! `input`, `terminal_runtime`) only ever reads snapshots and feeds direction
//! intents back in.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod game_loop;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
