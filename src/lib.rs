//! Classic grid snake: a tick-driven game core with a terminal host.
//!
//! The [`game`] module owns all mutable state behind a single controller;
//! the binary wires it to crossterm input and a ratatui renderer. Everything
//! the renderer sees is an immutable [`game::Snapshot`], never live state.

pub mod clock;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
