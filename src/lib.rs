//! Deterministic grid snake simulation with a terminal host.
//!
//! The core (`direction_queue`, `snake`, `food`, `game`, `simulator`,
//! `scheduler`) is single-threaded and never blocks: a host calls
//! [`scheduler::Scheduler::on_frame`] from its own frame loop and reads
//! [`game::GameSnapshot`]s back. `keyboard`, `renderer`, `ui` and
//! `terminal_runtime` are one such host built on crossterm and ratatui.

pub mod config;
pub mod direction_queue;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod keyboard;
pub mod renderer;
pub mod scheduler;
pub mod simulator;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
