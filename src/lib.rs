//! Grid Snake: a pure simulation core plus the session, persistence and
//! terminal layers that drive it.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod score;
pub mod sim;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
pub mod view;
