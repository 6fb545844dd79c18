//! Grid snake with four food variants.
//!
//! The simulation core lives in [`snake`], [`food`] and [`game`]; it never
//! sleeps or draws. [`input`], [`renderer`], [`ui`] and [`terminal_runtime`]
//! are the terminal presentation layer driven by the binary.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
