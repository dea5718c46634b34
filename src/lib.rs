pub mod clock;
pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod snapshot;
pub mod terminal_runtime;
