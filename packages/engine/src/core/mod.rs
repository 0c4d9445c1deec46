//! Core data structures shared by the simulation and the wasm API.

#[macro_use]
pub mod utils;
pub mod grid;
