//! Core types and definitions for the BULWARK simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! enums, unit definitions, damage math, events, state snapshots, and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod damage;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
