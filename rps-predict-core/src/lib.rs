//! Sequence-prediction library for rock-paper-scissors opponents.
//!
//! This crate provides a sliding-window frequency modelling system including:
//! - The three-move alphabet and its uniform random draw
//! - Fixed-window sequence models learning online, one observed move at a time
//! - Multi-size combined models with longest-context fallback
//! - A per-opponent model registry for driving code
//!
//! Models are plain owned values: driving code constructs one per tracked
//! opponent and passes it explicitly, there is no process-wide state.

/// Core sequence models and prediction logic.
pub mod model;
