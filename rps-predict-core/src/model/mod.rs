//! Top-level module for the move-prediction system.
//!
//! This crate provides a multi-level sequence model over the
//! rock-paper-scissors alphabet, including:
//! - The move alphabet (`Move`)
//! - Per-context frequency records (`KeyStats`)
//! - Fixed-window sequence models (`SequenceModel`)
//! - Multi-size combined models (`MultiWindowModel`)
//! - A named-opponent registry (`Predictor`)

/// The rock-paper-scissors move alphabet.
///
/// Defines the tie-break precedence order, the uniform random draw used
/// when no informed prediction exists, and the single-character encoding.
pub mod game_move;

/// Per-context frequency record.
///
/// Tracks how often each move followed one fixed context and selects
/// the most frequent continuation.
pub mod key_stats;

/// Fixed-window sequence model.
///
/// Handles move ingestion, context/outcome accumulation,
/// next-move prediction, batch training and model merging.
pub mod sequence_model;

/// Multi-size model composed of multiple `SequenceModel`s.
///
/// Supports lockstep observation, longest-context-first prediction,
/// parallel construction from recorded histories, and merging.
pub mod multi_window_model;

/// Registry of per-opponent models.
///
/// Exposes tracking, observation, prediction and merging by opponent name.
pub mod predictor;
