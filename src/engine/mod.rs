// src/engine/mod.rs

//! Round orchestration.
//!
//! A round launches exactly N concurrent instances of the command (N = worker
//! count, fixed at startup), consumes their results in completion order, and
//! only finishes once every instance has reached a terminal state. Rounds
//! never overlap.

pub mod round;

pub use round::run_round;
