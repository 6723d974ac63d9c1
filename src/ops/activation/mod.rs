// src/ops/activation/mod.rs

//! # Activation functions
//!
//! Currently only ReLU, the one activation the graph engine records.

pub mod relu;

pub use relu::relu;
