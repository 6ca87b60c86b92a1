//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Here it starts from the greedy tour, calibrates its
//! initial temperature from sampled swaps, and walks the relocation
//! neighborhood until its time budget runs out.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod types;

pub use config::{
    SaConfig, DEFAULT_CALIBRATION_SAMPLES, DEFAULT_COOLING_FACTOR, DEFAULT_TARGET_ACCEPTANCE,
};
pub use runner::{SimulatedAnnealing, FALLBACK_TEMPERATURE};
pub use types::{AcceptanceRule, STRICT_THRESHOLD};
