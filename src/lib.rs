//! Impact Model - Process-Efficiency Scenario Modeling
//!
//! This crate estimates how process-improvement initiatives change effort
//! and cost across the phases of a delivery project, scaled by the
//! organization's assessed maturity and a target savings scenario.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
