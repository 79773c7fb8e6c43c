// Library exports for the half-marathon planner CLI
// This allows testing of internal modules

pub mod commands;
pub mod config;
pub mod export;
pub mod models;
pub mod planner;
pub mod storage;
