//! Core quote types, dataset loading, and random selection.

pub mod config;
pub mod dataset;
pub mod models;
pub mod selector;
