// src/lib.rs
pub mod config;
pub mod domain;
pub mod money;
pub mod planner;
pub mod seed;
pub mod web;

pub use domain::*;
pub use money::*;
