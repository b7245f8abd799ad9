// src/lib.rs

pub mod answer;
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod filter;
pub mod models;
pub mod tags;
pub mod validate;

#[cfg(test)]
mod test_support;
