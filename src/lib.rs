//! monecole — command-line client for the "monecole" ENT school portal.

pub mod cli;
pub mod client;
pub mod commands;
pub mod dates;
pub mod display;
pub mod error;
pub mod homeworks;
mod login;

pub use client::EntClient;
pub use error::EntError;
