// src/lib.rs

pub mod commands;
pub mod core;
pub mod error;
pub mod input;
pub mod locale;
pub mod proxy;

pub use crate::commands::LojbanPlugin;
pub use crate::error::{Error, Result};
