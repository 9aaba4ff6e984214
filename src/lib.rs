// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod csv;
pub mod table;
pub mod specs;

pub mod source;
pub mod loader;
pub mod view;

pub mod cli;
pub mod gui;
