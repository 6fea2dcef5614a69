// Crate root library declaration and module exports.
pub mod cli;
pub mod command;
pub mod config;
pub mod context;
pub mod error;
pub mod help;
pub mod logic;
pub mod model;
pub mod parser;
pub mod storage;
pub mod store;
