//! Gamepack - asset compression for the game collection
//!
//! Gamepack builds the deployable scripts of one game: an uncompressed
//! bootstrap that loads every dependency in order, a compressed bundle
//! produced by the optimizing compiler, and per-language message files
//! trimmed to the strings the compressed bundle actually uses.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, reporting, exit status)
//! - `config`: Build configuration loading and defaults
//! - `target`: Application identifiers and per-target build profiles
//! - `tools`: External process invocation
//! - `build`: Pipeline stages that produce the script bundles
//! - `messages`: Message file parsing, filtering and emission

pub mod build;
pub mod cli;
pub mod config;
pub mod messages;
pub mod target;
pub mod tools;

/// Banner written at the top of every generated file.
pub const GENERATED_BANNER: &str = "// Automatically generated file.  Do not edit!\n";
