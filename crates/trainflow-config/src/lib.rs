//! Configuration management for the trainflow toolkit.
//!
//! This crate handles loading and saving `.trainflow/config.yaml` files,
//! discovering `.trainflow/` directories in the filesystem, and providing
//! typed access to the defaults the CLI applies when reading and writing
//! workout files.

pub mod config;
pub mod project_dir;
