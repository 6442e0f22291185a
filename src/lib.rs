//! Lectura Server Library
//!
//! This crate exposes the modules needed by integration tests.
//! The server binary is in main.rs.
//!
//! # Modules
//!
//! - `routes`: the conversion gateway HTTP surface
//! - `providers`: upstream AI/TTS clients behind swappable traits
//! - `content`: mode-tagged result shapes and their decoders
//! - `reader`: mode-specific viewer state machines
//! - `bridge`: tab-scoped content handoff between upload and reader

pub mod bridge;
pub mod config;
pub mod content;
pub mod error;
pub mod pdf;
pub mod providers;
pub mod reader;
pub mod routes;
pub mod speech;
pub mod state;
