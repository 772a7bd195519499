//! Recipebook Engine - Orchestration layer
//!
//! The command surface the UI layer calls. Commands coordinate journal rules
//! with the store, own lifecycle logging, and hand back a freshly re-fetched
//! view after every mutation.

pub mod commands;

pub use commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
pub use commands::engine_query::{apply_engine_query, EngineQuery, EngineQueryResult};
pub use commands::view::JournalView;
