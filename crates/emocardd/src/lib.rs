//! emocardd — Card-generation daemon library.
//!
//! Hosts the environment-variable settings surface and the engine
//! thread that runs the recognize → classify → compose → encode
//! pipeline for the transport layer.

pub mod config;
pub mod engine;

pub use config::{Config, SettingsMessage};
pub use engine::{spawn_engine, CardArtifact, EngineError, EngineHandle};
