//! Portfolio chatbot backend: REST endpoints over a hardcoded profile plus
//! an LLM-backed assistant with tool dispatch and lead capture.
//!
//! The orchestrator in [`chat`] is the single implementation consumed by
//! both front ends: the HTTP server (`api`) and the terminal client (`chat`).

pub mod chat;
pub mod config;
pub mod contact;
pub mod db;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod profile;
pub mod routes;
pub mod state;
pub mod tools;
pub mod tracker;
