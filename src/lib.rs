//! # Brave Search Agent
//!
//! A conversational agent definition that answers web questions through the
//! Brave Search API.
//!
//! This library provides:
//! - The `brave_search` tool, which turns one search into a JSON envelope
//! - The agent definition binding the model, instruction policy and tools
//!
//! ## Architecture
//!
//! The hosting runtime owns the reasoning loop:
//! 1. Load the agent definition and hand its tool schemas to the model
//! 2. When the model calls `brave_search`, execute it through the registry
//! 3. Feed the `success`/`error` envelope back to the model
//!
//! ## Example
//!
//! ```rust,ignore
//! use brave_search_agent::{agent::root_agent, tools::brave_search};
//!
//! let agent = root_agent();
//! let response = brave_search("capital of France", 3).await;
//! println!("{}", serde_json::to_string_pretty(&response)?);
//! ```

pub mod agent;
pub mod config;
pub mod tools;

pub use config::SearchConfig;
