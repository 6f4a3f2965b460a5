//! Agent module - the search agent's declarative definition.
//!
//! The reasoning loop lives in the hosting runtime. This module only binds:
//! 1. The model identifier
//! 2. The instruction policy and description
//! 3. The registered tools (the Brave search tool)

mod definition;
mod prompt;

pub use definition::{root_agent, AgentConfig, AGENT_MODEL, AGENT_NAME};
pub use prompt::{agent_description, build_instruction};
