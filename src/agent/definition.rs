//! The search agent definition.

use std::sync::{Arc, OnceLock};

use serde_json::{json, Value};

use crate::tools::{schemas_json, BraveSearch, Tool, ToolRegistry};

use super::prompt::{agent_description, build_instruction};

/// Agent name the runtime addresses.
pub const AGENT_NAME: &str = "search_agent";

/// Model backing the agent.
pub const AGENT_MODEL: &str = "gemini-2.5-flash-preview-04-17";

/// Everything the agent runtime needs to drive the search agent.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub name: String,
    pub model: String,
    pub instruction: String,
    pub description: String,
    pub tools: ToolRegistry,
}

impl AgentConfig {
    /// Bind the given search tool to the agent's model and policy.
    pub fn with_search_tool(search: BraveSearch) -> Self {
        let search_name = search.name().to_string();
        let mut tools = ToolRegistry::empty();
        tools.register(Arc::new(search));

        let config = Self {
            name: AGENT_NAME.to_string(),
            model: AGENT_MODEL.to_string(),
            instruction: build_instruction(&search_name, &tools),
            description: agent_description(&search_name),
            tools,
        };

        tracing::info!(
            "Agent '{}' defined using model '{}'.",
            config.name,
            config.model
        );
        config
    }

    /// JSON manifest an external runtime can load.
    pub fn manifest(&self) -> Value {
        json!({
            "name": self.name,
            "model": self.model,
            "description": self.description,
            "instruction": self.instruction,
            "tools": schemas_json(&self.tools),
        })
    }
}

/// The process-wide agent, built on first use.
pub fn root_agent() -> &'static AgentConfig {
    static ROOT_AGENT: OnceLock<AgentConfig> = OnceLock::new();
    ROOT_AGENT.get_or_init(|| AgentConfig::with_search_tool(BraveSearch::from_env()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_agent_binds_one_search_tool() {
        let agent = root_agent();
        assert_eq!(agent.name, "search_agent");
        assert_eq!(agent.model, AGENT_MODEL);
        assert_eq!(agent.tools.len(), 1);
        assert!(agent.tools.get("brave_search").is_some());
    }

    #[test]
    fn root_agent_is_built_once() {
        assert!(std::ptr::eq(root_agent(), root_agent()));
    }

    #[test]
    fn manifest_lists_tool_schema() {
        let manifest = root_agent().manifest();
        assert_eq!(manifest["name"], "search_agent");
        assert_eq!(manifest["tools"][0]["function"]["name"], "brave_search");
        assert!(manifest["instruction"]
            .as_str()
            .unwrap()
            .contains("brave_search"));
    }
}
