//! Tools the agent runtime can call.
//!
//! Each tool exposes a name, a description and a JSON parameter schema, and
//! is executed with the JSON arguments the model produced.

mod brave;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};

pub use brave::{
    brave_search, BraveSearch, SearchError, SearchQuery, SearchResponse, SearchResultItem,
    DEFAULT_NUM_RESULTS,
};

/// A capability exposed to the agent's reasoning loop.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name the model uses to call the tool.
    fn name(&self) -> &str;

    /// What the tool does and when to use it.
    fn description(&self) -> &str;

    /// JSON schema of the accepted arguments.
    fn parameters_schema(&self) -> Value;

    /// Run the tool with the given arguments.
    async fn execute(&self, args: Value) -> anyhow::Result<Value>;
}

/// Name and description of a registered tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
}

/// Function definition handed to the model.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    pub function: FunctionSchema,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionSchema {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Static table of tools, consulted by name.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    order: Vec<String>,
}

impl ToolRegistry {
    /// Registry with the search tool reading its configuration from the environment.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(BraveSearch::from_env()));
        registry
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a tool. A tool with the same name replaces the earlier one.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), tool).is_none() {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Registered tools in registration order.
    pub fn list_tools(&self) -> Vec<ToolInfo> {
        self.iter()
            .map(|tool| ToolInfo {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
            })
            .collect()
    }

    /// Function-calling definitions for every registered tool.
    pub fn get_tool_schemas(&self) -> Vec<ToolSchema> {
        self.iter()
            .map(|tool| ToolSchema {
                schema_type: "function".to_string(),
                function: FunctionSchema {
                    name: tool.name().to_string(),
                    description: tool.description().to_string(),
                    parameters: tool.parameters_schema(),
                },
            })
            .collect()
    }

    /// Execute a tool by name.
    pub async fn execute(&self, name: &str, args: Value) -> anyhow::Result<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown tool: {}", name))?;

        tracing::debug!("Executing tool {} with args {}", name, args);
        tool.execute(args).await
    }

    fn iter(&self) -> impl Iterator<Item = &Arc<dyn Tool>> {
        self.order.iter().filter_map(|name| self.tools.get(name))
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.order.iter()).finish()
    }
}

/// Serialize the registry the way the runtime receives it.
pub fn schemas_json(registry: &ToolRegistry) -> Value {
    json!(registry.get_tool_schemas())
}
