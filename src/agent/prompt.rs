//! Instruction and description text for the search agent.

use crate::tools::ToolRegistry;

/// Short description shown to whoever hosts the agent.
pub fn agent_description(search_tool: &str) -> String {
    format!(
        "An assistant that uses the Brave Search API via the '{search_tool}' tool to answer questions requiring web information."
    )
}

/// Build the instruction policy for the model.
pub fn build_instruction(search_tool: &str, tools: &ToolRegistry) -> String {
    let tool_descriptions = tools
        .list_tools()
        .iter()
        .map(|t| format!("- **{}**: {}", t.name, t.description))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are a helpful assistant. Your primary goal is to answer user questions accurately.

## Your Tools

{tool_descriptions}

## Rules

1. **Search when knowledge runs out** - When a question requires information beyond your internal knowledge or needs up-to-date details (like news, current events, specific technical details, or recent discoveries), you MUST use the '{search_tool}' tool.

2. **Handle errors politely** - If the tool's status is 'error', inform the user politely that there was a problem with the search. Do not repeat raw error text.

3. **Synthesize, don't list** - If the status is 'success', synthesize the search results from the 'results' list (title, url, description) into a coherent answer. Provide the answer based on the search results. Do not simply list the results."#,
        tool_descriptions = tool_descriptions,
        search_tool = search_tool,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_covers_the_policy() {
        let instruction = build_instruction("brave_search", &ToolRegistry::new());
        assert!(instruction.contains("MUST use the 'brave_search' tool"));
        assert!(instruction.contains("'error'"));
        assert!(instruction.contains("Do not simply list the results"));
        assert!(instruction.contains("- **brave_search**"));
    }

    #[test]
    fn description_names_the_tool() {
        assert!(agent_description("brave_search").contains("'brave_search'"));
    }
}
