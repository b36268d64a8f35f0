use crate::client::RailwayClient;
use crate::errors::McpError;
use crate::graphql::JsonObject;
use crate::operations::OperationKind;
use crate::tools::RailwayTool;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, ErrorCode, Implementation, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// MCP handler exposing the Railway tools over a shared API session
#[derive(Clone)]
pub struct RailwayMcpServerHandler {
    client: Arc<RailwayClient>,
    read_only: bool,
}

impl RailwayMcpServerHandler {
    pub fn new(client: Arc<RailwayClient>, read_only: bool) -> Self {
        Self { client, read_only }
    }

    /// The tools available to callers; mutations are hidden in read-only mode
    fn available(&self) -> impl Iterator<Item = RailwayTool> + '_ {
        RailwayTool::ALL
            .iter()
            .copied()
            .filter(|tool| !self.read_only || tool.kind() == OperationKind::Query)
    }

    pub fn tools(&self) -> Vec<Tool> {
        self.available().map(RailwayTool::definition).collect()
    }

    /// Run a tool by name with the raw arguments of a `tools/call` request
    pub async fn run(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let tool = self
            .available()
            .find(|tool| tool.name() == name)
            .ok_or_else(|| tool_not_found(name))?;

        debug!(tool = name, "Calling Railway tool");
        let output = tool
            .call(&self.client, Value::Object(arguments.unwrap_or_default()))
            .await
            .inspect_err(|error| {
                warn!(tool = name, error = %error.message, "Railway tool failed");
            })?;

        Ok(CallToolResult::success(vec![Content::json(output)?]))
    }
}

impl ServerHandler for RailwayMcpServerHandler {
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.run(&request.name, request.arguments).await
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: self.tools(),
        })
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "Railway MCP Server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "MCP server for Railway platform - deploy and manage Railway projects".to_string(),
            ),
            ..Default::default()
        }
    }
}

fn tool_not_found(name: &str) -> McpError {
    McpError::new(
        ErrorCode::METHOD_NOT_FOUND,
        format!("Tool {name} not found"),
        None,
    )
}
