/// MCP server implementation that handles JSON-RPC communication
///
/// This module implements the presentation side of the dashboard:
/// 1. Reads JSON-RPC requests from stdin, one per line
/// 2. Dispatches tool calls to the habit and preference stores
/// 3. Sends rendered results back on stdout

use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::mcp::protocol::*;
use crate::tools::{self, ToolError};
use crate::{DashboardServer, ServerError};

/// MCP server wrapping a dashboard
pub struct McpServer {
    dashboard: DashboardServer,
    /// Whether the client has completed the initialize handshake
    initialized: bool,
}

impl McpServer {
    pub fn new(dashboard: DashboardServer) -> Self {
        Self {
            dashboard,
            initialized: false,
        }
    }

    /// Run the MCP server, handling JSON-RPC over stdin/stdout
    pub async fn run(&mut self) -> Result<(), ServerError> {
        info!("Starting MCP server, waiting for JSON-RPC requests...");

        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin);
        let mut stdout = tokio::io::stdout();

        let mut line = String::new();

        loop {
            line.clear();

            match reader.read_line(&mut line).await {
                Ok(0) => {
                    info!("MCP server shutting down (stdin closed)");
                    break;
                }
                Ok(_) => {
                    if let Some(response) = self.process_line(&line).await {
                        let response_str = serde_json::to_string(&response)?;

                        stdout.write_all(response_str.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;

                        debug!("Sent response: {}", response_str);
                    }
                }
                Err(e) => {
                    error!("Failed to read from stdin: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Process a single line of JSON-RPC input
    ///
    /// Returns `None` for blank lines and notifications.
    pub async fn process_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        debug!("Processing request: {}", line);

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to parse JSON-RPC request: {}", e);
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    error_codes::PARSE_ERROR,
                    format!("Invalid JSON: {}", e),
                    None,
                ));
            }
        };

        match request.id.clone() {
            Some(id) => Some(self.handle_request(id, request).await),
            None => {
                self.handle_notification(&request);
                None
            }
        }
    }

    fn handle_notification(&mut self, request: &JsonRpcRequest) {
        match request.method.as_str() {
            "initialized" | "notifications/initialized" => {
                self.initialized = true;
                info!("MCP client finished initialization");
            }
            other => debug!("Ignoring notification {}", other),
        }
    }

    async fn handle_request(&mut self, id: Value, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(id).await,
            "initialized" | "notifications/initialized" => {
                self.initialized = true;
                JsonRpcResponse::success(id, Value::Null)
            }
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => self.handle_tools_list(id).await,
            "tools/call" => self.handle_tools_call(id, request.params).await,
            _ => JsonRpcResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method '{}' not found", request.method),
                None,
            ),
        }
    }

    async fn handle_initialize(&mut self, id: Value) -> JsonRpcResponse {
        info!("MCP client connected");

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: "iMakeIt Habits".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        to_response(id, &result)
    }

    async fn handle_tools_list(&mut self, id: Value) -> JsonRpcResponse {
        let no_arguments = json!({"type": "object", "properties": {}});

        let tools = vec![
            definition("habit_create", "Create a new habit to track", schema::<tools::CreateHabitParams>()),
            definition(
                "habit_toggle",
                "Mark a habit as done for the current period, or undo it if already done",
                schema::<tools::ToggleHabitParams>(),
            ),
            definition(
                "habit_list",
                "List habits with streaks and completion state, with optional filtering and sorting",
                schema::<tools::ListHabitsParams>(),
            ),
            definition(
                "habit_stats",
                "Dashboard summary: completed today, total and average streak, insights",
                schema::<tools::StatsParams>(),
            ),
            definition("habit_update", "Edit a habit's title, description or category", schema::<tools::UpdateHabitParams>()),
            definition("habit_delete", "Delete a habit", schema::<tools::DeleteHabitParams>()),
            definition("preferences_get", "Show theme and accent color", no_arguments.clone()),
            definition("preferences_set", "Change theme and/or accent color", schema::<tools::SetPreferencesParams>()),
            definition("profile_register", "Register the dashboard owner", schema::<tools::RegisterProfileParams>()),
            definition("data_export", "Export all dashboard data as a JSON backup", no_arguments),
            definition("data_import", "Restore a JSON backup produced by data_export", schema::<tools::ImportDataParams>()),
            definition("data_clear", "Delete all stored dashboard data", schema::<tools::ClearDataParams>()),
        ];

        JsonRpcResponse::success(id, json!({"tools": tools}))
    }

    async fn handle_tools_call(&mut self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let tool_params: ToolCallParams = match params {
            Some(params) => match serde_json::from_value(params) {
                Ok(p) => p,
                Err(e) => {
                    return JsonRpcResponse::error(
                        id,
                        error_codes::INVALID_PARAMS,
                        format!("Invalid parameters: {}", e),
                        None,
                    );
                }
            },
            None => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "Missing parameters".to_string(),
                    None,
                );
            }
        };

        if !self.initialized {
            debug!("Tool call before initialization handshake: {}", tool_params.name);
        }

        let arguments = Value::Object(tool_params.arguments.into_iter().collect());
        let result = self.call_tool(&tool_params.name, arguments);

        to_response(id, &result)
    }

    /// Run one tool and render its outcome
    fn call_tool(&mut self, name: &str, arguments: Value) -> ToolCallResult {
        let dashboard = &mut self.dashboard;

        let outcome: Result<String, ToolError> = match name {
            "habit_create" => parse_arguments(arguments)
                .and_then(|p| tools::create_habit(dashboard.habits_mut(), p))
                .map(|r| format!("{}\nHabit ID: {}", r.message, r.habit_id)),
            "habit_toggle" => parse_arguments(arguments)
                .and_then(|p| tools::toggle_habit(dashboard.habits_mut(), p))
                .map(|r| r.message),
            "habit_list" => parse_arguments(arguments)
                .and_then(|p| tools::list_habits(dashboard.habits(), p))
                .map(|r| r.message),
            "habit_stats" => parse_arguments(arguments)
                .and_then(|p| tools::get_habit_stats(dashboard.habits(), dashboard.analytics(), p))
                .map(|r| r.message),
            "habit_update" => parse_arguments(arguments)
                .and_then(|p| tools::update_habit(dashboard.habits_mut(), p))
                .map(|r| r.message),
            "habit_delete" => parse_arguments(arguments)
                .and_then(|p| tools::delete_habit(dashboard.habits_mut(), p))
                .map(|r| r.message),
            "preferences_get" => Ok(tools::get_preferences(dashboard.preferences()).message),
            "preferences_set" => parse_arguments(arguments)
                .and_then(|p| tools::set_preferences(dashboard.preferences_mut(), p))
                .map(|r| r.message),
            "profile_register" => parse_arguments(arguments)
                .and_then(|p| tools::register_profile(dashboard, p))
                .map(|r| r.message),
            "data_export" => tools::export_data(dashboard).map(|r| r.message),
            "data_import" => parse_arguments(arguments)
                .and_then(|p| tools::import_data(dashboard, p))
                .map(|r| r.message),
            "data_clear" => parse_arguments(arguments)
                .and_then(|p| tools::clear_data(dashboard, p))
                .map(|r| r.message),
            _ => {
                return ToolCallResult::error(
                    error_codes::METHOD_NOT_FOUND,
                    format!("Unknown tool: {}", name),
                )
            }
        };

        match outcome {
            Ok(text) => ToolCallResult::success(text),
            Err(e) => {
                debug!("Tool {} failed: {}", name, e);
                ToolCallResult::from_tool_error(&e)
            }
        }
    }
}

fn parse_arguments<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArgument(e.to_string()))
}

fn schema<T: JsonSchema>() -> Value {
    serde_json::to_value(schemars::schema_for!(T))
        .unwrap_or_else(|_| json!({"type": "object"}))
}

fn definition(name: &str, description: &str, input_schema: Value) -> ToolDefinition {
    ToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        input_schema,
    }
}

fn to_response<T: Serialize>(id: Value, result: &T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(
            id,
            error_codes::INTERNAL_ERROR,
            format!("Failed to encode result: {}", e),
            None,
        ),
    }
}
