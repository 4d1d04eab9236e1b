//! Unit Converter MCP Server Implementation
//!
//! Implements the MCP server with all converter tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::conversion::{default_converter, ConversionError, ConversionResult};
use crate::tools::conversions::{self, ConvertRequest};
use crate::tools::status::StatusTracker;

/// Unit Converter MCP Service
#[derive(Clone)]
pub struct ConverterService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: Config,
    tool_router: ToolRouter<ConverterService>,
}

impl ConverterService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config))),
            config,
            tool_router: Self::tool_router(),
        }
    }

    /// Count the outcome of a conversion request, then hand it back
    async fn track<T>(&self, result: ConversionResult<T>) -> ConversionResult<T> {
        self.status_tracker.lock().await.record(result.is_ok());
        result
    }
}

fn to_mcp_error(e: ConversionError) -> McpError {
    McpError::invalid_params(e.to_string(), None)
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListUnitsParams {
    /// Category name: Length, Weight, Time, Speed, Temperature, or Currency
    pub category: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertParams {
    /// Category name: Length, Weight, Time, Speed, Temperature, or Currency
    pub category: String,
    /// Value to convert, as text (e.g., "12.5")
    pub value: String,
    /// Unit to convert from (exact name from list_units, e.g., "Kilometer")
    pub from_unit: String,
    /// Unit to convert to (exact name from list_units, e.g., "Meter")
    pub to_unit: String,
    /// Decimal places for the display value (default from server config, max 10)
    pub decimals: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertAllParams {
    /// Category name: Length, Weight, Time, Speed, Temperature, or Currency
    pub category: String,
    /// Value to convert, as text (e.g., "12.5")
    pub value: String,
    /// Unit to convert from (exact name from list_units)
    pub from_unit: String,
    /// Decimal places for the display values (default from server config, max 10)
    pub decimals: Option<u32>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl ConverterService {
    #[tool(description = "Get the current status of the converter service including build info, configuration, conversion counts, and process information")]
    async fn converter_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status())
    }

    #[tool(description = "Get instructions for using the converter tools. Call this when unsure about category or unit names.")]
    fn converter_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CONVERTER_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CONVERTER_INSTRUCTIONS)]))
    }

    #[tool(description = "List unit categories in display order with their base units")]
    fn list_categories(&self) -> Result<CallToolResult, McpError> {
        json_result(&conversions::list_categories(default_converter()))
    }

    #[tool(description = "List the units of a category in display order, with the default from/to units")]
    fn list_units(&self, Parameters(p): Parameters<ListUnitsParams>) -> Result<CallToolResult, McpError> {
        let result = conversions::list_units(default_converter(), &p.category).map_err(to_mcp_error)?;
        json_result(&result)
    }

    #[tool(description = "Convert a value from one unit to another within a category. Returns the full-precision result and a rounded display value.")]
    async fn convert(&self, Parameters(p): Parameters<ConvertParams>) -> Result<CallToolResult, McpError> {
        let request = ConvertRequest {
            category: p.category,
            value: p.value,
            from_unit: p.from_unit,
            to_unit: p.to_unit,
            decimals: p.decimals,
        };
        let result = conversions::convert(default_converter(), &self.config, &request);
        let result = self.track(result).await.map_err(to_mcp_error)?;
        json_result(&result)
    }

    #[tool(description = "Convert a value into every unit of its category")]
    async fn convert_all(&self, Parameters(p): Parameters<ConvertAllParams>) -> Result<CallToolResult, McpError> {
        let result = conversions::convert_all(
            default_converter(),
            &self.config,
            &p.category,
            &p.value,
            &p.from_unit,
            p.decimals,
        );
        let result = self.track(result).await.map_err(to_mcp_error)?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for ConverterService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: crate::build_info::NAME.into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Unit Converter".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Unit Converter - length, weight, time, speed, temperature, and currency. \
                 Call converter_instructions first if unsure. \
                 Discovery: list_categories, list_units. \
                 Conversion: convert (one target unit), convert_all (every unit of the category). \
                 Unit and category names are exact and case-sensitive. \
                 Status: converter_status."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info() {
        let service = ConverterService::new(Config::default());
        let info = service.get_info();
        assert_eq!(info.server_info.name, "unitconv");
        assert!(info.instructions.unwrap().contains("convert_all"));
    }

    #[tokio::test]
    async fn test_track_counts_outcomes() {
        let service = ConverterService::new(Config::default());
        let ok: ConversionResult<f64> = Ok(1.0);
        let err: ConversionResult<f64> = Err(ConversionError::UnknownCategory("Volume".into()));
        assert!(service.track(ok).await.is_ok());
        assert!(service.track(err).await.is_err());

        let status = service.status_tracker.lock().await.get_status();
        assert_eq!(status.conversions_performed, 1);
        assert_eq!(status.conversions_failed, 1);
    }
}
