//! Caltarget MCP Server Implementation
//!
//! Implements the MCP server with the estimator tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::tools::estimate::{self, BiometricParams, EstimateParams, HeightParams, InputError};
use crate::tools::status::StatusTracker;

/// Caltarget MCP Service
#[derive(Clone)]
pub struct CaltargetService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: Config,
    tool_router: ToolRouter<CaltargetService>,
}

impl CaltargetService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            config,
            tool_router: Self::tool_router(),
        }
    }
}

fn invalid_params(e: InputError) -> McpError {
    McpError::invalid_params(e.to_string(), None)
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl CaltargetService {
    #[tool(description = "Estimate a personalized daily calorie target. Requires sex, age, weight_kg and a height (height_cm, or height_unit=imperial with height_feet and height_inches). Optional: activity_level, food_quality, target_goal, sleep_quality, stress_level, water_intake, medical_conditions, format (json|markdown). Returns ready=false with a reason when age, weight or height is missing or out of range.")]
    async fn estimate_calorie_target(
        &self,
        Parameters(params): Parameters<EstimateParams>,
    ) -> Result<CallToolResult, McpError> {
        let response = estimate::estimate_calorie_target(&params, self.config.report_format)
            .map_err(invalid_params)?;

        self.status_tracker
            .lock()
            .await
            .record_estimate(response.ready);

        json_result(&response)
    }

    #[tool(description = "Convert a height entry to centimeters. height_unit is metric (height_cm, at least 100) or imperial (height_feet and height_inches, both required).")]
    fn resolve_height(
        &self,
        Parameters(params): Parameters<HeightParams>,
    ) -> Result<CallToolResult, McpError> {
        let response = estimate::resolve_height(&params).map_err(invalid_params)?;
        json_result(&response)
    }

    #[tool(description = "Calculate resting burn (BMR, Mifflin-St Jeor) from sex, age, weight_kg and height. Returns the value and a display line such as 'BMR = 1,780 Calories/day'.")]
    fn calculate_resting_burn(
        &self,
        Parameters(params): Parameters<BiometricParams>,
    ) -> Result<CallToolResult, McpError> {
        let response = estimate::calculate_resting_burn(&params).map_err(invalid_params)?;
        json_result(&response)
    }

    #[tool(description = "Get instructions for the calorie target tools: accepted keys, defaults and how the target is built. Call this before the first estimate in a session.")]
    fn estimator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::ESTIMATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(ESTIMATOR_INSTRUCTIONS)]))
    }

    #[tool(description = "Get the current status of the caltarget service including build info, process information and estimate counters")]
    async fn caltarget_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        json_result(&status)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for CaltargetService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "caltarget".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Calorie Target Estimator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Calorie Target Estimator - personalized daily calorie targets. \
                 Call estimator_instructions first. \
                 estimate_calorie_target for the full target, calculate_resting_burn for BMR only, \
                 resolve_height to convert feet/inches to cm, caltarget_status for service info. \
                 A ready=false response means age, weight or height still needs to be entered."
                    .into(),
            ),
        }
    }
}
