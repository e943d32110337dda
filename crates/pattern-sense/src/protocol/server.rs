//! PatternSense MCP Server Implementation
//!
//! This module implements the MCP server using rmcp 0.9's #[tool_router] pattern.
//! It routes MCP tool calls to the sequence classifier and shape analyzer.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router, ErrorData as McpError,
};

use tracing::{debug, error, info, instrument, warn};

use pattern_sense_core::{
    AnalysisResult, Error, PatternAnalysisResponse, Sequence, ServerConfig, EXPECTED_ARITY,
};
use pattern_sense_detector::{SequenceClassifier, ShapeAnalyzer};

use crate::tools::*;

/// Map a core error onto an MCP error.
///
/// Input problems become "invalid params" (-32602); everything else is an
/// internal error (-32603).
pub fn to_mcp_error(err: &Error) -> McpError {
    let code = if err.is_validation() {
        ErrorCode(-32602)
    } else {
        ErrorCode(-32603)
    };
    McpError::new(code, err.to_string(), None)
}

/// PatternSense MCP Server
///
/// Classifies integer sequences and exposes the analysis via MCP tools.
#[derive(Clone)]
pub struct PatternSenseServer {
    /// Detector pipeline plus arity and tolerance
    classifier: Arc<SequenceClassifier>,
    /// Hill/valley/plain classification
    shape_analyzer: Arc<ShapeAnalyzer>,
    /// Run detectors as parallel blocking tasks
    concurrent: bool,
    /// Upper bound for a single analysis
    request_timeout: Duration,
    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PatternSenseServer {
    /// Create a server with default settings (five numbers, default tolerance)
    pub fn new() -> Self {
        Self::with_classifier(
            SequenceClassifier::new().with_arity(EXPECTED_ARITY),
            false,
            Duration::from_millis(ServerConfig::default().server.request_timeout_ms),
        )
    }

    /// Create a server from a validated configuration
    pub fn from_config(config: &ServerConfig) -> pattern_sense_core::Result<Self> {
        config.validate()?;
        let classifier = SequenceClassifier::from_settings(&config.analysis)?;
        Ok(Self::with_classifier(
            classifier,
            config.analysis.concurrent,
            Duration::from_millis(config.server.request_timeout_ms),
        ))
    }

    fn with_classifier(
        classifier: SequenceClassifier,
        concurrent: bool,
        request_timeout: Duration,
    ) -> Self {
        Self {
            classifier: Arc::new(classifier),
            shape_analyzer: Arc::new(ShapeAnalyzer::new()),
            concurrent,
            request_timeout,
            tool_router: Self::tool_router(),
        }
    }

    /// Full analysis: shape, duplicates and advanced classification
    #[tool(
        description = "Analyze a sequence of integers (exactly five by default): hill/valley/plain shape, duplicate count, and arithmetic/geometric/symmetric/trend classification"
    )]
    #[instrument(skip_all)]
    async fn pattern_analyze(
        &self,
        Parameters(params): Parameters<AnalyzeParams>,
    ) -> Result<CallToolResult, McpError> {
        info!("Analyzing pattern: numbers={:?}", params.numbers);

        let response = self.analyze(&params.numbers).await.map_err(|e| {
            if e.is_validation() {
                warn!("Rejected input {:?}: {}", params.numbers, e);
            } else {
                error!("Error analyzing pattern: {}", e);
            }
            to_mcp_error(&e)
        })?;

        info!(
            "Pattern analyzed: type={}, tags={:?}",
            response.pattern_type,
            response.advanced_analysis.tags()
        );

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&response)
                .unwrap_or_else(|_| response.description.clone()),
        )]))
    }

    /// Advanced classification only
    #[tool(
        description = "Classify a sequence of integers (exactly five by default) as arithmetic, geometric, symmetric, and strictly increasing/decreasing/fluctuating"
    )]
    #[instrument(skip_all)]
    async fn pattern_advanced_analysis(
        &self,
        Parameters(params): Parameters<AdvancedAnalysisParams>,
    ) -> Result<CallToolResult, McpError> {
        info!("Performing advanced analysis: numbers={:?}", params.numbers);

        let result = self.advanced_analysis(&params.numbers).await.map_err(|e| {
            if e.is_validation() {
                warn!("Rejected input {:?}: {}", params.numbers, e);
            } else {
                error!("Error performing advanced analysis: {}", e);
            }
            to_mcp_error(&e)
        })?;

        info!(
            "Advanced analysis complete: tags={:?}, trend={}",
            result.tags(),
            result.trend()
        );

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&result)
                .unwrap_or_else(|_| format!("Trend: {}", result.trend())),
        )]))
    }

    /// Report the active analysis settings
    #[tool(description = "Show the required input length, comparison tolerance and detector order")]
    #[instrument(skip_all)]
    async fn pattern_settings(
        &self,
        Parameters(_params): Parameters<SettingsParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Reporting analysis settings");

        let response = self.settings();

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&response)
                .unwrap_or_else(|_| format!("arity: {}", response.arity)),
        )]))
    }
}

impl PatternSenseServer {
    /// Validate the numbers and run shape plus advanced analysis.
    pub async fn analyze(
        &self,
        numbers: &[i64],
    ) -> pattern_sense_core::Result<PatternAnalysisResponse> {
        self.with_timeout(async {
            let sequence = self.classifier.parse(numbers)?;
            let shape = self.shape_analyzer.analyze(&sequence);
            let advanced = self.classify(sequence).await?;
            Ok(PatternAnalysisResponse::new(shape, advanced))
        })
        .await
    }

    /// Validate the numbers and run the advanced analysis only.
    pub async fn advanced_analysis(
        &self,
        numbers: &[i64],
    ) -> pattern_sense_core::Result<AnalysisResult> {
        self.with_timeout(async {
            let sequence = self.classifier.parse(numbers)?;
            self.classify(sequence).await
        })
        .await
    }

    /// Active analysis settings.
    pub fn settings(&self) -> SettingsResponse {
        SettingsResponse {
            arity: self.classifier.arity().unwrap_or(EXPECTED_ARITY),
            tolerance: self.classifier.tolerance(),
            concurrent: self.concurrent,
            detectors: self
                .classifier
                .detector_names()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    async fn classify(&self, sequence: Sequence) -> pattern_sense_core::Result<AnalysisResult> {
        if self.concurrent {
            self.classifier.classify_concurrent(Arc::new(sequence)).await
        } else {
            Ok(self.classifier.classify(&sequence))
        }
    }

    async fn with_timeout<T>(
        &self,
        analysis: impl Future<Output = pattern_sense_core::Result<T>>,
    ) -> pattern_sense_core::Result<T> {
        tokio::time::timeout(self.request_timeout, analysis)
            .await
            .map_err(|_| {
                Error::Other(format!(
                    "Analysis timed out after {}ms",
                    self.request_timeout.as_millis()
                ))
            })?
    }
}

impl Default for PatternSenseServer {
    fn default() -> Self {
        Self::new()
    }
}

// Implement the ServerHandler trait to define server capabilities
#[tool_handler]
impl rmcp::ServerHandler for PatternSenseServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PatternSense - Classify short integer sequences. \
                 Use pattern_analyze for the full report (hill/valley/plain shape, duplicates, \
                 and arithmetic/geometric/symmetry/trend), pattern_advanced_analysis for the \
                 classification alone, and pattern_settings to see the required input length."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
