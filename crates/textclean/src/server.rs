//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes text cleaning and statistics over the MCP protocol via stdio
//! transport. The server is a presentation layer: each `#[tool]` method
//! delegates to `textclean-core`.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use textclean_core::{Analyzer, Config, DEFAULT_TOP_WORDS, StopWords, process};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `clean_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CleanTextParams {
    /// The raw text to normalize.
    pub text: String,
}

/// Parameters for the `text_stats` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextStatsParams {
    /// The text to analyze.
    pub text: String,
    /// Normalize the text before analysis (default: true).
    #[serde(default = "default_normalize")]
    pub normalize: bool,
    /// Number of ranked words to return. Defaults to the configured limit.
    pub top: Option<usize>,
}

const fn default_normalize() -> bool {
    true
}

/// MCP server exposing text cleaning and statistics to AI assistants.
#[derive(Clone)]
pub struct TextServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    stop_words: Arc<StopWords>,
    top_words: usize,
    max_input_bytes: Option<usize>,
}

impl Default for TextServer {
    fn default() -> Self {
        Self::new(StopWords::builtin().clone(), DEFAULT_TOP_WORDS, None)
    }
}

#[tool_router]
impl TextServer {
    /// Create a new MCP server instance.
    pub fn new(stop_words: StopWords, top_words: usize, max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            stop_words: Arc::new(stop_words),
            top_words,
            max_input_bytes,
        }
    }

    /// Create a server using the stopwords, top-word limit, and input limit
    /// from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.stop_words(),
            config.top_words_limit(),
            config.input_limit(),
        )
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Normalize messy text.
    #[tool(
        description = "Clean text: trim, drop non-ASCII characters, collapse whitespace, lowercase, and capitalize each sentence. Returns the cleaned text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn clean_text(
        &self,
        Parameters(params): Parameters<CleanTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "clean_text",
            text_len = params.text.len(),
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let cleaned = process(&params.text);

        tracing::info!(tool = "clean_text", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(cleaned)]))
    }

    /// Compute word, sentence, and top-word statistics.
    #[tool(
        description = "Count words and sentences and rank the most frequent non-stopwords. Returns JSON with word_count, sentence_count, and top_words."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn text_stats(
        &self,
        Parameters(params): Parameters<TextStatsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "text_stats",
            normalize = params.normalize,
            top = ?params.top,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let cleaned;
        let input = if params.normalize {
            cleaned = process(&params.text);
            cleaned.as_str()
        } else {
            params.text.as_str()
        };

        let stats = Analyzer::new()
            .with_stop_words(&self.stop_words)
            .with_top_words(params.top.unwrap_or(self.top_words))
            .analyze(input);

        let json = serde_json::to_string_pretty(&stats)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "text_stats",
            word_count = stats.word_count,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for TextServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use clean_text to normalize text and text_stats for word, sentence, and top-word counts.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
