//! Static file serving service
//!
//! Serves the dashboard's presentation assets with content types and caching

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use shared::{ProcessId, process_debug, process_error, process_warn};

use crate::error::{WebServerError, WebServerResult};
use crate::traits::{StaticFileResponse, StaticFileServer};

const DEFAULT_MIME: &str = "application/octet-stream";

#[derive(Clone)]
pub struct RealStaticFileServer {
    base_dir: PathBuf,
    mime_types: HashMap<&'static str, &'static str>,
}

impl RealStaticFileServer {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        let mime_types = HashMap::from([
            ("html", "text/html; charset=utf-8"),
            ("css", "text/css"),
            ("js", "application/javascript"),
            ("json", "application/json"),
            ("png", "image/png"),
            ("jpg", "image/jpeg"),
            ("jpeg", "image/jpeg"),
            ("svg", "image/svg+xml"),
            ("ico", "image/x-icon"),
            ("woff2", "font/woff2"),
        ]);

        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            mime_types,
        }
    }

    fn extension(path: &str) -> Option<String> {
        Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
    }

    fn mime_type(&self, path: &str) -> String {
        Self::extension(path)
            .and_then(|ext| self.mime_types.get(ext.as_str()).copied())
            .unwrap_or(DEFAULT_MIME)
            .to_string()
    }

    /// Cache-Control per asset type; HTML is always revalidated
    fn cache_control(path: &str) -> Option<String> {
        match Self::extension(path)?.as_str() {
            "html" => Some("no-cache".to_string()),
            "js" | "css" => Some("public, max-age=3600".to_string()),
            "png" | "jpg" | "jpeg" | "svg" | "ico" | "woff2" => Some("public, max-age=86400".to_string()),
            _ => None,
        }
    }

    /// Resolve a request path inside the base directory
    fn resolve_path(&self, request_path: &str) -> WebServerResult<PathBuf> {
        let clean_path = request_path.trim_start_matches('/');
        let file_path = if clean_path.is_empty() { "index.html" } else { clean_path };

        let canonical_path = self
            .base_dir
            .join(file_path)
            .canonicalize()
            .map_err(|_| WebServerError::not_found(request_path))?;

        let canonical_base = self.base_dir.canonicalize().map_err(|e| {
            process_error!(ProcessId::current(), "Failed to canonicalize static directory: {}", e);
            WebServerError::internal("Static file directory not accessible")
        })?;

        if !canonical_path.starts_with(&canonical_base) {
            process_warn!(ProcessId::current(), "🚫 Blocked path outside static directory: {}", request_path);
            return Err(WebServerError::AccessDenied {
                path: request_path.to_string(),
            });
        }

        Ok(canonical_path)
    }
}

#[async_trait]
impl StaticFileServer for RealStaticFileServer {
    async fn serve_file(&self, path: &str) -> WebServerResult<StaticFileResponse> {
        let file_path = self.resolve_path(path)?;
        if file_path.is_dir() {
            return Err(WebServerError::not_found(path));
        }

        let content = fs::read(&file_path).await.map_err(|e| {
            process_warn!(ProcessId::current(), "❌ Failed to read static file {}: {}", path, e);
            WebServerError::not_found(path)
        })?;
        process_debug!(ProcessId::current(), "📄 Served static file: {} ({} bytes)", path, content.len());

        let mut response = StaticFileResponse::new(content, self.mime_type(path));
        if let Some(cache) = Self::cache_control(path) {
            response = response.with_cache_control(cache);
        }
        Ok(response)
    }

    async fn file_exists(&self, path: &str) -> bool {
        self.resolve_path(path).map(|p| p.is_file()).unwrap_or(false)
    }
}

impl Default for RealStaticFileServer {
    fn default() -> Self {
        Self::new("./static")
    }
}
