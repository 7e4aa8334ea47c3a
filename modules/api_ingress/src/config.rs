use serde::{Deserialize, Serialize};

/// API ingress configuration (`modules.api_ingress`)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiIngressConfig {
    /// Answer every origin; the browser front-end may be served from elsewhere.
    #[serde(default)]
    pub cors_enabled: bool,
    /// Largest accepted request body.
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
    /// Serve the generated OpenAPI document at `/openapi.json`.
    #[serde(default = "default_enable_openapi")]
    pub enable_openapi: bool,
}

impl Default for ApiIngressConfig {
    fn default() -> Self {
        Self {
            cors_enabled: false,
            body_limit_bytes: default_body_limit_bytes(),
            enable_openapi: default_enable_openapi(),
        }
    }
}

fn default_body_limit_bytes() -> usize {
    1024 * 1024
}

fn default_enable_openapi() -> bool {
    true
}
