use anyhow::Result;

/// Environment variable holding the Linear API key
pub const TOKEN_ENV_VAR: &str = "LINEAR_API_TOKEN";

/// Printed when no token is available; the run stops before any request.
pub const MISSING_TOKEN_MESSAGE: &str = "\n\tEnvironmental variable LINEAR_API_TOKEN must be set with a Linear API developer token\n\n\tGo to https://linear.app/settings/api to generate a token.\n";

/// Abstract token source interface
pub trait TokenSource {
    /// Return the token. If none is configured, returns Ok(None)
    fn load(&self) -> Result<Option<String>>;
}

/// Reads the token from an environment variable
pub struct EnvTokenSource {
    var: String,
}

impl EnvTokenSource {
    pub fn new() -> Self {
        Self::with_var(TOKEN_ENV_VAR)
    }

    pub fn with_var(var: &str) -> Self {
        EnvTokenSource {
            var: var.to_string(),
        }
    }
}

impl Default for EnvTokenSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenSource for EnvTokenSource {
    fn load(&self) -> Result<Option<String>> {
        match std::env::var(&self.var) {
            Ok(value) if !value.trim().is_empty() => Ok(Some(value.trim().to_string())),
            Ok(_) | Err(std::env::VarError::NotPresent) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("Failed to read {}: {err}", self.var)),
        }
    }
}
