use std::env;

/// Runtime configuration, read once at startup.
///
/// `SUPABASE_URL` and `SUPABASE_SERVICE_ROLE_KEY` are required; the rest
/// have sensible defaults for local runs.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_key: String,
    pub bind_addr: String,
    pub include_sample: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let supabase_url = env::var("SUPABASE_URL")
            .map_err(|_| "SUPABASE_URL environment variable not set".to_string())?;
        let supabase_key = env::var("SUPABASE_SERVICE_ROLE_KEY")
            .map_err(|_| "SUPABASE_SERVICE_ROLE_KEY environment variable not set".to_string())?;

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

        // Whether the RPC substitutes placeholder rows when no live data
        // exists. Defaults on, so a fresh deploy still renders a page.
        let include_sample = env::var("INCLUDE_SAMPLE")
            .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
            .unwrap_or(true);

        Ok(Self {
            supabase_url,
            supabase_key,
            bind_addr,
            include_sample,
        })
    }
}
