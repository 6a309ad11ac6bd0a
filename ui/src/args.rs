use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "recipekit-ui", about = "Web UI for the recipekit API")]
pub struct Args {
    /// Base URL of the recipekit API, including its root path
    #[arg(long = "api-base-url", env = "API_BASE_URL", default_value = "http://127.0.0.1:8000")]
    pub api_base_url: String,

    #[arg(long, env = "UI_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "UI_PORT", default_value_t = 8501)]
    pub port: u16,

    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub log_filter: String,
}
