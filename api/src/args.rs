use std::path::PathBuf;

use clap::Parser;
use recipekit_core::{
    domain::common::{DocumentStoreConfig, LLMConfig, RecipeKitConfig},
    infrastructure::llm::gemini_client::DEFAULT_GEMINI_BASE_URL,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "recipekit-api", about = "Food image to recipe HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub gemini: GeminiArgs,

    #[command(flatten)]
    pub supabase: SupabaseArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    /// Directory holding transient copies of uploaded images
    #[arg(long, env = "UPLOAD_DIR", default_value = "uploads")]
    pub upload_dir: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct GeminiArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SupabaseArgs {
    #[arg(long = "supabase-url", env = "SUPABASE_URL")]
    pub url: String,

    #[arg(long = "supabase-key", env = "SUPABASE_KEY", hide_env_values = true)]
    pub key: String,

    #[arg(long = "supabase-table", env = "SUPABASE_TABLE", default_value = "recipes")]
    pub table: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:8501"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for RecipeKitConfig {
    fn from(args: Args) -> Self {
        RecipeKitConfig {
            llm: LLMConfig {
                gemini_api_key: args.gemini.api_key,
                gemini_model: args.gemini.model,
                gemini_base_url: args.gemini.base_url,
            },
            document_store: DocumentStoreConfig {
                url: args.supabase.url,
                api_key: args.supabase.key,
                table: args.supabase.table,
            },
            upload_dir: args.upload_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [&str; 5] = [
        "recipekit-api",
        "--supabase-url",
        "https://project.supabase.co",
        "--supabase-key",
        "service-key",
    ];

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(REQUIRED).unwrap();

        assert_eq!(args.gemini.model, "gemini-1.5-flash");
        assert_eq!(args.gemini.base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(args.supabase.table, "recipes");
        assert_eq!(args.server.port, 8000);
        assert_eq!(args.server.root_path, "");
        assert_eq!(args.server.allowed_origins, vec!["http://localhost:8501"]);
        assert_eq!(args.upload_dir, PathBuf::from("uploads"));
        assert!(!args.log.json);
    }

    #[test]
    fn test_allowed_origins_are_comma_separated() {
        let mut argv = REQUIRED.to_vec();
        argv.extend([
            "--allowed-origins",
            "http://localhost:8501,https://recipes.example.com",
        ]);

        let args = Args::try_parse_from(argv).unwrap();

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://localhost:8501", "https://recipes.example.com"]
        );
    }

    #[test]
    fn test_into_config() {
        let mut argv = REQUIRED.to_vec();
        argv.extend(["--gemini-api-key", "secret", "--upload-dir", "/tmp/recipekit"]);

        let config = RecipeKitConfig::from(Args::try_parse_from(argv).unwrap());

        assert_eq!(config.llm.gemini_api_key, "secret");
        assert_eq!(config.document_store.url, "https://project.supabase.co");
        assert_eq!(config.document_store.api_key, "service-key");
        assert_eq!(config.upload_dir, PathBuf::from("/tmp/recipekit"));
    }
}
