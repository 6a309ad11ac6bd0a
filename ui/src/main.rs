use clap::Parser;
use recipekit_ui::{AppState, args::Args, client::RecipeApiClient, startup::build_router};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::new(RecipeApiClient::new(args.api_base_url.clone()));
    let app = build_router(state);

    let address = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(api = %args.api_base_url, "Starting recipekit-ui on {}", address);
    axum::serve(listener, app).await?;

    Ok(())
}
