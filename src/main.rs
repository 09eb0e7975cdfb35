use markly::{app, config::AppConfig, state::AppState, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let config = AppConfig::from_env()?;
    let state = AppState::init(config).await?;
    app::serve(app::build_app(state.clone()), &state.config).await
}
