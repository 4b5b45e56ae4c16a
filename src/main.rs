use gyeol_auction::config::Config;
use gyeol_auction::web::app::run_app;
use log::{error, warn};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info,actix_web=info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, err));
        }
    };

    if config.gemini.api_key.is_none() {
        warn!("No API key configured; planner requests will fall back");
    }

    run_app(config).await
}
