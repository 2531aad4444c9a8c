use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use cofounder_match::config::{LoggingSettings, ProfileBackend, Settings};
use cofounder_match::core::{CompatibilityMatcher, SyntheticProfileResolver};
use cofounder_match::models::ScoringWeights;
use cofounder_match::routes::{self, AppState};
use cofounder_match::services::{
    GeminiClient, LanguageModel, Matchmaker, ProfileResolver, SearchProfileResolver,
    StaticProfileResolver, TavilyClient,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// JSON error response for payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

/// RUST_LOG wins over the configured level
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "full" => subscriber.init(),
        _ => subscriber.compact().init(),
    }
}

fn startup_error(context: &str, e: impl std::fmt::Display) -> std::io::Error {
    error!("{}: {}", context, e);
    std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", context, e))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_logging(&settings.logging);

    info!("Starting Cofounder Match service...");

    if settings.llm.api_key.is_empty() {
        warn!("No model API key configured (llm.api_key / GOOGLE_API_KEY); /match will fail");
    }

    let model: Arc<dyn LanguageModel> = Arc::new(
        GeminiClient::new(
            settings.llm.endpoint.clone(),
            settings.llm.api_key.clone(),
            settings.llm.model.clone(),
            settings.llm.temperature,
            settings.llm.timeout(),
        )
        .map_err(|e| startup_error("Failed to create model client", e))?,
    );

    info!("Model client initialized (model: {})", settings.llm.model);

    let resolver: Arc<dyn ProfileResolver> = match settings.profiles.backend {
        ProfileBackend::Search => {
            if settings.search.api_key.is_empty() {
                warn!("No search API key configured (search.api_key / TAVILY_API_KEY)");
            }
            let search = TavilyClient::new(
                settings.search.endpoint.clone(),
                settings.search.api_key.clone(),
                settings.search.timeout(),
            )
            .map_err(|e| startup_error("Failed to create search client", e))?;

            Arc::new(SearchProfileResolver::new(
                Arc::new(search),
                model.clone(),
                settings.search.options(),
            ))
        }
        ProfileBackend::Static => {
            warn!("Using static placeholder profiles");
            Arc::new(StaticProfileResolver)
        }
    };

    info!("Profile resolver initialized (backend: {:?})", settings.profiles.backend);

    let weights = ScoringWeights::from(&settings.scoring.weights);
    let compatibility = CompatibilityMatcher::new(weights, settings.scoring.good_match_threshold);

    info!("Compatibility matcher initialized with weights: {:?}", weights);

    let app_state = AppState {
        matchmaker: Matchmaker::new(resolver, model),
        compatibility,
        synthetic: SyntheticProfileResolver::new(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
