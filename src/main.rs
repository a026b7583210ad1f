use actix_web::{App, HttpServer, web::Data};
use email_validator::config::Config;
use email_validator::error::StartupError;
use email_validator::handlers::validation::dnsmx::DnsMxResolver;
use email_validator::models::ReferenceData;
use email_validator::openapi::ApiDoc;
use email_validator::validator::EmailValidator;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Email Validator Service Entry Point
///
/// Loads configuration and the reference lists, then serves:
/// - REST endpoints under `/api/v1` (configured in routes)
/// - Swagger UI at `/swagger-ui/`
/// - OpenAPI spec at `/api-docs/openapi.json`
///
/// # Configuration
/// - Environment variables, optionally from a `.env` file (see [`Config`])
/// - Log filter from `RUST_LOG`, defaulting to `info`
#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let reference = ReferenceData::load(&config.sources)?;
    info!(
        popular_domains = reference.popular_domains().len(),
        popular_tlds = reference.popular_tlds().len(),
        disposable_domains = reference.disposable_domains().len(),
        "Reference lists loaded"
    );

    let resolver = DnsMxResolver::new(config.dns_timeout, config.dns_attempts);
    let validator = Data::new(EmailValidator::new(reference, resolver));

    info!("Listening on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(validator.clone())
            .configure(email_validator::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
