use crate::models::HealthResponse;
use crate::validator::EmailValidator;
use actix_web::{HttpResponse, Responder, get, web};

/// # Health Check Endpoint
///
/// Returns the service status, a timestamp and the sizes of the reference
/// lists the validator was built with.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2023-10-05T12:34:56.789Z",
///   "reference_data": { "popular_domains": 42, "popular_tlds": 60, "disposable_domains": 120 }
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(validator: web::Data<EmailValidator>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::up(validator.reference_data()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
