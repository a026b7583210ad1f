use crate::models::email::EmailRequest;
use crate::models::validation::ValidationResult;
use crate::validator::EmailValidator;
use actix_web::{HttpResponse, Responder, post, web};

/// # Email Validation Endpoint
///
/// Runs the address through the validation pipeline and returns the verdict.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `email` field (surrounding whitespace is ignored)
///
/// ## Responses
/// - **200 OK**: `{"valid": true}`
/// - **400 Bad Request**: `{"valid": false, "error": "..."}` for a permanent
///   verdict (format, typo, disposable, no MX records)
/// - **503 Service Unavailable**: `{"valid": false, "error": "..."}` when the
///   MX lookup timed out; the request may be retried
///
/// ## Example Request
/// ```json
/// { "email": "user@gnail.com" }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/validate-email",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Email is valid", body = ValidationResult),
        (status = 400, description = "Email is invalid", body = ValidationResult),
        (status = 503, description = "MX lookup timed out", body = ValidationResult)
    ),
    tag = "Email Validation"
)]
#[post("/validate-email")]
pub async fn validate_email(
    req: web::Json<EmailRequest>,
    validator: web::Data<EmailValidator>,
) -> impl Responder {
    match validator.check(req.email.trim()).await {
        Ok(()) => HttpResponse::Ok().json(ValidationResult::valid()),
        Err(e) if e.is_retryable() => {
            HttpResponse::ServiceUnavailable().json(ValidationResult::invalid(&e))
        }
        Err(e) => HttpResponse::BadRequest().json(ValidationResult::invalid(&e)),
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(validate_email);
}

#[cfg(test)]
#[path = "email_test.rs"]
mod tests;
