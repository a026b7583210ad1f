use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `utoipa` annotations on the route
/// handlers and schemas.
///
/// # Endpoints
/// - Health Check: `GET /api/v1/health`
/// - Email Validation: `POST /api/v1/validate-email`
///
/// # Schemas
/// - `HealthResponse`: Service status payload
/// - `EmailRequest`: Email validation input structure
/// - `ValidationResult`: Validation verdict
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::email::validate_email,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::health::ReferenceDataSummary,
            crate::models::email::EmailRequest,
            crate::models::validation::ValidationResult
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Email Validation", description = "Email address validation endpoints")
    ),
    info(
        description = "Email validation with typo suggestions, disposable-domain detection and MX checks",
        title = "Email Validator API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_endpoints() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/health"));
        assert!(doc.paths.paths.contains_key("/api/v1/validate-email"));
    }
}
