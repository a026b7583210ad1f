use actix_web::web;

/// # Health Check Endpoint
///
/// `GET /health`: service status and reference list sizes.
pub mod health;

/// # Email Validation Endpoint
///
/// `POST /validate-email`: runs the validation pipeline on one address.
pub mod email;

/// # API Route Configuration
///
/// Mounts every endpoint under the `/api/v1` base path. Handlers expect a
/// `web::Data<EmailValidator>` in the application data.
///
/// ## Example Endpoints
///
/// ```text
/// GET /api/v1/health - Service health status
/// POST /api/v1/validate-email - Email validation endpoint
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure_routes)
            .configure(email::configure_routes),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::validation::dnsmx::{MockMxResolver, MxOutcome};
    use crate::models::ReferenceData;
    use crate::validator::EmailValidator;
    use actix_web::{App, test};
    use serde_json::json;

    #[actix_web::test]
    async fn test_routes_are_versioned() {
        let mut resolver = MockMxResolver::new();
        resolver.expect_mx_exists().returning(|_| MxOutcome::Exists);
        let validator = EmailValidator::new(ReferenceData::default(), resolver);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(validator))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/health").to_request();
        assert!(test::call_service(&app, req).await.status().is_success());

        let req = test::TestRequest::post()
            .uri("/api/v1/validate-email")
            .set_json(json!({ "email": "user@example.com" }))
            .to_request();
        assert!(test::call_service(&app, req).await.status().is_success());

        let req = test::TestRequest::get().uri("/health").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 404);
    }
}
