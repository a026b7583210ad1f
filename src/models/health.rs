use crate::models::reference::ReferenceData;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sizes of the loaded reference lists.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ReferenceDataSummary {
    pub popular_domains: usize,
    pub popular_tlds: usize,
    pub disposable_domains: usize,
}

impl From<&ReferenceData> for ReferenceDataSummary {
    fn from(data: &ReferenceData) -> Self {
        Self {
            popular_domains: data.popular_domains().len(),
            popular_tlds: data.popular_tlds().len(),
            disposable_domains: data.disposable_domains().len(),
        }
    }
}

/// # Health Status Response
///
/// Service status, check timestamp and the sizes of the reference lists the
/// validator is running with.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2024-03-10T15:30:45.123456789Z",
///   "reference_data": {
///     "popular_domains": 42,
///     "popular_tlds": 60,
///     "disposable_domains": 120
///   }
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub reference_data: ReferenceDataSummary,
}

impl HealthResponse {
    pub fn up(data: &ReferenceData) -> Self {
        Self {
            status: "UP".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            reference_data: data.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_health_response_up() {
        let data = ReferenceData::builder()
            .popular_domains(["gmail.com", "yahoo.com"])
            .popular_tlds(["com"])
            .build();
        let response = HealthResponse::up(&data);

        assert_eq!(response.status, "UP");
        assert_eq!(
            response.reference_data,
            ReferenceDataSummary {
                popular_domains: 2,
                popular_tlds: 1,
                disposable_domains: 0,
            }
        );

        let parsed_time = DateTime::parse_from_rfc3339(&response.timestamp);
        assert!(
            parsed_time.is_ok(),
            "Timestamp should be valid RFC3339 format"
        );
    }
}
