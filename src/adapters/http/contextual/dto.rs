//! HTTP DTOs for the contextual-data endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::destination::DestinationRecord;

/// Query parameters for GET /api/contextual-data.
#[derive(Debug, Clone, Deserialize)]
pub struct ContextualDataParams {
    /// Free-text destination query; absent is treated as the empty query.
    #[serde(default)]
    pub destination: Option<String>,
}

/// View of a destination record for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationRecordView {
    pub name: String,
    pub country: String,
    pub best_time_to_visit: String,
    pub known_for: Vec<String>,
    pub transport: String,
}

impl From<DestinationRecord> for DestinationRecordView {
    fn from(record: DestinationRecord) -> Self {
        Self {
            name: record.name,
            country: record.country,
            best_time_to_visit: record.best_time_to_visit,
            known_for: record.known_for,
            transport: record.transport,
        }
    }
}

/// Body of GET /api/contextual-data.
#[derive(Debug, Clone, Serialize)]
pub struct ContextualDataResponse {
    pub data: DestinationRecordView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_view_serializes_to_camel_case() {
        let view = DestinationRecordView {
            name: "Paris".to_string(),
            country: "France".to_string(),
            best_time_to_visit: "Spring".to_string(),
            known_for: vec!["Eiffel Tower".to_string()],
            transport: "Metro".to_string(),
        };

        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("bestTimeToVisit"));
        assert!(json.contains("knownFor"));
    }

    #[test]
    fn params_default_to_no_destination() {
        let params: ContextualDataParams = serde_json::from_str("{}").unwrap();
        assert!(params.destination.is_none());
    }

    #[test]
    fn response_wraps_record_under_data() {
        let response = ContextualDataResponse {
            data: DestinationRecordView::from(crate::domain::destination::lookup("paris")),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"data\":{"));
    }
}
