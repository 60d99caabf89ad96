use serde::{Deserialize, Serialize};
use crate::field::{FieldRole, PivotFieldDto};

/// An aggregated field in a pivot query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measure {
    pub field_id: String,
    /// Aggregation name as declared by the field (e.g. "SUM")
    pub aggregation: String,
    /// Output column name: `<field_id>_<aggregation lowercased>`
    pub alias: String,
}

impl Measure {
    pub fn new(field_id: &str, aggregation: &str) -> Self {
        Self {
            field_id: field_id.to_string(),
            aggregation: aggregation.to_string(),
            alias: format!("{}_{}", field_id, aggregation.to_lowercase()),
        }
    }

    /// Build a measure from a field using its first aggregation mode.
    ///
    /// Returns `None` when the field classifies as a dimension.
    pub fn from_field(field: &PivotFieldDto) -> Option<Self> {
        if field.role() != FieldRole::Measure {
            return None;
        }
        field
            .default_aggregation()
            .map(|aggregation| Measure::new(&field.id, aggregation))
    }
}

/// Request body for pivot queries
///
/// Dimensions are grouped on in the given order; measures are aggregated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotQueryRequest {
    pub template_id: String,
    pub template_version_id: String,
    pub dimensions: Vec<String>,
    pub measures: Vec<Measure>,
}
