//! Field metadata as returned by the metadata endpoint

use serde::{Deserialize, Serialize};
use super::types::{DataType, ResolutionType};

/// Metadata for a single queryable field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotFieldDto {
    pub id: String,
    pub label: String,
    pub data_type: DataType,
    /// Hint that the field should be used for grouping even when it can be aggregated
    pub is_dimension: bool,
    pub is_sortable: bool,
    /// Supported aggregation names (e.g. "SUM", "AVG"), in backend preference order
    #[serde(default)]
    pub aggregation_modes: Vec<String>,
    pub display_group: String,
    #[serde(default)]
    pub extras: FieldExtras,
}

/// Optional presentation and value-resolution details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldExtras {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
}

/// Describes where valid values for a field are resolved from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    #[serde(rename = "type")]
    pub resolution_type: ResolutionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_dimension_id: Option<String>,
}

/// How a selected field participates in a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Dimension,
    Measure,
}

impl PivotFieldDto {
    /// Classify the field.
    ///
    /// A field is a measure only when it declares at least one aggregation
    /// mode and is not hinted as a dimension.
    pub fn role(&self) -> FieldRole {
        if !self.aggregation_modes.is_empty() && !self.is_dimension {
            FieldRole::Measure
        } else {
            FieldRole::Dimension
        }
    }

    /// The aggregation used when the field is selected as a measure
    pub fn default_aggregation(&self) -> Option<&str> {
        self.aggregation_modes.first().map(String::as_str)
    }
}

/// Response body of the metadata endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataResponse {
    pub available_fields: Vec<PivotFieldDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(modes: &[&str], is_dimension: bool) -> PivotFieldDto {
        PivotFieldDto {
            id: "f".to_string(),
            label: "F".to_string(),
            data_type: DataType::Numeric,
            is_dimension,
            is_sortable: true,
            aggregation_modes: modes.iter().map(|m| m.to_string()).collect(),
            display_group: "G".to_string(),
            extras: FieldExtras::default(),
        }
    }

    #[test]
    fn test_role_classification() {
        assert_eq!(field(&["SUM"], false).role(), FieldRole::Measure);
        // Dimension hint wins over aggregation modes
        assert_eq!(field(&["SUM"], true).role(), FieldRole::Dimension);
        assert_eq!(field(&[], false).role(), FieldRole::Dimension);
        assert_eq!(field(&[], true).role(), FieldRole::Dimension);
    }

    #[test]
    fn test_deserialize_camel_case_with_resolution() {
        let json = r#"{
            "id": "ou",
            "label": "Org unit",
            "dataType": "UID",
            "isDimension": true,
            "isSortable": false,
            "aggregationModes": [],
            "displayGroup": "Hierarchy",
            "extras": {
                "resolution": { "type": "HIERARCHICAL", "childDimensionId": "district" }
            }
        }"#;

        let field: PivotFieldDto = serde_json::from_str(json).unwrap();
        assert_eq!(field.data_type, DataType::Uid);
        let resolution = field.extras.resolution.unwrap();
        assert_eq!(resolution.resolution_type, ResolutionType::Hierarchical);
        assert_eq!(resolution.child_dimension_id.as_deref(), Some("district"));
        assert!(resolution.endpoint.is_none());
    }

    #[test]
    fn test_missing_extras_defaults() {
        let json = r#"{
            "id": "age", "label": "Age", "dataType": "NUMERIC",
            "isDimension": false, "isSortable": true,
            "aggregationModes": ["AVG"], "displayGroup": "Person"
        }"#;

        let field: PivotFieldDto = serde_json::from_str(json).unwrap();
        assert_eq!(field.extras, FieldExtras::default());
        assert_eq!(field.default_aggregation(), Some("AVG"));
    }
}
