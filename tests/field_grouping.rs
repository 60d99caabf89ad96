//! Integration tests for grouping field metadata by display group

mod common;

use common::load_fixture;
use pivotpick::{group_by_display_group, DataType, FieldRole, ResolutionType};

#[test]
fn test_groups_follow_first_occurrence() {
    let response = load_fixture("metadata.json");
    let groups = group_by_display_group(response.available_fields);

    let names: Vec<&str> = groups.iter().map(|g| g.group_name.as_str()).collect();
    assert_eq!(names, vec!["Geography", "Values", "Time", "Clinical"]);
}

#[test]
fn test_grouping_preserves_every_field() {
    let response = load_fixture("metadata.json");
    let total = response.available_fields.len();
    let groups = group_by_display_group(response.available_fields);

    let grouped: usize = groups.iter().map(|g| g.fields.len()).sum();
    assert_eq!(grouped, total);

    // Every field sits in the group named by its display group
    for group in &groups {
        assert!(group.fields.iter().all(|f| f.display_group == group.group_name));
    }
}

#[test]
fn test_in_group_order_preserved() {
    let groups = group_by_display_group(load_fixture("metadata.json").available_fields);

    let geography: Vec<&str> = groups[0].fields.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(geography, vec!["region", "district"]);

    let values: Vec<&str> = groups[1].fields.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(values, vec!["sales", "patients"]);
}

#[test]
fn test_fixture_decodes_extras() {
    let response = load_fixture("metadata.json");
    let by_id = |id: &str| {
        response
            .available_fields
            .iter()
            .find(|f| f.id == id)
            .unwrap_or_else(|| panic!("field {} missing", id))
    };

    let sales = by_id("sales");
    assert_eq!(sales.data_type, DataType::Numeric);
    assert_eq!(sales.extras.format_hint.as_deref(), Some("currency"));
    assert_eq!(sales.role(), FieldRole::Measure);

    let outcome = by_id("outcome");
    let resolution = outcome.extras.resolution.as_ref().unwrap();
    assert_eq!(resolution.resolution_type, ResolutionType::ApiEndpoint);
    assert_eq!(resolution.endpoint.as_deref(), Some("/api/v1/options/outcome"));
    // No aggregation modes, so a dimension despite the hint
    assert_eq!(outcome.role(), FieldRole::Dimension);

    // Hinted dimension with an aggregation mode stays a dimension
    assert_eq!(by_id("visit_date").role(), FieldRole::Dimension);
}

#[test]
fn test_unknown_data_type_rejected() {
    let json = r#"{ "availableFields": [{
        "id": "x", "label": "X", "dataType": "DECIMAL",
        "isDimension": true, "isSortable": true,
        "aggregationModes": [], "displayGroup": "G", "extras": {}
    }] }"#;

    let result: Result<pivotpick::MetadataResponse, _> = serde_json::from_str(json);
    assert!(result.is_err());
}
