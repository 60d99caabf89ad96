//! Grouping of flat field lists for display

use serde::{Deserialize, Serialize};
use super::dto::PivotFieldDto;

/// Fields sharing a display group label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldGroup {
    pub group_name: String,
    pub fields: Vec<PivotFieldDto>,
}

/// Group fields by `display_group`.
///
/// Groups appear in order of the first occurrence of their label, and each
/// group keeps its fields in input order.
pub fn group_by_display_group(fields: Vec<PivotFieldDto>) -> Vec<FieldGroup> {
    let mut groups: Vec<FieldGroup> = Vec::new();

    for field in fields {
        match groups.iter_mut().find(|g| g.group_name == field.display_group) {
            Some(group) => group.fields.push(field),
            None => groups.push(FieldGroup {
                group_name: field.display_group.clone(),
                fields: vec![field],
            }),
        }
    }

    groups
}

impl FieldGroup {
    /// Find a field in this group by id
    pub fn get_field(&self, id: &str) -> Option<&PivotFieldDto> {
        self.fields.iter().find(|f| f.id == id)
    }
}

/// Find a field by id across all groups
pub fn find_field<'a>(groups: &'a [FieldGroup], id: &str) -> Option<&'a PivotFieldDto> {
    groups.iter().find_map(|g| g.get_field(id))
}
