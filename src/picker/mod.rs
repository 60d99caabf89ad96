//! Field picker
//!
//! Presents grouped fields for a template version, narrows them by a search
//! term and forwards selections to the query state.

use std::sync::Arc;
use crate::field::{FieldGroup, PivotFieldDto};
use crate::metadata::{MetadataError, MetadataService};
use crate::state::AnalyticsState;

#[derive(Debug, Clone)]
pub struct FieldPicker {
    template_id: String,
    template_version_id: String,
    groups: Arc<Vec<FieldGroup>>,
    search_term: String,
}

impl FieldPicker {
    pub fn new(template_id: &str, template_version_id: &str, groups: Arc<Vec<FieldGroup>>) -> Self {
        Self {
            template_id: template_id.to_string(),
            template_version_id: template_version_id.to_string(),
            groups,
            search_term: String::new(),
        }
    }

    /// Load metadata for a template version and point the state at it
    pub async fn load(
        service: &MetadataService,
        state: &mut AnalyticsState,
        template_id: &str,
        template_version_id: &str,
    ) -> Result<Self, MetadataError> {
        let groups = service.get_metadata(template_id, template_version_id).await?;
        state.set_template(template_id, template_version_id);
        Ok(Self::new(template_id, template_version_id, groups))
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn template_version_id(&self) -> &str {
        &self.template_version_id
    }

    pub fn groups(&self) -> &[FieldGroup] {
        &self.groups
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    /// Groups narrowed to fields whose label contains the search term.
    ///
    /// Matching ignores case. Groups without a match are dropped; an empty
    /// term returns every group unchanged.
    pub fn filtered_groups(&self) -> Vec<FieldGroup> {
        let term = self.search_term.to_lowercase();
        if term.is_empty() {
            return self.groups.as_ref().clone();
        }

        self.groups
            .iter()
            .filter_map(|group| {
                let fields: Vec<PivotFieldDto> = group
                    .fields
                    .iter()
                    .filter(|f| f.label.to_lowercase().contains(&term))
                    .cloned()
                    .collect();
                (!fields.is_empty()).then(|| FieldGroup {
                    group_name: group.group_name.clone(),
                    fields,
                })
            })
            .collect()
    }

    pub fn select(&self, field: &PivotFieldDto, state: &mut AnalyticsState) {
        state.add_field(field);
    }
}
