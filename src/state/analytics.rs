use tokio::sync::watch;
use tracing::debug;
use crate::field::{FieldRole, PivotFieldDto};
use crate::query::{Measure, PivotQueryRequest};

/// Selected dimensions and measures for one template version.
///
/// Every mutation re-derives the query request and publishes it to
/// subscribers when it changed.
#[derive(Debug)]
pub struct AnalyticsState {
    template_id: String,
    template_version_id: String,
    dimensions: Vec<PivotFieldDto>,
    measures: Vec<Measure>,
    updates: watch::Sender<Option<PivotQueryRequest>>,
}

impl Default for AnalyticsState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsState {
    pub fn new() -> Self {
        let (updates, _) = watch::channel(None);
        Self {
            template_id: String::new(),
            template_version_id: String::new(),
            dimensions: Vec::new(),
            measures: Vec::new(),
            updates,
        }
    }

    /// Set the active template version.
    ///
    /// Existing selections are kept.
    pub fn set_template(&mut self, template_id: &str, version_id: &str) {
        self.template_id = template_id.to_string();
        self.template_version_id = version_id.to_string();
        self.publish();
    }

    /// Add a selected field as a measure or a dimension.
    ///
    /// Measures use the field's first aggregation mode. Repeated selections
    /// of the same field are all kept.
    pub fn add_field(&mut self, field: &PivotFieldDto) {
        match Measure::from_field(field) {
            Some(measure) => {
                debug!("Adding measure {} ({})", measure.field_id, measure.aggregation);
                self.measures.push(measure);
            }
            None => {
                debug!("Adding dimension {}", field.id);
                self.dimensions.push(field.clone());
            }
        }
        self.publish();
    }

    /// The request for the current selections, if there is one to send
    pub fn query_request(&self) -> Option<PivotQueryRequest> {
        derive_request(
            &self.template_id,
            &self.template_version_id,
            &self.dimensions,
            &self.measures,
        )
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn template_version_id(&self) -> &str {
        &self.template_version_id
    }

    pub fn dimensions(&self) -> &[PivotFieldDto] {
        &self.dimensions
    }

    pub fn measures(&self) -> &[Measure] {
        &self.measures
    }

    /// Receive the derived request each time it changes
    pub fn subscribe(&self) -> watch::Receiver<Option<PivotQueryRequest>> {
        self.updates.subscribe()
    }

    fn publish(&self) {
        let request = self.query_request();
        self.updates.send_if_modified(|current| {
            if *current == request {
                return false;
            }
            debug!("Query request updated: {:?}", request);
            *current = request;
            true
        });
    }
}

/// Derive a query request from template identifiers and selections.
///
/// Returns `None` until both identifiers are set and at least one
/// dimension or measure is selected.
pub fn derive_request(
    template_id: &str,
    template_version_id: &str,
    dimensions: &[PivotFieldDto],
    measures: &[Measure],
) -> Option<PivotQueryRequest> {
    if template_id.is_empty() || template_version_id.is_empty() {
        return None;
    }
    if dimensions.is_empty() && measures.is_empty() {
        return None;
    }

    Some(PivotQueryRequest {
        template_id: template_id.to_string(),
        template_version_id: template_version_id.to_string(),
        dimensions: dimensions.iter().map(|d| d.id.clone()).collect(),
        measures: measures.to_vec(),
    })
}
