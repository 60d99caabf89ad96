//! Field metadata types (nouns)
//!
//! These types mirror the payload of the pivot metadata endpoint.

mod dto;
mod group;
mod types;

pub use dto::{PivotFieldDto, FieldExtras, Resolution, FieldRole, MetadataResponse};
pub use group::{FieldGroup, group_by_display_group, find_field};
pub use types::{DataType, ResolutionType, ParseDataTypeError};
