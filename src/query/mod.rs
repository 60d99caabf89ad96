//! Pivot query request types

mod request;

pub use request::{Measure, PivotQueryRequest};
