//! String-coded enums carried in field metadata

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Data type of a queryable field, as reported by the metadata endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Integer or floating point value
    Numeric,
    /// Free text
    Text,
    /// True/false
    Boolean,
    /// Date with time of day
    Timestamp,
    /// Calendar date
    Date,
    /// Opaque identifier
    Uid,
    /// Value drawn from an option set
    Option,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Numeric => write!(f, "NUMERIC"),
            DataType::Text => write!(f, "TEXT"),
            DataType::Boolean => write!(f, "BOOLEAN"),
            DataType::Timestamp => write!(f, "TIMESTAMP"),
            DataType::Date => write!(f, "DATE"),
            DataType::Uid => write!(f, "UID"),
            DataType::Option => write!(f, "OPTION"),
        }
    }
}

/// Error when parsing a data type string
#[derive(Debug, Clone)]
pub struct ParseDataTypeError {
    pub input: String,
}

impl fmt::Display for ParseDataTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown data type '{}'. Valid options: NUMERIC, TEXT, BOOLEAN, TIMESTAMP, DATE, UID, OPTION",
            self.input
        )
    }
}

impl std::error::Error for ParseDataTypeError {}

impl FromStr for DataType {
    type Err = ParseDataTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NUMERIC" => Ok(DataType::Numeric),
            "TEXT" => Ok(DataType::Text),
            "BOOLEAN" => Ok(DataType::Boolean),
            "TIMESTAMP" => Ok(DataType::Timestamp),
            "DATE" => Ok(DataType::Date),
            "UID" => Ok(DataType::Uid),
            "OPTION" => Ok(DataType::Option),
            _ => Err(ParseDataTypeError { input: s.to_string() }),
        }
    }
}

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DataType::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for DataType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

// ============================================================================
// ResolutionType
// ============================================================================

/// Where the valid values of a field come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionType {
    /// Values are listed by a separate API endpoint
    #[serde(rename = "API_ENDPOINT")]
    ApiEndpoint,
    /// Values depend on a parent dimension
    #[serde(rename = "HIERARCHICAL")]
    Hierarchical,
}
