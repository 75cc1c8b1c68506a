//! Loader error types

use thiserror::Error;

/// Rule document validation error
///
/// Any of these rejects the whole document; there are no partial loads.
#[derive(Error, Debug)]
pub enum LoadError {
    /// JSON parsing error
    #[error("Malformed rule document: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("Malformed rule document: {0}")]
    MalformedYaml(#[from] serde_yaml::Error),

    /// Document root is not an array of rules
    #[error("Rule document must be an array of rule objects")]
    NotAnArray,

    /// A rule entry is not an object
    #[error("Rule entry {index} is not an object")]
    NotAnObject { index: usize },

    /// Missing required field on a rule
    #[error("Rule '{rule}' is missing required field '{field}'")]
    MissingField { rule: String, field: String },

    /// Invalid field value on a rule
    #[error("Rule '{rule}': invalid value for '{field}': {message}")]
    InvalidField {
        rule: String,
        field: String,
        message: String,
    },

    /// A condition is not a [field, operator, literal] triple
    #[error(
        "Rule '{rule}': condition {index} must be a [field, operator, literal] triple, found {found} element(s)"
    )]
    InvalidConditionArity {
        rule: String,
        index: usize,
        found: usize,
    },

    /// Unrecognized operator symbol in a condition
    #[error("Rule '{rule}': unknown operator '{symbol}'")]
    UnknownOperator { rule: String, symbol: String },
}

/// Result type for loader operations
pub type Result<T> = std::result::Result<T, LoadError>;
