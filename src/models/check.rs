//! Per-query boundary check results.

use serde::Serialize;

use super::Coordinate;

/// What a single address query concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckOutcome {
    Inside,
    Outside,
    NotFound,
}

/// Visual treatment of an outcome message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Styling {
    Success,
    Warning,
    Error,
}

impl Styling {
    /// CSS class used by the map page banner
    pub fn css_class(&self) -> &'static str {
        match self {
            Styling::Success => "success",
            Styling::Warning => "warning",
            Styling::Error => "error",
        }
    }
}

impl CheckOutcome {
    pub fn styling(&self) -> Styling {
        match self {
            CheckOutcome::Inside => Styling::Success,
            CheckOutcome::Outside => Styling::Warning,
            CheckOutcome::NotFound => Styling::Error,
        }
    }

    /// User-visible message for an address
    pub fn message(&self, address: &str) -> String {
        match self {
            CheckOutcome::Inside => format!("{} is within the school boundary!", address),
            CheckOutcome::Outside => format!("{} is outside the school boundary.", address),
            CheckOutcome::NotFound => "Address not found. Please try again.".to_string(),
        }
    }
}

/// Result of checking one address against the boundary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryCheckResult {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinate>,
    pub outcome: CheckOutcome,
}

impl BoundaryCheckResult {
    pub fn resolved(address: impl Into<String>, location: Coordinate, inside: bool) -> Self {
        Self {
            address: address.into(),
            location: Some(location),
            outcome: if inside {
                CheckOutcome::Inside
            } else {
                CheckOutcome::Outside
            },
        }
    }

    pub fn not_found(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            location: None,
            outcome: CheckOutcome::NotFound,
        }
    }

    pub fn message(&self) -> String {
        self.outcome.message(&self.address)
    }

    pub fn is_inside(&self) -> bool {
        self.outcome == CheckOutcome::Inside
    }
}
