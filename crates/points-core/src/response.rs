//! # Response Assembly
//!
//! Output shapes returned to clients. No logic beyond packaging.
//!
//! ```text
//! store  (HTTP)   ──► ProcessResponse  { "id": "..." }
//! lookup (HTTP)   ──► PointsResponse   { "points": N }
//! debug file mode ──► ScoreResponse    { "id": "...", "points": N }
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Points, ScoredReceipt};

/// Returned after a receipt is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProcessResponse {
    pub id: String,
}

/// Returned after a points lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PointsResponse {
    #[ts(type = "number")]
    pub points: Points,
}

impl PointsResponse {
    /// The body sent for an unknown receipt id.
    pub const fn absent() -> Self {
        PointsResponse { points: 0 }
    }
}

/// Identifier and points together, written by the debug file mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResponse {
    pub id: String,
    #[ts(type = "number")]
    pub points: Points,
}

/// Packages a freshly stored receipt id.
pub fn package_process(id: impl Into<String>) -> ProcessResponse {
    ProcessResponse { id: id.into() }
}

/// Packages a looked-up score.
pub fn package_points(points: Points) -> PointsResponse {
    PointsResponse { points }
}

/// Packages an id with its score.
pub fn package_score(id: impl Into<String>, points: Points) -> ScoreResponse {
    ScoreResponse {
        id: id.into(),
        points,
    }
}

impl From<&ScoredReceipt> for ScoreResponse {
    fn from(scored: &ScoredReceipt) -> Self {
        package_score(scored.id.clone(), scored.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_response_json() {
        let body = serde_json::to_string(&package_process("7fb1377b")).unwrap();
        assert_eq!(body, r#"{"id":"7fb1377b"}"#);
    }

    #[test]
    fn test_points_response_json() {
        let body = serde_json::to_string(&package_points(32)).unwrap();
        assert_eq!(body, r#"{"points":32}"#);
        assert_eq!(PointsResponse::absent().points, 0);
    }

    #[test]
    fn test_score_response_json() {
        let body = serde_json::to_string(&package_score("abc", 109)).unwrap();
        assert_eq!(body, r#"{"id":"abc","points":109}"#);
    }
}
