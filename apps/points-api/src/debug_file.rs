//! Debug file mode.
//!
//! Scores a single receipt read from disk and writes `{"id", "points"}` to an
//! output file, without starting the HTTP server.

use std::fs;
use std::path::Path;

use points_core::{Receipt, ScoreResponse};
use points_registry::ReceiptRegistry;
use tracing::info;

use crate::error::{ApiError, ApiResult};

/// Reads, stores and scores the receipt at `input`.
///
/// The receipt goes through the same registry path as an HTTP submission so
/// the written id is one the registry actually issued.
pub fn process_file(
    registry: &ReceiptRegistry,
    input: &Path,
    output: &Path,
) -> ApiResult<ScoreResponse> {
    let raw = fs::read_to_string(input).map_err(|e| {
        ApiError::validation(format!("Cannot read {}: {}", input.display(), e))
    })?;

    let receipt: Receipt = serde_json::from_str(&raw)?;

    let id = registry.store(receipt)?;
    let scored = registry
        .get(&id)
        .ok_or_else(|| ApiError::internal(format!("Stored receipt {} vanished", id)))?;

    let response = ScoreResponse::from(scored.as_ref());
    let body = serde_json::to_string_pretty(&response)
        .map_err(|e| ApiError::internal(format!("Cannot encode response: {}", e)))?;

    fs::write(output, body).map_err(|e| {
        ApiError::internal(format!("Cannot write {}: {}", output.display(), e))
    })?;

    info!(
        id = %response.id,
        points = response.points,
        output = %output.display(),
        "Debug response written"
    );

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use points_registry::SequentialGenerator;

    const TARGET: &str = r#"{
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
            { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
            { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
            { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
            { "shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00" }
        ],
        "total": "35.35"
    }"#;

    #[test]
    fn test_writes_response_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("receipt.json");
        let output = dir.path().join("response.json");
        fs::write(&input, TARGET).unwrap();

        let registry = ReceiptRegistry::with_generator(SequentialGenerator::new("debug"));
        let response = process_file(&registry, &input, &output).unwrap();

        assert_eq!(response.id, "debug-1");
        assert_eq!(response.points, 28);

        let written: ScoreResponse =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written, response);
        assert_eq!(registry.lookup("debug-1"), Some(28));
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("response.json");

        let registry = ReceiptRegistry::new();
        let err = process_file(&registry, &dir.path().join("nope.json"), &output).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(!output.exists());
    }

    #[test]
    fn test_malformed_receipt_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("receipt.json");
        let output = dir.path().join("response.json");
        fs::write(&input, TARGET.replace("35.35", "thirty")).unwrap();

        let registry = ReceiptRegistry::new();
        let err = process_file(&registry, &input, &output).unwrap_err();

        assert_eq!(err.code, ErrorCode::MalformedField);
        assert!(!output.exists());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_receipt_without_items_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("receipt.json");
        let output = dir.path().join("response.json");
        fs::write(
            &input,
            r#"{"retailer":"Target","purchaseDate":"2022-01-01","purchaseTime":"13:01","items":[],"total":"1.00"}"#,
        )
        .unwrap();

        let registry = ReceiptRegistry::new();
        let err = process_file(&registry, &input, &output).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(!output.exists());
        assert!(registry.is_empty());
    }
}
