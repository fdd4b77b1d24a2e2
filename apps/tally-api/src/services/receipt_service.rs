//! Receipt service implementation.
//!
//! ```text
//! process(body)
//!     │
//!     ├── Validator::validate_json ──► 400 on any failure
//!     ├── tally_core::breakdown     ──► points, computed once
//!     ├── ReceiptId::generate
//!     └── ReceiptStore::insert      ──► id returned to the client
//!
//! points(id)
//!     └── ReceiptStore::get         ──► 404 when unknown
//! ```

use std::sync::Arc;

use tally_core::{Points, ReceiptId, ScoredReceipt, Validator};
use tally_store::ReceiptStore;
use tracing::{debug, info};

use crate::error::ApiResult;

/// Validates, scores and stores receipts.
pub struct ReceiptService {
    validator: Validator,
    store: Arc<dyn ReceiptStore>,
}

impl ReceiptService {
    pub fn new(validator: Validator, store: Arc<dyn ReceiptStore>) -> Self {
        Self { validator, store }
    }

    /// Accepts a raw JSON body and returns the id it was stored under.
    ///
    /// Nothing is stored unless validation and scoring both succeed.
    pub fn process(&self, body: &[u8]) -> ApiResult<ReceiptId> {
        let receipt = self.validator.validate_json(body)?;
        let points = tally_core::breakdown(&receipt)?;
        debug!(retailer = %receipt.retailer, ?points, "Receipt scored");

        let id = ReceiptId::generate();
        let total = points.total();
        self.store.insert(ScoredReceipt::new(id.clone(), receipt, total))?;

        info!(%id, points = total, "Receipt processed");
        Ok(id)
    }

    /// Points awarded to a previously processed receipt.
    pub fn points(&self, id: &str) -> ApiResult<Points> {
        Ok(self.store.get(id)?.points)
    }

    /// Number of receipts processed so far.
    pub fn count(&self) -> ApiResult<usize> {
        Ok(self.store.len()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use tally_core::{RetailerPolicy, ValidationPolicy};
    use tally_store::InMemoryReceiptStore;

    const CORNER_MARKET: &str = include_str!("../../../../crates/tally-core/fixtures/corner-market.json");

    fn service(policy: RetailerPolicy) -> ReceiptService {
        ReceiptService::new(
            Validator::new(ValidationPolicy::for_retailer(policy)),
            Arc::new(InMemoryReceiptStore::new()),
        )
    }

    #[test]
    fn test_process_then_points() {
        let service = service(RetailerPolicy::Lenient);

        let id = service.process(CORNER_MARKET.as_bytes()).unwrap();

        assert_eq!(service.points(id.as_str()).unwrap(), 109);
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_each_submission_gets_its_own_id() {
        let service = service(RetailerPolicy::Lenient);

        let first = service.process(CORNER_MARKET.as_bytes()).unwrap();
        let second = service.process(CORNER_MARKET.as_bytes()).unwrap();

        assert_ne!(first, second);
        assert_eq!(service.count().unwrap(), 2);
    }

    #[test]
    fn test_rejected_receipt_is_not_stored() {
        let service = service(RetailerPolicy::Lenient);

        let result = service.process(b"normal_text_data");

        assert!(matches!(result, Err(ApiError::InvalidReceipt(_))));
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_strict_policy_rejects_ampersand() {
        let body = r#"{
            "retailer": "M&M Corner Market",
            "purchaseDate": "2022-03-20",
            "purchaseTime": "14:33",
            "items": [{"shortDescription": "Gatorade", "price": "2.25"}],
            "total": "2.25"
        }"#;

        assert!(service(RetailerPolicy::Lenient).process(body.as_bytes()).is_ok());
        assert!(matches!(
            service(RetailerPolicy::Strict).process(body.as_bytes()),
            Err(ApiError::InvalidReceipt(_))
        ));
    }

    #[test]
    fn test_unknown_id() {
        let service = service(RetailerPolicy::Lenient);

        assert!(matches!(
            service.points("adb6b560-0eef-42bc-9d16-df48f30e89b2"),
            Err(ApiError::NotFound(id)) if id == "adb6b560-0eef-42bc-9d16-df48f30e89b2"
        ));
    }
}
