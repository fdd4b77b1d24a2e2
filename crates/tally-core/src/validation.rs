//! # Validation Module
//!
//! Structural and pattern validation of a submitted receipt payload.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Validation                                 │
//! │                                                                         │
//! │  raw JSON ──► object? ──► five required keys present?                  │
//! │                                │                                        │
//! │                                ▼                                        │
//! │  retailer ──► purchaseDate ──► purchaseTime ──► items ──► total        │
//! │  (policy)     (d-d-d)          (d:d)            (≥1, each   (amount)   │
//! │                                                  item)                  │
//! │                                                                         │
//! │  First failure wins. Success yields a typed Receipt with Money fields.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Policies
//! Which retailer names are acceptable is a policy decision, not a constant.
//! The strict set uses `^[\w\s\-]+$` everywhere, which rejects names such as
//! "M&M Corner Market". The lenient set (the default) also allows `&` in the
//! retailer name. Item descriptions and amounts are the same in both.
//!
//! ## Usage
//! ```rust
//! use serde_json::json;
//! use tally_core::validation::{RetailerPolicy, ValidationPolicy, Validator};
//!
//! let payload = json!({
//!     "retailer": "M&M Corner Market",
//!     "purchaseDate": "2022-03-20",
//!     "purchaseTime": "14:33",
//!     "items": [{ "shortDescription": "Gatorade", "price": "2.25" }],
//!     "total": "2.25"
//! });
//!
//! assert!(Validator::default().validate(&payload).is_ok());
//!
//! let strict = Validator::new(ValidationPolicy::for_retailer(RetailerPolicy::Strict));
//! assert!(strict.validate(&payload).is_err());
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::ValidationError;
use crate::money::{Money, ParseMoneyError};
use crate::types::{Item, Receipt};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Keys every receipt must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 5] = ["retailer", "purchaseDate", "purchaseTime", "items", "total"];

/// Word characters, whitespace and hyphen.
pub const STRICT_TEXT_PATTERN: &str = r"^[\w\s\-]+$";

/// [`STRICT_TEXT_PATTERN`] plus the ampersand.
pub const LENIENT_RETAILER_PATTERN: &str = r"^[\w\s\-&]+$";

/// ASCII digits, a dot, exactly two ASCII digits.
pub const AMOUNT_PATTERN: &str = r"^[0-9]+\.[0-9]{2}$";

static STRICT_TEXT: OnceLock<Regex> = OnceLock::new();
static LENIENT_RETAILER: OnceLock<Regex> = OnceLock::new();
static AMOUNT: OnceLock<Regex> = OnceLock::new();

fn strict_text() -> &'static Regex {
    STRICT_TEXT.get_or_init(|| Regex::new(STRICT_TEXT_PATTERN).expect("valid regex"))
}

fn lenient_retailer() -> &'static Regex {
    LENIENT_RETAILER.get_or_init(|| Regex::new(LENIENT_RETAILER_PATTERN).expect("valid regex"))
}

fn amount() -> &'static Regex {
    AMOUNT.get_or_init(|| Regex::new(AMOUNT_PATTERN).expect("valid regex"))
}

// =============================================================================
// Retailer Policy
// =============================================================================

/// Built-in retailer name policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetailerPolicy {
    /// `^[\w\s\-]+$`, the reference rule set.
    Strict,

    /// `^[\w\s\-&]+$`, accepts ampersands.
    #[default]
    Lenient,
}

impl fmt::Display for RetailerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetailerPolicy::Strict => write!(f, "strict"),
            RetailerPolicy::Lenient => write!(f, "lenient"),
        }
    }
}

impl FromStr for RetailerPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(RetailerPolicy::Strict),
            "lenient" => Ok(RetailerPolicy::Lenient),
            _ => Err(format!("Invalid retailer policy: {}", s)),
        }
    }
}

// =============================================================================
// Validation Policy
// =============================================================================

/// The predicate set the validator applies to text fields.
///
/// Swapping a policy changes what is accepted without touching the points
/// rules.
#[derive(Debug, Clone)]
pub struct ValidationPolicy {
    retailer: Regex,
    short_description: Regex,
    amount: Regex,
}

impl ValidationPolicy {
    /// The reference rule set: no `&` in retailer names.
    pub fn strict() -> Self {
        ValidationPolicy {
            retailer: strict_text().clone(),
            short_description: strict_text().clone(),
            amount: amount().clone(),
        }
    }

    /// Strict, except retailer names may contain `&`.
    pub fn lenient() -> Self {
        ValidationPolicy {
            retailer: lenient_retailer().clone(),
            ..ValidationPolicy::strict()
        }
    }

    pub fn for_retailer(policy: RetailerPolicy) -> Self {
        match policy {
            RetailerPolicy::Strict => ValidationPolicy::strict(),
            RetailerPolicy::Lenient => ValidationPolicy::lenient(),
        }
    }

    /// Replaces the retailer predicate with a custom pattern.
    pub fn with_retailer_pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.retailer = Regex::new(pattern)?;
        Ok(self)
    }

    pub fn retailer_pattern(&self) -> &str {
        self.retailer.as_str()
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        ValidationPolicy::lenient()
    }
}

// =============================================================================
// Validator
// =============================================================================

/// Turns a raw payload into a [`Receipt`], or says why it cannot.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    policy: ValidationPolicy,
}

impl Validator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Validator { policy }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Decodes a request body and validates it.
    ///
    /// Anything that is not JSON is a [`ValidationError::MalformedPayload`].
    pub fn validate_json(&self, body: &[u8]) -> ValidationResult<Receipt> {
        let payload: Value =
            serde_json::from_slice(body).map_err(|e| ValidationError::MalformedPayload {
                reason: e.to_string(),
            })?;
        self.validate(&payload)
    }

    /// Validates an already decoded payload.
    pub fn validate(&self, payload: &Value) -> ValidationResult<Receipt> {
        let fields = payload
            .as_object()
            .ok_or_else(|| ValidationError::MalformedPayload {
                reason: format!("expected a JSON object, found {}", json_kind(payload)),
            })?;

        for field in REQUIRED_FIELDS {
            if !fields.contains_key(field) {
                return Err(ValidationError::missing(field));
            }
        }

        let retailer = text(fields, "retailer", "retailer")?;
        matches(&self.policy.retailer, "retailer", retailer)?;

        let purchase_date = text(fields, "purchaseDate", "purchaseDate")?;
        numeric_parts("purchaseDate", purchase_date, '-', 3)?;

        let purchase_time = text(fields, "purchaseTime", "purchaseTime")?;
        numeric_parts("purchaseTime", purchase_time, ':', 2)?;

        let raw_items = required(fields, "items", "items")?
            .as_array()
            .ok_or_else(|| ValidationError::malformed("items", "expected an array"))?;
        if raw_items.is_empty() {
            return Err(ValidationError::EmptyItemList);
        }
        let items = raw_items
            .iter()
            .enumerate()
            .map(|(index, item)| self.validate_item(index, item))
            .collect::<ValidationResult<Vec<_>>>()?;

        let total = self.money("total", text(fields, "total", "total")?)?;

        Ok(Receipt {
            retailer: retailer.to_string(),
            purchase_date: purchase_date.to_string(),
            purchase_time: purchase_time.to_string(),
            items,
            total,
        })
    }

    fn validate_item(&self, index: usize, item: &Value) -> ValidationResult<Item> {
        let path = format!("items[{}]", index);
        let fields = item
            .as_object()
            .ok_or_else(|| ValidationError::malformed(&path, "expected an object"))?;

        let description_path = format!("{}.shortDescription", path);
        let price_path = format!("{}.price", path);

        // Both keys are checked before either value, as for the receipt itself
        required(fields, "shortDescription", &description_path)?;
        required(fields, "price", &price_path)?;

        let short_description = text(fields, "shortDescription", &description_path)?;
        matches(&self.policy.short_description, &description_path, short_description)?;

        let price = self.money(&price_path, text(fields, "price", &price_path)?)?;

        Ok(Item::new(short_description, price))
    }

    fn money(&self, path: &str, raw: &str) -> ValidationResult<Money> {
        matches(&self.policy.amount, path, raw)?;
        raw.parse().map_err(|e: ParseMoneyError| ValidationError::malformed(path, e.to_string()))
    }
}

/// Validates with the default (lenient) policy.
pub fn validate(payload: &Value) -> ValidationResult<Receipt> {
    Validator::default().validate(payload)
}

// =============================================================================
// Field Helpers
// =============================================================================

fn required<'a>(fields: &'a Map<String, Value>, key: &str, path: &str) -> ValidationResult<&'a Value> {
    fields.get(key).ok_or_else(|| ValidationError::missing(path))
}

fn text<'a>(fields: &'a Map<String, Value>, key: &str, path: &str) -> ValidationResult<&'a str> {
    required(fields, key, path)?
        .as_str()
        .ok_or_else(|| ValidationError::malformed(path, "expected a string"))
}

fn matches(pattern: &Regex, path: &str, value: &str) -> ValidationResult<()> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::mismatch(path, pattern.as_str()))
    }
}

/// Checks that `value` splits on `separator` into exactly `count` non-empty
/// runs of ASCII digits. No range or calendar checks.
fn numeric_parts(path: &str, value: &str, separator: char, count: usize) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::malformed(path, "must not be empty"));
    }

    let parts: Vec<&str> = value.split(separator).collect();
    if parts.len() != count {
        return Err(ValidationError::malformed(
            path,
            format!("expected {} '{}'-separated parts, found {}", count, separator, parts.len()),
        ));
    }

    if let Some(bad) = parts
        .iter()
        .find(|part| part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(ValidationError::malformed(path, format!("'{}' is not numeric", bad)));
    }

    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
