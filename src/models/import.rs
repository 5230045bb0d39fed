//! Loosely-typed import payloads and the outcome of an import batch.

use crate::domain::ValidationError;
use crate::error::StorageResult;
use crate::models::ContactFields;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// One externally sourced contact, before validation.
///
/// Every field is optional and untyped. Any other keys in the payload,
/// including `id` and `hash`, are ignored: the store assigns both.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawImportCandidate {
    #[serde(default)]
    pub first_name: Option<Value>,
    #[serde(default)]
    pub last_name: Option<Value>,
    #[serde(default)]
    pub phone: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
}

impl RawImportCandidate {
    /// Candidate with all four fields set to strings.
    pub fn from_strings(first_name: &str, last_name: &str, phone: &str, email: &str) -> Self {
        Self {
            first_name: Some(Value::from(first_name)),
            last_name: Some(Value::from(last_name)),
            phone: Some(Value::from(phone)),
            email: Some(Value::from(email)),
        }
    }

    /// Parse an import file: a JSON array of loosely-typed objects.
    ///
    /// Elements that are not objects become empty candidates, which fail
    /// validation later instead of failing the whole batch.
    pub fn parse_batch(json: &str) -> StorageResult<Vec<Self>> {
        let elements: Vec<Value> = serde_json::from_str(json)?;
        Ok(elements
            .into_iter()
            .map(|element| match element {
                Value::Object(_) => serde_json::from_value(element).unwrap_or_default(),
                _ => Self::default(),
            })
            .collect())
    }
}

impl TryFrom<RawImportCandidate> for ContactFields {
    type Error = ValidationError;

    fn try_from(candidate: RawImportCandidate) -> Result<Self, Self::Error> {
        Ok(ContactFields {
            first_name: required_text("firstName", candidate.first_name)?,
            last_name: required_text("lastName", candidate.last_name)?,
            phone: required_text("phone", candidate.phone)?,
            email: required_text("email", candidate.email)?,
        })
    }
}

impl TryFrom<&RawImportCandidate> for ContactFields {
    type Error = ValidationError;

    fn try_from(candidate: &RawImportCandidate) -> Result<Self, Self::Error> {
        ContactFields::try_from(candidate.clone())
    }
}

/// Extract a present, truthy field as text.
///
/// Empty strings, `null`, `0` and `false` count as missing. Non-zero
/// numbers print the way a JavaScript template string prints them (see
/// [`number_text`]) and `true` becomes `"true"`.
///
/// Arrays and objects are truthy but are rejected as
/// [`ValidationError::UnsupportedValue`] instead of being stringified. This
/// deliberately departs from a plain truthiness check, since their string
/// forms (`"1,2"`, `"[object Object]"`) would end up stored and hashed.
fn required_text(field: &'static str, value: Option<Value>) -> Result<String, ValidationError> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Ok(text),
        Some(Value::Number(number)) if number.as_f64() != Some(0.0) => Ok(number_text(&number)),
        Some(Value::Bool(true)) => Ok("true".to_string()),
        Some(Value::Array(_)) | Some(Value::Object(_)) => {
            Err(ValidationError::UnsupportedValue(field))
        }
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// Shortest text for a JSON number, following JavaScript's `Number#toString`.
///
/// Integral values print without a fractional part (`1e3` is `"1000"`,
/// `5.0` is `"5"`). Magnitudes from `1e21` up or below `1e-6` use exponent
/// form with an explicit sign (`"1e+21"`, `"1.5e-7"`).
fn number_text(number: &Number) -> String {
    let value = match number.as_f64() {
        Some(value) => value,
        None => return number.to_string(),
    };
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.5e-7"
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let digit_count = digits.len() as i32;
    // Position of the decimal point relative to the start of `digits`
    let point = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if digit_count <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - digit_count) as usize))
    } else if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(point as usize);
        format!("{}.{}", whole, fraction)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat(point.unsigned_abs() as usize), digits)
    } else {
        let exponent = point - 1;
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, exponent_sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, exponent_sign, exponent.abs())
        }
    };

    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Aggregate outcome of one import batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    /// Candidates appended to the store
    pub accepted: usize,

    /// Candidates missing a required field
    pub rejected_invalid: usize,

    /// Candidates whose fingerprint was already in the store
    pub rejected_duplicate: usize,
}

impl ImportReport {
    /// Number of candidates examined.
    pub fn total(&self) -> usize {
        self.accepted + self.rejected_invalid + self.rejected_duplicate
    }
}
