//! Quantity validation.
//!
//! All functions here are pure: they decide whether a quantity transition
//! is legal and return the new quantity. Persisting it is the caller's job.
//!
//! Three transitions exist:
//! - `validate_new_card`: card not yet in the deck, the requested
//!   quantity is checked directly as the new quantity
//! - `validate_add`: card already present, `current + delta` is checked
//! - `validate_set`: card already present, set to an absolute quantity

use serde_json::Value;

use crate::core::{DeckError, DeckResult};

use super::limit::FormatLimit;

/// Check a raw integer quantity: must be in `1..=max`.
pub fn check_quantity(raw: i64, max: u32) -> DeckResult<u32> {
    if raw <= 0 {
        return Err(DeckError::invalid_quantity("must be a positive integer"));
    }
    match u32::try_from(raw) {
        Ok(q) if q <= max => Ok(q),
        _ => Err(DeckError::invalid_quantity(format!("must be at most {max}"))),
    }
}

/// Parse a requested quantity from a JSON request field.
///
/// Accepts integers and integer strings ("3"). Rejects zero, negatives,
/// fractions, booleans, null, and anything above `max`.
///
/// ## Example
///
/// ```
/// use deckhaven::policy::parse_quantity;
/// use serde_json::json;
///
/// assert_eq!(parse_quantity(&json!(2), 100).unwrap(), 2);
/// assert_eq!(parse_quantity(&json!("3"), 100).unwrap(), 3);
/// assert!(parse_quantity(&json!(0), 100).is_err());
/// assert!(parse_quantity(&json!("three"), 100).is_err());
/// ```
pub fn parse_quantity(value: &Value, max: u32) -> DeckResult<u32> {
    let raw = match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i,
            // Fractions, and integers too large for i64.
            None if n.is_u64() => i64::MAX,
            None => return Err(DeckError::invalid_quantity("must be a whole number")),
        },
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| DeckError::invalid_quantity("must be a number"))?,
        Value::Null => return Err(DeckError::invalid_quantity("is required")),
        _ => return Err(DeckError::invalid_quantity("must be a number")),
    };
    check_quantity(raw, max)
}

fn exceeded(limit: &FormatLimit, cap: u32, current: u32) -> DeckError {
    DeckError::LimitExceeded {
        format_name: limit.format_name.clone(),
        singleton: limit.singleton,
        limit: cap,
        current,
    }
}

fn require_positive(quantity: u32) -> DeckResult<()> {
    if quantity == 0 {
        return Err(DeckError::invalid_quantity("must be a positive integer"));
    }
    Ok(())
}

/// Validate adding `delta` copies to an existing `current` quantity.
///
/// Returns the new quantity. `current` may be 0 for a card not yet in the
/// deck.
pub fn validate_add(current: u32, delta: u32, limit: &FormatLimit) -> DeckResult<u32> {
    require_positive(delta)?;
    let new_quantity = current
        .checked_add(delta)
        .ok_or_else(|| DeckError::invalid_quantity("total is too large"))?;

    match limit.limit.cap() {
        Some(cap) if new_quantity > cap => Err(exceeded(limit, cap, current)),
        _ => Ok(new_quantity),
    }
}

/// Validate the first add of a card not yet in the deck.
///
/// The requested quantity is compared directly against the cap.
pub fn validate_new_card(requested: u32, limit: &FormatLimit) -> DeckResult<u32> {
    require_positive(requested)?;
    match limit.limit.cap() {
        Some(cap) if requested > cap => Err(exceeded(limit, cap, 0)),
        _ => Ok(requested),
    }
}

/// Validate setting an existing entry from `current` to `new_quantity`.
pub fn validate_set(current: u32, new_quantity: u32, limit: &FormatLimit) -> DeckResult<u32> {
    require_positive(new_quantity)?;
    match limit.limit.cap() {
        Some(cap) if new_quantity > cap => Err(exceeded(limit, cap, current)),
        _ => Ok(new_quantity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;
    use crate::policy::CopyLimit;
    use serde_json::json;

    fn commander() -> FormatLimit {
        FormatLimit::new("Commander", true, CopyLimit::Capped(1))
    }

    fn standard() -> FormatLimit {
        FormatLimit::new("Standard", false, CopyLimit::Capped(4))
    }

    #[test]
    fn test_check_quantity() {
        assert_eq!(check_quantity(1, 10), Ok(1));
        assert_eq!(check_quantity(10, 10), Ok(10));
        assert!(check_quantity(0, 10).is_err());
        assert!(check_quantity(-3, 10).is_err());
        assert!(check_quantity(11, 10).is_err());
        assert!(check_quantity(i64::MAX, u32::MAX).is_err());
    }

    #[test]
    fn test_parse_quantity_variants() {
        assert_eq!(parse_quantity(&json!(4), 99), Ok(4));
        assert_eq!(parse_quantity(&json!(" 7 "), 99), Ok(7));

        for bad in [json!(0), json!(-1), json!(1.5), json!("1.5"), json!("x"),
                    json!(true), json!(null), json!([1]), json!(100), json!(u64::MAX)] {
            let err = parse_quantity(&bad, 99).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidQuantity, "{bad} should be invalid");
        }
    }

    #[test]
    fn test_add_within_limit() {
        assert_eq!(validate_add(0, 1, &commander()), Ok(1));
        assert_eq!(validate_add(2, 2, &standard()), Ok(4));
    }

    #[test]
    fn test_add_exceeds_limit() {
        let err = validate_add(3, 2, &standard()).unwrap_err();
        assert_eq!(
            err,
            DeckError::LimitExceeded {
                format_name: "Standard".into(),
                singleton: false,
                limit: 4,
                current: 3,
            }
        );
        assert!(err.to_string().contains("already have 3 copy(ies)"));

        let err = validate_add(1, 1, &commander()).unwrap_err();
        assert!(err.to_string().contains("1 copy of each card"));
    }

    #[test]
    fn test_add_unlimited() {
        let draft = FormatLimit::unlimited("Draft");
        assert_eq!(validate_add(10, 5, &draft), Ok(15));
    }

    #[test]
    fn test_add_zero_delta_is_invalid() {
        let err = validate_add(1, 0, &FormatLimit::unlimited("Draft")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidQuantity);
    }

    #[test]
    fn test_add_overflow_is_invalid() {
        let err = validate_add(u32::MAX, 1, &FormatLimit::unlimited("Draft")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidQuantity);
    }

    #[test]
    fn test_new_card() {
        assert_eq!(validate_new_card(1, &commander()), Ok(1));
        let err = validate_new_card(2, &commander()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LimitExceeded);
        assert_eq!(validate_new_card(4, &standard()), Ok(4));
        assert!(validate_new_card(5, &standard()).is_err());
        assert!(validate_new_card(0, &standard()).is_err());
    }

    #[test]
    fn test_set() {
        assert_eq!(validate_set(4, 2, &standard()), Ok(2));
        assert_eq!(validate_set(1, 4, &standard()), Ok(4));
        let err = validate_set(3, 5, &standard()).unwrap_err();
        assert!(matches!(err, DeckError::LimitExceeded { current: 3, .. }));
        assert_eq!(validate_set(3, 0, &standard()).unwrap_err().kind(), ErrorKind::InvalidQuantity);
    }
}
