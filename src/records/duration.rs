//! Duration-literal parsing.
//!
//! Literals are sequences of `<integer><unit>` pairs with units `h`, `m`
//! and `s`, e.g. `"1h30m"`, `"45m"` or `"0h50m"`. Pairs may appear in any
//! order and repeat; their values are summed. A leading `-` parses as a
//! negative literal so that the caller's positivity check can reject it
//! as an invalid value rather than a syntax error.

use crate::error::FormatError;

const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_MIN: i64 = 60;

/// Parse a duration literal into signed whole seconds.
pub(crate) fn parse_duration_literal(text: &str) -> Result<i64, FormatError> {
    let err = || FormatError::Duration(text.to_string());

    let (negative, rest) = match text.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, text),
    };

    if rest.is_empty() {
        return Err(err());
    }

    let mut total: i64 = 0;
    // Value accumulated since the last unit suffix
    let mut value: Option<i64> = None;

    for c in rest.chars() {
        if let Some(digit) = c.to_digit(10) {
            let current = value.unwrap_or(0);
            value = Some(
                current
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(i64::from(digit)))
                    .ok_or_else(err)?,
            );
        } else {
            // A unit must follow a value
            let count = value.take().ok_or_else(err)?;
            let secs_per_unit = match c {
                'h' => SECS_PER_HOUR,
                'm' => SECS_PER_MIN,
                's' => 1,
                _ => return Err(err()),
            };
            total = count
                .checked_mul(secs_per_unit)
                .and_then(|secs| total.checked_add(secs))
                .ok_or_else(err)?;
        }
    }

    // Trailing value without a unit suffix
    if value.is_some() {
        return Err(err());
    }

    Ok(if negative { -total } else { total })
}
