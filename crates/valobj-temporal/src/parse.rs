//! Shared three-field tokenizer for the temporal types.
//!
//! Both `Date` and `Time` are text representations of exactly three
//! integer components. Tokenization has two modes, selected by the
//! separator argument:
//!
//! - **Empty separator**: the input is a concatenated run of ASCII digits
//!   sliced into fixed-width fields (4/2/2 for dates, 2/2/2 for times).
//! - **Non-empty separator**: the input splits into exactly three
//!   separator-delimited tokens, each parsed as a signed integer.
//!
//! Anything that breaks the token *shape* (wrong count, wrong width, a
//! token that is not an integer) is a `Format` violation. Values that
//! parse but fall outside valid calendar or clock bounds, including
//! negatives reachable through the separator path, are classified as
//! `Range` violations by the callers' materialization step.

use valobj_core::ValueObjectError;

/// Number of fields in every temporal text representation.
pub(crate) const FIELD_COUNT: usize = 3;

pub(crate) fn format_error(input: &str, reason: impl Into<String>) -> ValueObjectError {
    ValueObjectError::Format {
        input: input.to_string(),
        reason: reason.into(),
    }
}

/// Tokenize `input` into three integers.
///
/// # Errors
///
/// Returns [`ValueObjectError::Format`] for any token-shape mismatch.
pub(crate) fn tokenize(
    input: &str,
    separator: &str,
    widths: [usize; FIELD_COUNT],
) -> Result<[i64; FIELD_COUNT], ValueObjectError> {
    if separator.is_empty() {
        fixed_width(input, widths)
    } else {
        delimited(input, separator)
    }
}

fn fixed_width(
    input: &str,
    widths: [usize; FIELD_COUNT],
) -> Result<[i64; FIELD_COUNT], ValueObjectError> {
    let total: usize = widths.iter().sum();
    if input.len() != total {
        return Err(format_error(
            input,
            format!("expected exactly {total} digits, got {} bytes", input.len()),
        ));
    }
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format_error(input, "expected digits only"));
    }

    let mut fields = [0i64; FIELD_COUNT];
    let mut start = 0;
    for (field, width) in fields.iter_mut().zip(widths) {
        let token = &input[start..start + width];
        // All-digit tokens of at most 4 bytes cannot overflow i64.
        *field = token
            .parse()
            .map_err(|_| format_error(input, format!("field {token:?} is not an integer")))?;
        start += width;
    }
    Ok(fields)
}

fn delimited(input: &str, separator: &str) -> Result<[i64; FIELD_COUNT], ValueObjectError> {
    let tokens: Vec<&str> = input.split(separator).collect();
    if tokens.len() != FIELD_COUNT {
        return Err(format_error(
            input,
            format!(
                "expected {FIELD_COUNT} fields separated by {separator:?}, got {}",
                tokens.len()
            ),
        ));
    }

    let mut fields = [0i64; FIELD_COUNT];
    for (field, token) in fields.iter_mut().zip(tokens) {
        *field = token
            .parse()
            .map_err(|_| format_error(input, format!("field {token:?} is not an integer")))?;
    }
    Ok(fields)
}
