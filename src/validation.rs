use crate::error::{BookError, BookResult};

/// Parses a numbered menu choice, accepting `1..=max`.
pub fn menu_choice(input: &str, max: u8) -> BookResult<u8> {
    match input.trim().parse::<u8>() {
        Ok(n) if (1..=max).contains(&n) => Ok(n),
        _ => Err(BookError::InvalidChoice {
            input: input.trim().to_string(),
        }),
    }
}

/// Answer to "replace the existing contact?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceChoice {
    Replace,
    Cancel,
}

/// `1` replaces, `2` cancels, anything else is invalid.
pub fn replace_choice(input: &str) -> BookResult<ReplaceChoice> {
    match input.trim().parse::<i64>() {
        Ok(1) => Ok(ReplaceChoice::Replace),
        Ok(2) => Ok(ReplaceChoice::Cancel),
        _ => Err(BookError::InvalidChoice {
            input: input.trim().to_string(),
        }),
    }
}
