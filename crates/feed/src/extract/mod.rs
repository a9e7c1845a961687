//! Field extractors for the free-text parts of a feed item.
//!
//! Titles look like `"GBP/United Arab Emirates Dirham (AED)"` and descriptions
//! like `"1 GBP = 4.8074 AED"`, but neither follows a strict grammar. Both
//! extractors degrade to partial data instead of failing.

/// Code and name recovered from an item title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleFields {
    pub target_code: Option<String>,
    pub currency_name: Option<String>,
}

/// Splits `"<base>/<name> (<CODE>)"` into the target code and name.
///
/// - No `/`, or `/` as the last character: nothing is extracted.
/// - The last `(` ... `)` pair after the slash holds the code, the text before
///   it is the name.
/// - Without a usable pair the whole remainder is the name and the code stays unset.
pub fn extract_title(title: &str) -> TitleFields {
    let Some(slash) = title.find('/') else {
        return TitleFields::default();
    };
    if slash == title.len() - 1 {
        return TitleFields::default();
    }

    let target_part = title[slash + 1..].trim();
    let open = target_part.rfind('(');
    let close = target_part.rfind(')');

    match (open, close) {
        (Some(open), Some(close)) if close > open => TitleFields {
            target_code: Some(target_part[open + 1..close].trim().to_string()),
            currency_name: Some(target_part[..open].trim().to_string()),
        },
        _ => TitleFields {
            target_code: None,
            currency_name: Some(target_part.to_string()),
        },
    }
}

/// Reads the number following the first standalone `=` token.
///
/// Tokens are split on single spaces. The first `=` that has a successor decides
/// the outcome: a finite number is returned, anything else is logged and
/// yields `None`. Later `=` tokens are never consulted.
pub fn extract_rate(description: &str) -> Option<f64> {
    let tokens: Vec<&str> = description.split(' ').collect();
    let position = tokens
        .iter()
        .enumerate()
        .position(|(i, token)| *token == "=" && i + 1 < tokens.len())?;

    let candidate = tokens[position + 1].trim();
    match candidate.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        Ok(value) => {
            log::warn!(
                "Ignoring non-finite rate {} in description: {}",
                value,
                description
            );
            None
        }
        Err(e) => {
            log::warn!(
                "Could not parse rate from description '{}': {}",
                description,
                e
            );
            None
        }
    }
}
