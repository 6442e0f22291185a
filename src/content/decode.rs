//! Best-effort recovery of JSON from provider replies
//!
//! LLM replies are optimistically expected to be JSON but frequently
//! arrive wrapped in markdown code fences or surrounded by prose. The
//! recovery here strips fences and, failing that, cuts the outermost
//! `{...}` slice before handing the text to serde.

use serde::de::DeserializeOwned;

/// Extract and deserialize a JSON object from raw provider text.
pub fn from_provider_text<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    let cleaned = strip_code_fences(raw);

    match serde_json::from_str(cleaned) {
        Ok(value) => Ok(value),
        Err(first_err) => match outer_object_slice(cleaned) {
            Some(slice) => serde_json::from_str(slice),
            None => Err(first_err),
        },
    }
}

/// Remove a surrounding ```json ... ``` (or plain ```) fence, if present.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Skip an optional language tag on the opening fence line
    let rest = match rest.find('\n') {
        Some(pos) => &rest[pos + 1..],
        None => rest,
    };

    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Slice from the first `{` to the last `}`, inclusive.
fn outer_object_slice(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end > start {
        Some(&text[start..=end])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Small {
        a: i32,
    }

    #[test]
    fn test_plain_json() {
        let s: Small = from_provider_text("{\"a\": 1}").unwrap();
        assert_eq!(s.a, 1);
    }

    #[test]
    fn test_fenced_json() {
        let s: Small = from_provider_text("```json\n{\"a\": 2}\n```").unwrap();
        assert_eq!(s.a, 2);

        let s: Small = from_provider_text("```\n{\"a\": 3}\n```").unwrap();
        assert_eq!(s.a, 3);
    }

    #[test]
    fn test_json_in_prose() {
        let s: Small =
            from_provider_text("Here is your result:\n{\"a\": 4}\nHope that helps!").unwrap();
        assert_eq!(s.a, 4);
    }

    #[test]
    fn test_garbage_fails() {
        assert!(from_provider_text::<Small>("no json here").is_err());
    }
}
