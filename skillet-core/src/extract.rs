//! Recovery of a JSON object from model output that may contain prose.
//!
//! Models sometimes wrap their JSON answer in explanatory text despite being
//! instructed not to. This module locates the first top-level JSON object in
//! such output so the caller can parse just that substring.

/// Locate the first balanced JSON object embedded in `text`.
///
/// Scans from the first `{`, tracking string-literal and escape state so that
/// braces inside string values do not end the match early. Returns the
/// object substring, or `None` if no `{` exists or the object never closes.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}
