//! Natural-language rule stub.
//!
//! A placeholder translator that pattern-matches substrings. It is not part
//! of the validation core and makes no attempt at real parsing.

/// Translates a free-text rule prompt into a canned rule description.
///
/// Returns `None` when the prompt matches nothing the stub knows about.
pub fn translate_rule(input: &str) -> Option<String> {
    let lower = input.to_lowercase();
    if lower.contains("prioritylevel 5") {
        Some("Filter clients where PriorityLevel = 5".to_string())
    } else if lower.contains("match tasks to workers") {
        Some("Map Task.RequiredSkills \u{2286} Worker.Skills".to_string())
    } else {
        None
    }
}
