//! Serialization of filled templates into prompt text.

use serde_json::Value;

/// Instruction line that precedes every structured prompt.
pub const PROMPT_PREFIX: &str = "Create an image:\n";

/// Serializes a filled template as the text sent to the generation API.
///
/// The template is written as two-space indented JSON after
/// [`PROMPT_PREFIX`]. Object keys keep their declaration order.
///
/// # Example
///
/// ```rust
/// use promptstyle::render_prompt;
/// use serde_json::json;
///
/// let prompt = render_prompt(&json!({ "object": "a red shoe" }));
/// assert_eq!(prompt, "Create an image:\n{\n  \"object\": \"a red shoe\"\n}");
/// ```
pub fn render_prompt(template: &Value) -> String {
    format!("{PROMPT_PREFIX}{template:#}")
}
