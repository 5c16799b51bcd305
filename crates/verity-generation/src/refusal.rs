//! Post-processing of model output.

/// Remove `**bold**` and `*italic*` markers, keeping the text.
pub fn strip_markdown(text: &str) -> String {
    text.replace("**", "").replace('*', "")
}

/// Whether `output` is the model declining to answer with the fallback text.
///
/// Matches when the normalized output contains the normalized fallback
/// anywhere, so a preamble before the sentence still counts. Normalization lowercases, collapses whitespace, and drops
/// surrounding quotes and trailing periods.
pub fn is_refusal(output: &str, fallback: &str) -> bool {
    let fallback = normalize(fallback);
    if fallback.is_empty() {
        return false;
    }
    normalize(output).contains(&fallback)
}

fn normalize(text: &str) -> String {
    let collapsed = text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    collapsed
        .trim_matches(|c: char| c == '"' || c == '\'' || c == '\u{201c}' || c == '\u{201d}')
        .trim_end_matches('.')
        .trim()
        .to_string()
}
