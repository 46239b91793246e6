//! Input line splitting and argument tokenization

/// Split a line into the command name and the raw rest of the line
///
/// Leading whitespace is skipped; the name ends at the first whitespace run
/// and the rest starts after it. Returns `None` for a blank line.
pub fn split_command(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_start();
    if line.is_empty() {
        return None;
    }
    match line.find(char::is_whitespace) {
        Some(end) => Some((&line[..end], line[end..].trim_start())),
        None => Some((line, "")),
    }
}

/// Whether a token is a canonical integer
///
/// The token must survive a parse and format round trip unchanged, so `+1`,
/// `01` and `1.0` are rejected while `-3` is accepted.
pub fn is_integer(token: &str) -> bool {
    parse_integer(token).is_some()
}

/// Parse a canonical integer token
pub fn parse_integer(token: &str) -> Option<i64> {
    token
        .parse::<i64>()
        .ok()
        .filter(|value| value.to_string() == token)
}

/// Split on whitespace runs
pub fn plain_tokens(args: &str) -> Vec<String> {
    args.split_whitespace().map(str::to_string).collect()
}

/// Tokenize cell values, honouring double quotes
///
/// With more than one `"` in `args`, every non-empty `"..."` pair becomes a
/// single token and anything outside quotes is dropped, except a leading
/// integer which is kept as the first token so an index can precede quoted
/// cells. Otherwise this is [`plain_tokens`].
///
/// Quotes pair strictly left to right: `"" "a"` yields `["a"]`. A regex scan
/// for `"([^"]+)"` would instead match the space between the first pair and
/// the second, yielding `[" "]`.
pub fn cell_tokens(args: &str) -> Vec<String> {
    if args.matches('"').count() <= 1 {
        return plain_tokens(args);
    }

    let mut tokens: Vec<String> = args
        .split('"')
        .skip(1)
        .step_by(2)
        .enumerate()
        .filter_map(|(i, segment)| quoted_segment(args, i, segment))
        .collect();

    if let Some(first) = args.split_whitespace().next().filter(|t| is_integer(t)) {
        tokens.insert(0, first.to_string());
    }
    tokens
}

/// Keep a segment only if it is non-empty and actually closed by a quote
fn quoted_segment(args: &str, index: usize, segment: &str) -> Option<String> {
    let closed = args.matches('"').count() >= 2 * (index + 1);
    (closed && !segment.is_empty()).then(|| segment.to_string())
}
