use crate::parse::ParseError;

/// Split one command line (or the interior of a bracket pair) into tokens.
///
/// Tokens are separated by single spaces. A part starting with `[` opens a
/// block: everything up to and including the first following part that ends
/// with `]` is re-joined into one token, brackets and all, so the parser can
/// hand the block back here when it descends into it. Inner brackets are
/// absorbed as plain text of the outer token; no depth counting happens at
/// this stage.
pub fn split(input: &str) -> Result<Vec<String>, ParseError> {
    // A block token arrives here still wrapped in its brackets.
    let inner = match input.strip_prefix('[') {
        Some(rest) => rest.strip_suffix(']').unwrap_or(rest),
        None => input,
    };
    let parts: Vec<&str> = inner.split(' ').collect();

    let mut tokens = Vec::new();
    let mut i = 0;
    while i < parts.len() {
        if parts[i].starts_with('[') {
            let close = (i..parts.len())
                .find(|&j| parts[j].ends_with(']'))
                .ok_or_else(|| ParseError::UnterminatedBlock(parts[i].to_owned()))?;
            tokens.push(parts[i..=close].join(" "));
            i = close + 1;
        } else {
            tokens.push(parts[i].to_owned());
            i += 1;
        }
    }
    Ok(tokens)
}
