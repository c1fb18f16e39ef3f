//! Input line tokenization
//!
//! Lines are split on whitespace only. There is no quoting, escaping or
//! shell metacharacter handling: `give greet echo "a b"` stores the quotes
//! as literal characters.

/// Split a line into its command head and the raw remainder.
///
/// The split happens on the first run of whitespace; the remainder keeps its
/// inner spacing but loses the leading run. `head` is empty only for an
/// empty or whitespace-only line.
pub fn tokenize(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.find(char::is_whitespace) {
        Some(idx) => {
            let (head, rest) = line.split_at(idx);
            (head, rest.trim_start())
        },
        None => (line, ""),
    }
}

/// Split raw arguments on whitespace runs, discarding empty fragments.
pub fn split_args(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}
