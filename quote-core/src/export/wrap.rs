//! Greedy word wrapping shared by document backends.

/// Wraps `text` into lines no wider than `max_width`.
///
/// Words are separated on whitespace and packed greedily. A single word
/// wider than `max_width` is broken between characters. `width_of` returns
/// the rendered width of a string in the same unit as `max_width`.
///
/// # Examples
///
/// ```
/// use quote_core::export::wrap::wrap_words;
///
/// let width_of = |s: &str| s.chars().count() as f32;
/// assert_eq!(wrap_words("one two three", 7.0, width_of), vec!["one two", "three"]);
/// assert!(wrap_words("   ", 7.0, width_of).is_empty());
/// ```
pub fn wrap_words(
    text: &str,
    max_width: f32,
    width_of: impl Fn(&str) -> f32,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if width_of(&candidate) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if width_of(word) <= max_width {
            current = word.to_string();
        } else {
            let mut pieces = break_word(word, max_width, &width_of);
            current = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Splits an over-long word between characters; every piece holds at least
/// one character.
fn break_word(
    word: &str,
    max_width: f32,
    width_of: &impl Fn(&str) -> f32,
) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();

    for ch in word.chars() {
        piece.push(ch);
        if width_of(&piece) > max_width && piece.chars().count() > 1 {
            piece.pop();
            pieces.push(std::mem::take(&mut piece));
            piece.push(ch);
        }
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}
