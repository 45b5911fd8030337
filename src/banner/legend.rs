//! Legend composition and text elision

use heapless::String;

use super::{ELLIPSIS, Legend, MAX_LEGEND_LENGTH};

/// Build the legend identifying a function in the banner.
///
/// A non-blank function name wins over the display symbol. Legends longer
/// than [`MAX_LEGEND_LENGTH`] characters are elided.
pub fn compose_legend(symbol: char, name: Option<&str>) -> Legend {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => elide(name, MAX_LEGEND_LENGTH),
        _ => {
            let mut legend = Legend::new();
            let _ = legend.push(symbol);
            legend
        }
    }
}

/// Copy `text`, keeping at most `max_chars` characters.
///
/// Overlong text keeps its first `max_chars - 1` characters followed by
/// [`ELLIPSIS`].
/// Characters that do not fit the buffer capacity are dropped the same way.
pub fn elide<const N: usize>(text: &str, max_chars: usize) -> String<N> {
    let mut out = String::new();
    if max_chars == 0 {
        return out;
    }

    let fits = char_count(text) <= max_chars;
    let keep = if fits { max_chars } else { max_chars - 1 };
    for c in text.chars().take(keep) {
        if out.push(c).is_err() {
            break;
        }
    }

    let truncated = char_count(&out) < char_count(text);
    if truncated {
        // Make room for the marker when the buffer itself was the limit.
        while out.push(ELLIPSIS).is_err() {
            if out.pop().is_none() {
                break;
            }
        }
    }
    out
}

/// Number of characters (not bytes) in `text`.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}
