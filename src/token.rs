//! Text tokenization and text diffs.
//!
//! Tokens borrow from the input text. Before diffing they are interned to
//! `usize` ids so the engines compare integers instead of strings.

use rustc_hash::FxHashMap;

use crate::algo::{Algorithm, DiffAlgorithm};
use crate::config::DiffConfig;
use crate::script::EditScript;

/// Unit of comparison for text diffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Granularity {
    /// Lines separated by `\n` (separator not included)
    #[default]
    Line,
    /// Maximal runs of whitespace or of non-whitespace
    Word,
    /// Unicode scalar values
    Char,
}

/// Split `text` into tokens of the given granularity.
///
/// [`join`] restores the text exactly. Empty text has no tokens; a trailing
/// newline leaves a trailing empty line.
pub fn tokenize(text: &str, granularity: Granularity) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    match granularity {
        Granularity::Line => text.split('\n').collect(),
        Granularity::Word => split_words(text),
        Granularity::Char => text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect(),
    }
}

fn split_words(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut prev_space = None;

    for (i, c) in text.char_indices() {
        let space = c.is_whitespace();
        if prev_space.is_some_and(|prev| prev != space) {
            tokens.push(&text[start..i]);
            start = i;
        }
        prev_space = Some(space);
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

/// Inverse of [`tokenize`].
pub fn join<S: AsRef<str>>(tokens: &[S], granularity: Granularity) -> String {
    let sep = match granularity {
        Granularity::Line => "\n",
        Granularity::Word | Granularity::Char => "",
    };
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(token.as_ref());
    }
    out
}

/// Token to id table shared by both sides of one diff.
#[derive(Default)]
struct Interner<'a> {
    ids: FxHashMap<&'a str, usize>,
    tokens: Vec<&'a str>,
}

impl<'a> Interner<'a> {
    fn intern(&mut self, tokens: &[&'a str]) -> Vec<usize> {
        tokens
            .iter()
            .map(|&token| {
                *self.ids.entry(token).or_insert_with(|| {
                    self.tokens.push(token);
                    self.tokens.len() - 1
                })
            })
            .collect()
    }

    fn resolve(&self, id: usize) -> &'a str {
        self.tokens[id]
    }
}

/// Diff two texts token by token with the engine selected by `config`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(granularity = ?granularity))
)]
pub fn diff_text<'a>(
    old: &'a str,
    new: &'a str,
    granularity: Granularity,
    config: &DiffConfig,
) -> EditScript<&'a str> {
    let mut interner = Interner::default();
    let old_ids = interner.intern(&tokenize(old, granularity));
    let new_ids = interner.intern(&tokenize(new, granularity));

    Algorithm::from(config)
        .diff(&old_ids, &new_ids)
        .into_iter()
        .map(|edit| edit.map(|id| interner.resolve(id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::apply;
    use crate::script::{Edit, modified_of, original_of};

    #[test]
    fn test_tokenize_lines() {
        assert!(tokenize("", Granularity::Line).is_empty());
        assert_eq!(tokenize("a", Granularity::Line), ["a"]);
        assert_eq!(tokenize("a\nb\n", Granularity::Line), ["a", "b", ""]);
        assert_eq!(tokenize("\n", Granularity::Line), ["", ""]);
    }

    #[test]
    fn test_tokenize_words() {
        assert_eq!(tokenize("hello  big world", Granularity::Word), ["hello", "  ", "big", " ", "world"]);
        assert_eq!(tokenize(" x ", Granularity::Word), [" ", "x", " "]);
    }

    #[test]
    fn test_tokenize_chars() {
        assert_eq!(tokenize("añb", Granularity::Char), ["a", "ñ", "b"]);
    }

    #[test]
    fn test_join_restores_text() {
        for text in ["", "one\ntwo\n", "\n\n", "tab\tand  spaces ", "añb"] {
            for granularity in [Granularity::Line, Granularity::Word, Granularity::Char] {
                assert_eq!(join(&tokenize(text, granularity), granularity), text);
            }
        }
    }

    #[test]
    fn test_interner_shares_ids() {
        let mut interner = Interner::default();
        let a = interner.intern(&["x", "y", "x"]);
        let b = interner.intern(&["y", "z"]);
        assert_eq!(a, [0, 1, 0]);
        assert_eq!(b, [1, 2]);
        assert_eq!(interner.resolve(2), "z");
    }

    #[test]
    fn test_interner_ids_stay_distinct() {
        let words: Vec<String> = (0..70_000).map(|i| format!("w{i}")).collect();
        let tokens: Vec<&str> = words.iter().map(String::as_str).collect();
        let mut interner = Interner::default();
        let ids = interner.intern(&tokens);

        assert_eq!(ids, (0..70_000).collect::<Vec<usize>>());
        assert!(ids.iter().zip(&tokens).all(|(&id, &token)| interner.resolve(id) == token));
    }

    #[test]
    fn test_diff_text_lines() {
        let old = "a\nb\nc\n";
        let new = "a\nx\nc\n";
        let script = diff_text(old, new, Granularity::Line, &DiffConfig::default());
        assert_eq!(
            script,
            vec![Edit::equal("a"), Edit::delete("b"), Edit::insert("x"), Edit::equal("c"), Edit::equal("")]
        );
        assert_eq!(join(&modified_of(&script), Granularity::Line), new);
    }

    #[test]
    fn test_diff_text_words_linear() {
        let old = "the quick brown fox";
        let new = "the slow brown fox jumps";
        for config in [DiffConfig::linear(), DiffConfig::score_split()] {
            let script = diff_text(old, new, Granularity::Word, &config);
            assert_eq!(join(&original_of(&script), Granularity::Word), old);
            let tokens = tokenize(old, Granularity::Word);
            assert_eq!(join(&apply(&tokens, &script).unwrap(), Granularity::Word), new);
        }
    }
}
