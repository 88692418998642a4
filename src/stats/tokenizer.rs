//! Word tokenization.
//!
//! Two modes are supported:
//! - **Boundary** (default): a word is a maximal run of word characters
//!   (Unicode alphanumerics and `_`), everything else separates words.
//! - **Delimiter set**: text is split on any character of the set plus
//!   `\n` and `\r`, which are always implicit delimiters. A space in the
//!   set turns every whitespace character into a delimiter. Tokens are
//!   whitespace-trimmed before measuring.
//!
//! Only the length of a word (in characters) survives tokenization.

/// A single word, reduced to its length in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordToken {
    pub length: usize,
}

/// How words are separated in the input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Delimiters {
    /// Words are runs of word characters.
    #[default]
    Boundary,
    /// Words are separated by an explicit set of characters.
    Set(DelimiterSet),
}

/// Explicit delimiter characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSet {
    chars: Vec<char>,
    any_whitespace: bool,
}

impl DelimiterSet {
    /// Build a set from the characters of `spec`.
    pub fn new(spec: &str) -> Self {
        let mut chars: Vec<char> = spec.chars().collect();
        chars.sort_unstable();
        chars.dedup();
        let any_whitespace = chars.contains(&' ');
        Self {
            chars,
            any_whitespace,
        }
    }

    /// Check whether `c` separates words.
    pub fn contains(&self, c: char) -> bool {
        c == '\n'
            || c == '\r'
            || (self.any_whitespace && c.is_whitespace())
            || self.chars.contains(&c)
    }

    /// The user-supplied characters, sorted and deduplicated.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl Delimiters {
    /// Build the delimiter configuration from an optional user string.
    ///
    /// `None` and the empty string both select boundary detection.
    pub fn from_option(spec: Option<&str>) -> Self {
        match spec {
            Some(s) if !s.is_empty() => Delimiters::Set(DelimiterSet::new(s)),
            _ => Delimiters::Boundary,
        }
    }

    /// Check whether `c` ends a word in this mode.
    pub fn is_separator(&self, c: char) -> bool {
        match self {
            Delimiters::Boundary => !is_word_char(c),
            Delimiters::Set(set) => set.contains(c),
        }
    }

    /// Length of a raw token in characters, after mode-specific trimming.
    fn measure(&self, raw: &str) -> usize {
        match self {
            Delimiters::Boundary => raw.chars().count(),
            Delimiters::Set(_) => raw.trim().chars().count(),
        }
    }
}

/// Word characters for boundary detection.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lazy iterator over the words of a text chunk.
#[derive(Debug)]
pub struct Tokens<'a> {
    text: &'a str,
    delimiters: &'a Delimiters,
    pos: usize,
}

impl<'a> Tokens<'a> {
    /// Bytes of the chunk consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Iterator for Tokens<'_> {
    type Item = WordToken;

    fn next(&mut self) -> Option<WordToken> {
        let text = self.text;
        let delimiters = self.delimiters;

        loop {
            let rest = &text[self.pos..];
            let Some(start) = rest.find(|c: char| !delimiters.is_separator(c)) else {
                self.pos = text.len();
                return None;
            };
            let word = &rest[start..];
            let end = word
                .find(|c: char| delimiters.is_separator(c))
                .unwrap_or(word.len());
            self.pos += start + end;

            let length = delimiters.measure(&word[..end]);
            if length > 0 {
                return Some(WordToken { length });
            }
        }
    }
}

/// Split `text` into words.
pub fn tokenize<'a>(text: &'a str, delimiters: &'a Delimiters) -> Tokens<'a> {
    Tokens {
        text,
        delimiters,
        pos: 0,
    }
}
