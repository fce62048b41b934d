//! Whitespace-separated token input for container parsing
//!
//! Arrays read exactly as many tokens as they hold; matrices read their rows
//! one after another from the same [`TokenInput`], so a single stream can
//! carry a whole matrix regardless of how it is broken into lines.

use std::borrow::Cow;
use std::fmt;
use std::io::Read;
use std::str::FromStr;

use crate::error::{Result, TabulaError};

/// Cursor over the whitespace-separated tokens of a text buffer
pub struct TokenInput<'a> {
    text: Cow<'a, str>,
    position: usize,
    consumed: usize,
}

impl<'a> TokenInput<'a> {
    /// Create a token input borrowing the given text
    pub fn new(text: &'a str) -> Self {
        Self {
            text: Cow::Borrowed(text),
            position: 0,
            consumed: 0,
        }
    }

    /// Create a token input owning the given text
    pub fn from_string(text: String) -> TokenInput<'static> {
        TokenInput {
            text: Cow::Owned(text),
            position: 0,
            consumed: 0,
        }
    }

    /// Drain a reader and tokenize its UTF-8 contents
    pub fn from_reader<R: Read>(mut reader: R) -> Result<TokenInput<'static>> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(TokenInput::from_string(text))
    }

    /// Number of tokens handed out so far
    #[inline]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Check whether any non-whitespace input remains
    pub fn has_more(&self) -> bool {
        self.text[self.position..].chars().any(|c| !c.is_whitespace())
    }

    /// Return the next token, or `None` at end of input
    pub fn next_token(&mut self) -> Option<&str> {
        let rest = &self.text[self.position..];
        let start = rest.find(|c: char| !c.is_whitespace())?;
        let tail = &rest[start..];
        let len = tail.find(char::is_whitespace).unwrap_or(tail.len());

        let begin = self.position + start;
        self.position = begin + len;
        self.consumed += 1;
        Some(&self.text[begin..begin + len])
    }

    /// Parse the next token as a `T`
    pub fn read_value<T>(&mut self) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let index = self.consumed;
        let token = self.next_token().ok_or_else(|| {
            TabulaError::parse(format!("unexpected end of input after {} tokens", index))
        })?;
        token
            .parse::<T>()
            .map_err(|e| TabulaError::parse(format!("token {} ({:?}): {}", index, token, e)))
    }
}

impl fmt::Debug for TokenInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenInput")
            .field("position", &self.position)
            .field("consumed", &self.consumed)
            .field("len", &self.text.len())
            .finish()
    }
}
