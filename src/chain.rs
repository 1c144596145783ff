//! The pattern accumulator.

use crate::fragment::Fragment;
use crate::symbols::Symbols;

/// An ordered accumulator of [`Fragment`]s.
///
/// Appends take effect in call order, and because every fragment is a
/// self-contained atom or group, the accumulated text is a valid pattern
/// prefix after each one. Chains own their text outright: independent
/// chains never share state.
#[derive(Debug)]
pub struct Chain<S: Symbols> {
    text: S::Text,
}

// Hand-written for the same reason as on `Fragment`: derives would bound
// `S` itself, not just `S::Text`.
impl<S: Symbols> Clone for Chain<S> {
    fn clone(&self) -> Self {
        Self {
            text: self.text.clone(),
        }
    }
}

impl<S: Symbols> Default for Chain<S> {
    fn default() -> Self {
        Self {
            text: S::Text::default(),
        }
    }
}

impl<S: Symbols> PartialEq for Chain<S> {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl<S: Symbols> Eq for Chain<S> {}

impl<S: Symbols> Chain<S> {
    pub(crate) fn new(text: S::Text) -> Self {
        Self { text }
    }

    /// Concatenates the fragment onto the accumulated pattern and returns
    /// the chain, so that appends can be written back to back.
    pub fn append(mut self, fragment: Fragment<S>) -> Self {
        S::append(&mut self.text, fragment.as_text());
        self
    }

    /// The pattern accumulated so far. Non-destructive: the chain can keep
    /// growing after any number of reads.
    pub fn as_text(&self) -> &S::Text {
        &self.text
    }

    /// Consumes the chain, returning the accumulated pattern.
    pub fn into_text(self) -> S::Text {
        self.text
    }
}
