//! The finished-pattern value type.

use crate::symbols::Symbols;

/// A finished, self-contained piece of pattern text: an atom or a group
/// that stays syntactically valid wherever it is concatenated.
///
/// Fragments only come out of [`Generator`](crate::Generator) operations,
/// so holding one is proof that the wrapped text is well formed. The one
/// caller-trusted entry point is
/// [`Generator::match_string`](crate::Generator::match_string), which
/// wraps its input verbatim.
#[derive(Debug)]
pub struct Fragment<S: Symbols> {
    text: S::Text,
}

// Hand-written rather than derived: the derives would bound `S` itself
// (`S: Clone`, `S: PartialEq`), but value semantics only depend on
// `S::Text`, which the `Symbols` trait already bounds.
impl<S: Symbols> Clone for Fragment<S> {
    fn clone(&self) -> Self {
        Self {
            text: self.text.clone(),
        }
    }
}

impl<S: Symbols> PartialEq for Fragment<S> {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl<S: Symbols> Eq for Fragment<S> {}

impl<S: Symbols> Fragment<S> {
    pub(crate) fn new(text: S::Text) -> Self {
        Self { text }
    }

    /// The pattern text of this fragment.
    pub fn as_text(&self) -> &S::Text {
        &self.text
    }

    /// Consumes the fragment, returning its pattern text.
    pub fn into_text(self) -> S::Text {
        self.text
    }
}
