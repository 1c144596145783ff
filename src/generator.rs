/*!
The pattern-construction operations.

[`Generator`] is a stateless factory: every operation is an associated
function and a pure function of its inputs. The symbol table `S` is the
only implicit context, chosen once through the
[`CharGenerator`](crate::CharGenerator) and
[`ByteGenerator`](crate::ByteGenerator) aliases.
*/

use std::marker::PhantomData;

use crate::chain::Chain;
use crate::fragment::Fragment;
use crate::symbols::Symbols;

/// Either kind of operand a composing operation accepts: a finished
/// [`Fragment`] or a [`Chain`] built so far.
///
/// Operations read the operand's text and nothing else. Taking
/// `impl Into<Operand<S>>` means both kinds (owned or borrowed) are
/// accepted with one signature, and anything else is rejected at compile
/// time.
#[derive(Debug)]
pub enum Operand<S: Symbols> {
    Fragment(Fragment<S>),
    Chain(Chain<S>),
}

// Hand-written like on `Fragment` and `Chain`, so the whole public surface
// is usable under an `S: Symbols` bound alone.
impl<S: Symbols> Clone for Operand<S> {
    fn clone(&self) -> Self {
        match self {
            Operand::Fragment(fragment) => Operand::Fragment(fragment.clone()),
            Operand::Chain(chain) => Operand::Chain(chain.clone()),
        }
    }
}

impl<S: Symbols> PartialEq for Operand<S> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Operand::Fragment(a), Operand::Fragment(b)) => a == b,
            (Operand::Chain(a), Operand::Chain(b)) => a == b,
            _ => false,
        }
    }
}

impl<S: Symbols> Eq for Operand<S> {}

impl<S: Symbols> Operand<S> {
    fn into_text(self) -> S::Text {
        match self {
            Operand::Fragment(fragment) => fragment.into_text(),
            Operand::Chain(chain) => chain.into_text(),
        }
    }
}

impl<S: Symbols> From<Fragment<S>> for Operand<S> {
    fn from(fragment: Fragment<S>) -> Self {
        Operand::Fragment(fragment)
    }
}

impl<S: Symbols> From<&Fragment<S>> for Operand<S> {
    fn from(fragment: &Fragment<S>) -> Self {
        Operand::Fragment(fragment.clone())
    }
}

impl<S: Symbols> From<Chain<S>> for Operand<S> {
    fn from(chain: Chain<S>) -> Self {
        Operand::Chain(chain)
    }
}

impl<S: Symbols> From<&Chain<S>> for Operand<S> {
    fn from(chain: &Chain<S>) -> Self {
        Operand::Chain(chain.clone())
    }
}

/// The factory of pattern-construction operations for one width variant.
///
/// Carries no state and is never instantiated; all operations are
/// associated functions.
pub struct Generator<S: Symbols> {
    _symbols: PhantomData<S>,
}

impl<S: Symbols> Generator<S> {
    /// `[a-b]`: any single character in the inclusive range.
    pub fn match_range(start: S::Unit, end: S::Unit) -> Fragment<S> {
        let mut text = S::Text::default();
        S::push(&mut text, S::SQUARE_OPEN);
        S::push(&mut text, start);
        S::push(&mut text, S::MINUS);
        S::push(&mut text, end);
        S::push(&mut text, S::SQUARE_CLOSE);
        Fragment::new(text)
    }

    /// `X|Y`: either alternative.
    pub fn match_or(a: impl Into<Operand<S>>, b: impl Into<Operand<S>>) -> Fragment<S> {
        let mut text = a.into().into_text();
        S::push(&mut text, S::PIPE);
        S::append(&mut text, &b.into().into_text());
        Fragment::new(text)
    }

    /// `.`: any character.
    pub fn match_any() -> Fragment<S> {
        let mut text = S::Text::default();
        S::push(&mut text, S::DOT);
        Fragment::new(text)
    }

    /// A single literal character, written unescaped.
    pub fn match_character(ch: S::Unit) -> Fragment<S> {
        let mut text = S::Text::default();
        S::push(&mut text, ch);
        Fragment::new(text)
    }

    /// Literal text, written verbatim. The caller must pre-escape any
    /// meta-characters; [`Generator::match_literal`] does that escaping
    /// when the text is not already pattern-safe.
    pub fn match_string(s: impl Into<S::Text>) -> Fragment<S> {
        Fragment::new(s.into())
    }

    /// Literal text with every meta-character escaped, so the fragment
    /// matches the input exactly as given.
    pub fn match_literal(s: impl Into<S::Text>) -> Fragment<S> {
        let mut text = S::Text::default();
        S::escape_into(&s.into(), &mut text);
        Fragment::new(text)
    }

    /// `\s`: any whitespace character.
    pub fn match_space() -> Fragment<S> {
        Self::escaped(S::CLASS_SPACE)
    }

    /// `\w`: any word character.
    pub fn match_alpha_char() -> Fragment<S> {
        Self::escaped(S::CLASS_WORD)
    }

    /// `\d`: any decimal digit.
    pub fn match_digit() -> Fragment<S> {
        Self::escaped(S::CLASS_DIGIT)
    }

    /// `\S`: any non-whitespace character.
    pub fn match_not_space() -> Fragment<S> {
        Self::escaped(S::CLASS_NOT_SPACE)
    }

    /// `\W`: any non-word character.
    pub fn match_not_alpha_char() -> Fragment<S> {
        Self::escaped(S::CLASS_NOT_WORD)
    }

    /// `\D`: any non-digit character.
    pub fn match_not_digit() -> Fragment<S> {
        Self::escaped(S::CLASS_NOT_DIGIT)
    }

    /// `[chars]`: any character in the class. The class body is taken
    /// verbatim, so ranges like `a-z` work and meta-characters must come
    /// pre-escaped.
    pub fn match_any_of(chars: impl Into<S::Text>) -> Fragment<S> {
        let mut text = S::Text::default();
        S::push(&mut text, S::SQUARE_OPEN);
        S::append(&mut text, &chars.into());
        S::push(&mut text, S::SQUARE_CLOSE);
        Fragment::new(text)
    }

    /// `[^chars]`: any character not in the class. Same verbatim-body
    /// contract as [`Generator::match_any_of`].
    pub fn match_none_of(chars: impl Into<S::Text>) -> Fragment<S> {
        let mut text = S::Text::default();
        S::push(&mut text, S::SQUARE_OPEN);
        S::push(&mut text, S::CARET);
        S::append(&mut text, &chars.into());
        S::push(&mut text, S::SQUARE_CLOSE);
        Fragment::new(text)
    }

    /// `\c`: the character prefixed with a backslash.
    pub fn match_escaped_char(ch: S::Unit) -> Fragment<S> {
        Self::escaped(ch)
    }

    /// `X*`: zero or more repetitions.
    pub fn match_zero_or_more(to_match: impl Into<Operand<S>>) -> Fragment<S> {
        Self::quantified(to_match, S::STAR)
    }

    /// `X+`: one or more repetitions.
    pub fn match_one_or_more(to_match: impl Into<Operand<S>>) -> Fragment<S> {
        Self::quantified(to_match, S::PLUS)
    }

    /// `X?`: zero or one repetition.
    pub fn match_zero_or_one(to_match: impl Into<Operand<S>>) -> Fragment<S> {
        Self::quantified(to_match, S::QUESTION_MARK)
    }

    /// `X{n}`: exactly `n` repetitions.
    pub fn match_n(to_match: impl Into<Operand<S>>, n: usize) -> Fragment<S> {
        let mut text = to_match.into().into_text();
        S::push(&mut text, S::CURLY_OPEN);
        S::push_decimal(&mut text, n);
        S::push(&mut text, S::CURLY_CLOSE);
        Fragment::new(text)
    }

    /// `X{n,}`: at least `n` repetitions. Only the open lower bound is
    /// offered; there is no bounded `{n,m}` operation.
    pub fn match_n_or_more(to_match: impl Into<Operand<S>>, n: usize) -> Fragment<S> {
        let mut text = to_match.into().into_text();
        S::push(&mut text, S::CURLY_OPEN);
        S::push_decimal(&mut text, n);
        S::push(&mut text, S::COMMA);
        S::push(&mut text, S::CURLY_CLOSE);
        Fragment::new(text)
    }

    /// `(?:X)`: non-capturing group.
    pub fn match_group(to_group: impl Into<Operand<S>>) -> Fragment<S> {
        let mut text = S::Text::default();
        S::push(&mut text, S::ROUND_OPEN);
        S::push(&mut text, S::QUESTION_MARK);
        S::push(&mut text, S::COLON);
        S::append(&mut text, &to_group.into().into_text());
        S::push(&mut text, S::ROUND_CLOSE);
        Fragment::new(text)
    }

    /// `(X)`: capturing group, allocating the next back-reference slot in
    /// the compiled pattern.
    pub fn capture_group(to_capture: impl Into<Operand<S>>) -> Fragment<S> {
        let mut text = S::Text::default();
        S::push(&mut text, S::ROUND_OPEN);
        S::append(&mut text, &to_capture.into().into_text());
        S::push(&mut text, S::ROUND_CLOSE);
        Fragment::new(text)
    }

    /// A fresh, empty chain to accumulate fragments into.
    pub fn create_regex() -> Chain<S> {
        Chain::new(S::Text::default())
    }

    /// A chain seeded with caller-supplied pattern text. The seed is
    /// trusted to be well formed.
    pub fn create_regex_from_string(initial: impl Into<S::Text>) -> Chain<S> {
        Chain::new(initial.into())
    }

    fn escaped(ch: S::Unit) -> Fragment<S> {
        let mut text = S::Text::default();
        S::push(&mut text, S::BACKSLASH);
        S::push(&mut text, ch);
        Fragment::new(text)
    }

    fn quantified(to_match: impl Into<Operand<S>>, quantifier: S::Unit) -> Fragment<S> {
        let mut text = to_match.into().into_text();
        S::push(&mut text, quantifier);
        Fragment::new(text)
    }
}
