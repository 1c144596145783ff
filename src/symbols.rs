/*!
Symbol tables for the two character-width variants.

Every pattern-construction operation is written once, against the
[`Symbols`] trait. [`CharSymbols`] instantiates it over `char` units backed
by [`String`], [`ByteSymbols`] over `u8` units backed by `Vec<u8>`, the
same narrow/wide split the `regex` crate draws between `regex::Regex` and
`regex::bytes::Regex`.
*/

use std::fmt::Debug;

use regex_syntax::is_meta_character;

/// One character-width variant: the fixed token characters of regex syntax
/// plus the buffer primitives used to assemble pattern text from them.
///
/// All constants are immutable and ASCII in both provided instantiations;
/// they may be read from any number of threads without coordination.
pub trait Symbols {
    /// A single pattern character.
    type Unit: Copy + Eq + Debug;
    /// Owned pattern text.
    type Text: Default + Clone + Eq + Debug;

    const SQUARE_OPEN: Self::Unit;
    const SQUARE_CLOSE: Self::Unit;
    const ROUND_OPEN: Self::Unit;
    const ROUND_CLOSE: Self::Unit;
    const CURLY_OPEN: Self::Unit;
    const CURLY_CLOSE: Self::Unit;

    const MINUS: Self::Unit;
    const PLUS: Self::Unit;
    const PIPE: Self::Unit;
    const CARET: Self::Unit;
    const STAR: Self::Unit;
    const COMMA: Self::Unit;
    const BACKSLASH: Self::Unit;
    const SLASH: Self::Unit;
    const QUESTION_MARK: Self::Unit;
    const COLON: Self::Unit;
    const DOT: Self::Unit;

    const CLASS_SPACE: Self::Unit;
    const CLASS_WORD: Self::Unit;
    const CLASS_DIGIT: Self::Unit;
    const CLASS_NOT_SPACE: Self::Unit;
    const CLASS_NOT_WORD: Self::Unit;
    const CLASS_NOT_DIGIT: Self::Unit;

    /// Appends a single unit to `text`.
    fn push(text: &mut Self::Text, unit: Self::Unit);

    /// Appends `src` onto `dst`.
    fn append(dst: &mut Self::Text, src: &Self::Text);

    /// Appends the decimal digits of `n` to `text`.
    fn push_decimal(text: &mut Self::Text, n: usize);

    /// Appends `src` onto `dst` with every regex meta-character prefixed
    /// by [`Symbols::BACKSLASH`], so the result matches `src` verbatim.
    fn escape_into(src: &Self::Text, dst: &mut Self::Text);
}

/// The wide variant: `char` units, [`String`] pattern text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharSymbols;

impl Symbols for CharSymbols {
    type Unit = char;
    type Text = String;

    const SQUARE_OPEN: char = '[';
    const SQUARE_CLOSE: char = ']';
    const ROUND_OPEN: char = '(';
    const ROUND_CLOSE: char = ')';
    const CURLY_OPEN: char = '{';
    const CURLY_CLOSE: char = '}';

    const MINUS: char = '-';
    const PLUS: char = '+';
    const PIPE: char = '|';
    const CARET: char = '^';
    const STAR: char = '*';
    const COMMA: char = ',';
    const BACKSLASH: char = '\\';
    const SLASH: char = '/';
    const QUESTION_MARK: char = '?';
    const COLON: char = ':';
    const DOT: char = '.';

    const CLASS_SPACE: char = 's';
    const CLASS_WORD: char = 'w';
    const CLASS_DIGIT: char = 'd';
    const CLASS_NOT_SPACE: char = 'S';
    const CLASS_NOT_WORD: char = 'W';
    const CLASS_NOT_DIGIT: char = 'D';

    fn push(text: &mut String, unit: char) {
        text.push(unit);
    }

    fn append(dst: &mut String, src: &String) {
        dst.push_str(src);
    }

    fn push_decimal(text: &mut String, n: usize) {
        text.push_str(&n.to_string());
    }

    fn escape_into(src: &String, dst: &mut String) {
        for ch in src.chars() {
            if is_meta_character(ch) {
                dst.push(Self::BACKSLASH);
            }
            dst.push(ch);
        }
    }
}

/// The narrow variant: `u8` units, `Vec<u8>` pattern text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteSymbols;

impl Symbols for ByteSymbols {
    type Unit = u8;
    type Text = Vec<u8>;

    const SQUARE_OPEN: u8 = b'[';
    const SQUARE_CLOSE: u8 = b']';
    const ROUND_OPEN: u8 = b'(';
    const ROUND_CLOSE: u8 = b')';
    const CURLY_OPEN: u8 = b'{';
    const CURLY_CLOSE: u8 = b'}';

    const MINUS: u8 = b'-';
    const PLUS: u8 = b'+';
    const PIPE: u8 = b'|';
    const CARET: u8 = b'^';
    const STAR: u8 = b'*';
    const COMMA: u8 = b',';
    const BACKSLASH: u8 = b'\\';
    const SLASH: u8 = b'/';
    const QUESTION_MARK: u8 = b'?';
    const COLON: u8 = b':';
    const DOT: u8 = b'.';

    const CLASS_SPACE: u8 = b's';
    const CLASS_WORD: u8 = b'w';
    const CLASS_DIGIT: u8 = b'd';
    const CLASS_NOT_SPACE: u8 = b'S';
    const CLASS_NOT_WORD: u8 = b'W';
    const CLASS_NOT_DIGIT: u8 = b'D';

    fn push(text: &mut Vec<u8>, unit: u8) {
        text.push(unit);
    }

    fn append(dst: &mut Vec<u8>, src: &Vec<u8>) {
        dst.extend_from_slice(src);
    }

    fn push_decimal(text: &mut Vec<u8>, n: usize) {
        text.extend_from_slice(n.to_string().as_bytes());
    }

    fn escape_into(src: &Vec<u8>, dst: &mut Vec<u8>) {
        for &byte in src {
            // Meta-characters are all ASCII; bytes past 0x7f pass through.
            if byte.is_ascii() && is_meta_character(byte as char) {
                dst.push(Self::BACKSLASH);
            }
            dst.push(byte);
        }
    }
}
