/*!
Composable builders for regular-expression pattern text.

This crate builds pattern strings; it never executes a match. The output
is handed to an ambient engine such as [`regex`](https://docs.rs/regex)
for compilation. The guarantee the builders give is syntactic: every
[`Fragment`] is a self-contained atom or group, and concatenating
fragments through a [`Chain`] keeps the accumulated pattern well formed.

Two width variants share the full operation set: [`CharGenerator`] builds
[`String`] patterns over `char` units, [`ByteGenerator`] builds `Vec<u8>`
patterns over byte units.

```
use rexgen::CharGenerator as G;

let version = G::create_regex()
    .append(G::capture_group(G::match_one_or_more(G::match_digit())))
    .append(G::match_escaped_char('.'))
    .append(G::match_one_or_more(G::match_digit()));
assert_eq!(version.as_text(), r"(\d+)\.\d+");
```
*/

pub mod chain;
pub mod fragment;
pub mod generator;
pub mod symbols;

pub use chain::Chain;
pub use fragment::Fragment;
pub use generator::{Generator, Operand};
pub use symbols::{ByteSymbols, CharSymbols, Symbols};

/// Generator over `char` units, producing [`String`] patterns.
pub type CharGenerator = Generator<CharSymbols>;
/// Generator over byte units, producing `Vec<u8>` patterns.
pub type ByteGenerator = Generator<ByteSymbols>;

/// Fragment of a [`String`] pattern.
pub type CharFragment = Fragment<CharSymbols>;
/// Fragment of a `Vec<u8>` pattern.
pub type ByteFragment = Fragment<ByteSymbols>;

/// Chain accumulating a [`String`] pattern.
pub type CharChain = Chain<CharSymbols>;
/// Chain accumulating a `Vec<u8>` pattern.
pub type ByteChain = Chain<ByteSymbols>;
