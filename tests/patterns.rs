use rexgen::{ByteGenerator as B, CharGenerator as G, CharFragment};

#[test]
fn single_atoms() {
    assert_eq!(G::match_character('x').as_text(), "x");
    assert_eq!(G::match_any().as_text(), ".");
    assert_eq!(G::match_range('a', 'z').as_text(), "[a-z]");
    assert_eq!(G::match_string("foo").as_text(), "foo");
    assert_eq!(G::match_escaped_char('.').as_text(), r"\.");
}

#[test]
fn class_shorthands() {
    assert_eq!(G::match_space().as_text(), r"\s");
    assert_eq!(G::match_alpha_char().as_text(), r"\w");
    assert_eq!(G::match_digit().as_text(), r"\d");
    assert_eq!(G::match_not_space().as_text(), r"\S");
    assert_eq!(G::match_not_alpha_char().as_text(), r"\W");
    assert_eq!(G::match_not_digit().as_text(), r"\D");
}

#[test]
fn character_classes() {
    assert_eq!(G::match_any_of("abc").as_text(), "[abc]");
    assert_eq!(G::match_any_of("a-z0-9").as_text(), "[a-z0-9]");
    assert_eq!(G::match_none_of("abc").as_text(), "[^abc]");
}

#[test]
fn quantifiers() {
    let x = || G::match_character('x');
    assert_eq!(G::match_zero_or_more(x()).as_text(), "x*");
    assert_eq!(G::match_one_or_more(x()).as_text(), "x+");
    assert_eq!(G::match_zero_or_one(x()).as_text(), "x?");
    assert_eq!(G::match_n(x(), 5).as_text(), "x{5}");
    assert_eq!(G::match_n(x(), 0).as_text(), "x{0}");
    assert_eq!(G::match_n_or_more(x(), 2).as_text(), "x{2,}");
}

#[test]
fn alternation_and_groups() {
    let or = G::match_or(G::match_digit(), G::match_space());
    assert_eq!(or.as_text(), r"\d|\s");

    assert_eq!(G::match_group(or.clone()).as_text(), r"(?:\d|\s)");
    assert_eq!(G::capture_group(or).as_text(), r"(\d|\s)");
}

#[test]
fn operands_can_be_fragments_or_chains() {
    // A chain is as good an operand as a fragment, and borrowed operands
    // leave the original usable.
    let word = G::create_regex()
        .append(G::match_alpha_char())
        .append(G::match_one_or_more(G::match_digit()));
    let starred = G::match_zero_or_more(&word);
    assert_eq!(starred.as_text(), r"\w\d+*");
    assert_eq!(word.as_text(), r"\w\d+");

    let either = G::match_or(word, G::match_character('x'));
    assert_eq!(either.as_text(), r"\w\d+|x");

    // Borrowed fragments work the same way, yielding an owned operand.
    let digit = G::match_digit();
    let repeated = G::match_n(&digit, 3);
    assert_eq!(repeated.as_text(), r"\d{3}");
    assert_eq!(digit.as_text(), r"\d");

    let grouped = G::match_group(
        G::create_regex()
            .append(G::match_range('a', 'f'))
            .append(G::match_digit()),
    );
    assert_eq!(grouped.as_text(), r"(?:[a-f]\d)");
}

#[test]
fn chains_accumulate_in_call_order() {
    let chain = G::create_regex()
        .append(G::match_character('a'))
        .append(G::match_character('b'))
        .append(G::match_character('c'));
    assert_eq!(chain.as_text(), "abc");

    // Reading the text does not consume or reset the accumulator.
    assert_eq!(chain.as_text(), "abc");
    let chain = chain.append(G::match_character('d'));
    assert_eq!(chain.into_text(), "abcd");
}

#[test]
fn concatenation_is_independent_of_fragment_construction() {
    // a+ then [0-9], whether appended one by one or prebuilt elsewhere.
    let one_by_one = G::create_regex()
        .append(G::match_one_or_more(G::match_character('a')))
        .append(G::match_range('0', '9'));
    let prebuilt_a = G::match_one_or_more(G::match_character('a'));
    let prebuilt_b = G::match_range('0', '9');
    let reassembled = G::create_regex().append(prebuilt_a).append(prebuilt_b);
    assert_eq!(one_by_one, reassembled);
}

#[test]
fn fresh_chains_share_no_state() {
    let first = G::create_regex().append(G::match_digit());
    let second = G::create_regex();
    assert_eq!(second.as_text(), "");
    assert_eq!(first.as_text(), r"\d");

    let cloned = first.clone().append(G::match_space());
    assert_eq!(first.as_text(), r"\d");
    assert_eq!(cloned.as_text(), r"\d\s");
}

#[test]
fn seeded_chains() {
    let chain = G::create_regex_from_string(r"^\d").append(G::match_any());
    assert_eq!(chain.as_text(), r"^\d.");
}

#[test]
fn literal_escaping() {
    assert_eq!(G::match_literal("1+1").as_text(), r"1\+1");
    assert_eq!(G::match_literal("a.b(c)").as_text(), r"a\.b\(c\)");
    // Plain text passes through untouched, like match_string.
    assert_eq!(G::match_literal("plain").as_text(), "plain");
    assert_eq!(G::match_string("1+1").as_text(), "1+1");
}

#[test]
fn worked_examples() {
    let digits = G::create_regex().append(G::match_one_or_more(G::match_digit()));
    assert_eq!(digits.as_text(), r"\d+");

    let captured = G::capture_group(
        G::create_regex()
            .append(G::match_range('a', 'z'))
            .append(G::match_space()),
    );
    assert_eq!(captured.as_text(), r"([a-z]\s)");

    assert_eq!(G::match_none_of("abc").as_text(), "[^abc]");
    assert_eq!(G::match_n(G::match_character('x'), 5).as_text(), "x{5}");
}

#[test]
fn byte_variant_mirrors_char_variant() {
    assert_eq!(B::match_character(b'x').as_text(), b"x");
    assert_eq!(B::match_range(b'a', b'z').as_text(), b"[a-z]");
    assert_eq!(B::match_digit().as_text(), br"\d");
    assert_eq!(B::match_none_of(b"abc").as_text(), b"[^abc]");
    assert_eq!(
        B::match_n(B::match_character(b'x'), 5).as_text(),
        b"x{5}"
    );
    assert_eq!(B::match_literal(b"1+1").as_text(), br"1\+1");

    let chain = B::create_regex()
        .append(B::match_one_or_more(B::match_digit()))
        .append(B::match_zero_or_one(B::match_character(b'%')));
    assert_eq!(chain.as_text(), br"\d+%?");

    let grouped = B::capture_group(
        B::create_regex()
            .append(B::match_range(b'a', b'z'))
            .append(B::match_space()),
    );
    assert_eq!(grouped.as_text(), br"([a-z]\s)");
}

#[test]
fn fragment_text_accessors_agree() {
    let fragment: CharFragment = G::match_group(G::match_any());
    assert_eq!(fragment.as_text(), "(?:.)");
    assert_eq!(fragment.into_text(), "(?:.)");
}
