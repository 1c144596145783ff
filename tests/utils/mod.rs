use regex as rust_regex;

/// Compile a built pattern on the reference engine, panicking with context
/// if the engine rejects it.
pub fn compile(pattern: &str) -> rust_regex::Regex {
    match rust_regex::Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => panic!("reference engine rejected {:?}: {e}", pattern),
    }
}

/// Byte-variant patterns are ASCII by construction, so they can be viewed
/// as UTF-8 and compiled on the bytes engine.
pub fn compile_bytes(pattern: &[u8]) -> rust_regex::bytes::Regex {
    let pattern = std::str::from_utf8(pattern).expect("byte pattern is not ASCII");
    match rust_regex::bytes::Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => panic!("reference engine rejected {:?}: {e}", pattern),
    }
}
