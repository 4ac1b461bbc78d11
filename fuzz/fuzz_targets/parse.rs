#![no_main]

use libfuzzer_sys::fuzz_target;
use qbasic_syntax::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // The lexer works on raw bytes, so invalid UTF-8 is fair input too
    if let Ok(tokens) = lexer::tokenize(data) {
        let _ = parser::parse(&tokens);
    }
});
