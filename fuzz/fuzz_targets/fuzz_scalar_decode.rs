#![no_main]
use libfuzzer_sys::fuzz_target;
use quickjson::{tokenizer::Tokenizer, Decodable};

// Exercises the decoder closures directly (not just the tokenizer), since a
// parse error further up the call stack could still mask an arithmetic panic
// inside a primitive decoder (e.g. the narrow-integer truncation casts).
fuzz_target!(|data: &[u8]| {
    let mut i64_decoder = i64::build_decoder();
    let mut i64_dest = 0i64;
    let _ = i64_decoder.decode(&mut i64_dest, &mut Tokenizer::new(data));

    let mut f64_decoder = f64::build_decoder();
    let mut f64_dest = 0.0f64;
    let _ = f64_decoder.decode(&mut f64_dest, &mut Tokenizer::new(data));

    let mut string_decoder = String::build_decoder();
    let mut string_dest = String::new();
    let _ = string_decoder.decode(&mut string_dest, &mut Tokenizer::new(data));
});
