#![no_main]
use libfuzzer_sys::fuzz_target;
use quickjson::tokenizer::Tokenizer;

// The tokenizer is lenient (see crate docs), so its only contract under
// arbitrary bytes is: never panic, always terminate. `all()` drains it to
// `Eof` or to the first `DecodeError`, either of which is a normal outcome.
fuzz_target!(|data: &[u8]| {
    let tokenizer = Tokenizer::new(data);
    let _ = tokenizer.all();
});
