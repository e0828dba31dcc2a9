#![no_main]

use arbitrary::Arbitrary;
use folio::index::SuffixArrayBuilder;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    pattern: Vec<u8>,
}

fuzz_target!(|input: Input| {
    // Suffix array lookups must agree with a linear scan
    let text = input.text.as_bytes();
    let Ok(index) = SuffixArrayBuilder::with_defaults().build(input.text.as_str().into()) else {
        return;
    };

    let found = index.lookup(&input.pattern, None);
    let expected: Vec<usize> = if input.pattern.is_empty() {
        Vec::new()
    } else {
        text.windows(input.pattern.len())
            .enumerate()
            .filter(|(_, w)| *w == input.pattern.as_slice())
            .map(|(i, _)| i)
            .collect()
    };
    assert_eq!(found, expected);
});
