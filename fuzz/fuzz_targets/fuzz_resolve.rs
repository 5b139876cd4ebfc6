#![no_main]

use libfuzzer_sys::fuzz_target;
use phonetree::{MenuOption, Target};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // First line is the input, the rest are option labels
    let mut lines = text.lines();
    let input = lines.next().unwrap_or_default();
    let options: Vec<MenuOption> = lines
        .map(|label| MenuOption::new(label, Target::Terminal))
        .collect();

    let _ = phonetree::resolve(&options, input, 0.5);
    let _ = phonetree::similarity(input, text);
});
