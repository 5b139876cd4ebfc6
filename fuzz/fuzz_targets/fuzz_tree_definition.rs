#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Any definition either compiles or is rejected with an error
        if let Ok(script) = phonetree::script::parse_script(content, Path::new("fuzz.toml")) {
            let _ = script.tree.render_outline(&phonetree::config::Prompts::default());
        }
    }
});
