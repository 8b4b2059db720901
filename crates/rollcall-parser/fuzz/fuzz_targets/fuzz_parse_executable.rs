#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let result = rollcall_parser::parse_executable(s);
    // Formatting walks every span and note; it must not panic either.
    let _ = result.format_errors(Some(s));
});
