#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let options = pare::Options::default().logger(&pare::NullLogger);

        let (html, css) = s.split_at(s.find('\0').unwrap_or(0));
        let _ = pare::from_string(html, css, &options);
    }
});
