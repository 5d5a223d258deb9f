#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Accepted amounts must print back to the same value
        if let Ok(money) = text.parse::<libris::Money>() {
            let printed = money.to_string();
            assert_eq!(printed.parse::<libris::Money>().ok(), Some(money));
        }
    }
});
