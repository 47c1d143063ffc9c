#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Parser darf bei beliebigem Input nie paniken
    if let Ok(ljson) = landmark_editor::parse_ljson(text) {
        let _ = landmark_editor::LandmarkGroup::new("fuzz", "fuzz", &ljson);
    }
});
