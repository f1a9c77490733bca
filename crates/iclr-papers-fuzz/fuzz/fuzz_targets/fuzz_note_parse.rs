#![no_main]

use iclr_papers::models::{Note, PaperRecord};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding may fail, normalizing a decoded note must not panic
    if let Ok(note) = serde_json::from_slice::<Note>(data) {
        let _ = PaperRecord::from_note(note, 0);
    }
});
