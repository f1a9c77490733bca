#![no_main]

use iclr_papers::models::{Note, NotesPage};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(page) = serde_json::from_slice::<NotesPage>(data) {
        for value in page.notes {
            let _ = Note::from_value(value);
        }
    }
});
