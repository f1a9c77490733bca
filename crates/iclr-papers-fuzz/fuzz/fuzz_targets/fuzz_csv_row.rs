#![no_main]

use iclr_papers::models::{PaperRecord, PaperRow};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(data);
    for row in reader.deserialize::<PaperRow>().flatten() {
        let _ = PaperRecord::from(row);
    }
});
