//! Fuzzing library for iclr-papers.
//!
//! Targets cover the two untrusted inputs: note JSON from the API and
//! CSV rows read back by the analyzer.
//!
//! # Usage
//!
//! ```bash
//! cd crates/iclr-papers-fuzz
//! cargo +nightly fuzz run fuzz_note_parse -- -max_total_time=60
//! ```

pub use iclr_papers::models;
