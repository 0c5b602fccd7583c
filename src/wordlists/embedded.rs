//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

// Generated by build.rs from data/words.txt
include!(concat!(env!("OUT_DIR"), "/english.rs"));
