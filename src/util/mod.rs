//! Utility helpers isolating browser/environment concerns.

pub mod storage;
