//! Deterministic, pure logic shared by the metashift commands.
//!
//! Core modules must be free of I/O side effects. They operate on borrowed
//! in-memory sequences and return deterministic outputs suitable for tests.

pub mod rotate;
