//! Rule-based checks.
//!
//! Every module exposes `check(cx, out)`, scanning the whole snapshot text and appending zero or
//! more diagnostics. Matches starting inside a comment are ignored by every rule.

pub mod attributes;
pub mod bindings;
pub mod declarations;
pub mod stage;
pub mod terminator;
pub mod types;
pub mod workgroup;
