//! Classic shell tools behind single-letter flags, in one binary.
//!
//! The binary in `src/main.rs` maps each flag to one command module in
//! [`commands`]. Commands that consult environment variables receive an
//! [`env::Environment`] snapshot instead of reading process globals.

pub mod commands;
pub mod env;
pub mod error;

/// Depth cap for the recursive commands (remove, du, find).
///
/// The traversals assume a finite, acyclic tree and never follow symlinks;
/// the cap makes that assumption explicit so a bind-mount loop or a
/// pathologically deep tree is reported instead of exhausting the stack.
pub const MAX_DEPTH: usize = 256;
