//! Directory tree printing
//!
//! `TreeWalker` lists each directory's immediate children, subdirectories
//! first and files after, and streams every node to a `TreeOutput`. It holds
//! O(depth) state, never the whole tree.

mod walker;

pub use walker::{TreeOutput, TreeWalker};
