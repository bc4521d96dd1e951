//! Node identifiers.
//!
//! A node has no attributes beyond its identity. Edge lists coming from
//! tabular data carry ids as strings or integers; a blank string cell is how
//! such a source represents a missing endpoint, so string ids made only of
//! whitespace are treated as undefined and rejected at graph construction.

use std::fmt;
use std::hash::Hash;

/// An opaque, hashable node identifier.
pub trait NodeId: Clone + Eq + Hash + fmt::Display + fmt::Debug {
    /// Return `false` if this value stands for a missing identity.
    fn is_defined(&self) -> bool {
        true
    }
}

impl NodeId for String {
    fn is_defined(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl NodeId for &str {
    fn is_defined(&self) -> bool {
        !self.trim().is_empty()
    }
}

macro_rules! integer_node_id {
    ($($t:ty),*) => {
        $(impl NodeId for $t {})*
    };
}

integer_node_id!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
