//! Strongly-typed index wrappers for the flat arenas.
//!
//! Points, half-edges, and faces are stored in plain `Vec`s and addressed
//! by these wrappers; no element holds a live reference to another.

use std::fmt;

macro_rules! idx {
    ($name:ident) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub usize);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

idx!(PointId);
idx!(HalfEdgeId);
idx!(FaceId);
