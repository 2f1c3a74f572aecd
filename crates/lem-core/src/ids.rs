//! Typed indices for rooms, tunnels, ants and routes.
//!
//! Room, tunnel and route ids are dense and start at 0, so they index the
//! owning tables directly through [`index`](RoomId::index).  Ant ids start at
//! 1 and display in the output form `L<n>`.

use std::fmt;

/// Generate a `u32` id wrapper with a display prefix.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident => $prefix:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub u32);

        impl $name {
            /// Id for table slot `i`.
            #[inline(always)]
            pub fn from_index(i: usize) -> Self {
                debug_assert!(i <= u32::MAX as usize, "{} index {i} exceeds u32", stringify!($name));
                Self(i as u32)
            }

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }
    };
}

typed_id! {
    /// Room in the colony's room table, numbered in order of declaration.
    pub struct RoomId => "room#";
}

typed_id! {
    /// Undirected tunnel, numbered by the first link that declared it.
    pub struct TunnelId => "tunnel#";
}

typed_id! {
    /// Ant identity.  Ants are numbered from 1; `AntId(0)` is never issued.
    pub struct AntId => "L";
}

typed_id! {
    /// Position of a route inside a selected route set.
    pub struct RouteId => "route#";
}
