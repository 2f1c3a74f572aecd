//! Entry-to-exit routes.

use lem_core::{BitSet, RoomId, TunnelId};

use crate::Colony;

/// A simple path from the colony's entry to its exit.
///
/// `rooms[0]` is the entry, `rooms[len]` the exit, and `tunnels[i]` the
/// tunnel crossed between `rooms[i]` and `rooms[i + 1]`.  The interior
/// (every room except the two ends) is also kept as a bitset indexed by
/// `RoomId` so that compatibility between routes is a word-wise AND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    rooms:    Vec<RoomId>,
    tunnels:  Vec<TunnelId>,
    interior: BitSet,
}

impl Route {
    /// Assemble a route from already-resolved rooms and tunnels.
    ///
    /// `room_count` sizes the interior bitset and must cover every room id.
    ///
    /// # Panics
    /// Panics in debug builds if the two sequences do not line up.
    pub fn new(rooms: Vec<RoomId>, tunnels: Vec<TunnelId>, room_count: usize) -> Self {
        debug_assert!(rooms.len() >= 2, "a route has at least one step");
        debug_assert_eq!(tunnels.len() + 1, rooms.len());
        let mut interior = BitSet::with_capacity(room_count);
        for r in &rooms[1..rooms.len() - 1] {
            interior.insert(r.index());
        }
        Self { rooms, tunnels, interior }
    }

    /// Build a route from room names, resolving tunnels against `colony`.
    ///
    /// Returns `None` unless the names form a simple path from the colony's
    /// entry to its exit.
    pub fn from_names(colony: &Colony, names: &[&str]) -> Option<Self> {
        let rooms = names
            .iter()
            .map(|n| colony.room_id(n))
            .collect::<Option<Vec<_>>>()?;
        Self::from_rooms(colony, rooms)
    }

    /// Like [`from_names`](Self::from_names) but for room ids.
    pub fn from_rooms(colony: &Colony, rooms: Vec<RoomId>) -> Option<Self> {
        if rooms.len() < 2
            || rooms.first() != Some(&colony.entry())
            || rooms.last() != Some(&colony.exit())
        {
            return None;
        }
        let mut seen = BitSet::with_capacity(colony.room_count());
        if !rooms.iter().all(|r| seen.insert(r.index())) {
            return None;
        }
        let tunnels = rooms
            .windows(2)
            .map(|w| colony.tunnel_between(w[0], w[1]))
            .collect::<Option<Vec<_>>>()?;
        Some(Self::new(rooms, tunnels, colony.room_count()))
    }

    /// Number of tunnels crossed (rooms − 1).
    #[inline]
    pub fn length(&self) -> usize {
        self.tunnels.len()
    }

    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    pub fn tunnels(&self) -> &[TunnelId] {
        &self.tunnels
    }

    /// Interior rooms as a bitset over `RoomId` indices.
    pub fn interior(&self) -> &BitSet {
        &self.interior
    }

    #[inline]
    pub fn room(&self, position: usize) -> RoomId {
        self.rooms[position]
    }

    /// Tunnel crossed when stepping from `position` to `position + 1`.
    #[inline]
    pub fn tunnel(&self, position: usize) -> TunnelId {
        self.tunnels[position]
    }

    pub fn exit(&self) -> RoomId {
        self.rooms[self.rooms.len() - 1]
    }

    /// `true` if no interior room is shared with `other`.
    #[inline]
    pub fn is_disjoint(&self, other: &Route) -> bool {
        self.interior.is_disjoint(&other.interior)
    }

    /// Room names along the route, for diagnostics.
    pub fn names<'c>(&self, colony: &'c Colony) -> Vec<&'c str> {
        self.rooms.iter().map(|&r| colony.room_name(r)).collect()
    }
}
