//! Colony representation and builder.
//!
//! # Data layout
//!
//! Adjacency uses **Compressed Sparse Row (CSR)** format.  Given a
//! `RoomId r`, its neighbours and the tunnels leading to them occupy the
//! parallel slices:
//!
//! ```text
//! adj_room  [ adj_start[r] .. adj_start[r+1] ]
//! adj_tunnel[ adj_start[r] .. adj_start[r+1] ]
//! ```
//!
//! Within a room's slice, neighbours appear in the order their link was first
//! added.  This order is the canonical traversal order for route enumeration
//! and must never depend on hashing.

use rustc_hash::{FxHashMap, FxHashSet};

use lem_core::{RoomId, TunnelId};

use crate::{ColonyError, ColonyResult};

// ── Colony ────────────────────────────────────────────────────────────────────

/// Immutable room/tunnel graph with a designated entry and exit.
///
/// All table fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`ColonyBuilder`].
#[derive(Debug, Clone)]
pub struct Colony {
    // ── Room data ─────────────────────────────────────────────────────────
    /// Name of each room.  Indexed by `RoomId`.
    pub room_names: Vec<String>,

    /// Optional planar coordinates of each room.  Only outer surfaces
    /// (formatters, replay tools) read these.
    pub room_coords: Vec<Option<(i64, i64)>>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// CSR row pointer.  Length = `room_count + 1`.
    pub adj_start: Vec<u32>,

    /// Neighbour rooms, grouped by source room.
    pub adj_room: Vec<RoomId>,

    /// Tunnel crossed to reach the matching `adj_room` entry.
    pub adj_tunnel: Vec<TunnelId>,

    // ── Tunnel data (indexed by TunnelId) ─────────────────────────────────
    /// Endpoints of each tunnel, in the orientation of the first link.
    pub tunnel_ends: Vec<(RoomId, RoomId)>,

    entry: RoomId,
    exit: RoomId,
    name_index: FxHashMap<String, RoomId>,
}

impl Colony {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn room_count(&self) -> usize {
        self.room_names.len()
    }

    pub fn tunnel_count(&self) -> usize {
        self.tunnel_ends.len()
    }

    // ── Terminals ─────────────────────────────────────────────────────────

    #[inline]
    pub fn entry(&self) -> RoomId {
        self.entry
    }

    #[inline]
    pub fn exit(&self) -> RoomId {
        self.exit
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// `true` if a room called `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.name_index.contains_key(name)
    }

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.name_index.get(name).copied()
    }

    /// Name of `room`.
    ///
    /// # Panics
    /// Panics if `room` is not a room of this colony.
    #[inline]
    pub fn room_name(&self, room: RoomId) -> &str {
        &self.room_names[room.index()]
    }

    pub fn room_coords(&self, room: RoomId) -> Option<(i64, i64)> {
        self.room_coords[room.index()]
    }

    /// All room ids in insertion order.
    pub fn rooms(&self) -> impl Iterator<Item = RoomId> + '_ {
        (0..self.room_names.len()).map(|i| RoomId::from_index(i))
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Neighbours of `room` in canonical (first-appearance) order.
    #[inline]
    pub fn neighbors(&self, room: RoomId) -> &[RoomId] {
        let (start, end) = self.span(room);
        &self.adj_room[start..end]
    }

    /// Tunnels leaving `room`, parallel to [`neighbors`](Self::neighbors).
    #[inline]
    pub fn neighbor_tunnels(&self, room: RoomId) -> &[TunnelId] {
        let (start, end) = self.span(room);
        &self.adj_tunnel[start..end]
    }

    #[inline]
    pub fn degree(&self, room: RoomId) -> usize {
        let (start, end) = self.span(room);
        end - start
    }

    /// The tunnel joining `a` and `b`, if any.
    pub fn tunnel_between(&self, a: RoomId, b: RoomId) -> Option<TunnelId> {
        // Scan the shorter adjacency list.
        let (from, to) = if self.degree(a) <= self.degree(b) { (a, b) } else { (b, a) };
        self.neighbors(from)
            .iter()
            .position(|&n| n == to)
            .map(|i| self.neighbor_tunnels(from)[i])
    }

    #[inline]
    fn span(&self, room: RoomId) -> (usize, usize) {
        (
            self.adj_start[room.index()] as usize,
            self.adj_start[room.index() + 1] as usize,
        )
    }
}

// ── ColonyBuilder ─────────────────────────────────────────────────────────────

/// Construct a [`Colony`] incrementally, then call [`build`](Self::build).
///
/// Rooms are checked for duplicate names as they are added.  Links and the
/// entry/exit names are recorded as given and validated by `build()`, so a
/// link may be added before the rooms it names.
///
/// # Example
///
/// ```
/// use lem_colony::ColonyBuilder;
///
/// let mut b = ColonyBuilder::new();
/// b.add_room("start", Some((0, 0))).unwrap();
/// b.add_room("A", Some((1, 0))).unwrap();
/// b.add_room("end", Some((2, 0))).unwrap();
/// b.set_entry("start");
/// b.set_exit("end");
/// b.add_link("start", "A");
/// b.add_link("A", "end");
/// b.add_link("end", "A"); // duplicate, collapsed
/// let colony = b.build().unwrap();
/// assert_eq!(colony.room_count(), 3);
/// assert_eq!(colony.tunnel_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ColonyBuilder {
    names:      Vec<String>,
    coords:     Vec<Option<(i64, i64)>>,
    name_index: FxHashMap<String, RoomId>,
    entry:      Option<String>,
    exit:       Option<String>,
    links:      Vec<(String, String)>,
}

impl ColonyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of rooms and links.
    pub fn with_capacity(rooms: usize, links: usize) -> Self {
        Self {
            names:      Vec::with_capacity(rooms),
            coords:     Vec::with_capacity(rooms),
            name_index: FxHashMap::with_capacity_and_hasher(rooms, Default::default()),
            links:      Vec::with_capacity(links),
            ..Self::default()
        }
    }

    /// Add a room and return its `RoomId` (sequential from 0).
    pub fn add_room(
        &mut self,
        name: impl Into<String>,
        coords: Option<(i64, i64)>,
    ) -> ColonyResult<RoomId> {
        let name = name.into();
        if self.name_index.contains_key(&name) {
            return Err(ColonyError::DuplicateRoom(name));
        }
        let id = RoomId::from_index(self.names.len());
        self.name_index.insert(name.clone(), id);
        self.names.push(name);
        self.coords.push(coords);
        Ok(id)
    }

    pub fn set_entry(&mut self, name: impl Into<String>) {
        self.entry = Some(name.into());
    }

    pub fn set_exit(&mut self, name: impl Into<String>) {
        self.exit = Some(name.into());
    }

    /// Record an undirected link between two named rooms.
    pub fn add_link(&mut self, a: impl Into<String>, b: impl Into<String>) {
        self.links.push((a.into(), b.into()));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_index.contains_key(name)
    }

    pub fn room_count(&self) -> usize { self.names.len() }
    pub fn link_count(&self) -> usize { self.links.len() }

    /// Validate and consume the builder.
    ///
    /// Fails on the first problem found, checking terminals before links and
    /// links in insertion order.  Duplicate links (in either orientation) are
    /// collapsed onto the first occurrence.
    pub fn build(self) -> ColonyResult<Colony> {
        let entry = self.resolve_terminal(self.entry.as_deref(), "start")?;
        let exit  = self.resolve_terminal(self.exit.as_deref(), "end")?;
        if entry == exit {
            return Err(ColonyError::EntryIsExit(self.names[entry.index()].clone()));
        }

        // ── Resolve links into per-room ordered neighbour lists ───────────
        let room_count = self.names.len();
        let mut lists: Vec<Vec<(RoomId, TunnelId)>> = vec![Vec::new(); room_count];
        let mut seen: FxHashSet<(RoomId, RoomId)> = FxHashSet::default();
        let mut tunnel_ends: Vec<(RoomId, RoomId)> = Vec::new();

        for (a, b) in &self.links {
            let lookup = |room: &String| {
                self.name_index.get(room).copied().ok_or_else(|| ColonyError::UnknownRoom {
                    a:    a.clone(),
                    b:    b.clone(),
                    room: room.clone(),
                })
            };
            let u = lookup(a)?;
            let v = lookup(b)?;
            if u == v {
                return Err(ColonyError::SelfLoop(a.clone()));
            }
            if !seen.insert((u.min(v), u.max(v))) {
                continue;
            }
            let t = TunnelId::from_index(tunnel_ends.len());
            tunnel_ends.push((u, v));
            lists[u.index()].push((v, t));
            lists[v.index()].push((u, t));
        }

        // ── Flatten into CSR ──────────────────────────────────────────────
        let mut adj_start = Vec::with_capacity(room_count + 1);
        let mut adj_room = Vec::with_capacity(tunnel_ends.len() * 2);
        let mut adj_tunnel = Vec::with_capacity(tunnel_ends.len() * 2);
        adj_start.push(0u32);
        for list in &lists {
            for &(n, t) in list {
                adj_room.push(n);
                adj_tunnel.push(t);
            }
            adj_start.push(adj_room.len() as u32);
        }
        debug_assert_eq!(adj_room.len(), tunnel_ends.len() * 2);

        Ok(Colony {
            room_names: self.names,
            room_coords: self.coords,
            adj_start,
            adj_room,
            adj_tunnel,
            tunnel_ends,
            entry,
            exit,
            name_index: self.name_index,
        })
    }

    fn resolve_terminal(&self, name: Option<&str>, role: &'static str) -> ColonyResult<RoomId> {
        let Some(name) = name else {
            return Err(if role == "start" { ColonyError::MissingEntry } else { ColonyError::MissingExit });
        };
        self.name_index
            .get(name)
            .copied()
            .ok_or_else(|| ColonyError::UnknownTerminal { role, room: name.to_owned() })
    }
}
