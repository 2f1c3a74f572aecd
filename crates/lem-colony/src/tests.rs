//! Unit tests for lem-colony.
//!
//! All tests use hand-crafted colonies.

#[cfg(test)]
mod helpers {
    use crate::{Colony, ColonyBuilder};

    /// Build a colony from room names and `a-b` link pairs.  The first room
    /// is the entry and the last the exit.
    pub fn colony(rooms: &[&str], links: &[(&str, &str)]) -> Colony {
        let mut b = ColonyBuilder::new();
        for (i, r) in rooms.iter().enumerate() {
            b.add_room(*r, Some((i as i64, 0))).unwrap();
        }
        b.set_entry(rooms[0]);
        b.set_exit(rooms[rooms.len() - 1]);
        for (a, c) in links {
            b.add_link(*a, *c);
        }
        b.build().unwrap()
    }

    /// Two interior-disjoint routes plus a cross link:
    ///
    /// ```text
    ///   start ── a ──────── end
    ///     │      │           │
    ///     └──── b1 ── b2 ────┘
    /// ```
    pub fn cross() -> Colony {
        colony(
            &["start", "a", "b1", "b2", "end"],
            &[("start", "a"), ("a", "end"), ("start", "b1"), ("b1", "b2"), ("b2", "end"), ("a", "b1")],
        )
    }

    pub fn names(colony: &Colony, routes: &[crate::Route]) -> Vec<Vec<String>> {
        routes
            .iter()
            .map(|r| r.names(colony).into_iter().map(str::to_owned).collect())
            .collect()
    }
}

// ── Builder & colony structure ────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use lem_core::RoomId;

    use super::helpers::colony;
    use crate::{ColonyBuilder, ColonyError};

    fn base() -> ColonyBuilder {
        let mut b = ColonyBuilder::new();
        b.add_room("start", None).unwrap();
        b.add_room("A", None).unwrap();
        b.add_room("end", None).unwrap();
        b.set_entry("start");
        b.set_exit("end");
        b
    }

    #[test]
    fn line_colony() {
        let c = colony(&["start", "A", "end"], &[("start", "A"), ("A", "end")]);
        assert_eq!(c.room_count(), 3);
        assert_eq!(c.tunnel_count(), 2);
        assert_eq!(c.entry(), RoomId(0));
        assert_eq!(c.exit(), RoomId(2));
        assert!(c.contains("A"));
        assert!(!c.contains("B"));
        assert_eq!(c.room_name(RoomId(1)), "A");
        assert_eq!(c.room_coords(RoomId(1)), Some((1, 0)));
    }

    #[test]
    fn neighbour_order_is_first_appearance() {
        let c = colony(
            &["s", "x", "y", "z", "e"],
            &[("s", "z"), ("x", "s"), ("s", "y"), ("z", "e")],
        );
        let s = c.room_id("s").unwrap();
        let names: Vec<_> = c.neighbors(s).iter().map(|&r| c.room_name(r)).collect();
        assert_eq!(names, ["z", "x", "y"]);
    }

    #[test]
    fn duplicate_links_collapse() {
        let mut b = base();
        b.add_link("start", "A");
        b.add_link("A", "start");
        b.add_link("start", "A");
        b.add_link("A", "end");
        let c = b.build().unwrap();
        assert_eq!(c.tunnel_count(), 2);
        assert_eq!(c.degree(c.entry()), 1);
    }

    #[test]
    fn tunnel_lookup_is_symmetric() {
        let c = colony(&["start", "A", "end"], &[("start", "A"), ("A", "end")]);
        let a = c.room_id("A").unwrap();
        let t1 = c.tunnel_between(c.entry(), a).unwrap();
        let t2 = c.tunnel_between(a, c.entry()).unwrap();
        assert_eq!(t1, t2);
        assert_eq!(c.tunnel_ends[t1.index()], (c.entry(), a));
        assert!(c.tunnel_between(c.entry(), c.exit()).is_none());
    }

    #[test]
    fn unknown_room_rejected() {
        let mut b = base();
        b.add_link("start", "ghost");
        let err = b.build().unwrap_err();
        assert_eq!(
            err,
            ColonyError::UnknownRoom { a: "start".into(), b: "ghost".into(), room: "ghost".into() }
        );
    }

    #[test]
    fn self_loop_rejected() {
        let mut b = base();
        b.add_link("A", "A");
        assert_eq!(b.build().unwrap_err(), ColonyError::SelfLoop("A".into()));
    }

    #[test]
    fn duplicate_room_rejected() {
        let mut b = base();
        assert_eq!(b.add_room("A", None).unwrap_err(), ColonyError::DuplicateRoom("A".into()));
    }

    #[test]
    fn terminals_validated() {
        let mut b = ColonyBuilder::new();
        b.add_room("x", None).unwrap();
        assert_eq!(b.build().unwrap_err(), ColonyError::MissingEntry);

        let mut b = ColonyBuilder::new();
        b.add_room("x", None).unwrap();
        b.set_entry("x");
        assert_eq!(b.build().unwrap_err(), ColonyError::MissingExit);

        let mut b = ColonyBuilder::new();
        b.add_room("x", None).unwrap();
        b.set_entry("x");
        b.set_exit("y");
        assert!(matches!(b.build().unwrap_err(), ColonyError::UnknownTerminal { role: "end", .. }));

        let mut b = ColonyBuilder::new();
        b.add_room("x", None).unwrap();
        b.set_entry("x");
        b.set_exit("x");
        assert_eq!(b.build().unwrap_err(), ColonyError::EntryIsExit("x".into()));
    }
}

// ── Routes ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use super::helpers::cross;
    use crate::Route;

    #[test]
    fn from_names_resolves_tunnels() {
        let c = cross();
        let r = Route::from_names(&c, &["start", "b1", "b2", "end"]).unwrap();
        assert_eq!(r.length(), 3);
        assert_eq!(r.exit(), c.exit());
        let interior: Vec<_> = r.interior().iter().collect();
        assert_eq!(
            interior,
            vec![c.room_id("b1").unwrap().index(), c.room_id("b2").unwrap().index()]
        );
        assert_eq!(r.tunnel(0), c.tunnel_between(c.entry(), c.room_id("b1").unwrap()).unwrap());
    }

    #[test]
    fn from_names_rejects_non_paths() {
        let c = cross();
        assert!(Route::from_names(&c, &["start", "b2", "end"]).is_none(), "no tunnel start-b2");
        assert!(Route::from_names(&c, &["a", "end"]).is_none(), "must begin at entry");
        assert!(Route::from_names(&c, &["start", "a"]).is_none(), "must end at exit");
        assert!(Route::from_names(&c, &["start", "a", "b1", "a", "end"]).is_none(), "repeats a room");
        assert!(Route::from_names(&c, &["start", "nope", "end"]).is_none());
    }

    #[test]
    fn disjointness_ignores_terminals() {
        let c = cross();
        let top = Route::from_names(&c, &["start", "a", "end"]).unwrap();
        let bottom = Route::from_names(&c, &["start", "b1", "b2", "end"]).unwrap();
        let zigzag = Route::from_names(&c, &["start", "a", "b1", "b2", "end"]).unwrap();
        assert!(top.is_disjoint(&bottom));
        assert!(!top.is_disjoint(&zigzag));
        assert!(!bottom.is_disjoint(&zigzag));
    }
}

// ── Enumeration ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod enumerate {
    use super::helpers::{colony, cross, names};
    use crate::{DepthFirstEnumerator, PathEnumerator};

    #[test]
    fn single_route() {
        let c = colony(&["start", "A", "end"], &[("start", "A"), ("A", "end")]);
        let routes = DepthFirstEnumerator::new().enumerate(&c);
        assert_eq!(names(&c, &routes), vec![vec!["start", "A", "end"]]);
        assert_eq!(routes[0].length(), 2);
    }

    #[test]
    fn all_simple_routes_in_discovery_order() {
        let c = cross();
        let routes = DepthFirstEnumerator::new().enumerate(&c);
        assert_eq!(
            names(&c, &routes),
            vec![
                vec!["start", "a", "end"],
                vec!["start", "a", "b1", "b2", "end"],
                vec!["start", "b1", "b2", "end"],
                vec!["start", "b1", "a", "end"],
            ]
        );
    }

    #[test]
    fn never_reenters_entry() {
        // Triangle through start: B links back to the entry.
        let c = colony(
            &["start", "A", "B", "end"],
            &[("start", "A"), ("A", "B"), ("B", "start"), ("B", "end")],
        );
        let routes = DepthFirstEnumerator::new().enumerate(&c);
        assert_eq!(
            names(&c, &routes),
            vec![vec!["start", "A", "B", "end"], vec!["start", "B", "end"]]
        );
    }

    #[test]
    fn direct_link() {
        let c = colony(&["start", "end"], &[("start", "end")]);
        let routes = DepthFirstEnumerator::new().enumerate(&c);
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].length(), 1);
        assert!(routes[0].interior().is_empty());
    }

    #[test]
    fn disconnected_is_empty() {
        let c = colony(&["start", "A", "B", "end"], &[("start", "A"), ("B", "end")]);
        assert!(DepthFirstEnumerator::new().enumerate(&c).is_empty());
    }

    #[test]
    fn max_len_prunes_long_routes() {
        let c = cross();
        let routes = DepthFirstEnumerator::with_max_len(Some(3)).enumerate(&c);
        assert_eq!(
            names(&c, &routes),
            vec![
                vec!["start", "a", "end"],
                vec!["start", "b1", "b2", "end"],
                vec!["start", "b1", "a", "end"],
            ]
        );
        assert!(DepthFirstEnumerator::with_max_len(Some(0)).enumerate(&c).is_empty());
    }

    #[test]
    fn enumeration_is_deterministic() {
        let c = cross();
        let a = DepthFirstEnumerator::new().enumerate(&c);
        let b = DepthFirstEnumerator::new().enumerate(&c);
        assert_eq!(a, b);
    }
}
