//! The `MovementScheduler` and its turn loop.

use std::cmp::Reverse;

use lem_colony::Colony;
use lem_core::{BitSet, Move, MoveLog, RoomId, Turn};
use lem_plan::{Assignment, Plan, RouteSet};
use tracing::{debug, trace};

use crate::state::{initial_states, AntState};
use crate::{SchedulerObserver, SimError, SimResult};

// ── MovementScheduler ─────────────────────────────────────────────────────────

/// Walks every assigned ant from the entry to the exit along its route.
///
/// Holds one [`AntState`] per ant (sorted by id) and a persistent queue of
/// the ants still on their way.  The queue starts in id order and is
/// stable-sorted by descending position at the start of every turn, so ants
/// at the same position keep their relative order across turns.
///
/// Room and tunnel usage are tracked in bitsets that are rebuilt each turn;
/// nothing carries over between turns except ant positions.
///
/// Create with [`MovementScheduler::new`] or [`MovementScheduler::for_plan`].
#[derive(Debug, Clone)]
pub struct MovementScheduler<'p> {
    routes:       &'p RouteSet,
    exit:         RoomId,
    room_count:   usize,
    tunnel_count: usize,
    ants:         Vec<AntState>,
    /// Indices into `ants` of unfinished ants, in move-priority order.
    queue:        Vec<usize>,
    /// Turns completed so far.
    turn:         usize,
}

impl<'p> MovementScheduler<'p> {
    /// Place every ant of `assignment` in the entry of `colony`.
    pub fn new(colony: &Colony, routes: &'p RouteSet, assignment: &Assignment) -> Self {
        let ants = initial_states(assignment);

        Self {
            routes,
            exit:         colony.exit(),
            room_count:   colony.room_count(),
            tunnel_count: colony.tunnel_count(),
            queue:        (0..ants.len()).collect(),
            ants,
            turn:         0,
        }
    }

    /// Scheduler for the routes and assignment of `plan`.
    pub fn for_plan(colony: &Colony, plan: &'p Plan) -> Self {
        Self::new(colony, &plan.routes, &plan.assignment)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Ant states, sorted by ant id.
    pub fn ants(&self) -> &[AntState] {
        &self.ants
    }

    /// Number of turns completed.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Ants that have not reached the exit yet.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn is_finished(&self) -> bool {
        self.queue.is_empty()
    }

    // ── Turn processing ───────────────────────────────────────────────────

    /// Run turns until every ant has reached the exit, returning the full log.
    ///
    /// Calls observer hooks at every turn boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SchedulerObserver>(&mut self, observer: &mut O) -> SimResult<MoveLog> {
        let mut log = MoveLog::new();
        while !self.is_finished() {
            observer.on_turn_start(self.turn + 1);
            let Some(turn) = self.step()? else {
                break;
            };
            observer.on_turn_end(self.turn, &turn);
            log.push(turn);
        }
        debug!(
            turns = log.makespan(),
            moves = log.move_count(),
            "schedule complete"
        );
        observer.on_run_end(&log);
        Ok(log)
    }

    /// Advance every ant that can move by one room.
    ///
    /// Returns `Ok(None)` once all ants have finished.
    ///
    /// # Errors
    /// [`SimError::Stalled`] if ants remain but none of them can move.
    pub fn step(&mut self) -> SimResult<Option<Turn>> {
        if self.queue.is_empty() {
            return Ok(None);
        }
        let turn_no = self.turn + 1;
        let ants = &mut self.ants;

        // Leaders first; `sort_by_key` is stable so ties keep queue order.
        self.queue.sort_by_key(|&i| Reverse(ants[i].position));

        let mut entered = BitSet::with_capacity(self.room_count);
        let mut crossed = BitSet::with_capacity(self.tunnel_count);
        let mut moves = Vec::new();

        for &i in &self.queue {
            let ant = &mut ants[i];
            let route = self.routes.get(ant.route);
            let next = route.room(ant.position + 1);
            let tunnel = route.tunnel(ant.position);

            if crossed.contains(tunnel.index()) {
                continue;
            }
            let into_exit = next == self.exit;
            if !into_exit && entered.contains(next.index()) {
                continue;
            }

            crossed.insert(tunnel.index());
            if into_exit {
                ant.finished = true;
            } else {
                entered.insert(next.index());
            }
            ant.position += 1;
            moves.push(Move { ant: ant.ant, room: next });
        }

        if moves.is_empty() {
            return Err(SimError::Stalled {
                turn:       turn_no,
                unfinished: self.queue.len(),
            });
        }

        self.queue.retain(|&i| !ants[i].finished);
        self.turn = turn_no;

        let turn = Turn::from_moves(moves);
        trace!(
            turn = turn_no,
            moves = turn.len(),
            remaining = self.queue.len(),
            "turn scheduled"
        );
        Ok(Some(turn))
    }
}
