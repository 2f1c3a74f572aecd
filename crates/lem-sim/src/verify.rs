//! Replay a move log against its plan and report the first broken rule.
//!
//! The replay checks, turn by turn:
//!
//! - every turn moves at least one ant, lists ants in ascending id order and
//!   moves each ant at most once;
//! - each move steps an unfinished ant to the next room of its own route;
//! - no tunnel is crossed twice in one turn, in either direction;
//! - no room other than the exit is entered twice in one turn;
//! - at the end of a turn no room other than entry and exit holds two ants.
//!
//! After the last turn every ant must stand in the exit and the number of
//! turns must equal the plan's predicted makespan.

use lem_colony::Colony;
use lem_core::{AntId, BitSet, MoveLog};
use lem_plan::Plan;

use crate::state::initial_states;
use crate::{SimError, SimResult};

/// Check `log` against `plan` over `colony`.
///
/// # Errors
/// [`SimError::Violation`] describing the first rule broken, with the
/// 1-based turn it happened in.  Whole-log checks report the last turn.
pub fn check_move_log(colony: &Colony, plan: &Plan, log: &MoveLog) -> SimResult<()> {
    let entry = colony.entry();
    let exit  = colony.exit();

    let mut ants = initial_states(&plan.assignment);

    for (t, turn) in log.iter().enumerate() {
        let turn_no = t + 1;
        if turn.is_empty() {
            return Err(violation(turn_no, "no ant moved".to_owned()));
        }

        let mut entered = BitSet::with_capacity(colony.room_count());
        let mut crossed = BitSet::with_capacity(colony.tunnel_count());
        let mut previous: Option<AntId> = None;

        for m in turn {
            if previous.is_some_and(|p| p >= m.ant) {
                return Err(violation(
                    turn_no,
                    format!("{} is listed out of order or twice", m.ant),
                ));
            }
            previous = Some(m.ant);

            let Ok(slot) = ants.binary_search_by_key(&m.ant, |a| a.ant) else {
                return Err(violation(turn_no, format!("{} was never assigned", m.ant)));
            };
            let ant = &mut ants[slot];
            if ant.finished {
                return Err(violation(
                    turn_no,
                    format!("{} moved after reaching the exit", m.ant),
                ));
            }

            let route = plan.routes.get(ant.route);
            let expected = route.room(ant.position + 1);
            if m.room != expected {
                return Err(violation(
                    turn_no,
                    format!(
                        "{} entered {} but its route continues to {}",
                        m.ant,
                        colony.room_name(m.room),
                        colony.room_name(expected),
                    ),
                ));
            }

            let tunnel = route.tunnel(ant.position);
            if !crossed.insert(tunnel.index()) {
                return Err(violation(
                    turn_no,
                    format!(
                        "tunnel {}-{} crossed twice",
                        colony.room_name(ant.room(route)),
                        colony.room_name(m.room),
                    ),
                ));
            }
            if m.room != exit && !entered.insert(m.room.index()) {
                return Err(violation(
                    turn_no,
                    format!("room {} entered twice", colony.room_name(m.room)),
                ));
            }

            ant.position += 1;
            ant.finished = m.room == exit;
        }

        let mut occupied = BitSet::with_capacity(colony.room_count());
        for ant in ants.iter().filter(|a| !a.finished) {
            let room = ant.room(plan.routes.get(ant.route));
            if room != entry && !occupied.insert(room.index()) {
                return Err(violation(
                    turn_no,
                    format!("room {} holds more than one ant", colony.room_name(room)),
                ));
            }
        }
    }

    let turns = log.makespan();
    let stranded = ants.iter().filter(|a| !a.finished).count();
    if stranded > 0 {
        return Err(violation(turns, format!("{stranded} ants never reached the exit")));
    }
    if turns != plan.makespan {
        return Err(violation(
            turns,
            format!("took {turns} turns, plan predicted {}", plan.makespan),
        ));
    }
    Ok(())
}

fn violation(turn: usize, detail: String) -> SimError {
    SimError::Violation { turn, detail }
}
