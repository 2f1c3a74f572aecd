//! Text rendering of a move log.
//!
//! Each turn becomes one line of space-separated `L<ant>-<room>` tokens in
//! ascending ant order.  The full output echoes the farm lines first,
//! followed by a blank line.

use std::io::{self, Write};

use lem_colony::Colony;
use lem_core::{MoveLog, Turn};

use crate::Farm;

/// One turn as a single output line, without the trailing newline.
pub fn render_turn(colony: &Colony, turn: &Turn) -> String {
    let mut line = String::new();
    for (i, m) in turn.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(&format!("{}-{}", m.ant, colony.room_name(m.room)));
    }
    line
}

/// Write one line per turn.
pub fn write_moves<W: Write>(out: &mut W, colony: &Colony, log: &MoveLog) -> io::Result<()> {
    for turn in log.iter() {
        writeln!(out, "{}", render_turn(colony, turn))?;
    }
    Ok(())
}

/// Echo the farm description, then a blank line, then the moves.
pub fn write_output<W: Write>(out: &mut W, farm: &Farm, log: &MoveLog) -> io::Result<()> {
    for line in &farm.lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    write_moves(out, &farm.colony, log)
}
