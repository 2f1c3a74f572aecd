//! Farm description parser.
//!
//! # Text format
//!
//! ```text
//! 3              <- ant count, first non-comment line
//! ##start
//! start 0 0      <- room: name x y
//! A 1 0
//! ##end
//! end 2 0
//! start-A        <- link: a-b
//! A-end
//! ```
//!
//! | Line                  | Meaning                                        |
//! |-----------------------|------------------------------------------------|
//! | empty, `#...`         | comment, ignored                               |
//! | `##start` / `##end`   | the next line must be a room; it becomes the entry / exit |
//! | `##anything-else`     | ignored                                        |
//! | `name x y`            | room; `name` may not start with `L` or `#` nor contain `-` |
//! | `a-b`                 | undirected link between two rooms              |
//!
//! Room names and coordinates must be unique.  At least one link, one start
//! and one end are required.  Every line, comments included, is kept
//! verbatim in [`Farm::lines`] so the output can echo the input.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use lem_colony::{Colony, ColonyBuilder, ColonyError};
use lem_core::error::check_ant_count;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::{FarmError, FarmResult};

// ── Farm ──────────────────────────────────────────────────────────────────────

/// A parsed and validated farm.
#[derive(Debug, Clone)]
pub struct Farm {
    pub ants:   u32,
    pub colony: Colony,
    /// Input lines as read, without line terminators.
    pub lines:  Vec<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a farm description from a file.
pub fn load_farm(path: &Path) -> FarmResult<Farm> {
    let file = File::open(path)?;
    load_farm_reader(file)
}

/// Like [`load_farm`] but accepts any `Read` source.
pub fn load_farm_reader<R: Read>(reader: R) -> FarmResult<Farm> {
    let mut parser = FarmParser::default();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        parser.feed(i + 1, line?)?;
    }
    parser.finish()
}

/// Parse a farm description held in memory.
pub fn parse_farm(text: &str) -> FarmResult<Farm> {
    let mut parser = FarmParser::default();
    for (i, line) in text.lines().enumerate() {
        parser.feed(i + 1, line.to_owned())?;
    }
    parser.finish()
}

// ── Line-by-line state machine ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Start,
    End,
}

impl Role {
    fn name(self) -> &'static str {
        match self {
            Role::Start => "start",
            Role::End => "end",
        }
    }
}

#[derive(Default)]
struct FarmParser {
    lines:   Vec<String>,
    ants:    Option<u32>,
    builder: ColonyBuilder,
    /// Coordinates already taken, and by which room.
    coords:  FxHashMap<(i64, i64), String>,
    /// Command awaiting its room line, with the command's line number.
    pending: Option<(Role, usize)>,
    start:   Option<String>,
    end:     Option<String>,
    /// `(line, a, b)` per link, to locate colony errors.
    links:   Vec<(usize, String, String)>,
}

impl FarmParser {
    fn feed(&mut self, line: usize, raw: String) -> FarmResult<()> {
        self.parse_line(line, raw.trim())?;
        self.lines.push(raw);
        Ok(())
    }

    fn parse_line(&mut self, line: usize, text: &str) -> FarmResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        if let Some(command) = text.strip_prefix("##") {
            if self.ants.is_none() {
                return Err(invalid_ants(line, text));
            }
            return match command {
                "start" => self.command(Role::Start, line),
                "end" => self.command(Role::End, line),
                _ => {
                    trace!(line, command, "ignoring unknown command");
                    Ok(())
                }
            };
        }
        if text.starts_with('#') {
            return Ok(());
        }
        if self.ants.is_none() {
            let ants = text
                .parse::<u64>()
                .ok()
                .and_then(|n| check_ant_count(n).ok())
                .ok_or_else(|| invalid_ants(line, text))?;
            self.ants = Some(ants);
            return Ok(());
        }
        // Three fields is a room even with signed coordinates.
        if text.contains('-') && text.split_whitespace().count() != 3 {
            self.link(line, text)
        } else {
            self.room(line, text)
        }
    }

    fn command(&mut self, role: Role, line: usize) -> FarmResult<()> {
        if let Some((waiting, at)) = self.pending {
            return Err(FarmError::DanglingCommand { line: at, role: waiting.name() });
        }
        self.pending = Some((role, line));
        Ok(())
    }

    fn room(&mut self, line: usize, text: &str) -> FarmResult<()> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        let [name, x, y] = fields[..] else {
            return Err(FarmError::MalformedRoom { line, text: text.to_owned() });
        };
        if name.starts_with('L') || name.starts_with('#') || name.contains('-') {
            return Err(FarmError::ForbiddenRoomName { line, name: name.to_owned() });
        }
        let x = coordinate(line, x)?;
        let y = coordinate(line, y)?;

        if self.builder.contains(name) {
            return Err(FarmError::DuplicateRoom { line, name: name.to_owned() });
        }
        if let Some(other) = self.coords.get(&(x, y)) {
            return Err(FarmError::DuplicateCoordinates {
                line,
                name: name.to_owned(),
                other: other.clone(),
                x,
                y,
            });
        }
        self.builder.add_room(name, Some((x, y)))?;
        self.coords.insert((x, y), name.to_owned());

        if let Some((role, _)) = self.pending.take() {
            let slot = match role {
                Role::Start => &mut self.start,
                Role::End => &mut self.end,
            };
            if slot.is_some() {
                return Err(FarmError::DuplicateTerminal {
                    line,
                    role: role.name(),
                    name: name.to_owned(),
                });
            }
            *slot = Some(name.to_owned());
        }
        Ok(())
    }

    fn link(&mut self, line: usize, text: &str) -> FarmResult<()> {
        if let Some((role, at)) = self.pending {
            return Err(FarmError::DanglingCommand { line: at, role: role.name() });
        }
        let Some((a, b)) = text.split_once('-') else {
            return Err(FarmError::MalformedLink { line, text: text.to_owned() });
        };
        let (a, b) = (a.trim(), b.trim());
        if a.is_empty() || b.is_empty() || b.contains('-') {
            return Err(FarmError::MalformedLink { line, text: text.to_owned() });
        }
        self.builder.add_link(a, b);
        self.links.push((line, a.to_owned(), b.to_owned()));
        Ok(())
    }

    fn finish(mut self) -> FarmResult<Farm> {
        if let Some((role, at)) = self.pending {
            return Err(FarmError::DanglingCommand { line: at, role: role.name() });
        }
        let ants = self.ants.ok_or(FarmError::MissingAntCount)?;

        if let Some(start) = self.start.take() {
            self.builder.set_entry(start);
        }
        if let Some(end) = self.end.take() {
            self.builder.set_exit(end);
        }
        let links = std::mem::take(&mut self.links);
        let colony = self.builder.build().map_err(|e| locate(&links, e))?;
        if links.is_empty() {
            return Err(FarmError::NoLinks);
        }

        debug!(
            ants,
            rooms = colony.room_count(),
            tunnels = colony.tunnel_count(),
            lines = self.lines.len(),
            "farm parsed"
        );
        Ok(Farm {
            ants,
            colony,
            lines: self.lines,
        })
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn invalid_ants(line: usize, text: &str) -> FarmError {
    FarmError::InvalidAntCount { line, value: text.to_owned() }
}

fn coordinate(line: usize, value: &str) -> FarmResult<i64> {
    value
        .parse()
        .map_err(|_| FarmError::InvalidCoordinate { line, value: value.to_owned() })
}

/// Attach the line of the offending link to a colony error, if it has one.
fn locate(links: &[(usize, String, String)], error: ColonyError) -> FarmError {
    let line = match &error {
        ColonyError::UnknownRoom { a, b, .. } => links
            .iter()
            .find(|(_, la, lb)| la == a && lb == b)
            .map(|&(line, ..)| line),
        ColonyError::SelfLoop(room) => links
            .iter()
            .find(|(_, la, lb)| la == room && lb == room)
            .map(|&(line, ..)| line),
        _ => None,
    };
    match line {
        Some(line) => FarmError::Link { line, source: error },
        None => FarmError::Colony(error),
    }
}
