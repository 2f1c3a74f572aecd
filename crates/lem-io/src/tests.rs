//! Integration tests for lem-io.

const EXAMPLE: &str = "\
3
# a comment
##start
start 0 0
A 1 0
##end
end 2 0
start-A
A-end
";

// ── Parser ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod parser_tests {
    use std::io::Cursor;

    use lem_colony::ColonyError;

    use super::EXAMPLE;
    use crate::{load_farm_reader, parse_farm, FarmError};

    fn err(text: &str) -> FarmError {
        parse_farm(text).unwrap_err()
    }

    #[test]
    fn parses_example() {
        let farm = parse_farm(EXAMPLE).unwrap();
        assert_eq!(farm.ants, 3);
        assert_eq!(farm.colony.room_count(), 3);
        assert_eq!(farm.colony.tunnel_count(), 2);
        assert_eq!(farm.colony.room_name(farm.colony.entry()), "start");
        assert_eq!(farm.colony.room_name(farm.colony.exit()), "end");
        let a = farm.colony.room_id("A").unwrap();
        assert_eq!(farm.colony.room_coords(a), Some((1, 0)));
        assert_eq!(farm.lines.len(), 9);
        assert_eq!(farm.lines[1], "# a comment");
    }

    #[test]
    fn reader_matches_str() {
        let from_reader = load_farm_reader(Cursor::new(EXAMPLE)).unwrap();
        let from_str = parse_farm(EXAMPLE).unwrap();
        assert_eq!(from_reader.lines, from_str.lines);
        assert_eq!(from_reader.ants, from_str.ants);
    }

    #[test]
    fn unknown_commands_ignored() {
        let text = EXAMPLE.replace("# a comment", "##colour blue");
        let farm = parse_farm(&text).unwrap();
        assert_eq!(farm.lines[1], "##colour blue");
    }

    #[test]
    fn ant_count_must_be_positive() {
        assert!(matches!(err("0\n"), FarmError::InvalidAntCount { line: 1, .. }));
        assert!(matches!(err("-4\n"), FarmError::InvalidAntCount { line: 1, .. }));
        assert!(matches!(err("# c\nmany\n"), FarmError::InvalidAntCount { line: 2, .. }));
        assert!(matches!(err("##start\n3\n"), FarmError::InvalidAntCount { line: 1, .. }));
        assert!(matches!(err("# only comments\n"), FarmError::MissingAntCount));
    }

    #[test]
    fn room_line_rules() {
        assert!(matches!(err("1\nA 0\n"), FarmError::MalformedRoom { line: 2, .. }));
        assert!(matches!(err("1\nLx 0 0\n"), FarmError::ForbiddenRoomName { line: 2, .. }));
        assert!(matches!(err("1\na-b 0 0\n"), FarmError::ForbiddenRoomName { line: 2, .. }));
        assert!(matches!(err("1\nA 0 y\n"), FarmError::InvalidCoordinate { line: 2, .. }));
        assert!(matches!(
            err("1\nA 0 0\nA 1 1\n"),
            FarmError::DuplicateRoom { line: 3, .. }
        ));
        match err("1\nA 0 0\nB 0 0\n") {
            FarmError::DuplicateCoordinates { line, name, other, .. } => {
                assert_eq!((line, name.as_str(), other.as_str()), (3, "B", "A"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn negative_coordinates_accepted() {
        let text = EXAMPLE.replace("A 1 0", "A -1 -7");
        let farm = parse_farm(&text).unwrap();
        let a = farm.colony.room_id("A").unwrap();
        assert_eq!(farm.colony.room_coords(a), Some((-1, -7)));
    }

    #[test]
    fn terminal_commands() {
        let twice = "1\n##start\na 0 0\n##start\nb 1 1\n##end\nc 2 2\na-c\n";
        assert!(matches!(
            err(twice),
            FarmError::DuplicateTerminal { line: 5, role: "start", .. }
        ));

        let before_link = "1\n##start\na 0 0\n##end\na-b\n";
        assert!(matches!(
            err(before_link),
            FarmError::DanglingCommand { line: 4, role: "end" }
        ));

        let at_eof = "1\n##start\na 0 0\n##end\n";
        assert!(matches!(
            err(at_eof),
            FarmError::DanglingCommand { line: 4, role: "end" }
        ));

        let stacked = "1\n##start\n##end\na 0 0\n";
        assert!(matches!(
            err(stacked),
            FarmError::DanglingCommand { line: 2, role: "start" }
        ));

        let no_end = "1\n##start\na 0 0\nb 1 1\na-b\n";
        assert!(matches!(err(no_end), FarmError::Colony(ColonyError::MissingExit)));
    }

    #[test]
    fn link_rules() {
        let no_links = EXAMPLE.replace("start-A\nA-end\n", "");
        assert!(matches!(err(&no_links), FarmError::NoLinks));

        let malformed = EXAMPLE.replace("A-end", "A-end-start");
        assert!(matches!(err(&malformed), FarmError::MalformedLink { line: 9, .. }));

        let unknown = EXAMPLE.replace("A-end", "A-nowhere");
        match err(&unknown) {
            FarmError::Link { line, source: ColonyError::UnknownRoom { room, .. } } => {
                assert_eq!(line, 9);
                assert_eq!(room, "nowhere");
            }
            other => panic!("unexpected {other:?}"),
        }

        let self_loop = EXAMPLE.replace("A-end", "A-A");
        assert!(matches!(
            err(&self_loop),
            FarmError::Link { line: 9, source: ColonyError::SelfLoop(_) }
        ));
    }

    #[test]
    fn error_messages_carry_line() {
        let msg = err("1\nA 0 0\nA 1 1\n").to_string();
        assert!(msg.starts_with("line 3:"), "{msg}");
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = crate::load_farm(std::path::Path::new("/nonexistent/farm.txt"));
        assert!(matches!(result, Err(FarmError::Io(_))));
    }
}

// ── Text output ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod format_tests {
    use lem_sim::{NoopObserver, SolverBuilder};

    use super::EXAMPLE;
    use crate::{parse_farm, render_turn, write_output};

    #[test]
    fn echoes_input_then_moves() {
        let farm = parse_farm(EXAMPLE).unwrap();
        let solver = SolverBuilder::new(farm.colony.clone(), farm.ants.into())
            .build()
            .unwrap();
        let log = solver.run(&mut NoopObserver).unwrap();

        let mut out = Vec::new();
        write_output(&mut out, &farm, &log).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = format!("{EXAMPLE}\nL1-A\nL1-end L2-A\nL2-end L3-A\nL3-end\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_turn_renders_empty() {
        let farm = parse_farm(EXAMPLE).unwrap();
        assert_eq!(render_turn(&farm.colony, &lem_core::Turn::default()), "");
    }
}

// ── CSV output ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use lem_sim::SolverBuilder;
    use tempfile::TempDir;

    use super::EXAMPLE;
    use crate::writer::MoveWriter;
    use crate::{parse_farm, write_log, CsvMoveWriter, MoveLogObserver, MoveRow};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn header_written_on_create() {
        let dir = tmp();
        let path = dir.path().join("moves.csv");
        let mut w = CsvMoveWriter::create(&path).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["turn", "ant", "room"]);
        assert_eq!(rdr.records().count(), 0);
    }

    #[test]
    fn rows_in_memory() {
        let mut w = CsvMoveWriter::from_writer(Vec::new()).unwrap();
        w.write_moves(&[
            MoveRow { turn: 1, ant: 1, room: "A".into() },
            MoveRow { turn: 2, ant: 2, room: "end".into() },
        ])
        .unwrap();
        let bytes = w.into_inner().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "turn,ant,room\n1,1,A\n2,2,end\n");
    }

    #[test]
    fn observer_streams_whole_run() {
        let farm = parse_farm(EXAMPLE).unwrap();
        let solver = SolverBuilder::new(farm.colony.clone(), farm.ants.into())
            .build()
            .unwrap();

        let dir = tmp();
        let path = dir.path().join("moves.csv");
        let writer = CsvMoveWriter::create(&path).unwrap();
        let mut obs = MoveLogObserver::new(writer, &farm.colony);
        let log = solver.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), log.move_count());
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][1], "1");
        assert_eq!(&rows[0][2], "A");
        assert_eq!(&rows[5][0], "4");
        assert_eq!(&rows[5][2], "end");
    }

    #[test]
    fn write_log_matches_observer() {
        let farm = parse_farm(EXAMPLE).unwrap();
        let solver = SolverBuilder::new(farm.colony.clone(), farm.ants.into())
            .build()
            .unwrap();

        let mut obs = MoveLogObserver::new(CsvMoveWriter::from_writer(Vec::new()).unwrap(), &farm.colony);
        let log = solver.run(&mut obs).unwrap();
        let streamed = obs.into_writer().into_inner().unwrap();

        let mut after = CsvMoveWriter::from_writer(Vec::new()).unwrap();
        write_log(&mut after, &farm.colony, &log).unwrap();
        assert_eq!(after.into_inner().unwrap(), streamed);
    }
}
