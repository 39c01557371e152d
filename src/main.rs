use draughts::draughts_board::notation::{parse_move, INITIAL_POSITION};
use draughts::draughts_board::{DraughtsBoard, NotationError, NullReporter};
use draughts::draughts_boards::perft::{perft, perft_hashed};
use draughts::game::Game;
use draughts::ui::run_terminal_game;
use std::collections::HashMap;
use std::process::ExitCode;
use std::time::Instant;

use clap::arg;
use clap::command;
use clap::Command;

use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

use thiserror::Error;
use tracing::{error, Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error("Illegal move: {0}")]
    IllegalMove(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn main() -> ExitCode {
    let matches = command!()
        .version("v0.1.0")
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Turn debugging information on"
        ))
        .subcommand(
            Command::new("play")
                .about("Play a game in the terminal")
                .arg(arg!(--light <NAME> "Name of the light player").default_value("Light"))
                .arg(arg!(--dark <NAME> "Name of the dark player").default_value("Dark"))
                .arg(arg!(-p --position <POSITION> "Board position").default_value(INITIAL_POSITION)),
        )
        .subcommand(Command::new("benchmark").about("Runs a perft benchmark"))
        .subcommand(
            Command::new("perft")
                .about("Run Perft test")
                .arg(arg!(-p --position <POSITION> "Board position").default_value(INITIAL_POSITION))
                .arg(
                    arg!(
                    -x --depth <d> "depth"
                            )
                    .default_value("5")
                    .value_parser(clap::value_parser!(u8).range(1..)),
                )
                .arg(
                    arg!(
                    -m --moves <moves> "List of moves"
                            )
                    .num_args(1..)
                    .value_parser(clap::value_parser!(String)),
                ),
        )
        .get_matches();

    // stdout belongs to the board and the game dialogue
    let subscriber = log_subscriber(matches.get_flag("debug"), std::io::stderr);
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Could not install logging: {}", e);
    }

    let result = match matches.subcommand() {
        Some(("benchmark", _)) => {
            benchmark();
            Ok(())
        }
        Some(("play", arg_matches)) => {
            let light = arg_matches.get_one::<String>("light").map_or("Light", |s| s.as_str());
            let dark = arg_matches.get_one::<String>("dark").map_or("Dark", |s| s.as_str());
            let position = arg_matches
                .get_one::<String>("position")
                .map_or(INITIAL_POSITION, |s| s.as_str());
            play(light, dark, position)
        }
        Some(("perft", arg_matches)) => {
            let position = arg_matches
                .get_one::<String>("position")
                .map_or(INITIAL_POSITION, |s| s.as_str());
            let depth = arg_matches.get_one::<u8>("depth").copied().unwrap_or(5);
            let moves = arg_matches
                .get_many::<String>("moves")
                .unwrap_or_default()
                .filter(|&v| !v.is_empty())
                .collect::<Vec<_>>();
            run_perft(position, moves, depth)
        }
        None => play("Light", "Dark", INITIAL_POSITION),
        _ => unreachable!("Exhausted list of subcommands"),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn log_subscriber<W>(debug: bool, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let max_level = if debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(writer)
        .finish()
}

fn play(light: &str, dark: &str, position: &str) -> Result<(), CliError> {
    let mut game = Game::from_position(light, dark, position)?;
    run_terminal_game(&mut game)?;
    Ok(())
}

#[derive(Tabled)]
struct BenchmarkRow {
    ply: u8,
    node_count: u64,
    elapsed_time: f32,
    knodes_per_sec: f32,
    hashed_elapsed_time: f32,
}

fn benchmark() {
    let board = DraughtsBoard::initial();
    let mut table_rows = Vec::new();
    for depth in 1..=12 {
        let start_time = Instant::now();
        let node_count = perft(&board, depth);
        let elapsed = start_time.elapsed();

        let start_time = Instant::now();
        let hashed_count = perft_hashed(&board, depth, &mut HashMap::new());
        let hashed_elapsed = start_time.elapsed();
        if hashed_count != node_count {
            error!(depth, node_count, hashed_count, "hashed perft disagrees");
        }

        table_rows.push(BenchmarkRow {
            ply: depth,
            node_count,
            elapsed_time: elapsed.as_secs_f32(),
            knodes_per_sec: node_count as f32 / elapsed.as_secs_f32().max(f32::EPSILON) / 1000f32,
            hashed_elapsed_time: hashed_elapsed.as_secs_f32(),
        });
        if elapsed.as_secs() > 10 {
            break;
        }
    }
    println!("{}", Table::new(table_rows).with(Style::modern()));
}

fn run_perft(position: &str, moves: Vec<&String>, depth: u8) -> Result<(), CliError> {
    println!("Perft test for {} moves {:?} with depth {}", position, moves, depth);
    let mut board = DraughtsBoard::from_position(position)?;
    for m in moves {
        let (from, to) = parse_move(m)?;
        match board.classify_move(from, to).legal() {
            Some(mv) => {
                board.apply(mv, &mut NullReporter);
            }
            None => return Err(CliError::IllegalMove(m.clone())),
        }
    }

    let mut result_moves = Vec::<(String, u64)>::new();
    for mv in board.generate_legal_moves() {
        let mut new_board = board.clone();
        new_board.apply(mv, &mut NullReporter);
        result_moves.push((mv.as_algebraic(), perft(&new_board, depth - 1)));
    }
    result_moves.sort();

    let mut num_nodes = 0;
    for (m, c) in result_moves {
        println!("{}: {}", m, c);
        num_nodes += c;
    }
    println!("\nNodes searched: {}", num_nodes);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use draughts::ui::run_session;
    use std::io::{self, Cursor, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_logs_stay_out_of_game_output() {
        let logs = LogBuffer::default();
        let writer = {
            let logs = logs.clone();
            move || logs.clone()
        };
        let mut output = Vec::new();
        tracing::subscriber::with_default(log_subscriber(false, writer), || {
            let mut game = Game::new("Alice", "Bob");
            run_session(&mut game, Cursor::new("c3 d4\n"), &mut output).unwrap();
        });

        let output = String::from_utf8(output).unwrap();
        let logs = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Bob's Turn (1)"));
        assert!(!output.contains("turn changed"));
        assert!(logs.contains("turn changed"));
    }
}
