use crate::draughts_boards::draughts_board::notation::parse_move;
use crate::draughts_boards::draughts_board::MoveType;
use crate::game::Game;
use std::io::{self, stdin, stdout, BufRead, Write};

const HELP: &str = "\
Commands:
  <from> <to>   move or capture, e.g. \"c3 d4\", \"c3-d4\" or \"e3xc5\"
  moves         list the moves you may play
  d             show the board
  new           start a new game
  leaderboard   show the best wins, or one player's with a name
  quit          leave the game";

/// Plays a game on stdin/stdout.
pub fn run_terminal_game(game: &mut Game) -> io::Result<()> {
    run_session(game, stdin().lock(), &mut stdout())
}

/// Reads commands line by line until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(game: &mut Game, input: R, output: &mut W) -> io::Result<()> {
    render(game, output)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens[0] {
            "quit" => return Ok(()),
            "help" => writeln!(output, "{}", HELP)?,
            "d" => render(game, output)?,
            "moves" => {
                let mut hints: Vec<String> = game.hints().iter().map(|m| m.as_algebraic()).collect();
                hints.sort();
                if hints.is_empty() {
                    writeln!(output, "No moves left")?;
                } else {
                    writeln!(output, "{}", hints.join(" "))?;
                }
            }
            "new" => {
                game.new_game();
                render(game, output)?;
            }
            "leaderboard" if tokens.len() > 1 => {
                let name = tokens[1..].join(" ");
                match game.leaderboard().score(&name) {
                    Some(score) => writeln!(output, "{}: best win in {} moves", name, score)?,
                    None => writeln!(output, "{} has not won yet", name)?,
                }
            }
            "leaderboard" => {
                if game.leaderboard().is_empty() {
                    writeln!(output, "No games won yet")?;
                } else {
                    writeln!(output, "{}", game.leaderboard().render_table())?;
                }
            }
            _ => match parse_move(line) {
                Ok((from, to)) => match game.play(from, to) {
                    MoveType::IllegalMove => writeln!(output, "Illegal move: {}", line)?,
                    _ => {
                        render(game, output)?;
                        if let Some(piece) = game.selected() {
                            writeln!(output, "Capture again with {}", piece.as_algebraic())?;
                        }
                    }
                },
                Err(e) => writeln!(output, "Error parsing move: {}", e)?,
            },
        }
        output.flush()?;
    }
    Ok(())
}

fn render<W: Write>(game: &Game, output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", game.board().render_to_string())?;
    writeln!(output, "{}", game.status())
}
