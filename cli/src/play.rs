//! Interactive play loop: rendering, command parsing, and the end-of-game
//! sweep the rules engine leaves to its caller.

use std::io::{self, BufRead, Write as _};

use anyhow::Context;
use campo_core::{
    Board, CellCount, Coord, Coord2, GameConfig, MineGenerator, RandomMineGenerator, Tile,
    TileStatus,
};

const HELP: &str = "\
commands:
  r X Y   reveal the tile at column X, row Y
  m X Y   toggle the mark on the tile at column X, row Y
  h       show this help
  q       quit";

#[derive(Copy, Clone, Debug, PartialEq)]
enum Command {
    Reveal(Coord2),
    Mark(Coord2),
    Help,
    Quit,
}

pub fn run(config: GameConfig, seed: u64) -> anyhow::Result<()> {
    tracing::info!(size = config.size, mines = config.mines, "new game");

    let mine_coords = RandomMineGenerator::new(seed).generate(config);
    let mut board = Board::from_mine_coords(config.size, &mine_coords)
        .context("generated mine layout was invalid")?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout();

    loop {
        writeln!(out, "\n{}", render(&board))?;
        writeln!(out, "Flags left: {}", flags_left(&board, config.mines))?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read input")?;

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };

        let result = match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Reveal(coords) => board.reveal(coords),
            Command::Mark(coords) => board.toggle_mark(coords, config.mines),
        };
        match result {
            Ok(next) => board = next,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        }

        // terminal outcome is derived from the board value, never stored
        if board.is_lost() {
            board = finalize_loss(board, config.mines)?;
            writeln!(out, "\n{}", render(&board))?;
            writeln!(out, "You Lose")?;
            return Ok(());
        }
        if board.is_won() {
            writeln!(out, "\n{}", render(&board))?;
            writeln!(out, "You Win")?;
            return Ok(());
        }
    }

    Ok(())
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Err("empty command, try `h` for help".to_string());
    };

    match verb {
        "q" | "quit" => Ok(Command::Quit),
        "h" | "help" | "?" => Ok(Command::Help),
        "r" | "reveal" | "m" | "mark" => {
            let x = parse_coord(parts.next())?;
            let y = parse_coord(parts.next())?;
            if parts.next().is_some() {
                return Err("too many arguments".to_string());
            }
            if matches!(verb, "r" | "reveal") {
                Ok(Command::Reveal((x, y)))
            } else {
                Ok(Command::Mark((x, y)))
            }
        }
        other => Err(format!("unknown command `{other}`, try `h` for help")),
    }
}

fn parse_coord(part: Option<&str>) -> Result<Coord, String> {
    let part = part.ok_or_else(|| "expected two coordinates".to_string())?;
    part.parse()
        .map_err(|_| format!("`{part}` is not a valid coordinate"))
}

fn render(board: &Board) -> String {
    use std::fmt::Write as _;

    let size = board.size();
    let mut out = String::new();

    out.push_str("  ");
    for x in 0..size {
        let _ = write!(out, "{x:>2}");
    }
    for y in 0..size {
        out.push('\n');
        let _ = write!(out, "{y:>2}");
        for x in 0..size {
            let _ = write!(out, " {}", tile_char(board.tile_at((x, y))));
        }
    }
    out
}

fn tile_char(tile: Tile) -> char {
    match tile.status {
        TileStatus::Hidden => '.',
        TileStatus::Marked => 'F',
        TileStatus::Mine => '*',
        // zero renders as blank
        TileStatus::Number(0) => ' ',
        TileStatus::Number(n) => (b'0' + n) as char,
    }
}

fn flags_left(board: &Board, total_mines: CellCount) -> CellCount {
    total_mines.saturating_sub(board.marked_count())
}

/// Loss presentation sweep: clear every flag, then expose every mine, going
/// through the public engine operations only.
fn finalize_loss(mut board: Board, total_mines: CellCount) -> anyhow::Result<Board> {
    let size = board.size();
    for x in 0..size {
        for y in 0..size {
            let coords = (x, y);
            if board.tile_at(coords).status == TileStatus::Marked {
                board = board.toggle_mark(coords, total_mines)?;
            }
            if board.tile_at(coords).mine {
                board = board.reveal(coords)?;
            }
        }
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord, mines: &[Coord2]) -> Board {
        Board::from_mine_coords(size, mines).unwrap()
    }

    #[test]
    fn parses_reveal_and_mark() {
        assert_eq!(parse_command("r 1 2"), Ok(Command::Reveal((1, 2))));
        assert_eq!(parse_command("reveal 0 0"), Ok(Command::Reveal((0, 0))));
        assert_eq!(parse_command("m 3 4"), Ok(Command::Mark((3, 4))));
        assert_eq!(parse_command("  mark  9  9 "), Ok(Command::Mark((9, 9))));
    }

    #[test]
    fn parses_quit_and_help() {
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("h"), Ok(Command::Help));
        assert_eq!(parse_command("?"), Ok(Command::Help));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_command("").is_err());
        assert!(parse_command("r").is_err());
        assert!(parse_command("r 1").is_err());
        assert!(parse_command("r one two").is_err());
        assert!(parse_command("r 1 2 3").is_err());
        assert!(parse_command("sweep 1 2").is_err());
    }

    #[test]
    fn renders_statuses_and_numbers() {
        let board = board(2, &[(0, 0)])
            .toggle_mark((0, 0), 1)
            .unwrap()
            .reveal((1, 1))
            .unwrap();

        let rendered = render(&board);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "   0 1");
        assert_eq!(lines[1], " 0 F .");
        assert_eq!(lines[2], " 1 . 1");
    }

    #[test]
    fn renders_zero_as_blank() {
        let board = board(2, &[]).reveal((0, 0)).unwrap();

        let lines: Vec<String> = render(&board).lines().map(str::to_string).collect();
        assert_eq!(lines[1], " 0    ");
        assert_eq!(lines[2], " 1    ");
    }

    #[test]
    fn flags_left_clamps_at_zero() {
        let board = board(2, &[(0, 0)]);
        assert_eq!(flags_left(&board, 1), 1);

        let board = board.toggle_mark((0, 0), 1).unwrap();
        assert_eq!(flags_left(&board, 1), 0);
        assert_eq!(flags_left(&board, 0), 0);
    }

    #[test]
    fn loss_sweep_clears_flags_and_exposes_mines() {
        let board = board(3, &[(0, 0), (2, 2)])
            .toggle_mark((2, 2), 2)
            .unwrap()
            .toggle_mark((1, 1), 2)
            .unwrap()
            .reveal((0, 0))
            .unwrap();
        assert!(board.is_lost());

        let swept = finalize_loss(board, 2).unwrap();

        assert_eq!(swept.tile_at((0, 0)).status, TileStatus::Mine);
        assert_eq!(swept.tile_at((2, 2)).status, TileStatus::Mine);
        assert_eq!(swept.tile_at((1, 1)).status, TileStatus::Hidden);
        assert_eq!(swept.marked_count(), 0);
    }
}
