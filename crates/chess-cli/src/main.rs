//! 端末で二人対局を行うフロントエンド

mod config;
mod input;
mod render;
mod storage;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use chess_core::{Color, Game, GameStatus, PromotionKind};
use clap::Parser;

use config::{Config, Overrides};
use input::{Command, parse_command, parse_promotion};

#[derive(Parser, Debug)]
#[command(name = "chess")]
#[command(about = "Two-player chess in the terminal")]
struct Args {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where `save` writes the paused game (default: output/pause.json)
    #[arg(long)]
    save_path: Option<PathBuf>,

    /// Resume the game stored at the save path
    #[arg(long)]
    resume: bool,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

/// 対局ループの終わり方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ending {
    Checkmate { winner: Color },
    Saved,
    Quit,
    EndOfInput,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = Config::resolve(
        args.config.as_deref(),
        Overrides {
            save_path: args.save_path,
            no_color: args.no_color,
        },
    )?;
    log::debug!("config: {config:?}");

    let game = if args.resume {
        storage::load(&config.save_path)?
    } else {
        Game::new()
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(game, &config, stdin.lock(), stdout.lock())? {
        Ending::Checkmate { winner } => log::info!("game over, {winner} won"),
        Ending::Saved => log::info!("game paused at {}", config.save_path.display()),
        Ending::Quit | Ending::EndOfInput => log::info!("game abandoned"),
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

/// 有効な昇格先が入力されるまで尋ねる。入力が尽きたら None
fn ask_promotion<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<PromotionKind>> {
    loop {
        write!(out, "promote to (q/n/b/r)> ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse_promotion(&line) {
            Ok(kind) => return Ok(Some(kind)),
            Err(e) => writeln!(out, "{e}")?,
        }
    }
}

fn run<R: BufRead, W: Write>(
    mut game: Game,
    config: &Config,
    mut input: R,
    mut out: W,
) -> Result<Ending> {
    loop {
        write!(out, "{}", render::render(game.board(), config.color))?;
        write!(out, "{} to move> ", game.turn())?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            return Ok(Ending::EndOfInput);
        };
        let (from, to) = match parse_command(&line) {
            Ok(Command::Move { from, to }) => (from, to),
            Ok(Command::Save) => {
                storage::save(&config.save_path, &game)?;
                writeln!(out, "game saved to {}", config.save_path.display())?;
                return Ok(Ending::Saved);
            }
            Ok(Command::Quit) => return Ok(Ending::Quit),
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        let promotion = if game.needs_promotion(from, to) {
            match ask_promotion(&mut input, &mut out)? {
                Some(kind) => Some(kind),
                None => return Ok(Ending::EndOfInput),
            }
        } else {
            None
        };

        match game.play(from, to, promotion) {
            Ok(outcome) => match outcome.status {
                GameStatus::Checkmate { winner } => {
                    write!(out, "{}", render::render(game.board(), config.color))?;
                    writeln!(out, "checkmate, {winner} wins")?;
                    storage::remove(&config.save_path)?;
                    return Ok(Ending::Checkmate { winner });
                }
                GameStatus::Check(color) => writeln!(out, "{color} is in check")?,
                GameStatus::Ongoing => {}
            },
            Err(e) => writeln!(out, "{e}")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn test_config(name: &str) -> Config {
        Config {
            save_path: std::env::temp_dir()
                .join(format!("chess-cli-run-{}", std::process::id()))
                .join(name),
            color: false,
        }
    }

    fn run_script(config: &Config, script: &str) -> (Ending, String) {
        let mut out = Vec::new();
        let ending = run(Game::new(), config, Cursor::new(script), &mut out).unwrap();
        (ending, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_fools_mate_session() {
        let config = test_config("fools.json");
        let (ending, out) = run_script(&config, "6 5 5 5\n1 4 3 4\n6 6 4 6\n0 3 4 7\n");
        assert_eq!(
            ending,
            Ending::Checkmate {
                winner: Color::Black
            }
        );
        assert!(out.contains("checkmate, black wins"));
    }

    #[test]
    fn test_rejected_input_reprompts() {
        let config = test_config("reprompt.json");
        let (ending, out) = run_script(&config, "hello\n4 4 3 4\n1 0 2 0\n9 9 9 9\nquit\n");
        assert_eq!(ending, Ending::Quit);
        assert!(out.contains("expected 4 numbers"));
        assert!(out.contains("no piece on the source square"));
        assert!(out.contains("side not on move"));
        assert!(out.contains("out of range"));
        assert_eq!(out.matches("white to move").count(), 5);
    }

    #[test]
    fn test_promotion_prompt_until_valid() {
        use chess_core::{Board, PieceKind, Square};

        let mut board = Board::empty();
        board.place(Square::new(1, 2), Color::White, PieceKind::Pawn);
        board.place(Square::new(7, 4), Color::White, PieceKind::King);
        board.place(Square::new(0, 7), Color::Black, PieceKind::King);
        let config = test_config("promotion.json");
        let mut out = Vec::new();
        let ending = run(
            Game::from_parts(board, Color::White),
            &config,
            Cursor::new("1 2 0 2\nking\nq\nquit\n"),
            &mut out,
        )
        .unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(ending, Ending::Quit);
        assert_eq!(out.matches("promote to").count(), 2);
        assert!(out.contains("invalid promotion choice"));
        assert!(out.contains("black is in check"));
        assert!(out.contains("0  .  .  ♕  .  .  .  .  ♚ "));
    }

    #[test]
    fn test_no_promotion_prompt_for_pinned_pawn() {
        use chess_core::{Board, PieceKind, Square};

        let mut board = Board::empty();
        board.place(Square::new(1, 4), Color::White, PieceKind::King);
        board.place(Square::new(1, 5), Color::White, PieceKind::Pawn);
        board.place(Square::new(1, 7), Color::Black, PieceKind::Rook);
        board.place(Square::new(7, 0), Color::Black, PieceKind::King);
        let config = test_config("pinned.json");
        let mut out = Vec::new();
        let ending = run(
            Game::from_parts(board, Color::White),
            &config,
            Cursor::new("1 5 0 5\nquit\n"),
            &mut out,
        )
        .unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(ending, Ending::Quit);
        assert!(!out.contains("promote to"));
        assert!(out.contains("leaves the king in check"));
    }

    #[test]
    fn test_save_then_resume() {
        let config = test_config("save.json");
        let (ending, _) = run_script(&config, "6 4 4 4\nsave\n");
        assert_eq!(ending, Ending::Saved);

        let resumed = storage::load(&config.save_path).unwrap();
        assert_eq!(resumed.turn(), Color::Black);
        let mut out = Vec::new();
        let ending = run(resumed, &config, Cursor::new(""), &mut out).unwrap();
        assert_eq!(ending, Ending::EndOfInput);
        assert!(String::from_utf8(out).unwrap().contains("black to move"));
        storage::remove(&config.save_path).unwrap();
    }
}
