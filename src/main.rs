//! Terminal front end: a line-oriented game loop over `ChessGame`.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use parlor_chess::engines::difficulty::Difficulty;
use parlor_chess::engines::engine_minimax::MinimaxEngine;
use parlor_chess::game_state::chess_game::ChessGame;
use parlor_chess::game_state::chess_types::Color;
use parlor_chess::move_generation::legal_move_generator::GameStatus;
use parlor_chess::utils::render_game_state::render_game_state;

#[derive(Parser)]
#[command(name = "parlor_chess")]
#[command(about = "Play chess against an alpha-beta engine in the terminal", long_about = None)]
struct Args {
    /// Engine strength: beginner, intermediate or advanced
    #[arg(short, long, default_value = "intermediate")]
    level: String,

    /// Start from this FEN instead of the standard position
    #[arg(short, long)]
    fen: Option<String>,

    /// Which side(s) the human plays; `none` lets the engine play itself
    #[arg(long, value_enum, default_value_t = HumanSide::White)]
    human: HumanSide,

    /// Stop an engine-only game after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Log at debug level regardless of RUST_LOG
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HumanSide {
    White,
    Black,
    Both,
    None,
}

impl HumanSide {
    fn controls(self, color: Color) -> bool {
        match self {
            HumanSide::White => color == Color::White,
            HumanSide::Black => color == Color::Black,
            HumanSide::Both => true,
            HumanSide::None => false,
        }
    }
}

const HELP: &str = "commands: <move> (e.g. e2e4, e7e8q) | undo | redo | moves | fen | board | go | level <name> | new | help | quit";

struct Session {
    game: ChessGame,
    engine: MinimaxEngine,
    difficulty: Difficulty,
    human: HumanSide,
    start_fen: Option<String>,
}

impl Session {
    fn print_board(&self) {
        println!("{}", render_game_state(self.game.current_board()));
    }

    fn engine_move(&mut self) {
        let output = self.game.ask_engine(&mut self.engine);
        let Some(mv) = output.best_move else {
            println!("engine has no move");
            return;
        };

        match self.game.apply_move(mv) {
            Ok(applied) => {
                match output.search {
                    Some(search) => println!(
                        "engine ({}) plays {} [score {:+.2}, {} nodes, {:.2?}{}]",
                        self.difficulty,
                        applied.notation(),
                        f64::from(search.best_score) / 100.0,
                        search.nodes,
                        search.elapsed,
                        if search.timed_out { ", out of time" } else { "" }
                    ),
                    None => println!("engine plays {}", applied.notation()),
                }
                self.print_board();
            }
            Err(err) => log::error!("engine produced a rejected move: {err}"),
        }
    }

    /// Steps back until a human is to move, so the engine does not replay
    /// the move that was just taken back.
    fn undo(&mut self) {
        match self.game.undo_last_move() {
            Some(mv) => println!("undid {}", mv.notation()),
            None => {
                println!("nothing to undo");
                return;
            }
        }
        if self.human != HumanSide::None && !self.human.controls(self.game.side_to_move()) {
            if let Some(mv) = self.game.undo_last_move() {
                println!("undid {}", mv.notation());
            }
        }
        self.print_board();
    }

    fn redo(&mut self) {
        match self.game.redo_move() {
            Some(mv) => println!("redid {}", mv.notation()),
            None => {
                println!("nothing to redo");
                return;
            }
        }
        if self.human != HumanSide::None && !self.human.controls(self.game.side_to_move()) {
            if let Some(mv) = self.game.redo_move() {
                println!("redid {}", mv.notation());
            }
        }
        self.print_board();
    }

    fn new_game(&mut self) {
        let reloaded = match &self.start_fen {
            Some(fen) => self.game.load_fen(fen),
            None => {
                self.game.reset();
                Ok(())
            }
        };
        if let Err(err) = reloaded {
            println!("{err}");
        }
        self.print_board();
    }

    fn set_level(&mut self, name: &str) {
        match name.parse::<Difficulty>() {
            Ok(difficulty) => {
                self.difficulty = difficulty;
                self.engine = MinimaxEngine::new(difficulty);
                println!("level set to {difficulty}");
            }
            Err(err) => println!("{err}"),
        }
    }

    fn list_moves(&mut self) {
        let moves: Vec<String> = self
            .game
            .legal_moves()
            .iter()
            .map(|mv| mv.to_string())
            .collect();
        println!("{} legal: {}", moves.len(), moves.join(" "));
    }

    /// Returns `false` when the user asked to quit.
    fn handle(&mut self, line: &str) -> bool {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return true;
        };

        match command {
            "quit" | "exit" => return false,
            "help" => println!("{HELP}"),
            "undo" => self.undo(),
            "redo" => self.redo(),
            "moves" => self.list_moves(),
            "fen" => println!("{}", self.game.to_fen()),
            "board" => self.print_board(),
            "new" => self.new_game(),
            "go" => {
                if self.game.is_game_over() {
                    println!("the game is over");
                } else {
                    self.engine_move();
                }
            }
            "level" => match words.next() {
                Some(name) => self.set_level(name),
                None => println!("current level: {}", self.difficulty),
            },
            text => match self.game.apply_long_algebraic(text) {
                Ok(_) => self.print_board(),
                Err(err) => println!("{err}"),
            },
        }
        true
    }

    fn announce_status(&mut self) {
        match self.game.game_status() {
            GameStatus::Check => println!("{} is in check", self.game.side_to_move()),
            GameStatus::Checkmate => println!(
                "checkmate, {} wins",
                self.game.side_to_move().opposite()
            ),
            GameStatus::Stalemate => println!("stalemate, draw"),
            GameStatus::Ongoing => {}
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let difficulty = Difficulty::from_name_or_default(Some(&args.level));
    let game = match &args.fen {
        Some(fen) => ChessGame::from_fen(fen)?,
        None => ChessGame::new(),
    };

    let mut session = Session {
        game,
        engine: MinimaxEngine::new(difficulty),
        difficulty,
        human: args.human,
        start_fen: args.fen.clone(),
    };

    session.print_board();
    if args.human != HumanSide::None {
        println!("{HELP}");
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        session.announce_status();
        let game_over = session.game.is_game_over();
        let mover = session.game.side_to_move();

        if args.human == HumanSide::None {
            if game_over {
                break;
            }
            if session.game.current_board().ply() >= args.max_plies {
                println!("stopping after {} plies", args.max_plies);
                break;
            }
            session.engine_move();
            continue;
        }

        if !game_over && !args.human.controls(mover) {
            session.engine_move();
            continue;
        }

        print!("{mover}> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        if !session.handle(line?.trim()) {
            break;
        }
    }

    println!("{}", session.game.to_fen());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
