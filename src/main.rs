use std::io::{self, BufRead, Write};
use std::time::Instant;

use clap::Parser;
use fifteen_puzzle::config::{
    DEFAULT_ITERATIONS, DEFAULT_SEED, IDA_MAX_THRESHOLD, IDS_MAX_DEPTH, MAX_DEPTH,
};
use fifteen_puzzle::render::Renderer;
use fifteen_puzzle::{solve, Board, Error, SearchConfig, Strategy};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fifteen", version, about = "Solve the 15-puzzle")]
struct Cli {
    /// Start position as 16 hex symbols, row by row, 0 for the blank.
    /// Omit to read positions from stdin.
    #[arg(value_name = "BOARD")]
    board: Option<String>,

    /// Search algorithm
    #[arg(short, long, value_enum, default_value_t = Strategy::AStar)]
    strategy: Strategy,

    /// Depth cap for DFS
    #[arg(long, default_value_t = MAX_DEPTH)]
    max_depth: u32,

    /// Deepest limit tried by IDS
    #[arg(long, default_value_t = IDS_MAX_DEPTH)]
    ids_max_depth: u32,

    /// Largest f threshold tried by IDA*
    #[arg(long, default_value_t = IDA_MAX_THRESHOLD)]
    ida_max_threshold: u32,

    /// Start from a random walk of this many moves away from the goal
    #[arg(long, conflicts_with_all = ["board", "shuffle"])]
    scramble: Option<usize>,

    /// Start from a uniformly random solvable position
    #[arg(long, conflicts_with = "board")]
    shuffle: bool,

    /// Seed for --scramble and --shuffle
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Solve each position this many times and report the mean time
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS,
          value_parser = clap::value_parser!(u32).range(1..))]
    iterations: u32,

    /// Disable colours
    #[arg(long)]
    plain: bool,
}

impl Cli {
    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_depth: self.max_depth,
            ids_max_depth: self.ids_max_depth,
            ida_max_threshold: self.ida_max_threshold,
        }
    }

    fn start_board(&self) -> fifteen_puzzle::Result<Option<Board>> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        if let Some(description) = &self.board {
            return Ok(Some(description.parse()?));
        }
        if self.shuffle {
            return Ok(Some(Board::shuffled(&mut rng)));
        }
        Ok(self.scramble.map(|moves| Board::scrambled(&mut rng, moves)))
    }
}

struct Session {
    strategy: Strategy,
    config: SearchConfig,
    iterations: u32,
    renderer: Renderer,
}

impl Session {
    /// Solves `start` the configured number of times and prints the last result.
    fn run<W: Write>(&self, out: &mut W, start: Board) -> fifteen_puzzle::Result<()> {
        writeln!(out, "Start position ({}):", start)?;
        self.renderer.board(out, start)?;

        let started = Instant::now();
        let mut outcome = solve(self.strategy, start, &self.config);
        for _ in 1..self.iterations {
            outcome = solve(self.strategy, start, &self.config);
        }
        let mean_ms = started.elapsed().as_secs_f64() * 1000.0 / f64::from(self.iterations);

        let result = match outcome {
            Ok(path) => {
                writeln!(out, "{} reached the goal.", self.strategy)?;
                self.renderer.path(out, &path)?;
                Ok(())
            }
            Err(error) => {
                writeln!(out, "{}: {}", self.strategy, error)?;
                Err(error)
            }
        };

        writeln!(out, "Mean time per iteration: {:.3} ms.", mean_ms)?;
        result.map_err(Error::from)
    }

    /// Reads one position per line until end of input. Bad input and failed
    /// searches are reported without ending the session.
    fn interactive<R: BufRead, W: Write>(
        &self,
        input: R,
        out: &mut W,
    ) -> fifteen_puzzle::Result<()> {
        write!(out, "Enter start position: ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            let description = line.trim();

            if !description.is_empty() {
                match description.parse::<Board>() {
                    Ok(start) => match self.run(out, start) {
                        Ok(()) | Err(Error::Solve(_)) => {}
                        Err(error) => return Err(error),
                    },
                    Err(error) => writeln!(out, "Invalid position: {}", error)?,
                }
            }

            write!(out, "\nEnter start position: ")?;
            out.flush()?;
        }

        writeln!(out)?;
        Ok(())
    }
}

fn main() -> fifteen_puzzle::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let session = Session {
        strategy: cli.strategy,
        config: cli.search_config(),
        iterations: cli.iterations,
        renderer: Renderer::new(!cli.plain),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.start_board()? {
        Some(start) => session.run(&mut out, start),
        None => session.interactive(io::stdin().lock(), &mut out),
    }
}
