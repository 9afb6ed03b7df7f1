use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use make_ten::game::Snapshot;
use make_ten::generator::{PuzzleGenerator, survey};
use make_ten::solver::SolverConfig;
use make_ten::arith::format_number;
use make_ten::{
    ExpressionSolver, Game, PuzzleNumbers, TARGET, TokenKind, evaluate, parse_numbers,
    parse_program,
};
use serde::Serialize;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Make Ten - combine four digits into 10
#[derive(Parser, Debug)]
#[command(name = "make-ten")]
#[command(about = "Generate, solve and check \"make 10\" arithmetic puzzles")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Seed for reproducible puzzles
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a solvable puzzle
    Generate,
    /// Find a way to make 10 from four digits
    Solve {
        /// Four digits, e.g. 1234
        digits: String,
    },
    /// Evaluate an expression such as "(3-1)*5+0" against a puzzle
    Eval {
        /// Four digits, e.g. 3150
        digits: String,
        expression: String,
    },
    /// Count solvable sequences over a digit range
    Survey {
        /// Largest digit to include
        #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(u8).range(0..=9))]
        max_digit: u8,
    },
    /// Play interactively on stdin
    Play {
        /// Start from these four digits instead of a generated puzzle
        #[arg(long)]
        numbers: Option<String>,
    },
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Command::Generate => {
            let numbers = generator(args.seed).generate_solvable();
            if args.json {
                print_json(&mut out, &numbers)?;
            } else {
                writeln!(out, "{}", format_numbers(&numbers))?;
            }
        }
        Command::Solve { digits } => {
            let numbers = parse_numbers(digits).context("Invalid digit string")?;
            info!("Searching for a way to make {} from {:?}", TARGET, numbers);
            let solution = ExpressionSolver::default().find_solution(&numbers, TARGET);
            match (solution, args.json) {
                (Some(expr), true) => print_json(&mut out, &expr.to_string())?,
                (None, true) => print_json(&mut out, &Option::<String>::None)?,
                (Some(expr), false) => writeln!(out, "{} = {}", expr, TARGET)?,
                (None, false) => {
                    warn!("No matching expression found");
                    writeln!(out, "No solution.")?;
                }
            }
        }
        Command::Eval { digits, expression } => {
            let numbers = parse_numbers(digits).context("Invalid digit string")?;
            let tokens = parse_program(expression).context("Invalid expression")?;
            check_digits(&numbers, &tokens)
                .context("Expression does not use the puzzle digits in order")?;
            let evaluation = evaluate(&tokens);
            if args.json {
                print_json(&mut out, &EvalReport::from(&evaluation))?;
            } else {
                writeln!(out, "{}", describe_evaluation(&evaluation))?;
            }
        }
        Command::Survey { max_digit } => {
            let report = survey(*max_digit, TARGET, &SolverConfig::default());
            if args.json {
                print_json(&mut out, &report)?;
            } else {
                writeln!(
                    out,
                    "{} of {} sequences can make {} ({:.2}%)",
                    report.solvable_count(),
                    report.total,
                    TARGET,
                    report.ratio() * 100.0
                )?;
            }
        }
        Command::Play { numbers } => {
            let mut game = Game::with_generator(generator(args.seed));
            if let Some(digits) = numbers {
                let numbers = parse_numbers(digits).context("Invalid digit string")?;
                game.load(numbers);
            }
            let stdin = io::stdin();
            play(&mut game, stdin.lock(), &mut out, args.json)?;
        }
    }
    Ok(())
}

fn generator(seed: Option<u64>) -> PuzzleGenerator {
    match seed {
        Some(seed) => PuzzleGenerator::with_seed(seed),
        None => PuzzleGenerator::new(),
    }
}

/// Line-oriented game loop
pub fn play<R: BufRead, W: Write>(
    game: &mut Game,
    input: R,
    out: &mut W,
    json: bool,
) -> Result<()> {
    print_snapshot(out, &game.snapshot(), json)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let parts: Vec<&str> = line.split_whitespace().collect();

        let snapshot = match parts.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["insert", position, symbol] => match position.parse::<usize>() {
                Ok(position) => game.insert_token(position, symbol),
                Err(_) => {
                    writeln!(out, "Invalid position: {}", position)?;
                    continue;
                }
            },
            ["remove", id] => game.remove_token(id),
            ["undo"] => game.undo(),
            ["reset"] => game.reset_puzzle(),
            ["new"] => game.new_puzzle(),
            ["hint"] => {
                match game.hint() {
                    Some(expr) => writeln!(out, "Hint: {}", expr)?,
                    None => writeln!(out, "No hint available.")?,
                }
                continue;
            }
            _ => {
                writeln!(
                    out,
                    "Commands: insert <pos> <op>, remove <id>, undo, reset, new, hint, quit"
                )?;
                continue;
            }
        };

        print_snapshot(out, &snapshot, json)?;
        if snapshot.is_win {
            writeln!(out, "You made {}!", TARGET)?;
        }
    }
    Ok(())
}

fn print_snapshot<W: Write>(out: &mut W, snapshot: &Snapshot, json: bool) -> Result<()> {
    if json {
        return print_json(out, snapshot);
    }

    let tokens: Vec<String> = snapshot
        .tokens
        .iter()
        .map(|token| format!("{}:{}", token.id, token.display_glyph))
        .collect();
    writeln!(out, "[{}]", tokens.join(" "))?;
    writeln!(out, "{}", describe_snapshot(snapshot))?;
    Ok(())
}

fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    let json = serde_json::to_string(value).context("Failed to serialize output")?;
    writeln!(out, "{}", json)?;
    Ok(())
}

fn format_numbers(numbers: &[f64]) -> String {
    numbers
        .iter()
        .map(|&n| format_number(n))
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe_snapshot(snapshot: &Snapshot) -> String {
    match (&snapshot.display_result, &snapshot.error_message) {
        (Some(result), _) => format!("{} = {}", snapshot.expression, result),
        (None, Some(message)) => format!("{} (invalid: {})", snapshot.expression, message),
        (None, None) => format!("{} (invalid)", snapshot.expression),
    }
}

/// Number tokens must follow the puzzle digits in order. A wrong count is left
/// to the evaluator, which reports it as a structural error.
fn check_digits(numbers: &PuzzleNumbers, tokens: &[TokenKind]) -> Result<()> {
    let used = tokens.iter().filter_map(|token| match token {
        TokenKind::Number(value) => Some(*value),
        _ => None,
    });
    for (position, (expected, found)) in numbers.iter().zip(used).enumerate() {
        ensure!(
            *expected == found,
            "number {} is {}, expected {}",
            position + 1,
            format_number(found),
            format_number(*expected)
        );
    }
    Ok(())
}

fn describe_evaluation(evaluation: &make_ten::Evaluation) -> String {
    match (evaluation.result(), evaluation.error()) {
        (Some(value), _) if evaluation.is_win() => {
            format!("{} (makes {})", format_number(value), TARGET)
        }
        (Some(value), _) => format_number(value),
        (None, Some(error)) => format!("Invalid: {}", error),
        (None, None) => "Invalid expression".to_string(),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EvalReport {
    is_valid: bool,
    error_message: Option<String>,
    numeric_result: Option<f64>,
    is_win: bool,
}

impl From<&make_ten::Evaluation> for EvalReport {
    fn from(evaluation: &make_ten::Evaluation) -> Self {
        Self {
            is_valid: evaluation.is_valid(),
            error_message: evaluation.error().map(|error| error.to_string()),
            numeric_result: evaluation.result(),
            is_win: evaluation.is_win(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_play(script: &str) -> String {
        let mut game = Game::with_seed(5);
        game.load([1.0, 2.0, 3.0, 4.0]);
        let mut out = Vec::new();
        let result = play(&mut game, Cursor::new(script), &mut out, false);
        assert!(result.is_ok());
        String::from_utf8(out).unwrap_or_default()
    }

    #[test]
    fn test_play_to_a_win() {
        let output = run_play("insert 1 +\ninsert 3 +\ninsert 5 +\nquit\n");
        assert!(output.contains("1 + 2 + 3 + 4 = 10"));
        assert!(output.contains("You made 10!"));
    }

    #[test]
    fn test_play_undo_and_errors() {
        let output = run_play("insert 0 (\nundo\ninsert x +\nbogus\n");
        assert!(output.contains("(1 2 3 4 (invalid: Parentheses are not balanced)"));
        assert!(output.contains("Invalid position: x"));
        assert!(output.contains("Commands:"));
    }

    #[test]
    fn test_play_hint() {
        let output = run_play("hint\n");
        assert!(output.contains("Hint: "));
    }

    #[test]
    fn test_describe_evaluation() {
        let win = evaluate(&parse_program("1+2+3+4").unwrap_or_default());
        assert_eq!(describe_evaluation(&win), "10 (makes 10)");
        let short = evaluate(&parse_program("5*2").unwrap_or_default());
        assert_eq!(describe_evaluation(&short), "Invalid: Must use exactly four numbers");
        let fault = evaluate(&parse_program("5/0+1+1").unwrap_or_default());
        assert_eq!(describe_evaluation(&fault), "Invalid expression");
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["make-ten", "solve", "1234", "--json"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(args.json);
            assert!(matches!(args.command, Command::Solve { ref digits } if digits == "1234"));
            assert!(matches!(args.log_level, LogLevel::Warn));
        }

        let rejected = CliArgs::try_parse_from(["make-ten", "survey", "--max-digit", "12"]);
        assert!(rejected.is_err());
    }

    #[test]
    fn test_eval_args_parsing() {
        let args = CliArgs::try_parse_from(["make-ten", "eval", "3150", "(3-1)*5+0"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(matches!(
                args.command,
                Command::Eval { ref digits, ref expression }
                    if digits == "3150" && expression == "(3-1)*5+0"
            ));
        }

        let missing = CliArgs::try_parse_from(["make-ten", "eval", "(3-1)*5+0"]);
        assert!(missing.is_err());
    }

    #[test]
    fn test_check_digits_in_order() {
        let tokens = parse_program("(3-1)*5+0").unwrap_or_default();
        assert!(check_digits(&[3.0, 1.0, 5.0, 0.0], &tokens).is_ok());
    }

    #[test]
    fn test_check_digits_rejects_other_numbers() {
        let tokens = parse_program("9+1+0+0").unwrap_or_default();
        let result = check_digits(&[1.0, 2.0, 3.0, 4.0], &tokens);
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.to_string(), "number 1 is 9, expected 1");
        }

        let swapped = parse_program("2+1+3+4").unwrap_or_default();
        assert!(check_digits(&[1.0, 2.0, 3.0, 4.0], &swapped).is_err());
    }

    #[test]
    fn test_check_digits_leaves_count_to_evaluator() {
        let tokens = parse_program("1*2").unwrap_or_default();
        assert!(check_digits(&[1.0, 2.0, 3.0, 4.0], &tokens).is_ok());
        let evaluation = evaluate(&tokens);
        assert_eq!(
            describe_evaluation(&evaluation),
            "Invalid: Must use exactly four numbers"
        );
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
