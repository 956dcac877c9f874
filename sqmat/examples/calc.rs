use std::process::ExitCode;

use clap::Parser;
use sqmat::{
    Binding, ConcreteMatrix, ErrorCategory, ExecutionContext, Expression, MatrixError, MatrixExpr,
    Operator, SymbolicMatrix,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(
    about = "SQMAT calculator - Evaluate postfix matrix expressions with variable bindings"
)]
struct Cli {
    /// Worker threads for elementwise operations (default: detected)
    #[arg(long)]
    workers: Option<usize>,

    /// Minimum cell count before elementwise work is split across workers
    #[arg(long)]
    threshold: Option<usize>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Variable binding (format: x=2)
    #[arg(short = 'b', long = "bind", value_parser = parse_binding)]
    bindings: Vec<(char, i32)>,

    /// Postfix tokens: matrix literals and + - * /
    #[arg(required = true, allow_hyphen_values = true, num_args = 1..)]
    tokens: Vec<String>,
}

#[derive(Debug)]
enum CliError {
    Matrix(MatrixError),
    Usage(String),
}

impl From<MatrixError> for CliError {
    fn from(error: MatrixError) -> Self {
        CliError::Matrix(error)
    }
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Usage(_) => ExitCode::from(64),
            CliError::Matrix(error) => match error.category() {
                ErrorCategory::Input => ExitCode::from(65),
                ErrorCategory::Evaluation => ExitCode::from(1),
                ErrorCategory::Configuration => ExitCode::from(78),
            },
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Matrix(error) => write!(f, "{error}"),
            CliError::Usage(message) => write!(f, "{message}"),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            error.exit_code()
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let ctx = execution_context(cli)?;
    info!(
        workers = ctx.workers(),
        threshold = ctx.parallel_threshold(),
        "execution context ready"
    );

    let binding: Binding = cli.bindings.iter().copied().collect();
    let expr = build_expression(&cli.tokens)?;
    println!("Expression: {expr}");

    let start_time = std::time::Instant::now();
    let result = expr.evaluate(&binding, &ctx)?;
    let elapsed = start_time.elapsed();

    if cli.json {
        let text = sqmat::to_json(&result).map_err(|e| CliError::Usage(e.to_string()))?;
        println!("{text}");
    } else {
        println!("Result: {result}");
    }
    info!("evaluated in {elapsed:.2?}");
    Ok(())
}

fn execution_context(cli: &Cli) -> Result<ExecutionContext, CliError> {
    let ctx = match cli.workers {
        Some(workers) => ExecutionContext::from_count(workers)?,
        None => ExecutionContext::detect()?,
    };
    Ok(match cli.threshold {
        Some(threshold) => ctx.with_parallel_threshold(threshold),
        None => ctx,
    })
}

/// Fold postfix tokens into one expression
///
/// An operator pops the left operand first, then the right one.
fn build_expression(tokens: &[String]) -> Result<Box<dyn MatrixExpr>, CliError> {
    let mut stack: Vec<Box<dyn MatrixExpr>> = Vec::new();

    for token in tokens {
        let mut chars = token.chars();
        let operator = match (chars.next(), chars.next()) {
            (Some(symbol), None) => Operator::from_symbol(symbol),
            _ => None,
        };

        match operator {
            Some(operator) => {
                let (Some(left), Some(right)) = (stack.pop(), stack.pop()) else {
                    return Err(CliError::Usage(format!(
                        "operator '{operator}' needs two operands"
                    )));
                };
                stack.push(Box::new(Expression::from_boxed(
                    left,
                    right,
                    operator,
                    operator.symbol(),
                )));
            }
            None => stack.push(parse_operand(token)?),
        }
    }

    let top = stack
        .pop()
        .ok_or_else(|| CliError::Usage("no expression given".to_string()))?;
    if !stack.is_empty() {
        warn!(unused = stack.len(), "operands left on the stack were ignored");
    }
    Ok(top)
}

fn parse_operand(token: &str) -> Result<Box<dyn MatrixExpr>, CliError> {
    if token.chars().any(|c| c.is_ascii_alphabetic()) {
        Ok(Box::new(token.parse::<SymbolicMatrix>()?))
    } else {
        Ok(Box::new(token.parse::<ConcreteMatrix>()?))
    }
}

fn parse_binding(entry: &str) -> Result<(char, i32), String> {
    let (name, value) = entry
        .split_once('=')
        .ok_or_else(|| format!("expected x=2, got '{entry}'"))?;

    let mut chars = name.chars();
    let name = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c,
        _ => return Err(format!("variable name must be one letter, got '{name}'")),
    };

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("value must be decimal digits, got '{value}'"));
    }
    let value = value
        .parse::<i32>()
        .map_err(|e| format!("invalid value '{value}': {e}"))?;
    Ok((name, value))
}
