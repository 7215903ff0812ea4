use blockwalk::interpreter::{Limits, DEFAULT_MAX_ARRAY_LENGTH};
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use compact_str::CompactString;
use std::path::PathBuf;
use std::{fs::read_to_string, process::ExitCode};

#[derive(Debug, Parser)]
#[clap(name = "blockwalk", version)]
pub struct CLArgs {
    #[clap(subcommand)]
    pub routine: BlockwalkCommand,
}

#[derive(Debug, Subcommand)]
pub enum BlockwalkCommand {
    /// Run a JSON block program and print its trace.
    Run {
        path: PathBuf,
        /// Abort after this many while-loop iterations in total.
        #[clap(long = "max-iterations")]
        max_iterations: Option<u64>,
        /// Reject any array declared with more elements than this.
        #[clap(long = "max-array-length", default_value_t = DEFAULT_MAX_ARRAY_LENGTH)]
        max_array_length: usize,
        #[clap(long = "format", value_enum, default_value = "basic")]
        format: TraceFormat,
    },
    /// Evaluate a single arithmetic expression.
    Evaluate {
        expression: String,
        #[clap(long = "var", value_parser = parse_binding)]
        variables: Vec<(CompactString, i32)>,
        #[clap(long = "format", value_enum, default_value = "basic")]
        format: ErrorFormat,
    },
    /// Evaluate a single comparison condition.
    Check {
        condition: String,
        #[clap(long = "var", value_parser = parse_binding)]
        variables: Vec<(CompactString, i32)>,
        #[clap(long = "format", value_enum, default_value = "basic")]
        format: ErrorFormat,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum TraceFormat {
    Basic,
    Json,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ErrorFormat {
    Debug,
    Basic,
    Pretty,
}

fn parse_binding(text: &str) -> Result<(CompactString, i32), String> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE but got `{text}`"))?;
    let value = value
        .trim()
        .parse()
        .map_err(|error| format!("invalid value for `{name}`: {error}"))?;
    Ok((name.trim().into(), value))
}

fn main() -> ExitCode {
    blockwalk_main().expect("Encountered an error!")
}

fn blockwalk_main() -> Result<ExitCode> {
    color_eyre::install().expect("Can't fail at first call!");
    init_tracing();
    let args = CLArgs::parse();
    let succeeded = match args.routine {
        BlockwalkCommand::Run {
            path,
            max_iterations,
            max_array_length,
            format,
        } => {
            eprintln!("Running {:?}...", path);
            let src = read_to_string(&path)
                .with_context(|| format!("Failed to read program {}", path.display()))?;
            let limits = Limits {
                max_iterations,
                max_array_length,
            };
            match run(&src, limits, &format)? {
                RunOutcome::Completed => true,
                RunOutcome::Aborted => return Ok(ExitCode::from(70)),
                RunOutcome::Invalid => return Ok(ExitCode::from(65)),
            }
        }
        BlockwalkCommand::Evaluate {
            expression,
            variables,
            format,
        } => evaluate(&expression, variables, &format),
        BlockwalkCommand::Check {
            condition,
            variables,
            format,
        } => check(&condition, variables, &format),
    };
    if succeeded {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(65))
    }
}

/// Installs a stderr subscriber, but only when `RUST_LOG` is set so the
/// default output is just the trace.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

enum RunOutcome {
    Completed,
    Aborted,
    Invalid,
}

fn run(src: &str, limits: Limits, format: &TraceFormat) -> Result<RunOutcome> {
    use blockwalk::block::parse_program;
    use blockwalk::interpreter::{Interpreter, TreeWalkInterpreter};

    let program = match parse_program(src) {
        Ok(program) => program,
        Err(error) => {
            eprintln!("Invalid program: {error}");
            return Ok(RunOutcome::Invalid);
        }
    };

    let mut interpreter = TreeWalkInterpreter::with_limits(limits);
    let trace = interpreter.run(&program);
    match format {
        TraceFormat::Basic => {
            for line in trace.iter() {
                println!("{line}");
            }
        }
        TraceFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&trace)?);
        }
    }

    if interpreter.is_halted() {
        Ok(RunOutcome::Aborted)
    } else {
        Ok(RunOutcome::Completed)
    }
}

fn evaluate(text: &str, variables: Vec<(CompactString, i32)>, format: &ErrorFormat) -> bool {
    use blockwalk::expression::{
        self,
        Variables,
        formatter::{BasicFormatter, DebugFormatter, ExpressionErrorFormatter, PrettyFormatter},
    };

    let variables: Variables = variables.into_iter().collect();
    match expression::evaluate(text, &variables) {
        Ok(value) => {
            println!("{value}");
            true
        }
        Err(error) => {
            let formatter: Box<dyn ExpressionErrorFormatter + '_> = match format {
                ErrorFormat::Debug => Box::new(DebugFormatter),
                ErrorFormat::Basic => Box::new(BasicFormatter),
                ErrorFormat::Pretty => Box::new(PrettyFormatter::new(text, "expression")),
            };
            eprintln!("{}", formatter.format_error(&error));
            false
        }
    }
}

fn check(text: &str, variables: Vec<(CompactString, i32)>, format: &ErrorFormat) -> bool {
    use blockwalk::condition::{self, formatter::ConditionErrorFormatter};
    use blockwalk::expression::formatter::{BasicFormatter, DebugFormatter, PrettyFormatter};
    use blockwalk::expression::Variables;

    let variables: Variables = variables.into_iter().collect();
    match condition::evaluate(text, &variables) {
        Ok(value) => {
            println!("{value}");
            true
        }
        Err(error) => {
            let formatter: Box<dyn ConditionErrorFormatter + '_> = match format {
                ErrorFormat::Debug => Box::new(DebugFormatter),
                ErrorFormat::Basic => Box::new(BasicFormatter),
                ErrorFormat::Pretty => Box::new(PrettyFormatter::new(text, "condition")),
            };
            eprintln!("{}", formatter.format_condition_error(&error));
            false
        }
    }
}
