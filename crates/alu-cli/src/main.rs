//! CLI entry point for the `alu32` evaluator and vector checker.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use alu_cli::logging::init_logging;
use alu_cli::render::{eval_record, render_json, render_text, table_records, EvalRecord};
use alu_core::{
    check_vectors, format_vectors, parse_u32, parse_vectors, reference_vectors, CheckConfig,
    Opcode, OpcodePolicy,
};
use serde as _;
use serde_json as _;
#[cfg(test)]
use tempfile as _;
use tracing::{debug, info};
use tracing_subscriber as _;

const USAGE_TEXT: &str = "\
Usage: alu32 <command> [options]

Commands:
  eval    <a> <b> <op> [--json]        Evaluate one operation
  table   <a> <b> [--json]             Evaluate all eight operations
  check   <file> [options]             Check a vector file against the model
  vectors [-o <file>]                  Write the built-in reference vectors

Check options:
  --mask-opcodes       Truncate opcode values above 7 instead of rejecting them
  --fail-fast          Stop at the first failing vector
  -v, --verbose        Log each mismatch to stderr

Options:
  -o, --output <file>  Output file path (vectors only, default: stdout)
  --json               Emit JSON instead of text (eval/table only)
  -h, --help           Show this help message

Operands accept decimal, 0x hex, or 0b binary. Opcodes accept
ADD SUB AND OR XOR NAND NOT PASS or 0..7.

Examples:
  alu32 eval 0xFFFFFFFF 1 ADD
  alu32 table 0xF0F0F0F0 0x0FF00FF0 --json
  alu32 check netlist_dump.vec --fail-fast
";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Eval(EvalArgs),
    Table(TableArgs),
    Check(CheckArgs),
    Vectors(VectorsArgs),
}

#[derive(Debug, PartialEq, Eq)]
struct EvalArgs {
    a: u32,
    b: u32,
    opcode: Opcode,
    json: bool,
}

#[derive(Debug, PartialEq, Eq)]
struct TableArgs {
    a: u32,
    b: u32,
    json: bool,
}

#[derive(Debug, PartialEq, Eq)]
struct CheckArgs {
    input: PathBuf,
    mask_opcodes: bool,
    fail_fast: bool,
    verbose: bool,
}

#[derive(Debug, PartialEq, Eq)]
struct VectorsArgs {
    output: Option<PathBuf>,
}

#[derive(Debug)]
enum ParseResult {
    Command(Command),
    Help,
}

fn parse_args(mut args: impl Iterator<Item = OsString>) -> Result<ParseResult, String> {
    let first = args.next().ok_or_else(|| "missing command".to_string())?;

    if first == "--help" || first == "-h" {
        return Ok(ParseResult::Help);
    }

    let command_str = first.to_string_lossy().to_string();

    match command_str.as_str() {
        "eval" => parse_eval_args(args)
            .map(Command::Eval)
            .map(ParseResult::Command),
        "table" => parse_table_args(args)
            .map(Command::Table)
            .map(ParseResult::Command),
        "check" => parse_check_args(args)
            .map(Command::Check)
            .map(ParseResult::Command),
        "vectors" => parse_vectors_args(args)
            .map(Command::Vectors)
            .map(ParseResult::Command),
        other => Err(format!("unknown command: {other}")),
    }
}

/// Splits arguments into positionals and a `--json` switch.
fn split_json_flag(args: impl Iterator<Item = OsString>) -> Result<(Vec<String>, bool), String> {
    let mut positionals = Vec::new();
    let mut json = false;

    for arg in args {
        if arg == "--help" || arg == "-h" {
            return Err(USAGE_TEXT.to_string());
        }

        if arg == "--json" {
            json = true;
            continue;
        }

        let text = arg.to_string_lossy().to_string();
        if text.starts_with('-') {
            return Err(format!("unknown option: {text}"));
        }
        positionals.push(text);
    }

    Ok((positionals, json))
}

fn parse_operand(name: &str, text: &str) -> Result<u32, String> {
    parse_u32(text).map_err(|error| format!("invalid value for {name} '{text}': {error}"))
}

fn parse_opcode(text: &str) -> Result<Opcode, String> {
    text.parse::<Opcode>()
        .map_err(|error| format!("invalid opcode '{text}': {error}"))
}

fn parse_eval_args(args: impl Iterator<Item = OsString>) -> Result<EvalArgs, String> {
    let (positionals, json) = split_json_flag(args)?;

    let [a, b, op] = positionals.as_slice() else {
        return Err(format!(
            "eval expects <a> <b> <op>, got {} argument(s)",
            positionals.len()
        ));
    };

    Ok(EvalArgs {
        a: parse_operand("a", a)?,
        b: parse_operand("b", b)?,
        opcode: parse_opcode(op)?,
        json,
    })
}

fn parse_table_args(args: impl Iterator<Item = OsString>) -> Result<TableArgs, String> {
    let (positionals, json) = split_json_flag(args)?;

    let [a, b] = positionals.as_slice() else {
        return Err(format!(
            "table expects <a> <b>, got {} argument(s)",
            positionals.len()
        ));
    };

    Ok(TableArgs {
        a: parse_operand("a", a)?,
        b: parse_operand("b", b)?,
        json,
    })
}

fn parse_check_args(args: impl Iterator<Item = OsString>) -> Result<CheckArgs, String> {
    let mut input: Option<PathBuf> = None;
    let mut mask_opcodes = false;
    let mut fail_fast = false;
    let mut verbose = false;

    for arg in args {
        if arg == "--help" || arg == "-h" {
            return Err(USAGE_TEXT.to_string());
        }

        if arg == "--mask-opcodes" {
            mask_opcodes = true;
            continue;
        }

        if arg == "--fail-fast" {
            fail_fast = true;
            continue;
        }

        if arg == "--verbose" || arg == "-v" {
            verbose = true;
            continue;
        }

        if arg.to_string_lossy().starts_with('-') {
            return Err(format!("unknown option: {}", arg.to_string_lossy()));
        }

        if input.is_some() {
            return Err("multiple input paths provided".to_string());
        }
        input = Some(PathBuf::from(arg));
    }

    let input = input.ok_or_else(|| "missing input path".to_string())?;
    Ok(CheckArgs {
        input,
        mask_opcodes,
        fail_fast,
        verbose,
    })
}

#[allow(clippy::while_let_on_iterator)]
fn parse_vectors_args(mut args: impl Iterator<Item = OsString>) -> Result<VectorsArgs, String> {
    let mut output: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        if arg == "--help" || arg == "-h" {
            return Err(USAGE_TEXT.to_string());
        }

        if arg == "-o" || arg == "--output" {
            let value = args
                .next()
                .ok_or_else(|| "missing value for -o".to_string())?;
            output = Some(PathBuf::from(value));
            continue;
        }

        return Err(format!("unexpected argument: {}", arg.to_string_lossy()));
    }

    Ok(VectorsArgs { output })
}

fn print_records(records: &[EvalRecord], json: bool) -> Result<(), i32> {
    if json {
        match render_json(records) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("error: failed to serialize output: {e}");
                return Err(1);
            }
        }
    } else {
        println!("{}", render_text(records));
    }
    Ok(())
}

fn run_eval(args: &EvalArgs) -> Result<(), i32> {
    let record = eval_record(args.a, args.b, args.opcode);
    debug!(opcode = %args.opcode, a = args.a, b = args.b, "evaluated");
    print_records(&[record], args.json)
}

fn run_table(args: &TableArgs) -> Result<(), i32> {
    print_records(&table_records(args.a, args.b), args.json)
}

fn check_config(args: &CheckArgs) -> CheckConfig {
    let policy = if args.mask_opcodes {
        OpcodePolicy::Mask
    } else {
        OpcodePolicy::Reject
    };

    CheckConfig::default()
        .with_opcode_policy(policy)
        .with_fail_fast(args.fail_fast)
}

fn run_check(args: &CheckArgs) -> Result<(), i32> {
    let content = match fs::read_to_string(&args.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: failed to read {}: {e}", args.input.display());
            return Err(1);
        }
    };

    let vectors = match parse_vectors(&content) {
        Ok(vectors) => vectors,
        Err(e) => {
            eprintln!("{}:{}: error: {}", args.input.display(), e.line, e.kind);
            return Err(1);
        }
    };

    if vectors.is_empty() {
        println!("No vectors found in {}", args.input.display());
        return Ok(());
    }

    let config = check_config(args);
    info!(
        path = %args.input.display(),
        vectors = vectors.len(),
        policy = ?config.opcode_policy,
        "checking vectors"
    );

    let report = check_vectors(&vectors, &config);
    for failure in report.failures() {
        println!("{failure}");
    }

    let summary = report.summary();
    println!();
    println!("Vector Summary: {summary} (total: {})", summary.total);

    if report.all_passed() {
        Ok(())
    } else {
        Err(1)
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<(), i32> {
    match path {
        Some(path) => fs::write(path, content).map_err(|e| {
            eprintln!("error: failed to write output: {e}");
            1
        }),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}

fn run_vectors(args: &VectorsArgs) -> Result<(), i32> {
    let vectors = reference_vectors();
    write_output(args.output.as_deref(), &format_vectors(&vectors))?;

    if let Some(path) = &args.output {
        println!("Wrote {} vectors -> {}", vectors.len(), path.display());
    }
    Ok(())
}

fn main() {
    let parsed = parse_args(env::args_os().skip(1));

    let verbose = matches!(
        &parsed,
        Ok(ParseResult::Command(Command::Check(CheckArgs { verbose: true, .. })))
    );
    init_logging(verbose);

    let exit_code = match parsed {
        Ok(ParseResult::Help) => {
            println!("{USAGE_TEXT}");
            0
        }
        Ok(ParseResult::Command(command)) => {
            let result = match command {
                Command::Eval(args) => run_eval(&args),
                Command::Table(args) => run_table(&args),
                Command::Check(args) => run_check(&args),
                Command::Vectors(args) => run_vectors(&args),
            };
            match result {
                Ok(()) => 0,
                Err(code) => code,
            }
        }
        Err(error) => {
            if error.starts_with("Usage:") {
                println!("{error}");
            } else {
                eprintln!("error: {error}");
                eprintln!("{USAGE_TEXT}");
            }
            1
        }
    };

    std::process::exit(exit_code);
}
