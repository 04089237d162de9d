mod debug_report;

use patchling::{Context, Options, load_with};
use std::io::{self, IsTerminal, Read};

fn main() {
    // Opt-in engine traces; the report below covers the common case.
    if std::env::var_os("PATCHLING_DEBUG").is_some() {
        tracing_subscriber::fmt().with_writer(io::stderr).with_max_level(tracing::Level::DEBUG).init();
    }

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let ctx = Context { source: config.source };
    let opts = Options::default();
    let res = load_with(&config.patch, &ctx, &opts);
    debug_report::print_run(&ctx.source, &res, config.color);
}

struct CliConfig {
    patch: String,
    source: String,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut path: Option<String> = None;
    let mut source: Option<String> = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("patchling {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--source" => {
                let value = args.next().ok_or_else(|| "error: --source expects a value".to_string())?;
                source = Some(value);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                for rest in args.by_ref() {
                    if path.is_some() {
                        return Err("error: patch file provided multiple times".to_string());
                    }
                    path = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--source=") => {
                source = Some(arg.trim_start_matches("--source=").to_string());
            }
            _ if arg.starts_with("--input=") => {
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(arg.trim_start_matches("--input=").to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                if path.is_some() {
                    return Err("error: patch file provided multiple times".to_string());
                }
                path = Some(arg);
            }
        }
    }

    if input.is_some() && path.is_some() {
        return Err("error: both --input and a patch file provided".to_string());
    }

    let (patch, default_source) = match (input, path) {
        (Some(text), None) => (text, "<input>".to_string()),
        (None, Some(p)) => {
            let text =
                std::fs::read_to_string(&p).map_err(|err| format!("error: failed to read '{p}': {err}"))?;
            (text, p)
        }
        _ => (read_stdin_input()?, "<stdin>".to_string()),
    };

    if patch.trim().is_empty() {
        return Err(format!("error: no patch text provided\n\n{}", help_text()));
    }

    Ok(CliConfig { patch, source: source.unwrap_or(default_source), color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "patchling {version}

BEX-style string patch loader CLI.

Usage:
  patchling [OPTIONS] [--] <patch-file>
  patchling [OPTIONS] --input <text>

Options:
  -i, --input <text>         Literal patch text to load. If omitted, the
                             patch file argument is read; with neither,
                             stdin is read.
  --source <label>           Label shown in diagnostics.
                             Default: the file name, <input>, or <stdin>.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  PATCHLING_DEBUG=1          Print engine warn/debug traces to stderr.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
