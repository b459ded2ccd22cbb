use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use sel::{
    ast::functions::TopLevel,
    lexer::lexer::tokenize,
    parse_source,
    parser::operators::OperatorTable,
    render_error,
    shell::{LineResult, Shell, HELP_COMMAND, HELP_TEXT},
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sel-parse", about = "Parse SEL source and print the syntax trees")]
struct Args {
    /// Source file to parse. Reads stdin line by line when omitted.
    file: Option<PathBuf>,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(io::stderr)
        .init();

    match &args.file {
        Some(path) => parse_file(path, &args, &mut OperatorTable::default()),
        None => interactive(&args),
    }
}

fn parse_file(path: &Path, args: &Args, operators: &mut OperatorTable) -> ExitCode {
    let contents = match read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Error: failed to read {}: {}", path.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    info!(file = %file_name, bytes = contents.len(), "parsing file");

    if args.tokens {
        dump_tokens(&contents, &file_name);
    }

    match parse_source(&contents, Some(file_name), operators) {
        Ok(forms) => {
            forms.iter().for_each(print_form);
            debug!(operators = ?operators.operators(), "final operator table");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", render_error(&err, &contents));
            ExitCode::FAILURE
        }
    }
}

fn interactive(args: &Args) -> ExitCode {
    let stdin = io::stdin();
    let mut line = String::new();
    // One table for the whole session, so declared operators carry over.
    let mut shell = Shell::new(OperatorTable::default());

    println!("sel-parse {} (type `{}` for help)", env!("CARGO_PKG_VERSION"), HELP_COMMAND);

    loop {
        print!("{}", if shell.is_pending() { "   ...> " } else { "ready> " });
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => {
                debug!(operators = ?shell.operators().operators(), "final operator table");
                return ExitCode::SUCCESS;
            }
            Ok(_) => {}
            Err(err) => {
                warn!(%err, "failed to read from stdin");
                return ExitCode::FAILURE;
            }
        }

        if args.tokens {
            dump_tokens(&line, "shell");
        }

        // A failed input is reported and the session goes on. Operators
        // declared before the error stay declared.
        match shell.feed(&line) {
            LineResult::Forms(forms) => forms.iter().for_each(print_form),
            LineResult::Incomplete => {}
            LineResult::Help => println!("{}", HELP_TEXT),
            LineResult::Failed { error, source } => eprintln!("{}", render_error(&error, &source)),
        }
    }
}

fn dump_tokens(source: &str, file_name: &str) {
    match tokenize(source.to_string(), Some(file_name.to_string())) {
        Ok(tokens) => {
            for token in tokens {
                println!("{}", token);
            }
        }
        Err(err) => eprintln!("{}", render_error(&err, source)),
    }
}

fn print_form(form: &TopLevel) {
    match form {
        TopLevel::Definition(function) => println!("def {}", function),
        TopLevel::Expression(function) => println!("expr {}", function.body),
    }
}
