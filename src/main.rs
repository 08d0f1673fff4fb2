use clap::Parser;
use lithp::config::{BANNER_EXIT_HINT, BANNER_TITLE, GRAMMAR_FILE, HISTORY_FILE, PROMPT, VERSION};
use lithp::env::Environment;
use lithp::grammar::{parse, Grammar};
use lithp::{builtins, eval, printer, reader};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::process::ExitCode;

/// An interactive interpreter for a small Lisp-family expression language.
#[derive(Parser, Debug)]
#[command(name = "lithp")]
#[command(version = VERSION)]
#[command(about = "A small Lisp-family REPL")]
struct CliArgs;

fn main() -> ExitCode {
    let _ = CliArgs::parse();

    let grammar = match Grammar::load(GRAMMAR_FILE) {
        Ok(grammar) => grammar,
        Err(e) => {
            eprintln!("Could not load {}: {}", GRAMMAR_FILE, e);
            return ExitCode::FAILURE;
        }
    };

    let env = Environment::new();
    builtins::register_builtins(&env);

    println!("{} {}", BANNER_TITLE, VERSION);
    println!("{}\n", BANNER_EXIT_HINT);

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Could not start line editor: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let _ = rl.load_history(HISTORY_FILE);

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                if line.trim().is_empty() {
                    continue;
                }
                match parse(&grammar, &line) {
                    Ok(node) => {
                        let value = reader::read(&node);
                        let result = eval::eval(value, &env);
                        printer::print(&result);
                    }
                    Err(e) => eprintln!("Parse error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Readline error: {}", e);
                break;
            }
        }
    }

    let _ = rl.save_history(HISTORY_FILE);
    ExitCode::SUCCESS
}
