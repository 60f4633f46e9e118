use std::fs::File;
use std::io::{self, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use encoding_rs_io::DecodeReaderBytesBuilder;

use crate::ast::Node;
use crate::lexer::Lexer;
use crate::parser::Parser;

/// Set whenever a parse produced at least one error, so `run_file` can choose
/// a nonzero exit status after printing everything it found.
static HAD_ERROR: AtomicBool = AtomicBool::new(false);

/// Lexes and parses one chunk of source, printing the resulting `Program`'s
/// canonical rendering on success or one error per line on failure. This is
/// the entire library surface described by the front end: construct a
/// lexer, construct a parser from it, call `parse_program()` once, inspect
/// the error list.
fn run(source: &str) {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if parser.errors().is_empty() {
        println!("{}", program.render());
    } else {
        HAD_ERROR.store(true, Ordering::Relaxed);
        for err in parser.errors() {
            eprintln!("parse error: {err}");
        }
    }
}

/// Reads a script file, decoding it to UTF-8 (falling back to the
/// replacement character for byte sequences that aren't valid UTF-8 rather
/// than panicking on a boundary), and runs it as a single chunk.
pub fn run_file(path: &str) -> io::Result<()> {
    let file = File::open(path)?;
    let mut decoder = DecodeReaderBytesBuilder::new()
        .encoding(Some(encoding_rs::UTF_8))
        .build(file);

    let mut source = String::new();
    decoder.read_to_string(&mut source)?;

    run(&source);

    if HAD_ERROR.load(Ordering::Relaxed) {
        std::process::exit(65);
    }
    Ok(())
}

/// A line-at-a-time read-eval-print loop: read a line, lex + parse it,
/// print the result or its errors, repeat. `HAD_ERROR` is reset between
/// iterations so one bad line doesn't poison the exit status of later ones.
pub fn run_prompt() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        run(&line);
        HAD_ERROR.store(false, Ordering::Relaxed);
    }

    Ok(())
}
