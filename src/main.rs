mod cipher;
mod crack;
mod eval;
mod freq;

use std::env;
use std::fs;
use std::io;
use std::io::Write;

use regex::Regex;

#[derive(Debug, PartialEq)]
enum Command {
    Quit,
    Help,
    Shift(i32),
    New(String),
}

fn parse_command(line: &str) -> Command {
    let shift_pattern = Regex::new(r"^shift (-?\d+)$").unwrap();
    let new_pattern = Regex::new(r#"^new "(.+)"$"#).unwrap();

    if line == "q" || line == "quit" {
        return Command::Quit;
    }

    if let Some(captures) = shift_pattern.captures(line) {
        if let Ok(key) = captures[1].parse() {
            return Command::Shift(key);
        }
    }

    if let Some(captures) = new_pattern.captures(line) {
        return Command::New(captures[1].to_string());
    }

    Command::Help
}

fn read_ciphertext(path: &str) -> Result<String, failure::Error> {
    let contents = fs::read_to_string(path)?;
    Ok(contents)
}

fn print_evaluation(ciphertext: &str) {
    match eval::evaluate(ciphertext) {
        Ok(evaluation) => println!("{}", evaluation),
        Err(err) => println!("{}", err),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  h/help           - print this help message");
    println!("  shift N          - print the current text rotated forward by N places");
    println!("  new \"ciphertext\" - replace the current text and evaluate it");
    println!("  q/quit           - quit");
}

fn read_line() -> Option<String> {
    print!("> ");
    io::stdout().flush().ok()?;

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn main() {
    println!("shiftbreak - Caesar shift decoder");
    println!("Usage: shiftbreak [filename]");
    println!();

    let args: Vec<String> = env::args().collect();
    let mut ciphertext = String::new();

    if args.len() == 2 {
        match read_ciphertext(&args[1]) {
            Ok(contents) => {
                ciphertext = contents;
                print_evaluation(&ciphertext);
            }
            Err(err) => eprintln!("error reading {}: {}", &args[1], err),
        }
    }

    while let Some(line) = read_line() {
        match parse_command(&line) {
            Command::Quit => break,
            Command::Shift(key) => println!("{}", cipher::shift(&ciphertext, key)),
            Command::New(text) => {
                ciphertext = text;
                print_evaluation(&ciphertext);
            }
            Command::Help => print_help(),
        }
    }
}
