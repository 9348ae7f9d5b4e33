use std::env;
use std::io::{self, BufRead, Write};

use minilang::lexer::lexer::Lexer;
use minilang::lexer::tokens::TokenKind;
use minilang::parser::parser::parse;

const PROMPT: &str = ">> ";

fn main() {
    let args: Vec<String> = env::args().collect();

    for arg in &args[1..] {
        match arg.as_str() {
            "-v" | "--version" => {
                println!("minilang v{}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            _ => {
                eprintln!("Unknown flag: {}", arg);
                print_usage();
                std::process::exit(1);
            }
        }
    }

    println!("This is the minilang programming language!");
    println!("Feel free to type in commands");

    let stdin = io::stdin();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush().unwrap();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            return;
        }
        let line = line.trim_end_matches(['\n', '\r']);

        if line.is_empty() {
            continue;
        }

        if line.starts_with('.') {
            cmd_helper(line);
            continue;
        }

        let mut lexer = Lexer::new(line.to_string());
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::EOF {
                break;
            }
            token.debug();
        }

        let (program, errors) = parse(line.to_string());
        if errors.is_empty() {
            println!("{}", program.render());
        } else {
            for error in errors {
                println!("parser error: {}", error);
            }
        }
    }
}

fn print_usage() {
    println!("Usage: minilang [flags]");
    println!("  -v, --version  Displays the version of minilang you are using");
    println!("  -h, --help     Displays this message");
}

fn cmd_helper(cmd: &str) {
    match cmd {
        ".help" => {
            println!("Welcome to the minilang shell!");
            println!("Here are the available commands:");
            println!(".help - Displays this message");
            println!(".exit - Exits the shell");
            println!(".clear - Clears the screen");
            println!(".version - Displays the version of minilang you are using");
        }
        ".exit" => {
            std::process::exit(0);
        }
        ".clear" => {
            print!("\x1b[H\x1b[2J");
        }
        ".version" => {
            println!("You are using minilang v{}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            println!("Unknown command: {}", cmd);
            println!("Type .help to see the available commands");
        }
    }
}
