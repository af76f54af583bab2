use std::{env, fs::read_to_string, process::exit, time::Instant};

use pclex::{
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    printer::print_tokens,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_contents = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();
    let tokens = match tokenize(file_contents) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(error);
            exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    print_tokens(&tokens);
}

fn display_error(error: Error) {
    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
}
