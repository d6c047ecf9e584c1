use std::{env, fs::read_to_string, process::ExitCode, time::Instant};

use lexis::{
    config::{Config, OutputMode, USAGE},
    display_error,
    highlight::{render::render_ansi, theme::Theme},
    lexer::lexer::tokenize,
};

fn main() -> ExitCode {
    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error: {}", error);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    let source = match read_to_string(&config.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: failed to read {}: {}", config.file.display(), error);
            return ExitCode::from(2);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &config.file, &source);
            return ExitCode::from(1);
        }
    };

    if config.timings {
        eprintln!("Tokenized {} tokens in {:?}", tokens.len(), start.elapsed());
    }

    match config.mode {
        OutputMode::Tokens => {
            for token in &tokens {
                println!("{}", token.describe());
            }
        }
        OutputMode::Highlight => {
            let render_start = Instant::now();
            let rendered = render_ansi(&source, &tokens, &Theme::one_dark(), config.background);
            print!("{}", rendered);

            if config.timings {
                eprintln!("Rendered in {:?}", render_start.elapsed());
            }
        }
    }

    if config.timings {
        eprintln!("Total time: {:?}", start.elapsed());
    }

    ExitCode::SUCCESS
}
