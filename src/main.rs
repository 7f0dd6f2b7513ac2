use clap::Parser;
use minilang::cli::{generate_completions, Args, Commands};
use minilang::config::AppConfig;
use minilang::format::result_to_json;
use minilang::interpreter::interpret;
use owo_colors::OwoColorize;
use std::io::{self, Read, Write};
use std::path::Path;

fn main() {
    let args = Args::parse();

    if let Some(Commands::Complete { shell }) = args.command {
        generate_completions(shell);
        return;
    }

    let config = AppConfig::from_args(&args);

    verbose_log(&config, "Starting minilang");

    let ast_str = match read_ast_input(&args, &config) {
        Ok(s) => s,
        Err(e) => {
            error_message(&config, &e);
            std::process::exit(1);
        }
    };

    verbose_log(&config, &format!("Read {} bytes of AST input", ast_str.len()));

    let program: serde_json::Value = match serde_json::from_str(&ast_str) {
        Ok(val) => val,
        Err(e) => {
            error_message(&config, &format!("AST parse error: {}", e));
            std::process::exit(1);
        }
    };

    let result = interpret(&program);

    verbose_log(
        &config,
        &format!(
            "Run finished: {} errors, {} symbols",
            result.errors.len(),
            result.symbols.len()
        ),
    );

    let output = if config.json {
        let bundle = result_to_json(&result);
        if config.compact {
            format!("{}\n", bundle)
        } else {
            format!(
                "{}\n",
                serde_json::to_string_pretty(&bundle).unwrap_or_else(|_| bundle.to_string())
            )
        }
    } else {
        result.console_output.clone()
    };

    match &args.out {
        Some(out_path) => {
            if let Err(e) = std::fs::write(out_path, &output) {
                error_message(
                    &config,
                    &format!("Error writing to {}: {}", out_path.display(), e),
                );
                std::process::exit(1);
            }
            verbose_log(&config, &format!("Wrote output to {}", out_path.display()));
        }
        None => {
            print!("{}", output);
            let _ = io::stdout().flush();
        }
    }

    // Accumulated errors are part of the result; in plain mode they go
    // to stderr so the console text on stdout stays clean.
    if !config.json {
        for record in &result.errors {
            error_message(&config, &record.to_string());
        }
    }
}

fn read_ast_input(args: &Args, config: &AppConfig) -> Result<String, String> {
    if let Some(file) = &args.file {
        verbose_log(config, &format!("Reading AST from file: {}", file.display()));
        read_file(file)
    } else if let Some(ast) = &args.ast {
        verbose_log(config, "Reading AST from command-line argument");
        Ok(ast.clone())
    } else {
        verbose_log(config, "Reading AST from stdin");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("Failed to read from stdin: {}", e))?;

        if buffer.trim().is_empty() {
            return Err(
                "No input provided. Must provide --file, an AST string argument, or AST via stdin"
                    .to_string(),
            );
        }

        Ok(buffer)
    }
}

fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))
}

fn verbose_log(config: &AppConfig, message: &str) {
    if config.verbose {
        eprintln!("[minilang:debug] {}", message);
    }
}

fn error_message(config: &AppConfig, message: &str) {
    if config.color_enabled {
        eprintln!("{}", message.red().bold());
    } else {
        eprintln!("{}", message);
    }
}
