use clap::Parser;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use wsa_shell::logging::{init_logging, parse_level, LoggingConfig};
use wsa_shell::{CommandOutput, Shell, ShellConfig, SideEffect};

const INTRO: &str = "\
WSA Terminal - Windows Subsystem for Amiga
Inspired by the legendary Amiga computer systems
Type 'help' for available commands.
";

#[derive(Parser)]
#[command(name = "wsa-shell")]
#[command(about = "A retro device-path shell over virtual and host-backed volumes")]
#[command(version)]
struct Cli {
    /// Execute one command line and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// Script file to run through the shell
    #[arg()]
    script_file: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Host directory backing DH0:
    #[arg(long = "dh0", env = "WSA_DH0_ROOT")]
    dh0: Option<PathBuf>,

    /// Skip the intro banner and startup sequence output
    #[arg(long = "no-intro")]
    no_intro: bool,

    /// Diagnostic log level (trace, debug, info, warn, error)
    #[arg(long = "log-level", env = "WSA_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Write diagnostic logs as JSON lines
    #[arg(long = "log-json", env = "WSA_LOG_JSON")]
    log_json: bool,

    /// Print each result as JSON ({"output": ...})
    #[arg(long = "json")]
    json: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(LoggingConfig {
        use_json: cli.log_json,
        ..LoggingConfig::with_level(parse_level(&cli.log_level))
    });

    let mut config = match &cli.config {
        Some(path) => match ShellConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => ShellConfig::default(),
    };
    if let Some(root) = cli.dh0.clone() {
        config = config.with_host_root(root);
    }

    let mut shell = match Shell::new(&config) {
        Ok(shell) => shell,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // One-shot modes: -c or a script file.
    if let Some(line) = cli.command.as_deref() {
        let code = match shell.execute(line).await {
            Ok(output) => {
                emit(&output, cli.json);
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        };
        std::process::exit(code);
    }
    if let Some(file) = &cli.script_file {
        let script = match std::fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error: Cannot read script file: {}: {}", file.display(), e);
                std::process::exit(1);
            }
        };
        let output = shell.run_script(&script).await;
        emit(&CommandOutput::text(output), cli.json);
        return;
    }

    let interactive = std::io::stdin().is_terminal();
    let startup = shell.startup_sequence().await;
    if !cli.no_intro {
        print!("{}", INTRO);
        print!("{}", startup);
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{}", shell.prompt());
            let _ = std::io::stdout().flush();
        }
        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }
        match shell.execute(trimmed).await {
            Ok(output) => emit(&output, cli.json),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
    if interactive {
        println!("Goodbye!");
    }
}

fn emit(output: &CommandOutput, json: bool) {
    if json {
        println!("{}", serde_json::json!({ "output": output.text }));
        return;
    }
    if output.effect == Some(SideEffect::ClearScreen) {
        print!("\x1B[2J\x1B[H");
    }
    print!("{}", output.text);
    let _ = std::io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_json_flag_reaches_logging_config() {
        let cli = Cli::try_parse_from(["wsa-shell", "--log-json", "--log-level", "debug"]).unwrap();
        assert!(cli.log_json);
        assert_eq!(parse_level(&cli.log_level), tracing::Level::DEBUG);
    }
}
