use clap::Parser;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use webpi::parser::parse_command_line;
use webpi::{CommandRequest, CommandResponse, ShellConfig, Terminal, TerminalOptions, VirtualPath};

/// ANSI sequence to clear the screen and move the cursor to the top-left.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

#[derive(Parser)]
#[command(name = "webpi")]
#[command(about = "A simulated Raspberry Pi terminal")]
#[command(version)]
struct Cli {
    /// Execute a single command and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// Speak JSON: requests ({"command": ...}) on stdin, responses on stdout, one per line
    #[arg(long = "json")]
    json: bool,

    /// TOML configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Starting directory (e.g. ~bin)
    #[arg(long = "cwd")]
    cwd: Option<String>,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match ShellConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("webpi: {}", e);
                std::process::exit(2);
            }
        },
        None => ShellConfig::default(),
    };

    let cwd = match cli.cwd.as_deref().map(VirtualPath::parse).transpose() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("webpi: invalid --cwd: {}", e);
            std::process::exit(2);
        }
    };

    let terminal = match Terminal::new(TerminalOptions { config, cwd, ..Default::default() }).await {
        Ok(terminal) => terminal,
        Err(e) => {
            eprintln!("webpi: {}", e);
            std::process::exit(2);
        }
    };

    if let Some(command) = cli.command {
        let response = terminal.exec(&command).await;
        if cli.json {
            print_json(&response);
        } else {
            print_plain(&command, &response, false);
        }
        std::process::exit(if response.is_error() { 1 } else { 0 });
    }

    if cli.json {
        run_json(&terminal).await;
    } else if std::io::stdin().is_terminal() {
        run_repl(&terminal).await;
    } else {
        run_batch(&terminal).await;
    }
}

/// One JSON request per line in, one JSON response per line out.
async fn run_json(terminal: &Terminal) {
    for line in std::io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }
        let response = match serde_json::from_str::<CommandRequest>(&line) {
            Ok(request) => terminal.handle(&request).await,
            Err(e) => CommandResponse {
                output: String::new(),
                error: format!("invalid request: {}", e),
                new_path: terminal.cwd().await,
            },
        };
        print_json(&response);
    }
}

async fn run_repl(terminal: &Terminal) {
    let stdin = std::io::stdin();
    loop {
        if let Err(e) = write_prompt(&mut std::io::stdout(), &terminal.prompt().await) {
            log::error!("cannot write prompt: {}", e);
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                println!();
                break;
            }
            Ok(_) => {}
        }
        if line.trim() == "exit" {
            break;
        }
        let response = terminal.exec(&line).await;
        print_plain(&line, &response, true);
    }
}

fn write_prompt(out: &mut impl Write, prompt: &str) -> std::io::Result<()> {
    out.write_all(prompt.as_bytes())?;
    out.flush()
}

/// Non-interactive stdin: every line is a command, no prompt.
async fn run_batch(terminal: &Terminal) {
    for line in std::io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        let response = terminal.exec(&line).await;
        print_plain(&line, &response, false);
    }
}

fn print_json(response: &CommandResponse) {
    match serde_json::to_string(response) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("webpi: cannot encode response: {}", e),
    }
}

fn print_plain(command: &str, response: &CommandResponse, interactive: bool) {
    if interactive && parse_command_line(command).map(|l| l.name) == Some("clear") {
        print!("{}", CLEAR_SCREEN);
    }
    if !response.output.is_empty() {
        println!("{}", response.output);
    }
    if !response.error.is_empty() {
        eprintln!("{}", response.error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStdout;

    impl Write for BrokenStdout {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_write_prompt() {
        let mut out = Vec::new();
        write_prompt(&mut out, "pi@webpi:~$ ").unwrap();
        assert_eq!(out, b"pi@webpi:~$ ");
    }

    #[test]
    fn test_write_prompt_reports_flush_failure() {
        let err = write_prompt(&mut BrokenStdout, "pi@webpi:~$ ").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }
}
