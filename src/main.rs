//! Ivy CLI binary entry point.

use std::io::Write;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ivy::cli::Cli;
use ivy::config::IvyConfig;
use ivy::export::TextDocumentWriter;
use ivy::gateway::AssistantGateway;
use ivy::render::TerminalRenderer;
use ivy::session::{ChatSession, TurnOutcome};
use ivy::tools::StudyTool;

const HELP: &str = "Commands: /flashcards, /test, /guide and /solution arm a study tool \
for your next message; /export saves the last tool reply as a document; /quit exits.";

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ivy=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse_args();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> ivy::error::Result<()> {
    let mut config = IvyConfig::from_env();
    if let Some(url) = cli.backend_url {
        config.backend_url = url;
    }
    if let Some(secs) = cli.timeout_secs {
        config.timeout = Duration::from_secs(secs);
    }
    if let Some(dir) = cli.export_dir {
        config.export_dir = dir;
    }

    let gateway = AssistantGateway::new(&config.backend_url, config.timeout)?;
    let mut session = ChatSession::new(gateway, Box::new(TerminalRenderer));
    let mut writer = TextDocumentWriter::new(&config.export_dir);

    if let Some(tool) = cli.tool {
        session.arm_tool(tool);
    }

    if let Some(prompt) = cli.prompt {
        return one_shot(&mut session, &mut writer, &prompt).await;
    }

    repl(&mut session, &mut writer).await
}

/// Send a single prompt and exit. An armed tool's export action runs
/// immediately since there is no session to come back to.
async fn one_shot(
    session: &mut ChatSession,
    writer: &mut TextDocumentWriter,
    prompt: &str,
) -> ivy::error::Result<()> {
    match session.send(prompt).await {
        TurnOutcome::Completed {
            export: Some(action),
            ..
        } => {
            let path = action.run(writer)?;
            println!("Saved {}", path.display());
            Ok(())
        }
        TurnOutcome::Completed { .. } | TurnOutcome::Ignored => Ok(()),
        // The error bubble has already been rendered.
        TurnOutcome::Failed { .. } | TurnOutcome::Busy => std::process::exit(1),
    }
}

async fn repl(
    session: &mut ChatSession,
    writer: &mut TextDocumentWriter,
) -> ivy::error::Result<()> {
    session.greet();

    let mut composer = String::new();
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        prompt_marker(&composer);
        let Some(line) = lines.next_line().await? else {
            break; // EOF
        };
        let trimmed = line.trim();

        match trimmed {
            "/quit" | "/exit" => break,
            "/help" => println!("{HELP}"),
            "/export" => run_export(session, writer),
            command if command.starts_with('/') => {
                match command.trim_start_matches('/').parse::<StudyTool>() {
                    Ok(tool) => {
                        session.arm_tool(tool);
                        append_template(&mut composer, tool);
                        println!("{composer}");
                    }
                    Err(_) => println!("{HELP}"),
                }
            }
            _ => {
                let text = if composer.is_empty() {
                    line.clone()
                } else {
                    format!("{composer}{line}")
                };
                composer.clear();
                if let TurnOutcome::Completed {
                    export: Some(action),
                    ..
                } = session.send(&text).await
                {
                    println!("(type /export to save \"{}\" as a document)", action.title());
                }
            }
        }
    }

    Ok(())
}

/// Stage a tool template as a composer prefix. The next typed line
/// completes it and the whole thing is sent as one message.
fn append_template(composer: &mut String, tool: StudyTool) {
    if !composer.is_empty() {
        composer.push('\n');
    }
    composer.push_str(tool.template());
    composer.push_str("\n\n");
}

fn run_export(session: &ChatSession, writer: &mut TextDocumentWriter) {
    match session.last_export() {
        Some(action) => match action.run(writer) {
            Ok(path) => println!("Saved {}", path.display()),
            Err(e) => eprintln!("❌ {e}"),
        },
        None => println!("Nothing to export yet; arm a tool first."),
    }
}

fn prompt_marker(composer: &str) {
    if composer.is_empty() {
        print!("> ");
    } else {
        print!("… ");
    }
    let _ = std::io::stdout().flush();
}
