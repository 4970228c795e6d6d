//! Interactive command shim wiring the coordinator to a terminal.

use std::io::{self, BufRead, Write};

use notekeep::{
    observability, render, ApiClient, Config, ConsoleFrontend, Controller, Intent, NoteView, Theme,
};

/// One line of user input, parsed.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Intent(Intent),
    Add,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match (verb, rest) {
        ("", _) => Command::Empty,
        ("add", _) => Command::Add,
        ("refresh", "") => Command::Intent(Intent::Refresh),
        ("delete", id) if !id.is_empty() => Command::Intent(Intent::DeleteRequested {
            id: id.to_string(),
        }),
        ("archive", id) if !id.is_empty() => Command::Intent(Intent::ArchiveRequested {
            id: id.to_string(),
        }),
        ("unarchive", id) if !id.is_empty() => Command::Intent(Intent::UnarchiveRequested {
            id: id.to_string(),
        }),
        ("view", name) => match NoteView::parse(name) {
            Some(view) => Command::Intent(Intent::SwitchView { view }),
            None => Command::Unknown(line.to_string()),
        },
        ("help", "") | ("?", "") => Command::Help,
        ("quit", "") | ("exit", "") | ("q", "") => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

fn terminal_cols() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|&c| c >= 20)
        .unwrap_or(80)
}

fn prompt_line(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Prompts for title and body, previewing the draft before submission.
fn read_draft(theme: &Theme, cols: usize) -> io::Result<Option<Intent>> {
    let title = prompt_line("Title: ")?;
    let body = prompt_line("Body:  ")?;

    let draft = notekeep::NoteDraft::new(&title, &body);
    print!("{}", notekeep::ui::components::render_form(&draft, theme, cols));
    if !draft.is_submittable() {
        return Ok(None);
    }
    Ok(Some(Intent::SubmitNote { title, body }))
}

fn print_help() {
    println!(
        "commands:\n  add                     create a note (prompts for title and body)\n  delete <id>             delete a note\n  archive <id>            move a note to the archive\n  unarchive <id>          move a note back to the active list\n  view <active|archived>  switch the visible collection\n  refresh                 reload both collections\n  help                    show this text\n  quit                    exit"
    );
}

#[tokio::main]
async fn main() {
    let config = Config::from_env();
    let _log_guard = observability::init_tracing(&config.trace_level, config.log_to_file);

    let theme = match config.load_theme() {
        Ok(theme) => theme,
        Err(e) => {
            eprintln!("{e}; using built-in theme");
            Theme::default()
        }
    };

    let cols = terminal_cols();
    let api = ApiClient::new(&config.base_url);
    let frontend = ConsoleFrontend::new(theme.clone());
    let mut controller = Controller::new(api, frontend, theme.clone());

    tracing::info!(base_url = %config.base_url, "starting");
    controller.initialize().await;
    print!("{}", render(controller.state(), cols));

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let should_render = match parse_command(&line) {
            Command::Empty => false,
            Command::Help => {
                print_help();
                false
            }
            Command::Quit => break,
            Command::Unknown(input) => {
                println!("unknown command: {input} (try `help`)");
                false
            }
            Command::Add => match read_draft(&theme, cols) {
                Ok(Some(intent)) => controller.dispatch(intent).await,
                Ok(None) => false,
                Err(_) => break,
            },
            Command::Intent(intent) => controller.dispatch(intent).await,
        };

        if should_render {
            print!("{}", render(controller.state(), cols));
        }
    }

    tracing::info!("exiting");
}
