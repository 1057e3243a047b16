use anyhow::Result;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use scrapbook::{Config, Shell, ShellEvent, ViewInput};

const HELP: &str = "\
  #/path                 navigate (e.g. #/journal?tag=lab)
  search <term>          set the search box
  tag <name>             toggle a journal tag
  option <cat> <opt>     toggle a gallery option
  open <category>        open or close a gallery category
  clear                  clear search and selections
  image <n> | next | prev | close
                         lightbox controls
  layout                 toggle scrapbook layout
  menu                   toggle the navigation menu
  show                   print the content root
  help                   show this help
  quit                   exit";

/// One line of browse input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Navigate(String),
    Event(ShellEvent),
    Show,
    Help,
    Quit,
}

fn input(input: ViewInput) -> Command {
    Command::Event(ShellEvent::Input(input))
}

/// Parses one line; `Ok(None)` for blank lines
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if line.starts_with('#') {
        return Ok(Some(Command::Navigate(line.to_string())));
    }

    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match word {
        "search" => input(ViewInput::Search(rest.to_string())),
        "tag" if !rest.is_empty() => input(ViewInput::ToggleTag(rest.to_string())),
        "option" => {
            let Some((category, option)) = rest.split_once(' ') else {
                return Err("usage: option <category> <option>".to_string());
            };
            input(ViewInput::ToggleOption {
                category: category.to_string(),
                option: option.trim().to_string(),
            })
        }
        "open" if !rest.is_empty() => input(ViewInput::OpenCategory(rest.to_string())),
        "clear" => input(ViewInput::Clear),
        "image" => match rest.parse() {
            Ok(index) => input(ViewInput::OpenImage(index)),
            Err(_) => return Err("usage: image <index>".to_string()),
        },
        "next" => input(ViewInput::NextImage),
        "prev" => input(ViewInput::PrevImage),
        "close" => input(ViewInput::CloseLightbox),
        "layout" => Command::Event(ShellEvent::ToggleLayout),
        "menu" => Command::Event(ShellEvent::ToggleMenu),
        "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "tag" | "open" => return Err(format!("usage: {word} <name>")),
        other => return Err(format!("unknown command: {other}")),
    };

    Ok(Some(command))
}

fn status(shell: &Shell) {
    println!(
        "{} {} {}",
        "→".green(),
        shell.location().hash().cyan(),
        format!("({} bytes)", shell.content_html().len()).dimmed()
    );
}

pub async fn execute(config: Config) -> Result<()> {
    let mut shell = super::start_shell(config).await?;

    println!("{}", "Scrapbook browser - type `help` for commands".green().bold());
    status(&shell);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{}", message.yellow());
                continue;
            }
        };

        debug!(?command, "Browse command");
        match command {
            Command::Navigate(hash) => {
                shell.navigate(&hash);
            }
            Command::Event(event) => shell.dispatch(event),
            Command::Show => {
                println!("{}", shell.content_html());
                continue;
            }
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
        }

        shell.settle().await;
        status(&shell);
    }

    info!(hash = %shell.location().hash(), "Browse session ended");
    Ok(())
}
