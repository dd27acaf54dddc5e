use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use folio_core::catalog::Catalog;
use folio_core::config::Config;
use folio_core::content::Content;
use folio_core::pages::{render_markdown, Page};
use folio_core::shell::{Mode, TouchAction};
use folio_core::{FolioError, Result};

mod args;
mod logging;
mod render;
use args::{Cli, Commands, ConfigAction, PageName, Shell};
use logging::{init_logging, LogConfig};

#[cfg(feature = "gui")]
mod gui;

const BASE_DIR_ENV: &str = "FOLIO_BASE";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(
        &LogConfig::from_verbosity(cli.verbose, cli.quiet).with_ansi(io::stderr().is_terminal()),
    );

    let base_dir = resolve_base_dir(cli.base_dir);
    let content = cli.content;

    // Handle GUI flag
    #[cfg(feature = "gui")]
    if cli.gui {
        let result = load_catalog(&base_dir, content.as_deref()).and_then(gui::run);
        return match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{} {}", "[ERROR]".red().bold(), e);
                ExitCode::from(e.exit_code() as u8)
            }
        };
    }

    #[cfg(not(feature = "gui"))]
    if cli.gui {
        eprintln!(
            "{} GUI not available. Build with: cargo install --path crates/folio-cli --features gui",
            "[ERROR]".red().bold()
        );
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Some(Commands::Shell { touch }) => handle_shell(&base_dir, content.as_deref(), touch),
        Some(Commands::Exec {
            commands,
            json,
            each,
        }) => handle_exec(&base_dir, content.as_deref(), &commands, json, each),
        Some(Commands::Page { name }) => handle_page(&base_dir, content.as_deref(), name),
        Some(Commands::Tree) => handle_tree(&base_dir, content.as_deref()),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => handle_shell(&base_dir, content.as_deref(), false),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "folio", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var(BASE_DIR_ENV) {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".folio"))
        .unwrap_or_else(|| PathBuf::from(".folio"))
}

/// Config plus the catalog built from `--content`, `content.path`, or the builtin document
fn load_session(base_dir: &Path, content: Option<&Path>) -> Result<(Config, Catalog)> {
    let config = Config::load(base_dir)?;
    if !config.shell.color {
        colored::control::set_override(false);
    }

    let path = content.or(config.content.path.as_deref());
    let catalog = Catalog::with_config(Content::resolve(path)?, &config)?;
    Ok((config, catalog))
}

#[cfg_attr(not(feature = "gui"), allow(dead_code))]
fn load_catalog(base_dir: &Path, content: Option<&Path>) -> Result<Catalog> {
    load_session(base_dir, content).map(|(_, catalog)| catalog)
}

fn handle_shell(base_dir: &Path, content: Option<&Path>, touch: bool) -> Result<()> {
    let (config, catalog) = load_session(base_dir, content)?;
    let mode = if touch { Mode::Touch } else { config.shell.mode };
    let mut shell = folio_core::Shell::new(catalog, mode);

    tracing::info!(%mode, "starting shell");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let screen = shell.screen();
        println!("{}", render::render_screen(&screen, mode == Mode::Touch));

        match mode {
            Mode::Cli => print!("{} ", screen.prompt.as_deref().unwrap_or("$").green().bold()),
            Mode::Touch => print!("{} ", "select>".green().bold()),
        }
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            break;
        };
        let input = line.trim();

        match input.to_lowercase().as_str() {
            "exit" | "quit" => break,
            "help" => {
                print_help(mode);
                continue;
            }
            _ => {}
        }

        match mode {
            Mode::Cli => {
                shell.execute(input);
            }
            Mode::Touch => match pick_action(&screen, input) {
                Some(action) => {
                    shell.touch(&action);
                }
                None if input.is_empty() => {}
                None => println!("{} pick a number from the list, or b to go back", "?".yellow()),
            },
        }
    }

    Ok(())
}

/// Map touch-mode input (`<n>` or `b`) to an action
fn pick_action(screen: &folio_core::Screen, input: &str) -> Option<TouchAction> {
    if input.eq_ignore_ascii_case("b") || input.eq_ignore_ascii_case("back") {
        return screen.can_go_back.then_some(TouchAction::Back);
    }
    let n: usize = input.parse().ok()?;
    let row = screen.body.rows().get(n.checked_sub(1)?)?;
    Some(row.target.action())
}

fn print_help(mode: Mode) {
    println!();
    match mode {
        Mode::Cli => {
            println!("  {}            list directories", "pwd".cyan());
            println!("  {}   open a directory or sub-directory", "cd <directory>".cyan());
            println!("  {}          go up one level", "cd ..".cyan());
            println!("  {}     open a file", "cat <file>".cyan());
            println!("  {}              close the open file or sub-directory", "q".cyan());
        }
        Mode::Touch => {
            println!("  {}            open the numbered entry", "<n>".cyan());
            println!("  {}              go back one level", "b".cyan());
        }
    }
    println!("  {}           leave the shell", "exit".cyan());
    println!();
}

fn handle_exec(
    base_dir: &Path,
    content: Option<&Path>,
    commands: &[String],
    json: bool,
    each: bool,
) -> Result<()> {
    let (_, catalog) = load_session(base_dir, content)?;
    let mut shell = folio_core::Shell::new(catalog, Mode::Cli);

    let mut screens = Vec::new();
    for command in commands {
        shell.execute(command);
        if each {
            screens.push((command.as_str(), shell.screen()));
        }
    }
    if !each {
        screens.push(("", shell.screen()));
    }

    if json {
        let out = if each {
            serde_json::to_string_pretty(&screens.iter().map(|(_, s)| s).collect::<Vec<_>>())?
        } else {
            serde_json::to_string_pretty(&screens[0].1)?
        };
        println!("{out}");
        return Ok(());
    }

    for (command, screen) in &screens {
        if each {
            println!("{} {}", "$".green().bold(), command);
        }
        println!("{}", render::render_screen(screen, false));
    }
    Ok(())
}

fn handle_page(base_dir: &Path, content: Option<&Path>, name: PageName) -> Result<()> {
    let (_, catalog) = load_session(base_dir, content)?;
    let page = match name {
        PageName::Experience => Page::Experience,
        PageName::Education => Page::Education,
        PageName::Projects => Page::Projects,
        PageName::Certifications => Page::Certifications,
        PageName::Skills => Page::Skills,
    };
    print!("{}", render_markdown(page, catalog.content()));
    Ok(())
}

fn handle_tree(base_dir: &Path, content: Option<&Path>) -> Result<()> {
    let (_, catalog) = load_session(base_dir, content)?;
    print!("{}", render::render_tree(&catalog));
    Ok(())
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(FolioError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}
