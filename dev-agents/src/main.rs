//! dev-agents command line.
//!
//! Prints resolved commands from `.dev-agents.json` and task fields from
//! `.tasks/<id>/TASK.md` so Makefile targets and scripts can consume them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dev_agents::exit_codes;
use dev_agents::io::config::load_config;
use dev_agents::io::init::{InitOptions, InitReport, MakefileAction, ProjectPaths, init_project};
use dev_agents::io::task_store::{TaskNotFound, load_all_tasks, load_task};
use dev_agents::logging;

#[derive(Parser)]
#[command(
    name = "dev-agents",
    version,
    about = "Project configuration and task specs for AI coding agents"
)]
struct Cli {
    /// Project root containing `.dev-agents.json` and `.tasks/`.
    #[arg(short = 'C', long = "dir", default_value = ".", global = true)]
    dir: PathBuf,

    /// Enable debug diagnostics on stderr (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the Makefile include, config, and lint configs if missing.
    Init {
        /// Rewrite config and lint templates even if present.
        #[arg(short, long)]
        force: bool,
    },
    /// Print a command wrapped in the configured runner.
    Cmd {
        /// Raw shell command.
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },
    /// Print configured lint tools as JSON (`null` means auto-detect).
    LintTools,
    /// Print the PHP binary command.
    Php,
    /// Print the spec language.
    SpecLanguage,
    /// Print default scope items, one per line.
    SpecScope,
    /// Print the non-interactive AI command for a prompt.
    AiPrint {
        #[arg(allow_hyphen_values = true)]
        prompt: String,
    },
    /// Print the interactive AI command for a prompt.
    AiInteractive {
        #[arg(allow_hyphen_values = true)]
        prompt: String,
    },
    /// Inspect task specification documents.
    Task {
        #[command(subcommand)]
        command: TaskCommand,
    },
}

#[derive(Subcommand)]
enum TaskCommand {
    /// Print one task as JSON.
    Show { id: String },
    /// Print `<id>\t<status>` for every task, sorted by id.
    List,
}

fn main() {
    // clap exits with 2 on usage errors, which would read as NOT_FOUND.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                exit_codes::INVALID
            } else {
                exit_codes::OK
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        let code = if err.downcast_ref::<TaskNotFound>().is_some() {
            exit_codes::NOT_FOUND
        } else {
            exit_codes::INVALID
        };
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = cli.dir.as_path();
    match cli.command {
        Command::Init { force } => cmd_init(root, force),
        Command::Cmd { raw } => {
            println!("{}", load_config(root).build_command(&raw));
            Ok(())
        }
        Command::LintTools => {
            let tools = load_config(root).lint_tools();
            let json = serde_json::to_string_pretty(&tools).context("serialize lint tools")?;
            println!("{json}");
            Ok(())
        }
        Command::Php => {
            println!("{}", load_config(root).php_binary());
            Ok(())
        }
        Command::SpecLanguage => {
            println!("{}", load_config(root).spec_language());
            Ok(())
        }
        Command::SpecScope => {
            for item in load_config(root).spec_default_scope() {
                println!("{item}");
            }
            Ok(())
        }
        Command::AiPrint { prompt } => {
            println!("{}", load_config(root).ai_print_command(&prompt));
            Ok(())
        }
        Command::AiInteractive { prompt } => {
            println!("{}", load_config(root).ai_interactive_command(&prompt));
            Ok(())
        }
        Command::Task { command } => cmd_task(root, command),
    }
}

fn cmd_init(root: &Path, force: bool) -> Result<()> {
    let report = init_project(root, &InitOptions { force })?;
    for line in report_lines(&report) {
        println!("{line}");
    }
    Ok(())
}

fn report_lines(report: &InitReport) -> Vec<String> {
    let mut lines = Vec::new();
    if report.ai_cli.is_none() {
        lines.push("warning: claude CLI not found in PATH".to_string());
    }
    lines.push(
        match report.makefile {
            MakefileAction::Created => "created Makefile with dev-agents include",
            MakefileAction::IncludeAdded => "added dev-agents include to Makefile",
            MakefileAction::AlreadyConfigured => "Makefile already configured",
        }
        .to_string(),
    );
    if report.config_written {
        lines.push("wrote .dev-agents.json".to_string());
    }
    for name in &report.lint_configs_written {
        lines.push(format!("wrote {name}"));
    }
    lines
}

fn cmd_task(root: &Path, command: TaskCommand) -> Result<()> {
    let tasks_dir = ProjectPaths::new(root).tasks_dir;
    match command {
        TaskCommand::Show { id } => {
            let task = load_task(&tasks_dir, &id)?;
            let json = serde_json::to_string_pretty(&task).context("serialize task")?;
            println!("{json}");
        }
        TaskCommand::List => {
            let mut tasks: Vec<_> = load_all_tasks(&tasks_dir)?.into_values().collect();
            tasks.sort_by(|a, b| a.id.cmp(&b.id));
            for task in tasks {
                println!("{}\t{}", task.id, task.status);
            }
        }
    }
    Ok(())
}
