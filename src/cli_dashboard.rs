use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use crossterm::style::Stylize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli_style;

use cli_style::{accent, colors, get_styles};
use hub_catalog_server::dashboard::{
    stats_line, text, Dashboard, DashboardView, HttpCatalogApi, Theme, DEFAULT_BASE_URL,
    DEFAULT_PRIMARY_HUE, DEFAULT_SECONDARY_HUE,
};

use rustyline::{
    completion::Completer, highlight::Highlighter, history::FileHistory, validate::Validator,
    CompletionType, Config, Editor, Helper,
};

#[derive(Parser, Debug)]
#[command(styles=get_styles(), version, about = "Terminal dashboard for HaloAI Studios Hub")]
struct CliArgs {
    /// Base URL of the catalog service.
    #[clap(long, env = "HUB_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Timeout in seconds for each request to the catalog service.
    #[clap(long, default_value_t = 10)]
    pub timeout_sec: u64,

    /// Initial primary hue, in degrees.
    #[clap(long, default_value_t = DEFAULT_PRIMARY_HUE as i64)]
    pub primary_hue: i64,

    /// Initial secondary hue, in degrees.
    #[clap(long, default_value_t = DEFAULT_SECONDARY_HUE as i64)]
    pub secondary_hue: i64,

    /// Print the dashboard once and exit.
    #[clap(long)]
    pub once: bool,
}

#[derive(Parser)]
#[command(styles=get_styles(), name = "")]
struct InnerCli {
    #[command(subcommand)]
    command: InnerCommand,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HueTarget {
    Primary,
    Secondary,
}

#[derive(Subcommand)]
enum InnerCommand {
    /// Redraws the dashboard.
    Show,

    /// Changes one of the theme hues (0-360).
    Hue {
        target: HueTarget,
        #[arg(allow_hyphen_values = true)]
        value: i64,
    },

    /// Opens the quick menu, it closes by itself after a few seconds.
    Menu,

    /// Closes the quick menu.
    Close,

    /// Launches the project with the given id.
    Launch { id: String },

    /// Close this program.
    Exit,
}

enum CommandExecutionResult {
    Ok,
    Exit,
    Error(String),
}

fn print_dashboard(dashboard: &Dashboard) {
    let accents = dashboard.theme().accents();
    let primary = accent(accents.primary);
    let secondary = accent(accents.secondary);

    match DashboardView::of(dashboard) {
        DashboardView::Loading { title, detail } => {
            println!("{}", title.with(primary).bold());
            println!("{}", detail.with(colors::DIM));
        }
        DashboardView::Ready {
            warning,
            stats_line,
            cards,
            theme,
            context_menu_open,
        } => {
            cli_style::print_banner(primary, secondary);
            println!("  {}", text::TITLE.with(primary).bold());
            println!("  {}", text::SUBTITLE.with(colors::DIM));

            if let Some(warning) = warning {
                println!();
                cli_style::print_warning(text::WARNING_TITLE);
                cli_style::print_warning(&warning);
            }
            if let Some(stats_line) = stats_line {
                println!();
                println!("  {}", stats_line.with(secondary).bold());
            }

            cli_style::print_section_header("Projects", primary);
            for card in &cards {
                cli_style::print_card(
                    &card.id,
                    &card.title,
                    &card.description,
                    &card.status,
                    primary,
                );
            }
            cli_style::print_section_footer(primary);

            cli_style::print_section_header(text::THEME_TITLE, secondary);
            cli_style::print_key_value("Primary", &theme.primary_label, primary);
            cli_style::print_key_value("Secondary", &theme.secondary_label, secondary);
            cli_style::print_section_footer(secondary);

            cli_style::print_section_header(text::QUICK_START_TITLE, secondary);
            for step in text::QUICK_START_STEPS {
                cli_style::print_list_item(step, secondary, 1);
            }
            cli_style::print_section_footer(secondary);

            if context_menu_open {
                cli_style::print_section_header(text::CONTEXT_MENU_TITLE, primary);
                for item in text::CONTEXT_MENU_ITEMS {
                    cli_style::print_boxed_line(item, primary, colors::WHITE);
                }
                cli_style::print_section_footer(primary);
            }

            println!();
            println!("  {}", text::TECH_STACK.join("  ").with(colors::DIM));
        }
    }
}

/// Prompt drawn in the current accent colors.
fn prompt_for(dashboard: &Dashboard) -> String {
    let (primary, secondary) = prompt_colors(dashboard);
    cli_style::get_prompt(primary, secondary)
}

fn prompt_colors(dashboard: &Dashboard) -> (crossterm::style::Color, crossterm::style::Color) {
    let accents = dashboard.theme().accents();
    (accent(accents.primary), accent(accents.secondary))
}

fn execute_command(line: String, dashboard: &mut Dashboard) -> CommandExecutionResult {
    if line.is_empty() {
        return CommandExecutionResult::Ok;
    }

    let args =
        shlex::split(&line).unwrap_or_else(|| line.split_whitespace().map(String::from).collect());

    let cli = InnerCli::try_parse_from(std::iter::once(" ").chain(args.iter().map(String::as_str)));

    match cli {
        Ok(cli) => match cli.command {
            InnerCommand::Show => print_dashboard(dashboard),
            InnerCommand::Hue { target, value } => {
                let hue = match target {
                    HueTarget::Primary => dashboard.theme_mut().set_primary_hue(value),
                    HueTarget::Secondary => dashboard.theme_mut().set_secondary_hue(value),
                };
                print_dashboard(dashboard);
                cli_style::print_success(&format!("{:?} hue set to {}", target, hue));
            }
            InnerCommand::Menu => {
                dashboard.open_context_menu();
                print_dashboard(dashboard);
            }
            InnerCommand::Close => {
                dashboard.close_context_menu();
                print_dashboard(dashboard);
            }
            InnerCommand::Launch { id } => match dashboard.select_project(&id) {
                Some(project) => cli_style::print_success(&format!("Launching {}", project.name)),
                None => return CommandExecutionResult::Error(format!("Unknown project '{}'", id)),
            },
            InnerCommand::Exit => return CommandExecutionResult::Exit,
        },
        Err(e) => {
            if e.print().is_err() {
                println!("{}", e);
            }
        }
    }
    CommandExecutionResult::Ok
}

#[derive(rustyline_derive::Hinter)]
struct DashboardHelper {
    commands_names: Vec<String>,
}

impl DashboardHelper {
    pub fn new() -> Self {
        let commands_names: Vec<String> = InnerCli::command()
            .get_subcommands()
            .map(|sc| sc.get_name().to_string())
            .collect();

        DashboardHelper { commands_names }
    }
}

impl Completer for DashboardHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        if line.contains(' ') {
            return Ok((0, Vec::with_capacity(0)));
        }
        let matches = self
            .commands_names
            .iter()
            .filter(|c| c.starts_with(line))
            .cloned()
            .collect::<Vec<_>>();

        Ok((0, matches))
    }
}

impl Highlighter for DashboardHelper {}
impl Validator for DashboardHelper {}
impl Helper for DashboardHelper {}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Could not initialize logging")?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;

    let api = HttpCatalogApi::new(&cli_args.base_url, cli_args.timeout_sec)?;

    let mut theme = Theme::default();
    theme.set_primary_hue(cli_args.primary_hue);
    theme.set_secondary_hue(cli_args.secondary_hue);
    let mut dashboard = Dashboard::new(theme);

    print_dashboard(&dashboard);
    runtime.block_on(dashboard.load(&api));
    // Menu timers are spawned from the REPL thread.
    let _guard = runtime.enter();
    if let Some(stats) = dashboard.phase().stats() {
        tracing::info!("{}", stats_line(stats));
    }

    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
        crossterm::cursor::MoveTo(0, 0)
    );
    print_dashboard(&dashboard);
    if cli_args.once {
        return Ok(());
    }

    println!();
    InnerCli::command().print_long_help()?;

    let config = Config::builder()
        .completion_type(CompletionType::List)
        .build();
    let mut rl = Editor::<DashboardHelper, FileHistory>::with_config(config)?;
    rl.set_helper(Some(DashboardHelper::new()));

    loop {
        match rl.readline(&prompt_for(&dashboard)) {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                match execute_command(line.trim().to_string(), &mut dashboard) {
                    CommandExecutionResult::Ok => {}
                    CommandExecutionResult::Exit => break,
                    CommandExecutionResult::Error(err) => cli_style::print_error(&err),
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("CTRL-D: exiting.");
                break;
            }
            Err(e) => {
                cli_style::print_error(&format!("{:?}", e));
                break;
            }
        }
    }

    cli_style::print_goodbye();
    Ok(())
}
