use clap::{ArgGroup, Args, Parser, Subcommand};
use searchbar::app::editor;
use searchbar::app::{self, state::HostOptions};
use searchbar::config;
use searchbar::domain::{AppearancePreference, SearchBarStyle, SizeCategory};
#[cfg(feature = "harness")]
use searchbar::harness;
use searchbar::logging;
use searchbar::ui::theme;

/// Terminal search bar with clear and cancel affordances.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Initial text owned by the host screen.
    #[arg(long, default_value = "")]
    text: String,

    /// Placeholder shown while the field is empty. Overrides the config file.
    #[arg(long)]
    placeholder: Option<String>,

    /// Clear affordance style. Overrides the config file.
    #[arg(long, value_enum)]
    style: Option<SearchBarStyle>,

    /// Light or dark palette; `auto` asks the terminal, then the OS.
    #[arg(long, value_enum)]
    appearance: Option<AppearancePreference>,

    /// Content size category.
    #[arg(long, value_enum)]
    size: Option<SizeCategory>,

    #[cfg(feature = "harness")]
    /// Render every preview configuration to stdout without entering interactive mode.
    #[arg(long, default_value_t = false)]
    harness_dump: bool,

    #[cfg(feature = "harness")]
    /// Print the view tree of every preview configuration as JSON.
    #[arg(long, default_value_t = false)]
    harness_json: bool,

    #[cfg(feature = "harness")]
    /// Harness frame width.
    #[arg(long, default_value_t = harness::PREVIEW_WIDTH)]
    harness_width: u16,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Inspect or edit searchbar configuration.
    Config(ConfigCommand),
}

#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("config_action")
        .required(true)
        .multiple(false)
        .args(["edit", "path"])
))]
struct ConfigCommand {
    /// Open the config file in $VISUAL/$EDITOR/nvim/vim/vi.
    #[arg(long)]
    edit: bool,

    /// Print the config file path.
    #[arg(long)]
    path: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Command::Config(command)) = cli.command {
        return handle_config_command(command);
    }

    logging::init(&config::log_file_path()?)?;

    let config = config::load_or_create()?;
    theme::apply(config.theme);

    #[cfg(feature = "harness")]
    if cli.harness_json {
        println!("{}", harness::render_preview_json()?);
        return Ok(());
    }

    #[cfg(feature = "harness")]
    if cli.harness_dump {
        let dump = harness::render_preview_dump(cli.harness_width)?;
        println!("{dump}");
        return Ok(());
    }

    let appearance = theme::resolve_appearance(cli.appearance.unwrap_or(config.appearance));

    app::run(HostOptions {
        text: cli.text,
        placeholder: cli.placeholder.unwrap_or(config.placeholder),
        style: cli.style.unwrap_or(config.style),
        appearance,
        size: cli.size.unwrap_or(config.size),
        animation: config.animation,
    })
}

fn handle_config_command(command: ConfigCommand) -> anyhow::Result<()> {
    let path = config::ensure_config_file()?;

    if command.path {
        println!("{}", path.display());
        return Ok(());
    }

    if command.edit {
        editor::edit_file_with_system_editor(path.as_path())?;
        return Ok(());
    }

    Ok(())
}
