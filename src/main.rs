use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "taglink", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (disables config discovery)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Show detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: suppress notices
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the tag under the cursor as a link
    Open {
        /// File containing the line (omit when using --text)
        #[arg(required_unless_present = "text")]
        file: Option<PathBuf>,

        /// Line text to search instead of reading a file
        #[arg(long, conflicts_with = "file", allow_hyphen_values = true)]
        text: Option<String>,

        /// 1-based line number within the file
        #[arg(short, long, default_value_t = 1)]
        line: usize,

        /// 0-based character offset of the cursor within the line
        #[arg(long)]
        cursor: usize,

        /// Print the link instead of opening the browser
        #[arg(long)]
        no_open: bool,
    },

    /// Resolve a tag (without its marker) and print the link
    Resolve {
        #[arg(allow_hyphen_values = true)]
        tag: String,
    },

    /// Validate every configured rule
    Check {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output_format: OutputFormat,
    },

    /// List or edit the configured rules
    Rule {
        #[command(subcommand)]
        action: RuleAction,
    },

    /// Convert the note editor plugin's data.json into a taglink config
    Import {
        /// Path to the plugin's data.json
        file: String,

        /// Output file path (default: .taglink.toml)
        #[arg(short, long)]
        output: Option<String>,

        /// Print the converted configuration instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Create a starter .taglink.toml in the current directory
    Init,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (detected from $SHELL if omitted)
        #[arg(value_enum)]
        shell: Option<Shell>,

        /// List available shells
        #[arg(long)]
        list: bool,
    },
}

#[derive(Subcommand)]
pub enum RuleAction {
    /// Show all rules with their diagnostics
    List,

    /// Append an empty rule
    Add {
        /// Pattern for the new rule
        #[arg(long, allow_hyphen_values = true)]
        pattern: Option<String>,

        /// Template for the new rule
        #[arg(long, allow_hyphen_values = true)]
        template: Option<String>,
    },

    /// Remove the rule at INDEX
    Remove { index: usize },

    /// Replace the pattern of the rule at INDEX
    SetPattern {
        index: usize,
        #[arg(allow_hyphen_values = true)]
        pattern: String,
    },

    /// Replace the template of the rule at INDEX
    SetTemplate {
        index: usize,
        #[arg(allow_hyphen_values = true)]
        template: String,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Open {
            file,
            text,
            line,
            cursor,
            no_open,
        } => commands::open::handle_open(
            config_path,
            commands::open::OpenArgs {
                file,
                text,
                line,
                cursor,
                no_open,
                quiet: cli.quiet,
            },
        ),
        Commands::Resolve { tag } => commands::resolve::handle_resolve(config_path, &tag, cli.verbose, cli.quiet),
        Commands::Check { output_format } => commands::check::handle_check(config_path, output_format),
        Commands::Rule { action } => commands::rule::handle_rule(config_path, action, cli.quiet),
        Commands::Import { file, output, dry_run } => commands::import::handle_import(file, output, dry_run),
        Commands::Init => commands::init::handle_init(),
        Commands::Completions { shell, list } => commands::completions::handle_completions(shell, list),
    }
}
