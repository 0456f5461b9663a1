use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "chronolingo")]
#[command(about = "Ancient-language translation CLI tool")]
#[command(version)]
pub struct Args {
    /// File containing English text to translate (reads from stdin if not provided)
    pub file: Option<String>,

    /// Target ancient language (sumerian, greek, hieroglyphics)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Provider name from the config file
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Suppress status output (previews, progress notes)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a document (.pdf, .txt, .csv) for historical context
    Analyze {
        /// Document to analyze
        file: String,

        /// Declared document format (pdf, txt, csv); inferred from the
        /// file extension if omitted
        #[arg(short = 'f', long)]
        format: Option<String>,

        /// Provider name from the config file
        #[arg(short = 'p', long)]
        provider: Option<String>,

        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,
    },
    /// Configure chronolingo default settings
    Configure,
    /// List supported ancient languages
    Languages {
        /// Print the full language-origins descriptions
        #[arg(long)]
        origins: bool,
    },
    /// List configured providers
    Providers {
        /// Show details for one provider
        provider: Option<String>,
    },
    /// Interactive chat mode for translation
    Chat {
        /// Target ancient language (sumerian, greek, hieroglyphics)
        #[arg(short = 't', long = "to")]
        to: Option<String>,

        /// Provider name from the config file
        #[arg(short = 'p', long)]
        provider: Option<String>,

        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,
    },
}
