use anyhow::Result;
use clap::Parser;

use chronolingo_cli::cli::commands::{analyze, chat, configure, providers, translate};
use chronolingo_cli::cli::{Args, Command};
use chronolingo_cli::output::{self, OutputConfig};
use chronolingo_cli::translation::{Language, print_languages, print_origins};
use chronolingo_cli::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || std::env::var("NO_COLOR").is_ok(),
    });

    if let Err(e) = run(args).await {
        eprintln!("{} {e:#}", Style::error("Error:"));
        std::process::exit(exitcode::SOFTWARE);
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Languages { origins }) => {
            if origins {
                print_origins();
            } else {
                print_languages();
            }
        }
        Some(Command::Providers { provider }) => {
            providers::print_providers(provider.as_deref())?;
        }
        Some(Command::Configure) => {
            configure::run_configure()?;
        }
        Some(Command::Analyze {
            file,
            format,
            provider,
            model,
        }) => {
            let options = analyze::AnalyzeOptions {
                file,
                format,
                provider,
                model,
            };
            analyze::run_analyze(options).await?;
        }
        Some(Command::Chat {
            to,
            provider,
            model,
        }) => {
            if let Some(ref lang) = to {
                Language::from_key(lang)?;
            }

            let options = chat::ChatOptions {
                to,
                provider,
                model,
            };
            chat::run_chat(options).await?;
        }
        None => {
            if let Some(ref lang) = args.to {
                Language::from_key(lang)?;
            }

            let options = translate::TranslateOptions {
                file: args.file,
                to: args.to,
                provider: args.provider,
                model: args.model,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
