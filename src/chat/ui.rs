//! Chat mode UI components.

use crate::translation::Language;
use crate::ui::Style;

use super::session::SessionConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Interactive Ancient Translation Mode",
        Style::header("chronolingo"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &SessionConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("provider"),
        Style::value(&config.provider_name)
    );
    println!(
        "  {}      {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}   {}",
        Style::label("language"),
        Style::value(config.language.name())
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}    {}",
        Style::command("/config"),
        Style::secondary("Show current configuration")
    );
    println!(
        "  {}  {}",
        Style::command("/language"),
        Style::secondary("Switch target language: /language <key>")
    );
    println!(
        "  {}   {}",
        Style::command("/origins"),
        Style::secondary("Show the current language's origins")
    );
    println!(
        "  {}      {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}      {}",
        Style::command("/quit"),
        Style::secondary("Exit chat mode")
    );
    println!();
}

pub fn print_origins(language: Language) {
    println!("{}", Style::header(language.name()));
    println!("{}", language.profile().origins);
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
