use clap::ValueEnum;

pub mod json;
pub mod nagios;

pub use json::JsonFormatter;
pub use nagios::NagiosFormatter;

/// Формат вывода (`--format`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
