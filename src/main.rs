//! Nagios check plugin for Dell EMC S-series switches running OS10 firmware.
//!
//! Reads hardware health, power supply and fan tray status and temperatures
//! from the Dell OS10 chassis MIB over SNMPv2c.
//!
//! Usage:
//!   check_dell_os10 -H 10.0.0.1 -m fans
//!   check_dell_os10 -H 10.0.0.1 -C secret -m temp -w 55 -c 65

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod check;
mod collector;
mod config;
mod formatter;
mod mib;
mod snmp;

use check::{CheckKind, Severity, Thresholds, Verdict};
use config::AppConfig;
use formatter::{JsonFormatter, NagiosFormatter, OutputFormat};

#[derive(Parser)]
#[command(
    name = "check_dell_os10",
    version,
    about = "Nagios check plugin for Dell|EMC S-series switches running OS10 firmware"
)]
struct Args {
    /// Адрес устройства
    #[arg(short = 'H', long)]
    host: String,

    /// UDP порт SNMP агента (по умолчанию из конфигурации, 161)
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// SNMPv2c community (по умолчанию SNMP_COMMUNITY или конфигурация)
    #[arg(short = 'C', long)]
    community: Option<String>,

    /// Режим проверки
    #[arg(short = 'm', long, value_enum)]
    mode: CheckKind,

    /// Порог warning для temp, °C (fans/power берут пороги из конфигурации)
    #[arg(short = 'w', long, allow_negative_numbers = true)]
    warning: Option<i64>,

    /// Порог critical для temp, °C (fans/power берут пороги из конфигурации)
    #[arg(short = 'c', long, allow_negative_numbers = true)]
    critical: Option<i64>,

    /// Таймаут одного SNMP запроса, секунды
    #[arg(short = 't', long)]
    timeout: Option<u64>,

    /// YAML файл с настройками
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Формат вывода
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Подробный лог в stderr (-v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let verdict = match run(&args).await {
        Ok(verdict) => verdict,
        Err(e) => {
            tracing::error!(error = ?e, "Проверка не выполнена");
            Verdict {
                severity: Severity::Unknown,
                findings: vec![format!("{:#}", e)],
                metrics: Vec::new(),
            }
        }
    };

    let output = match args.format {
        OutputFormat::Text => NagiosFormatter::format(&verdict),
        OutputFormat::Json => match JsonFormatter::to_json_string(args.mode, &verdict) {
            Ok(json) => json,
            Err(e) => {
                println!("UNKNOWN: {:#}", e);
                return ExitCode::from(Severity::Unknown.exit_code());
            }
        },
    };
    println!("{}", output);

    ExitCode::from(verdict.severity.exit_code())
}

async fn run(args: &Args) -> Result<Verdict> {
    let config = AppConfig::load(args.config.as_deref())?;
    config.debug_config();

    let port = args.port.unwrap_or_else(|| config.get_port());
    let target = target_address(&args.host, port);
    let community = match &args.community {
        Some(community) => community.clone().into_bytes(),
        None => config.get_community(),
    };
    let timeout = args
        .timeout
        .map(std::time::Duration::from_secs)
        .unwrap_or_else(|| config.get_timeout());

    let thresholds = resolve_thresholds(&config, args);
    tracing::debug!(%target, mode = ?args.mode, ?thresholds, "Запуск проверки");

    let mut client =
        snmp::create_v2c_client(&target, &community, timeout, config.get_retries()).await?;

    Ok(check::run_check(&mut client, args.mode, thresholds).await)
}

/// `host:port`; IPv6 литерал берётся в скобки
fn target_address(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}

/// Пороги из командной строки перекрывают конфигурацию.
/// Для fans/power `-w/-c` игнорируются: счётчики отказов задаются только конфигурацией
fn resolve_thresholds(config: &AppConfig, args: &Args) -> Thresholds {
    let defaults = config.thresholds_for(args.mode);
    if matches!(args.mode, CheckKind::Fans | CheckKind::Power) {
        return defaults;
    }
    Thresholds {
        warning: args.warning.unwrap_or(defaults.warning),
        critical: args.critical.unwrap_or(defaults.critical),
    }
}

/// Лог только в stderr: stdout принадлежит выводу плагина
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_accepts_short_flags() {
        let args = Args::try_parse_from([
            "check_dell_os10",
            "-H",
            "10.0.0.1",
            "-C",
            "secret",
            "-m",
            "temp",
            "-w",
            "55",
            "-c",
            "65",
        ])
        .unwrap();

        assert_eq!(args.mode, CheckKind::Temperature);
        assert_eq!(args.community.as_deref(), Some("secret"));
        assert_eq!(
            resolve_thresholds(&AppConfig::default(), &args),
            Thresholds {
                warning: 55,
                critical: 65
            }
        );
    }

    #[test]
    fn discrete_checks_default_to_fixed_pairs() {
        let args = Args::try_parse_from(["check_dell_os10", "-H", "sw1", "-m", "power"]).unwrap();
        assert_eq!(
            resolve_thresholds(&AppConfig::default(), &args),
            Thresholds {
                warning: 0,
                critical: 1
            }
        );
    }

    #[test]
    fn discrete_checks_ignore_command_line_thresholds() {
        let args = Args::try_parse_from([
            "check_dell_os10",
            "-H",
            "sw1",
            "-m",
            "fans",
            "-w",
            "50",
            "-c",
            "60",
        ])
        .unwrap();
        assert_eq!(
            resolve_thresholds(&AppConfig::default(), &args),
            Thresholds {
                warning: 1,
                critical: 2
            }
        );
    }

    #[test]
    fn discrete_checks_follow_config_thresholds() {
        let config =
            AppConfig::from_yaml("thresholds:\n  power:\n    warning: 2\n    critical: 3\n")
                .unwrap();
        let args = Args::try_parse_from([
            "check_dell_os10",
            "-H",
            "sw1",
            "-m",
            "power",
            "-w",
            "50",
        ])
        .unwrap();
        assert_eq!(
            resolve_thresholds(&config, &args),
            Thresholds {
                warning: 2,
                critical: 3
            }
        );
    }

    #[test]
    fn ipv6_hosts_are_bracketed() {
        assert_eq!(target_address("10.0.0.1", 161), "10.0.0.1:161");
        assert_eq!(target_address("sw1.example.net", 1161), "sw1.example.net:1161");
        assert_eq!(target_address("::1", 161), "[::1]:161");
        assert_eq!(target_address("[fe80::1]", 161), "[fe80::1]:161");
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Args::try_parse_from(["check_dell_os10", "-H", "sw1", "-m", "ports"]).is_err());
    }
}
