//! Общая обвязка CLI
//!
//! - Инициализация логирования
//! - Вывод результатов запуска в консоль
//! - Аргументы командной строки

use anyhow::Result;
use colored::Colorize;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod output;

pub use args::CliArgs;
pub use output::{print_summary, ConsoleReporter};

/// Инициализирует логирование в stderr.
///
/// Если задан `RUST_LOG`, используется он; иначе WARN, с `--verbose` DEBUG.
/// Stdout остаётся за строками по файлам и итоговой строкой.
pub fn init_logging(verbose: bool) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(verbose, rust_log.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))?;

    Ok(())
}

/// Фильтр логов: директивы из `RUST_LOG`, если они разбираются, иначе уровень по флагу
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if let Some(filter) = rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
    {
        return filter;
    }

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    EnvFilter::default().add_directive(level.into())
}

/// Отключает цвета, когда stdout перенаправлен
pub fn configure_colors() {
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

/// Печатает ошибку в stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::layer::Layer;
    use tracing_subscriber::Registry;

    fn max_level(filter: &EnvFilter) -> Option<LevelFilter> {
        Layer::<Registry>::max_level_hint(filter)
    }

    #[test]
    fn test_default_levels() {
        assert_eq!(max_level(&log_filter(false, None)), Some(LevelFilter::WARN));
        assert_eq!(max_level(&log_filter(true, None)), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_rust_log_wins_over_flag() {
        assert_eq!(
            max_level(&log_filter(false, Some("debug"))),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            max_level(&log_filter(true, Some("error"))),
            Some(LevelFilter::ERROR)
        );
    }

    #[test]
    fn test_empty_rust_log_falls_back_to_flag() {
        assert_eq!(max_level(&log_filter(false, Some(""))), Some(LevelFilter::WARN));
    }
}
