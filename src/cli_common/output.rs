//! Консольный вывод результатов запуска

use colored::Colorize;
use std::path::Path;

use crate::relicense::{RunObserver, RunSummary};

/// Печатает строку на каждый изменённый файл по ходу запуска
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl RunObserver for ConsoleReporter {
    fn file_updated(&mut self, path: &Path, dry_run: bool) {
        println!("{}", update_line(path, dry_run));
    }
}

fn update_line(path: &Path, dry_run: bool) -> String {
    let label = if dry_run { "Would update:" } else { "Updated:" };
    format!("{} {}", label.green(), path.display())
}

/// Итоговая строка
pub fn print_summary(summary: &RunSummary) {
    println!("{}", summary);
}
