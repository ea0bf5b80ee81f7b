//! One complete run: journal bookkeeping around the printer.

use std::io::Write;
use std::time::Instant;

use fb_sequence::FizzBuzz;

use crate::config::Config;
use crate::error::RunError;
use crate::journal::RunJournal;
use crate::printer::{write_sequence, Printer};
use crate::style::Style;

/// Print the configured sequence to `writer`. Returns the number of lines.
///
/// `is_tty` feeds `auto` color resolution; pass `false` for anything that
/// is not an interactive terminal.
pub fn run<W: Write>(config: &Config, writer: W, is_tty: bool) -> Result<usize, RunError> {
    let seq = FizzBuzz::new(config.sequence.max);
    let style = Style::for_mode(config.output.color, is_tty);
    let mut journal = open_journal(config);

    journal.log_started(seq.max());
    let start = Instant::now();

    let mut printer = Printer::new(writer, style);
    match write_sequence(&seq, &mut printer) {
        Ok(lines) => {
            let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            journal.log_finished(lines, duration_ms);
            Ok(lines)
        }
        Err(e) => {
            journal.log_failed(printer.lines_formatted(), &e.to_string());
            Err(RunError::Output(e))
        }
    }
}

fn open_journal(config: &Config) -> RunJournal {
    if !config.journal.enabled {
        return RunJournal::noop();
    }
    let path = config.journal.resolve_path();
    match RunJournal::new(&path) {
        Ok(journal) => journal,
        Err(e) => {
            eprintln!(
                "[fb:journal] warning: failed to open {}: {e}",
                path.display()
            );
            RunJournal::noop()
        }
    }
}
