//! Console reporting for training runs.
use colored::Colorize;

use std::time::Instant;

const WIDTH: usize = 12;
const PREC_WIDTH: usize = 5;

/// Prints the progress of one tree induction:
/// a column header, one `[LOG]` line per chosen split,
/// and a `[FIN]` summary of the finished tree.
pub(crate) struct TrainLog {
    start: Instant,
}

impl TrainLog {
    /// Starts timing and prints the column header.
    pub(crate) fn start() -> Self {
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "LEVEL".bold().red(),
            "FEATURE".bold().blue(),
            "GAIN".bold().green(),
            "ROWS".bold().yellow(),
        );
        Self { start: Instant::now() }
    }

    /// Reports one chosen split.
    pub(crate) fn split(&self, level: usize, name: &str, gain: f64, n_sample: usize) {
        println!(
            "{} {}\t{}\t{}\t{}",
            "[LOG]".bold().magenta(),
            format!("{level:>WIDTH$}").red(),
            format!("{name:>WIDTH$}").blue(),
            format!("{gain:>WIDTH$.PREC_WIDTH$}").green(),
            format!("{n_sample:>WIDTH$}").yellow(),
        );
    }

    /// Reports the finished tree and the elapsed wall-clock time.
    pub(crate) fn finish(&self, leaves: usize, depth: usize) {
        let time = time_format(self.start.elapsed().as_millis());
        println!(
            "{} {} leaves, depth {}, trained in {}\n",
            "[FIN]".bold().bright_green(),
            format!("{leaves}").bold().green(),
            format!("{depth}").bold().green(),
            time.bold().cyan(),
        );
    }
}

/// Renders a duration in the widest sensible unit.
fn time_format(millisec: u128) -> String {
    let sec = millisec / 1_000;
    let min = sec / 60;
    let hours = min / 60;
    if hours > 0 {
        format!(" {hours:0>2}h {:0>2}m", min % 60)
    } else if min > 0 {
        format!(" {min:0>2}m {:0>2}s", sec % 60)
    } else if sec > 0 {
        format!(" {sec:0>2}.{:0>3}s", millisec % 1_000)
    } else {
        format!("  0.{millisec:0>3}s")
    }
}
