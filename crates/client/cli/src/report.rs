//! Plain-text simulation report.
use std::collections::BTreeMap;
use std::io::{self, Write};

use rotation_core::TargetHandle;
use runtime::{CastRecord, Simulation};

/// Which parts of the report to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    /// Cast log followed by the summary.
    Full,
    /// Summary only, for runs that printed casts as they happened.
    Summary,
}

pub fn print(simulation: &Simulation, report: Report) -> io::Result<()> {
    write(&mut io::stdout().lock(), simulation, report)
}

pub fn print_cast(cast: &CastRecord) -> io::Result<()> {
    write_cast(&mut io::stdout().lock(), cast)
}

fn write(out: &mut impl Write, simulation: &Simulation, report: Report) -> io::Result<()> {
    if report == Report::Full {
        for cast in simulation.casts() {
            write_cast(out, cast)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{:<32} {:>5}", "ability", "casts")?;
    for (name, count) in summarize(simulation.casts()) {
        writeln!(out, "{:<32} {:>5}", name, count)?;
    }

    let stats = simulation.stats();
    writeln!(out)?;
    writeln!(
        out,
        "ticks: {}  casts: {}  idle: {} (longest streak {})  dispatch rate: {:.1}%",
        stats.ticks,
        simulation.casts().len(),
        stats.idle,
        stats.longest_idle_streak,
        stats.dispatch_rate() * 100.0
    )
}

fn write_cast(out: &mut impl Write, cast: &CastRecord) -> io::Result<()> {
    writeln!(
        out,
        "{:>7.1}s  {:<32} {}",
        cast.at.as_secs_f32(),
        cast.name,
        target_label(cast.target)
    )
}

/// Casts per ability, most used first, ties by name.
fn summarize(casts: &[CastRecord]) -> Vec<(&str, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for cast in casts {
        *counts.entry(cast.name.as_str()).or_default() += 1;
    }
    let mut summary: Vec<_> = counts.into_iter().collect();
    summary.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    summary
}

fn target_label(target: TargetHandle) -> String {
    if target.is_player() {
        "self".to_string()
    } else {
        format!("unit {}", target.0)
    }
}
