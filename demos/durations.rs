//! Example showing clock and labeled duration formatting
//!
//! Run with: cargo run --example durations

use readout::{DurationFormatter, TimeLabel, TimeLabels, TimeUnit};

fn main() {
    let samples = [0u64, 9, 65, 3_661, 86_400, 90_061, 500_000];

    let clock = DurationFormatter::new();
    let compact_clock = DurationFormatter::new().show_zero_units(false);
    let folded = DurationFormatter::new().separate_days(false);
    let labeled = DurationFormatter::labeled();
    let words = DurationFormatter::labeled()
        .use_short_labels(false)
        .segment_separator(" ");

    println!(
        "{:>8} | {:>12} | {:>12} | {:>10} | {:>14} | full",
        "seconds", "clock", "hide zeros", "folded", "labeled"
    );
    for secs in samples {
        println!(
            "{secs:>8} | {:>12} | {:>12} | {:>10} | {:>14} | {}",
            clock.format_clock(secs),
            compact_clock.format_clock(secs),
            folded.format_clock(secs),
            labeled.format_labeled(secs),
            words.format_labeled(secs),
        );
    }

    println!("\n--- Custom Labels ---\n");
    let labels = TimeLabels::default()
        .with(TimeUnit::Day, TimeLabel::new("j", "jour"))
        .with(TimeUnit::Second, TimeLabel::new("s", "seconde"));
    let french = DurationFormatter::labeled().labels(labels);
    println!("{}", french.format_labeled(90_061));
}
