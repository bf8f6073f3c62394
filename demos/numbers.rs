//! Example showing compact counts, byte sizes, grouped numbers, and percentages
//!
//! Run with: cargo run --example numbers

use readout::{
    ByteSizeFormatter, ByteUnit, ByteUnits, CompactFormatter, Grouping, LabelCase, UnitTable,
    format_bytes, format_compact, format_grouped, format_percent_of_total,
};

fn main() -> readout::Result<()> {
    println!("=== Compact Numbers ===\n");
    for value in [999, 1_500, 999_999, 1_000_000, -2_345_678, 7_200_000_000_000i64] {
        println!("{value:>16} -> {}", format_compact(value, 1)?);
    }

    let words = UnitTable::new([(1_000_000_000, "Billion"), (1_000_000, "Million"), (1_000, "Thousand")])?;
    let f = CompactFormatter::new().table(words).label_case(LabelCase::Lower);
    println!("{:>16} -> {}", 2_500_000, f.format(2_500_000)?);

    println!("\n=== Byte Sizes ===\n");
    for bytes in [0u64, 512, 1_536, 1_572_864, 5 * 1024u64.pow(4)] {
        println!("{bytes:>16} -> {}", format_bytes(bytes)?);
    }
    let extended = ByteSizeFormatter::new().units(ByteUnits::extended()).decimal_places(2);
    println!("{:>16} -> {}", 5 * 1024u64.pow(4), extended.format(5 * 1024u64.pow(4))?);
    println!("{:>16} -> {}", 1_572_864, extended.format_in(1_572_864, ByteUnit::Kilobytes)?);
    println!("{:>16} -> {}", 1_572_864, extended.format_detailed(1_572_864)?);

    println!("\n=== Grouped ===\n");
    println!("{}", format_grouped(1_234_567)?);
    println!("{}", Grouping::for_locale("de-DE")?.format_with_places("1234567.891", 2)?);

    println!("\n=== Percentages ===\n");
    println!("{}", format_percent_of_total(2, 3, 2)?);

    Ok(())
}
