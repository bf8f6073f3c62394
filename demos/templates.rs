//! Example demonstrating the template filters
//!
//! Run with: cargo run --example templates

use readout::template::render_str;
use tera::Context;

fn main() -> readout::Result<()> {
    let mut ctx = Context::new();
    ctx.insert("downloads", &1_534_000);
    ctx.insert("size", &3_221_225_472u64);
    ctx.insert("elapsed", &200_000);
    ctx.insert("done", &3);
    ctx.insert("total", &8);

    let out = render_str(
        "{{ downloads | compact }} downloads\n\
         {{ size | bytes(detailed=true) }}\n\
         up {{ elapsed | duration }} ({{ elapsed | duration_labels(short=false, separator=' ') }})\n\
         {{ done | percent(total=total) }} complete",
        &ctx,
    )?;
    println!("{out}");
    Ok(())
}
