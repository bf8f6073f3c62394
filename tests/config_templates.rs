//! Integration tests for configuration loading and template filters.
//!
//! A UI layer typically loads one [`FormatConfig`] at startup and renders
//! values through templates; these tests follow that flow end to end.

use readout::template::{register_filters, render_str};
use readout::{ErrorKind, FormatConfig};
use tera::{Context, Tera};

const CONFIG: &str = r#"{
    "compact": {
        "decimal_places": 2,
        "units": [
            {"threshold": "1000000000", "label": "bn"},
            {"threshold": "1000000", "label": "mn"},
            {"threshold": "1000", "label": "k"}
        ],
        "label_case": "lower"
    },
    "bytes": { "decimal_places": 0, "units": ["B", "KB", "MB", "GB", "TB"] },
    "time": { "show_zero_units": false, "separate_days": false },
    "percent": { "decimal_places": 0, "unit": " %" },
    "locale": "fr-FR"
}"#;

#[test_log::test]
fn test_config_drives_every_formatter() {
    let config = FormatConfig::from_json(CONFIG).unwrap();

    assert_eq!(config.compact_formatter().format(2_345_678).unwrap(), "2.34mn");
    assert_eq!(
        config.byte_size_formatter().unwrap().format(5u64 * 1024u64.pow(4)).unwrap(),
        "5TB"
    );
    assert_eq!(config.duration_formatter().format_clock(2 * 86_400 + 5), "48:00:05");
    assert_eq!(config.percent_formatter().format_of_total(2, 3).unwrap(), "66 %");
    assert_eq!(
        config
            .byte_size_formatter()
            .unwrap()
            .format_detailed(1_572_864)
            .unwrap(),
        "2MB (1\u{202f}572\u{202f}864 bytes)"
    );
}

#[test_log::test]
fn test_invalid_config_is_rejected() {
    let err = FormatConfig::from_json(r#"{"compact": {"units": []}}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PreconditionViolation);

    let err = FormatConfig::from_json("{\"compact\": ").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);

    let err = FormatConfig::from_json(r#"{"time": {"separator": 5}}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test_log::test]
fn test_render_dashboard_row() {
    let mut ctx = Context::new();
    ctx.insert("players", &1_250_000);
    ctx.insert("disk", &3_221_225_472u64);
    ctx.insert("uptime", &200_000);
    ctx.insert("done", &3);
    ctx.insert("total", &8);

    let out = render_str(
        "{{ players | compact }} players, {{ disk | bytes }}, up {{ uptime | duration_labels }}, \
         {{ done | percent(total=total) }}",
        &ctx,
    )
    .unwrap();
    assert_eq!(out, "1.2M players, 3.0GB, up 02d07h33m20s, 37.5%");
}

#[test_log::test]
fn test_register_filters_on_existing_tera() {
    let mut tera = Tera::default();
    tera.add_raw_template("row", "{{ n | grouped }} ({{ n | compact(decimals=0) }})")
        .unwrap();
    register_filters(&mut tera);

    let mut ctx = Context::new();
    ctx.insert("n", &9_876_543);
    assert_eq!(tera.render("row", &ctx).unwrap(), "9,876,543 (9M)");
}

#[test_log::test]
fn test_template_errors_surface_as_template_kind() {
    let mut ctx = Context::new();
    ctx.insert("n", &1);
    let err = render_str("{{ n | percent(total=0) }}", &ctx).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Template);

    let err = render_str("{{ n | compact", &ctx).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Template);
}
