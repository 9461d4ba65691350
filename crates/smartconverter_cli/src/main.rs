//! CLI driver for the converter core.
//!
//! # Responsibility
//! - Verify `smartconverter_core` linkage (ping/version probe).
//! - Print every conversion for one input value, exactly as cards show it.
//! - Optionally copy one result by label, printing what the clipboard gets.
//!
//! Usage: `smartconverter_cli [VALUE] [COPY_LABEL]`
//!
//! Set `SMARTCONVERTER_LOG_DIR` (absolute) to enable file logging;
//! `SMARTCONVERTER_LOG_LEVEL` overrides the build-mode default level.

use smartconverter_core::{
    default_log_level, get_catalog, init_logging, Clipboard, ConversionSession, Dispatcher,
    NoopFeedback,
};

/// Terminal stand-in for the system clipboard.
struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text(&mut self, text: &str) -> std::io::Result<()> {
        println!("clipboard={text}");
        Ok(())
    }
}

fn main() {
    println!("smartconverter_core ping={}", smartconverter_core::ping());
    println!(
        "smartconverter_core version={}",
        smartconverter_core::core_version()
    );

    if let Ok(log_dir) = std::env::var("SMARTCONVERTER_LOG_DIR") {
        let level = std::env::var("SMARTCONVERTER_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_default();
    let copy_label = args.next();

    let mut dispatcher = Dispatcher::new(ConversionSession::new(), StdoutClipboard, NoopFeedback);
    dispatcher.set_input(raw);

    if let Some(label) = copy_label {
        let target = get_catalog()
            .iter()
            .flat_map(|category| category.conversions.iter())
            .find(|conversion| conversion.label.eq_ignore_ascii_case(label.trim()));
        match target {
            Some(conversion) => dispatcher.copy(conversion.id),
            None => eprintln!("unknown conversion label: {label}"),
        }
    }

    let view = dispatcher.view();
    println!("input={:?} value={}", view.raw_input, view.numeric_value);
    for category in &view.categories {
        println!("[{}]", category.title);
        for result in &category.results {
            let marker = if result.is_copied { " (copied)" } else { "" };
            println!(
                "  {:<24} {} {}{}",
                result.label, result.formatted_value, result.destination_unit_symbol, marker
            );
        }
    }
}
