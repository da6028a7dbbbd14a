//! Lay out two pieces of text side by side and print them as plain text.
//!
//! Run with: `RUST_LOG=debug cargo run --example justify -- "Name" "Alice Smith" --width 30`

use clap::Parser;
use justify_text::{
    measure, BoxInsets, Color, IconGeometry, JustifyConfig, LineDecoration, MeasureSpec,
    MonospaceShaper, PlainText, Side, WidthIntent,
};
use std::convert::TryFrom;
use std::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Justify two blocks of text against each other")]
struct Args {
    /// Text for the left block, aligned to its start.
    left: String,
    /// Text for the right block, aligned to its end.
    right: String,
    /// Total width, in columns.
    #[arg(short, long, default_value_t = 40)]
    width: u32,
    /// Exact height, in rows. Sized to the text if omitted.
    #[arg(long)]
    height: Option<u32>,
    /// Left width: a positive column count, -1 to fill, or -2 to shrink to the text.
    #[arg(long, default_value = "-2", allow_negative_numbers = true, value_parser = parse_width)]
    left_width: WidthIntent,
    /// Right width: a positive column count, -1 to fill, or -2 to shrink to the text.
    #[arg(long, default_value = "-1", allow_negative_numbers = true, value_parser = parse_width)]
    right_width: WidthIntent,
    #[arg(long, default_value_t = 0.0)]
    left_weight: f32,
    #[arg(long, default_value_t = 0.0)]
    right_weight: f32,
    /// Measure the right side instead of the left when both sides are weighted.
    #[arg(long)]
    right_is_free: bool,
    /// Columns between the two blocks.
    #[arg(short, long, default_value_t = 1)]
    spacing: u32,
    /// Blank columns and rows around the text.
    #[arg(short, long, default_value_t = 0)]
    padding: u32,
    /// Draw divider lines above and below the text.
    #[arg(long)]
    lines: bool,
}

fn parse_width(arg: &str) -> Result<WidthIntent, String> {
    let raw = arg.parse::<f32>().map_err(|err| err.to_string())?;
    WidthIntent::try_from(raw).map_err(|err| err.to_string())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = JustifyConfig::default();
    config.left = config
        .left
        .with_text(args.left)
        .with_width(args.left_width)
        .with_weight(args.left_weight);
    config.right = config
        .right
        .with_text(args.right)
        .with_width(args.right_width)
        .with_weight(args.right_weight);
    if args.right_is_free {
        config.weighted_free_side = Side::Right;
    }
    config.spacing = args.spacing as f32;
    config.insets = BoxInsets::uniform(args.padding);
    if args.lines {
        config.top_line = LineDecoration::new(1.0, Color::BLACK);
        config.bottom_line = LineDecoration::new(1.0, Color::BLACK);
        config.insets.top += 1;
        config.insets.bottom += 1;
    }
    config.validate()?;

    let height_spec = match args.height {
        Some(height) => MeasureSpec::exactly(height),
        None => MeasureSpec::unspecified(),
    };
    let layout = measure(
        &config,
        &IconGeometry::default(),
        &MonospaceShaper,
        MeasureSpec::exactly(args.width),
        height_spec,
    );
    tracing::info!(size = %layout.size(), policy = ?layout.policy(), "measured");

    let mut screen = PlainText::new(layout.size());
    layout.draw(&mut screen)?;
    print!("{}", screen);
    Ok(())
}
