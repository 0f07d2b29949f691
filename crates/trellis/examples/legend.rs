//! Builds a small sales dataset and lays out a legend for it.
//!
//! This example shows how to:
//! - Fill a `DefaultKeyedValues3D` and read it back by key
//! - Build a legend `GridElement` with one row per series
//! - Draw through a custom `Surface` and hit-test with a `BoundsRecorder`
//!
//! Run with: RUST_LOG=debug cargo run -p trellis --example legend

use trellis::data::{series_total, total};
use trellis::prelude::*;

/// Surface that logs paint calls and uses fixed-width glyph metrics.
struct LogSurface;

impl Surface for LogSurface {
    fn text_size(&self, text: &str, font: &Font) -> Size {
        Size::new(text.chars().count() as f32 * font.size() * 0.6, font.size() * 1.2)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        tracing::info!(?rect, ?color, "fill_rect");
    }

    fn draw_text(&mut self, text: &str, _font: &Font, _color: Color, origin: Vec2) {
        tracing::info!(text, x = origin.x, y = origin.y, "draw_text");
    }
}

const SERIES_COLORS: [Color; 3] = [Color::RED, Color::GREEN, Color::BLUE];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    trellis::core::init(&Config::default().with_log_filter("info"));

    let mut sales = DefaultKeyedValues3D::new();
    for (series, year) in ["2023", "2024", "2025"].into_iter().enumerate() {
        for (row, quarter) in ["Q1", "Q2", "Q3", "Q4"].into_iter().enumerate() {
            let north = 10.0 + (series * 4 + row) as f64;
            sales.set_value(Some(north), year, quarter, "North");
            if row % 2 == 0 {
                sales.set_value(Some(north * 0.5), year, quarter, "South");
            }
        }
    }

    tracing::info!(
        series = sales.series_count(),
        rows = sales.row_count(),
        columns = sales.column_count(),
        total = total(&sales),
        "dataset built"
    );
    if let Some(range) = find_value_range(&sales) {
        tracing::info!(min = range.min, max = range.max, "value range");
    }
    tracing::info!(
        q1_north_2024 = sales.double_value_by_key(&"2024", &"Q1", &"North")?,
        "lookup"
    );

    let mut legend: GridElement = GridElement::new()
        .with_style(ElementStyle::new().with_background(Color::WHITE).with_insets(Insets::uniform(4.0))?);
    for (index, year) in sales.series_keys().into_iter().enumerate() {
        let color = SERIES_COLORS[index % SERIES_COLORS.len()];
        let label = format!("{year} ({:.1})", series_total(&sales, index)?);
        legend.set_element(
            Some(Box::new(ShapeElement::new(Size::new(8.0, 8.0), color)?)),
            year.to_string(),
            "marker".to_string(),
        );
        legend.set_element(
            Some(Box::new(TextElement::new(label))),
            year.to_string(),
            "label".to_string(),
        );
    }

    let mut surface = LogSurface;
    let area = Rect::new(20.0, 20.0, 400.0, 300.0);
    let size = legend.preferred_size(&surface, area, None);
    tracing::info!(%size, %legend, "legend measured");

    let mut recorder = BoundsRecorder::new();
    legend.draw(&mut surface, Rect::from_pos_size(area.position(), size), Some(&mut recorder));

    let probe = Vec2::new(30.0, 30.0);
    tracing::info!(hits = ?recorder.elements_at(probe), "elements under {probe}");

    Ok(())
}
