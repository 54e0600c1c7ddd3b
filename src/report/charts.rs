//! Bar charts rendered to SVG

use crate::error::{Error, Result};
use crate::models::{NGramCount, SentimentCounts, SentimentLabel, WordCount};
use plotters::prelude::*;

pub const POSITIVE_COLOR: RGBColor = RGBColor(46, 160, 67);
pub const NEGATIVE_COLOR: RGBColor = RGBColor(215, 58, 73);
pub const NEUTRAL_COLOR: RGBColor = RGBColor(7, 177, 252);

pub(crate) fn render_error<E: std::fmt::Display>(err: E) -> Error {
    Error::Render(err.to_string())
}

/// Vertical bar chart, one bar per (label, count) in the given order
pub fn bar_chart_svg(
    title: &str,
    bars: &[(String, usize)],
    color: RGBColor,
    size: (u32, u32),
) -> Result<String> {
    if size.0 == 0 || size.1 == 0 {
        return Err(Error::Render(format!("empty canvas for '{}'", title)));
    }

    let labels: Vec<&str> = bars.iter().map(|(label, _)| label.as_str()).collect();
    let max = bars.iter().map(|(_, count)| *count).max().unwrap_or(0).max(1) as u32;
    let n = bars.len().max(1) as u32;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(120)
            .y_label_area_size(50)
            .build_cartesian_2d((0u32..n).into_segmented(), 0u32..(max + max / 10 + 1))
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len().max(1))
            .x_label_formatter(&|value| match value {
                SegmentValue::CenterOf(idx) => labels
                    .get(*idx as usize)
                    .map(|label| label.to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .x_label_style(
                ("sans-serif", 12)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .y_desc("count")
            .draw()
            .map_err(render_error)?;

        chart
            .draw_series(bars.iter().enumerate().map(|(idx, (_, count))| {
                let idx = idx as u32;
                Rectangle::new(
                    [
                        (SegmentValue::Exact(idx), 0),
                        (SegmentValue::Exact(idx + 1), *count as u32),
                    ],
                    color.filled(),
                )
            }))
            .map_err(render_error)?;

        root.present().map_err(render_error)?;
    }
    Ok(svg)
}

/// Distribution of sentiment labels
pub fn sentiment_chart(counts: &SentimentCounts, size: (u32, u32)) -> Result<String> {
    let bars: Vec<(String, usize)> = counts
        .value_counts()
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect();
    bar_chart_svg("Sentiment Analysis", &bars, NEUTRAL_COLOR, size)
}

/// Top bigrams or trigrams
pub fn ngram_chart(ngrams: &[NGramCount], n: usize, size: (u32, u32)) -> Result<String> {
    let bars: Vec<(String, usize)> = ngrams.iter().map(|g| (g.joined(), g.count)).collect();
    let kind = if n == 2 { "Bigrams" } else { "Trigrams" };
    bar_chart_svg(
        &format!("Top {} {}", ngrams.len(), kind),
        &bars,
        NEUTRAL_COLOR,
        size,
    )
}

/// Top words of one sentiment bucket, green for positive and red otherwise
pub fn top_words_chart(
    words: &[WordCount],
    label: SentimentLabel,
    size: (u32, u32),
) -> Result<String> {
    let bars: Vec<(String, usize)> = words.iter().map(|w| (w.word.clone(), w.count)).collect();
    let color = if label == SentimentLabel::Positive {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    };
    bar_chart_svg(
        &format!("Top {} {} Words", words.len(), label),
        &bars,
        color,
        size,
    )
}
