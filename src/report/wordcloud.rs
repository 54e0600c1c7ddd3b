//! Word cloud layout and SVG rendering
//!
//! Words are placed largest first along an Archimedean spiral starting at the
//! canvas center. A word that cannot be placed is retried at a smaller font
//! size and dropped once it falls below the minimum.

use super::charts::render_error;
use crate::error::Result;
use crate::models::WordCount;
use plotters::prelude::*;
use serde::Serialize;

const PALETTE: [RGBColor; 6] = [
    RGBColor(7, 177, 252),
    RGBColor(250, 175, 59),
    RGBColor(51, 51, 51),
    RGBColor(46, 160, 67),
    RGBColor(215, 58, 73),
    RGBColor(111, 66, 193),
];

/// Approximate glyph width relative to the font size
const CHAR_WIDTH_RATIO: f64 = 0.6;

/// A word with its position on the canvas (top-left corner)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedWord {
    pub word: String,
    pub count: usize,
    pub font_size: f64,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color_index: usize,
}

impl PlacedWord {
    fn overlaps(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        x < self.x + self.width
            && self.x < x + width
            && y < self.y + self.height
            && self.y < y + height
    }
}

/// Word cloud renderer
#[derive(Debug, Clone)]
pub struct WordCloud {
    width: u32,
    height: u32,
    max_words: usize,
    min_font_size: f64,
    max_font_size: f64,
}

impl WordCloud {
    pub fn new(width: u32, height: u32, max_words: usize) -> Self {
        Self {
            width,
            height,
            max_words,
            min_font_size: 8.0,
            max_font_size: (height as f64 / 4.0).max(8.0),
        }
    }

    fn text_box(word: &str, font_size: f64) -> (i32, i32) {
        let chars = word.chars().count().max(1) as f64;
        (
            (chars * font_size * CHAR_WIDTH_RATIO).ceil() as i32,
            font_size.ceil() as i32,
        )
    }

    fn find_slot(&self, placed: &[PlacedWord], width: i32, height: i32) -> Option<(i32, i32)> {
        let canvas_w = self.width as i32;
        let canvas_h = self.height as i32;
        if width > canvas_w || height > canvas_h {
            return None;
        }

        let cx = canvas_w as f64 / 2.0;
        let cy = canvas_h as f64 / 2.0;
        let aspect = canvas_h as f64 / canvas_w as f64;
        let max_radius = cx.hypot(cy);

        let mut t: f64 = 0.0;
        loop {
            let radius = 2.0 * t;
            if radius > max_radius {
                return None;
            }

            let x = (cx + radius * t.cos()) as i32 - width / 2;
            let y = (cy + radius * aspect * t.sin()) as i32 - height / 2;
            let inside = x >= 0 && y >= 0 && x + width <= canvas_w && y + height <= canvas_h;
            if inside && !placed.iter().any(|p| p.overlaps(x, y, width, height)) {
                return Some((x, y));
            }
            t += 0.1;
        }
    }

    /// Place up to `max_words` words; sizes scale with count / top count
    pub fn layout(&self, words: &[WordCount]) -> Vec<PlacedWord> {
        let words = &words[..words.len().min(self.max_words)];
        let top = match words.iter().map(|w| w.count).max() {
            Some(top) if top > 0 => top as f64,
            _ => return Vec::new(),
        };

        let mut placed: Vec<PlacedWord> = Vec::with_capacity(words.len());
        for (idx, entry) in words.iter().enumerate() {
            let relative = entry.count as f64 / top;
            let mut font_size =
                self.min_font_size + (self.max_font_size - self.min_font_size) * relative;

            while font_size >= self.min_font_size {
                let (width, height) = Self::text_box(&entry.word, font_size);
                if let Some((x, y)) = self.find_slot(&placed, width, height) {
                    placed.push(PlacedWord {
                        word: entry.word.clone(),
                        count: entry.count,
                        font_size,
                        x,
                        y,
                        width,
                        height,
                        color_index: idx % PALETTE.len(),
                    });
                    break;
                }
                font_size *= 0.8;
            }
        }
        placed
    }

    /// Lay out and draw the cloud as an SVG document
    pub fn render_svg(&self, words: &[WordCount]) -> Result<String> {
        let placed = self.layout(words);

        let mut svg = String::new();
        {
            let root =
                SVGBackend::with_string(&mut svg, (self.width, self.height)).into_drawing_area();
            root.fill(&WHITE).map_err(render_error)?;

            for word in &placed {
                let style = ("sans-serif", word.font_size)
                    .into_font()
                    .color(&PALETTE[word.color_index]);
                root.draw_text(&word.word, &style, (word.x, word.y))
                    .map_err(render_error)?;
            }
            root.present().map_err(render_error)?;
        }
        Ok(svg)
    }
}

impl Default for WordCloud {
    fn default() -> Self {
        Self::new(800, 400, 200)
    }
}
