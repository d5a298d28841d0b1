//! Render a swatch sheet (legend of label colors) to **SVG**.
//!
//! Each row shows the label on its background color, written in the
//! contrast text color, with the hex code next to it.

use crate::contrast::Rgb8;
use crate::palette::Swatch;
use anyhow::{Result, anyhow, bail};
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_svg::SVGBackend;
use std::path::Path;

const PAD: i32 = 16;
const ROW_H: i32 = 32;
const ROW_GAP: i32 = 6;
const FONT_PX: u32 = 14;

/// Default sheet width in pixels.
pub const DEFAULT_WIDTH: u32 = 480;
/// Narrowest sheet that still leaves room for a swatch between the margins.
pub const MIN_WIDTH: u32 = (PAD * 2 + 1) as u32;

fn to_plotters(hex: &str) -> Result<RGBColor> {
    let c = Rgb8::from_hex(hex)?;
    Ok(RGBColor(c.r, c.g, c.b))
}

/// Write a swatch sheet to `out_path` (must end in `.svg`).
pub fn plot_swatches<P: AsRef<Path>>(swatches: &[Swatch], out_path: P, width: u32) -> Result<()> {
    if swatches.is_empty() {
        bail!("no swatches to plot");
    }
    if width < MIN_WIDTH || width > i32::MAX as u32 {
        bail!("sheet width {width} out of range ({MIN_WIDTH}..={})", i32::MAX);
    }
    let out_path = out_path.as_ref();
    match out_path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("svg") => {}
        other => bail!("unsupported plot format {:?}, expected .svg", other.unwrap_or("")),
    }

    let height = (PAD * 2 + ROW_H * swatches.len() as i32) as u32;
    debug!(
        "plotting {} swatches to {} ({}x{})",
        swatches.len(),
        out_path.display(),
        width,
        height
    );
    let root = SVGBackend::new(out_path, (width, height)).into_drawing_area();
    draw_sheet(&root, swatches, width as i32)?;
    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn draw_sheet<DB>(root: &DrawingArea<DB, Shift>, swatches: &[Swatch], width: i32) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    // Swatch takes 60% of the row, hex code goes to its right.
    let swatch_w = ((width - PAD * 2) as f32 * 0.6) as i32;
    for (i, s) in swatches.iter().enumerate() {
        let bg = to_plotters(&s.background)?;
        let fg = to_plotters(&s.text)?;
        let top = PAD + ROW_H * i as i32;
        let bottom = top + ROW_H - ROW_GAP;
        let mid = (top + bottom) / 2;

        root.draw(&Rectangle::new(
            [(PAD, top), (PAD + swatch_w, bottom)],
            bg.filled(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;

        let label_style = ("sans-serif", FONT_PX)
            .into_font()
            .color(&fg)
            .pos(Pos::new(HPos::Left, VPos::Center));
        root.draw(&Text::new(s.label.as_str(), (PAD + 10, mid), label_style))
            .map_err(|e| anyhow!("{:?}", e))?;

        let hex_style = ("sans-serif", FONT_PX)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Left, VPos::Center));
        root.draw(&Text::new(
            s.background.as_str(),
            (PAD + swatch_w + 12, mid),
            hex_style,
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(())
}
