//! Output sinks standing in for the panel on a development host

use anyhow::{Context, Result};
use nice_view::{Canvas, Palette};
use std::cell::Cell;
use std::io::Write;
use std::path::{Path, PathBuf};

const LIT: char = '#';
const DARK: char = '.';

pub enum Sink {
    /// ASCII art on stdout, one line per canvas row
    Terminal,
    /// Binary PBM (P4), rewritten on every frame
    Pbm(PathBuf),
    /// One numbered PBM per frame: `status.pbm` becomes `status-0.pbm`,
    /// `status-1.pbm`, ...
    PbmFrames { path: PathBuf, next: Cell<usize> },
}

impl Sink {
    pub fn pbm_frames(path: PathBuf) -> Self {
        Self::PbmFrames {
            path,
            next: Cell::new(0),
        }
    }

    pub fn present(&self, canvas: &Canvas, palette: Palette) -> Result<()> {
        match self {
            Self::Terminal => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(render_ascii(canvas, palette).as_bytes())?;
                writeln!(stdout)?;
                Ok(())
            }
            Self::Pbm(path) => write_pbm(path, canvas, palette),
            Self::PbmFrames { path, next } => {
                let frame = next.get();
                write_pbm(&frame_path(path, frame), canvas, palette)?;
                next.set(frame + 1);
                Ok(())
            }
        }
    }
}

fn write_pbm(path: &Path, canvas: &Canvas, palette: Palette) -> Result<()> {
    std::fs::write(path, encode_pbm(canvas, palette))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

pub fn frame_path(path: &Path, frame: usize) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let name = match path.extension() {
        Some(ext) => format!("{stem}-{frame}.{}", ext.to_string_lossy()),
        None => format!("{stem}-{frame}"),
    };
    path.with_file_name(name)
}

fn lit_pixels(canvas: &Canvas, palette: Palette) -> impl Iterator<Item = Vec<bool>> + '_ {
    let size = canvas.geometry().size();
    (0..size).map(move |y| {
        (0..size)
            .map(|x| palette.is_lit(canvas.get_pixel(x, y)))
            .collect()
    })
}

pub fn render_ascii(canvas: &Canvas, palette: Palette) -> String {
    lit_pixels(canvas, palette)
        .map(|row| {
            let mut line: String = row.into_iter().map(|on| if on { LIT } else { DARK }).collect();
            line.push('\n');
            line
        })
        .collect()
}

/// PBM rows are packed MSB first like the canvas, but without stride padding.
/// A set bit is drawn black, so lit pixels come out black.
pub fn encode_pbm(canvas: &Canvas, palette: Palette) -> Vec<u8> {
    let size = canvas.geometry().size();
    let mut out = format!("P4\n{size} {size}\n").into_bytes();

    for row in lit_pixels(canvas, palette) {
        for chunk in row.chunks(8) {
            let byte = chunk
                .iter()
                .enumerate()
                .filter(|(_, on)| **on)
                .fold(0u8, |acc, (i, _)| acc | (0x80 >> i));
            out.push(byte);
        }
    }
    out
}
