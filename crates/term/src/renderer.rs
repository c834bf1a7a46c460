//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a size change or `invalidate`) is a
//! full redraw. Later frames only rewrite runs of cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.last = None;
        Ok(())
    }

    /// Undo everything `enter` did.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, diffing against the previously drawn one.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(prev, fb, &mut self.buf)?;
            }
            _ => encode_full_into(fb, &mut self.buf)?,
        }
        self.flush_buf()?;

        match &mut self.last {
            Some(prev) => prev.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut current: Option<CellStyle> = None;
    for y in 0..fb.height() {
        let Some(row) = fb.row(y) else {
            break;
        };
        out.queue(cursor::MoveTo(0, y))?;
        for cell in row {
            if current != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the changed runs between `prev` and `next` into `out`.
///
/// Both buffers must have the same size; otherwise this falls back to a full redraw.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }

    let mut current: Option<CellStyle> = None;
    let mut wrote = false;
    for y in 0..next.height() {
        let (Some(old), Some(new)) = (prev.row(y), next.row(y)) else {
            break;
        };
        for (start, len) in changed_runs(old, new) {
            out.queue(cursor::MoveTo(start as u16, y))?;
            for cell in &new[start..start + len] {
                if current != Some(cell.style) {
                    apply_style_into(out, cell.style)?;
                    current = Some(cell.style);
                }
                out.queue(Print(cell.ch))?;
            }
            wrote = true;
        }
    }

    if wrote {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// `(start, len)` of each maximal run where the two rows differ.
fn changed_runs<'a, T: PartialEq>(
    old: &'a [T],
    new: &'a [T],
) -> impl Iterator<Item = (usize, usize)> + 'a {
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < new.len() && old.get(x) == Some(&new[x]) {
            x += 1;
        }
        if x >= new.len() {
            return None;
        }
        let start = x;
        while x < new.len() && old.get(x) != Some(&new[x]) {
            x += 1;
        }
        Some((start, x - start))
    })
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let old = ['a', 'b', 'c', 'd', 'e', 'f'];
        let new = ['a', 'X', 'X', 'd', 'X', 'f'];

        let runs: Vec<_> = changed_runs(&old, &new).collect();
        assert_eq!(runs, vec![(1, 2), (4, 1)]);
    }

    #[test]
    fn identical_frames_encode_nothing() {
        let mut fb = FrameBuffer::new(6, 3);
        fb.put_str(0, 1, "snake", CellStyle::default());

        let mut out = Vec::new();
        encode_diff_into(&fb, &fb.clone(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn diff_is_smaller_than_full_redraw() {
        let style = CellStyle::default();
        let prev = FrameBuffer::new(40, 10);
        let mut next = prev.clone();
        next.put_char(3, 4, '█', style);

        let mut full = Vec::new();
        let mut diff = Vec::new();
        encode_full_into(&next, &mut full).unwrap();
        encode_diff_into(&prev, &next, &mut diff).unwrap();

        assert!(!diff.is_empty());
        assert!(diff.len() < full.len());
    }

    #[test]
    fn size_change_falls_back_to_full_redraw() {
        let prev = FrameBuffer::new(2, 2);
        let next = FrameBuffer::new(3, 2);

        let mut full = Vec::new();
        let mut diff = Vec::new();
        encode_full_into(&next, &mut full).unwrap();
        encode_diff_into(&prev, &next, &mut diff).unwrap();
        assert_eq!(diff, full);
    }

    #[test]
    fn rgb_maps_to_crossterm_color() {
        assert_eq!(
            rgb_to_color(Rgb::new(8, 62, 112)),
            Color::Rgb { r: 8, g: 62, b: 112 }
        );
    }
}
