//! Single-line progress indicator
//!
//! One tokio task redraws a braille glyph in place on a fixed interval until
//! it is stopped, then clears the line it owned.

use colored::Colorize;
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Glyphs drawn in order, wrapping around
pub const GLYPHS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Redraw interval
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Carriage return followed by "erase entire line"
pub const CLEAR_LINE: &str = "\r\x1b[2K";

/// Position in the glyph sequence
#[derive(Debug, Clone, Default)]
pub struct GlyphCycle {
    ticks: u64,
}

impl GlyphCycle {
    /// Index of the next glyph; always `ticks % GLYPHS.len()`
    pub fn index(&self) -> usize {
        (self.ticks % GLYPHS.len() as u64) as usize
    }

    /// Return the current glyph and advance
    pub fn tick(&mut self) -> char {
        let glyph = GLYPHS[self.index()];
        self.ticks += 1;
        glyph
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Handle to a running progress indicator
///
/// Dropping the handle without calling [`Spinner::stop`] also ends the task.
pub struct Spinner {
    stop: oneshot::Sender<()>,
    task: JoinHandle<io::Result<u64>>,
}

impl Spinner {
    /// Start animating on `out`
    pub fn start<W>(out: W, interval: Duration) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::start_prefixed(out, interval, "")
    }

    /// Start animating on `out`, drawing `prefix` before every glyph
    pub fn start_prefixed<W>(out: W, interval: Duration, prefix: &'static str) -> Self
    where
        W: Write + Send + 'static,
    {
        let (stop, stopped) = oneshot::channel();
        let task = tokio::spawn(animate(out, interval, prefix, stopped));
        Self { stop, task }
    }

    /// Stop the animation and wait until its line has been cleared.
    ///
    /// Returns the number of frames drawn. No frame is drawn after this returns.
    pub async fn stop(self) -> io::Result<u64> {
        let Spinner { stop, task } = self;
        // The task may already have exited on a write error
        let _ = stop.send(());
        match task.await {
            Ok(result) => result,
            Err(e) => Err(io::Error::new(io::ErrorKind::Other, e)),
        }
    }
}

async fn animate<W: Write>(
    mut out: W,
    interval: Duration,
    prefix: &str,
    mut stopped: oneshot::Receiver<()>,
) -> io::Result<u64> {
    let mut cycle = GlyphCycle::default();
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            // Fires on stop() and when the handle is dropped
            _ = &mut stopped => break,
            _ = ticker.tick() => {
                let glyph = cycle.tick();
                write!(out, "\r{}{} ", prefix, glyph.to_string().magenta())?;
                out.flush()?;
            }
        }
    }

    write!(out, "{}", CLEAR_LINE)?;
    out.flush()?;
    Ok(cycle.ticks())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SharedBuffer;

    fn drawn_glyphs(output: &str) -> Vec<char> {
        output.chars().filter(|c| GLYPHS.contains(c)).collect()
    }

    #[test]
    fn test_index_wraps_modulo_length() {
        let mut cycle = GlyphCycle::default();
        for n in 0..35u64 {
            assert_eq!(cycle.index() as u64, n % GLYPHS.len() as u64);
            assert_eq!(cycle.tick(), GLYPHS[(n % 10) as usize]);
        }
        assert_eq!(cycle.ticks(), 35);
        assert_eq!(cycle.index(), 5);
    }

    #[tokio::test]
    async fn test_spinner_draws_glyphs_in_sequence() {
        let buffer = SharedBuffer::default();
        let spinner = Spinner::start(buffer.clone(), Duration::from_millis(5));
        tokio::time::sleep(Duration::from_millis(80)).await;
        let ticks = spinner.stop().await.unwrap();

        let output = buffer.contents();
        let glyphs = drawn_glyphs(&output);
        assert!(ticks >= 1);
        assert_eq!(glyphs.len() as u64, ticks);
        for (n, glyph) in glyphs.iter().enumerate() {
            assert_eq!(*glyph, GLYPHS[n % GLYPHS.len()]);
        }
    }

    #[tokio::test]
    async fn test_stop_clears_line_and_no_later_frames() {
        let buffer = SharedBuffer::default();
        let spinner = Spinner::start(buffer.clone(), Duration::from_millis(5));
        tokio::time::sleep(Duration::from_millis(30)).await;
        spinner.stop().await.unwrap();

        let after_stop = buffer.contents();
        assert!(after_stop.ends_with(CLEAR_LINE));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(buffer.contents(), after_stop);
    }

    #[tokio::test]
    async fn test_prefix_precedes_every_frame() {
        let buffer = SharedBuffer::default();
        let spinner = Spinner::start_prefixed(buffer.clone(), Duration::from_millis(5), "│  ");
        tokio::time::sleep(Duration::from_millis(30)).await;
        let ticks = spinner.stop().await.unwrap();

        let output = buffer.contents();
        assert!(ticks >= 1);
        assert_eq!(output.matches("\r│  ").count() as u64, ticks);
        assert!(output.ends_with(CLEAR_LINE));
    }

    #[tokio::test]
    async fn test_dropped_handle_ends_task() {
        let buffer = SharedBuffer::default();
        let spinner = Spinner::start(buffer.clone(), Duration::from_millis(5));
        tokio::time::sleep(Duration::from_millis(20)).await;
        drop(spinner);
        tokio::time::sleep(Duration::from_millis(20)).await;

        let settled = buffer.contents();
        assert!(settled.ends_with(CLEAR_LINE));
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(buffer.contents(), settled);
    }
}
