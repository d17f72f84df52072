//! Progress bar widget.

use std::any::Any;

use crate::backend::{Attr, PairId};
use crate::draw::Frame;
use crate::error::Result;
use crate::markup::Colors;
use crate::widget::Widget;

const BAR_UNIT: char = '#';

/// `[####      ] ( 42/100)`: a bar of `#` units with an optional
/// current/max info suffix sized to the digits of `max`.
///
/// A progress bar never handles keys; it is driven programmatically via
/// [`set`](ProgressBar::set), typically through the window's update
/// channel from a producer thread.
pub struct ProgressBar {
    bar_length: i32,
    max: i32,
    current: i32,
    /// The empty chassis: brackets, blank bar, blank info field.
    chassis: String,
    show_info: bool,
    bar_color: PairId,
    info_color: PairId,
}

impl ProgressBar {
    /// Create a bar `bar_length` cells wide counting up to `max`.
    pub fn new(
        colors: &mut Colors<'_>,
        bar_length: i32,
        max: i32,
        show_info: bool,
        bar_color: &str,
        info_color: &str,
    ) -> Result<Self> {
        let mut chassis = format!("[{}]", " ".repeat(bar_length.max(0) as usize));
        if show_info {
            let digits = " ".repeat(max.to_string().len());
            chassis.push_str(&format!(" ({digits}/{digits})"));
        }
        Ok(Self {
            bar_length,
            max,
            current: 0,
            chassis,
            show_info,
            bar_color: colors.resolve(bar_color)?,
            info_color: colors.resolve(info_color)?,
        })
    }

    /// Set the current value, clamped into `0..=max`.
    pub fn set(&mut self, value: i32) {
        self.current = value.clamp(0, self.max);
    }

    /// The current value.
    pub fn current(&self) -> i32 {
        self.current
    }

    /// The value the bar fills up at.
    pub fn max(&self) -> i32 {
        self.max
    }
}

impl Widget for ProgressBar {
    fn draw(&self, frame: &mut Frame<'_>, y: i32, x: i32, _focused: bool) -> Result<()> {
        let info = Attr::pair(self.info_color);
        frame.print(y, x, &self.chassis, info)?;
        if self.show_info {
            let max_text = self.max.to_string();
            frame.print(y, x + self.bar_length + 4, &self.current.to_string(), info)?;
            frame.print(
                y,
                x + self.chassis.len() as i32 - max_text.len() as i32 - 1,
                &max_text,
                info,
            )?;
        }
        if self.max > 0 {
            let filled = (self.current * self.bar_length / self.max).max(0) as usize;
            let bar: String = std::iter::repeat(BAR_UNIT).take(filled).collect();
            frame.print(y, x + 1, &bar, Attr::pair(self.bar_color))?;
        }
        Ok(())
    }

    fn height(&self) -> i32 {
        1
    }

    /// Bar length plus the space the info suffix needs.
    fn width(&self) -> i32 {
        self.chassis.len() as i32
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
