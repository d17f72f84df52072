//! Pie chart widget: colored sectors in a bordered box.

use std::any::Any;
use std::f64::consts::PI;

use crate::backend::{Attr, PairId};
use crate::draw::{self, Frame};
use crate::error::{Error, Result};
use crate::markup::Colors;
use crate::widget::Widget;

/// First palette index used when sector colors are auto-assigned.
const STARTING_COLOR: i16 = 10;

/// A filled ellipse scan over the widget box, split into sectors
/// proportional to the given values.
///
/// Cells are assigned to sectors by their angle from the center
/// (`atan2`, with the vertical component doubled to compensate for cell
/// aspect); the horizontal distance is halved for the same reason, so
/// the disc renders roughly round.
#[derive(Debug)]
pub struct PieChart {
    /// Cumulative values; `cumulative.last() == total`.
    cumulative: Vec<i32>,
    /// Sector end angles in `(-pi, pi]`, parallel to `cumulative`.
    rads: Vec<f64>,
    total: i32,
    height: i32,
    width: i32,
    border: PairId,
    sector_colors: Vec<PairId>,
}

impl PieChart {
    /// Create a chart of the given box size.
    ///
    /// `color_pairs` gives one pair spec per value; an empty slice
    /// auto-assigns consecutive extended-palette colors instead. A
    /// non-empty list of the wrong length fails with
    /// [`Error::ColorCountMismatch`].
    pub fn new(
        colors: &mut Colors<'_>,
        height: i32,
        width: i32,
        values: &[i32],
        color_pairs: &[&str],
        border: &str,
    ) -> Result<Self> {
        let border = colors.resolve(border)?;
        let sector_colors = if color_pairs.is_empty() {
            let mut auto = Vec::with_capacity(values.len());
            for i in 0..values.len() as i16 {
                auto.push(colors.resolve(&format!("{}-normal", STARTING_COLOR + i))?);
            }
            auto
        } else {
            if values.len() != color_pairs.len() {
                return Err(Error::ColorCountMismatch {
                    values: values.len(),
                    colors: color_pairs.len(),
                });
            }
            color_pairs
                .iter()
                .map(|spec| colors.resolve(spec))
                .collect::<Result<Vec<_>>>()?
        };

        let mut chart = Self {
            cumulative: Vec::new(),
            rads: Vec::new(),
            total: 0,
            height,
            width,
            border,
            sector_colors,
        };
        chart.set_values(values);
        Ok(chart)
    }

    /// Replace the sector values.
    ///
    /// An all-zero total leaves the previous sector table in place; the
    /// disc is then drawn uncolored.
    pub fn set_values(&mut self, values: &[i32]) {
        self.total = values.iter().sum();
        if self.total == 0 {
            return;
        }
        self.cumulative.clear();
        let mut running = 0;
        for &v in values {
            running += v;
            self.cumulative.push(running);
        }
        self.rads = self
            .cumulative
            .iter()
            .map(|&c| f64::from(c) * PI * 2.0 / f64::from(self.total) - PI)
            .collect();
    }

    /// The sum of the current values.
    pub fn total(&self) -> i32 {
        self.total
    }
}

impl Widget for PieChart {
    fn draw(&self, frame: &mut Frame<'_>, y: i32, x: i32, _focused: bool) -> Result<()> {
        draw::draw_box(frame, y, x, self.height, self.width, Attr::pair(self.border))?;

        let center_y = self.height / 2 + y;
        let center_x = self.width / 2 + x;
        let radius = f64::from((self.height / 2).min(self.width / 2) - 1);

        for i in 0..self.height {
            for j in 0..self.width {
                let cy = y + i;
                let cx = x + j;
                let dy = f64::from(center_y - cy);
                let dx = f64::from(center_x - cx) / 2.0;
                if (dy * dy + dx * dx).sqrt() >= radius {
                    continue;
                }
                if self.total == 0 {
                    frame.put(cy, cx, draw::BLOCK, Attr::NORMAL)?;
                    continue;
                }
                let top = f64::from((cy - center_y) * 2);
                let bottom = f64::from(cx - center_x);
                let rad = top.atan2(bottom);
                let sector = self
                    .rads
                    .iter()
                    .position(|&end| rad <= end)
                    .unwrap_or(0)
                    .min(self.sector_colors.len().saturating_sub(1));
                frame.put(cy, cx, draw::BLOCK, Attr::pair(self.sector_colors[sector]))?;
            }
        }
        Ok(())
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn width(&self) -> i32 {
        self.width
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
