//! Flat sheet layout of generated panels for cutting.

use super::outline::PanelArchetype;
use super::{FingerBox, PanelRole};
use fingerbox_core::{Bounds, ClosedPolygon};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Gap between neighbouring parts
    pub spacing: f64,
    /// Shelf-pack parts by height instead of one row per outline
    pub optimize: bool,
    /// Minimum X of the finished sheet
    pub offset_x: f64,
    /// Minimum Y of the finished sheet
    pub offset_y: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            spacing: 0.5,
            optimize: false,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

/// A panel outline moved to its place on the sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedPanel {
    pub role: PanelRole,
    pub label: String,
    pub archetype: PanelArchetype,
    /// Outline in sheet coordinates.
    pub outline: ClosedPolygon,
    /// Translation applied to the panel's local outline.
    pub offset: (f64, f64),
}

#[derive(Clone, Copy, Debug)]
struct LayoutCursor {
    x: f64,
    y: f64,
    spacing: f64,
}

impl LayoutCursor {
    fn new(spacing: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            spacing,
        }
    }

    fn place(&mut self, width: f64) -> (f64, f64) {
        let position = (self.x, self.y);
        self.x += width + self.spacing;
        position
    }

    fn next_row(&mut self, height: f64) {
        self.y += height + self.spacing;
        self.x = 0.0;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetLayout {
    pub panels: Vec<PlacedPanel>,
}

impl SheetLayout {
    /// Place every panel of `finger_box` on one sheet, in box order.
    pub fn arrange(finger_box: &FingerBox, settings: &LayoutSettings) -> Self {
        let local: Vec<Bounds> = finger_box
            .panels
            .iter()
            .map(|p| p.panel.outline.bounds())
            .collect();

        let positions = if settings.optimize {
            Self::shelf_positions(&local, settings.spacing)
        } else {
            Self::row_positions(finger_box, &local, settings.spacing)
        };

        let mut panels: Vec<PlacedPanel> = finger_box
            .panels
            .iter()
            .zip(local.iter().zip(positions))
            .map(|(solid, (bounds, (x, y)))| {
                let offset = (x - bounds.min_x, y - bounds.min_y);
                PlacedPanel {
                    role: solid.role,
                    label: solid.label(),
                    archetype: solid.panel.archetype,
                    outline: solid.panel.outline.translated(offset.0, offset.1),
                    offset,
                }
            })
            .collect();

        // Normalise so the sheet starts exactly at the configured origin.
        let sheet = panels
            .iter()
            .map(|p| p.outline.bounds())
            .reduce(|a, b| a.union(&b));
        if let Some(sheet) = sheet {
            let (dx, dy) = (settings.offset_x - sheet.min_x, settings.offset_y - sheet.min_y);
            for placed in &mut panels {
                placed.outline = placed.outline.translated(dx, dy);
                placed.offset = (placed.offset.0 + dx, placed.offset.1 + dy);
            }
        }

        debug!(
            "Laid out {} panels ({})",
            panels.len(),
            if settings.optimize { "packed" } else { "rows" }
        );
        Self { panels }
    }

    /// One row per outline: panels sharing an archetype sit side by side.
    fn row_positions(finger_box: &FingerBox, local: &[Bounds], spacing: f64) -> Vec<(f64, f64)> {
        let mut cursor = LayoutCursor::new(spacing);
        let mut positions = Vec::with_capacity(local.len());
        let mut row_height: f64 = 0.0;
        let mut row_archetype = None;

        for (solid, bounds) in finger_box.panels.iter().zip(local) {
            if row_archetype.is_some() && row_archetype != Some(solid.panel.archetype) {
                cursor.next_row(row_height);
                row_height = 0.0;
            }
            row_archetype = Some(solid.panel.archetype);
            positions.push(cursor.place(bounds.width()));
            row_height = row_height.max(bounds.height());
        }
        positions
    }

    /// Shelf packing: tallest first, rows wrapped at a width derived from
    /// the total part area.
    fn shelf_positions(local: &[Bounds], spacing: f64) -> Vec<(f64, f64)> {
        let mut order: Vec<usize> = (0..local.len()).collect();
        order.sort_by(|&a, &b| local[b].height().total_cmp(&local[a].height()));

        let total_area: f64 = local.iter().map(|b| b.width() * b.height()).sum();
        let widest = local.iter().map(|b| b.width()).fold(0.0, f64::max);
        let target_width = (total_area.sqrt() * 1.5).max(widest);

        let mut positions = vec![(0.0, 0.0); local.len()];
        let mut current_x = 0.0;
        let mut current_y = 0.0;
        let mut row_height: f64 = 0.0;

        for index in order {
            let b = &local[index];
            if current_x > 0.0 && current_x + b.width() > target_width {
                current_x = 0.0;
                current_y += row_height + spacing;
                row_height = 0.0;
            }
            positions[index] = (current_x, current_y);
            row_height = row_height.max(b.height());
            current_x += b.width() + spacing;
        }
        positions
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Bounding box of the whole sheet, `None` when nothing was placed.
    pub fn bounds(&self) -> Option<Bounds> {
        self.panels
            .iter()
            .map(|p| p.outline.bounds())
            .reduce(|a, b| a.union(&b))
    }
}
