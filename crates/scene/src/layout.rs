//! Card placement strategies.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use vrtodo_core::{Todo, TodoId};

/// Where the "add new todo" affordance sits, in front of and slightly above
/// the viewer.
pub const ADD_ENTRY_POSITION: Vec3 = Vec3::new(0.0, 1.0, -2.0);

/// Computed placement for one todo card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    /// Todo this placement belongs to.
    pub id: TodoId,
    /// Card center in world space.
    pub position: Vec3,
    /// Rotation around the world Y axis, radians.
    pub yaw: f32,
}

/// Which placement strategy the scene uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Cards on a circle around the viewer, wrapped into rows.
    #[default]
    Ring,
    /// Cards along an arc in front of the viewer.
    Arc,
    /// Active and completed cards in two separate capped grids.
    SectionedGrid,
}

/// Geometry for [`ring_layout`].
#[derive(Debug, Clone, Copy)]
pub struct RingConfig {
    /// Circle radius.
    pub radius: f32,
    /// Cards per full turn before wrapping to the next row.
    pub items_per_row: usize,
    /// Vertical distance between rows.
    pub row_spacing: f32,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            radius: 4.0,
            items_per_row: 4,
            row_spacing: 1.5,
        }
    }
}

/// Geometry for [`arc_layout`].
#[derive(Debug, Clone, Copy)]
pub struct ArcConfig {
    /// Arc radius.
    pub radius: f32,
    /// Total angular span of the arc, radians.
    pub span: f32,
    /// Height at which the arc floats.
    pub height: f32,
    /// Minimum slot count the angle step is derived from.
    pub min_slots: usize,
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self {
            radius: 4.0,
            span: std::f32::consts::PI,
            height: 1.2,
            min_slots: 6,
        }
    }
}

/// Geometry for [`sectioned_grid_layout`].
#[derive(Debug, Clone, Copy)]
pub struct GridConfig {
    /// Top-left anchor of the active section.
    pub active_origin: Vec3,
    /// Top-left anchor of the completed section.
    pub completed_origin: Vec3,
    /// Cards per grid row.
    pub columns: usize,
    /// Horizontal and vertical card pitch.
    pub spacing: (f32, f32),
    /// At most this many active cards are placed.
    pub max_active: usize,
    /// At most this many completed cards are placed.
    pub max_completed: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            active_origin: Vec3::new(-5.0, 2.5, -4.0),
            completed_origin: Vec3::new(2.0, 2.5, -4.0),
            columns: 3,
            spacing: (3.4, 1.8),
            max_active: 9,
            max_completed: 6,
        }
    }
}

/// Where the add affordance goes, independent of the card strategy.
pub fn add_entry_placement() -> Vec3 {
    ADD_ENTRY_POSITION
}

/// Arrange cards around a circle of fixed radius, wrapping into rows once a
/// row is full. Rows stack upward; the whole stack is shifted so it stays
/// roughly centered on the viewer's eye line.
pub fn ring_layout(todos: &[Todo], cfg: &RingConfig) -> Vec<CardPlacement> {
    let per_row = cfg.items_per_row.max(1);
    let rows = todos.len().div_ceil(per_row);

    todos
        .iter()
        .enumerate()
        .map(|(i, todo)| {
            let row = i / per_row;
            let col = i % per_row;
            let angle = col as f32 / per_row as f32 * std::f32::consts::TAU;

            let x = angle.sin() * cfg.radius;
            let y = row as f32 * cfg.row_spacing - rows as f32 + 2.0;
            let z = angle.cos() * cfg.radius;

            CardPlacement {
                id: todo.id,
                position: Vec3::new(x, y, z),
                yaw: 0.0,
            }
        })
        .collect()
}

/// Arrange cards along an arc in front of the viewer.
///
/// The angle step is derived from the card count with a floor of
/// `min_slots`, so small lists stay comfortably spread instead of collapsing
/// onto a single point. Cards are yawed to face the viewer at the origin.
pub fn arc_layout(todos: &[Todo], cfg: &ArcConfig) -> Vec<CardPlacement> {
    let slots = todos.len().max(cfg.min_slots) as f32;
    let step = cfg.span / slots;

    todos
        .iter()
        .enumerate()
        .map(|(i, todo)| {
            // Center the occupied slots inside the span.
            let angle = (i as f32 - (todos.len() as f32 - 1.0) / 2.0) * step;
            let x = angle.sin() * cfg.radius;
            let z = -angle.cos() * cfg.radius;

            CardPlacement {
                id: todo.id,
                position: Vec3::new(x, cfg.height, z),
                yaw: -angle,
            }
        })
        .collect()
}

/// Place active and completed cards in two separate fixed-origin grids.
///
/// Each section is capped (`max_active` / `max_completed`); items beyond a
/// section's cap are not placed.
pub fn sectioned_grid_layout(todos: &[Todo], cfg: &GridConfig) -> Vec<CardPlacement> {
    let columns = cfg.columns.max(1);
    let grid_position = |origin: Vec3, slot: usize| {
        let row = slot / columns;
        let col = slot % columns;
        origin + Vec3::new(col as f32 * cfg.spacing.0, -(row as f32) * cfg.spacing.1, 0.0)
    };

    let mut placements = Vec::with_capacity(todos.len().min(cfg.max_active + cfg.max_completed));
    let mut active_placed = 0;
    let mut completed_placed = 0;

    for todo in todos {
        if todo.completed {
            if completed_placed >= cfg.max_completed {
                continue;
            }
            placements.push(CardPlacement {
                id: todo.id,
                position: grid_position(cfg.completed_origin, completed_placed),
                yaw: 0.0,
            });
            completed_placed += 1;
        } else {
            if active_placed >= cfg.max_active {
                continue;
            }
            placements.push(CardPlacement {
                id: todo.id,
                position: grid_position(cfg.active_origin, active_placed),
                yaw: 0.0,
            });
            active_placed += 1;
        }
    }

    placements
}
