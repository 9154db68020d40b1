use crate::geometry::{self, FULL_TURN};

/// Result of releasing a drag: the slot the dial settled on and the exact
/// rotation it snapped to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snap {
    pub index: usize,
    pub rotation: f64,
}

#[derive(Debug, Clone, Copy)]
struct DragGesture {
    /// Angular offset between the pointer and the rotation, captured at
    /// gesture start and held fixed so rotation tracks the pointer
    /// relatively rather than absolutely.
    start_offset: f64,
}

/// Drag state machine for the rotary dial.
///
/// Owns the rotation angle, the active gesture (at most one), and the last
/// selection. All angles are degrees; rotation is unbounded while a drag is
/// in flight and only normalized into [0, 360) at snap time.
#[derive(Debug)]
pub struct DialState {
    item_count: usize,
    rotation: f64,
    drag: Option<DragGesture>,
    selected: Option<usize>,
}

impl DialState {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            rotation: 0.0,
            drag: None,
            selected: None,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn rotation_degrees(&self) -> f64 {
        self.rotation
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Angular width of one slot, `None` for an empty dial.
    pub fn slot_size(&self) -> Option<f64> {
        (self.item_count > 0).then(|| FULL_TURN / self.item_count as f64)
    }

    /// Current display angle of the item at `index`: its fixed slot angle
    /// plus the rotation offset.
    pub fn item_angle(&self, index: usize) -> f64 {
        match self.slot_size() {
            Some(slot) => index as f64 * slot + self.rotation,
            None => self.rotation,
        }
    }

    /// Start a gesture at the given pointer angle. Ignored if a gesture is
    /// already active or the angle is not finite.
    pub fn begin_drag(&mut self, pointer_angle: f64) {
        if self.drag.is_some() || !pointer_angle.is_finite() {
            return;
        }
        self.drag = Some(DragGesture {
            start_offset: pointer_angle - self.rotation,
        });
    }

    /// Track a pointer move. Rotation follows the pointer angle exactly,
    /// with no smoothing. Non-finite angles skip the frame.
    pub fn drag_to(&mut self, pointer_angle: f64) {
        if !pointer_angle.is_finite() {
            return;
        }
        if let Some(drag) = self.drag {
            self.rotation = pointer_angle - drag.start_offset;
        }
    }

    /// End the active gesture and snap to the nearest slot.
    ///
    /// The rotation is normalized into [0, 360) before rounding, so
    /// counter-clockwise drags never hit negative-modulo artifacts. An exact
    /// midpoint between two slots rounds to the higher index. Returns `None`
    /// when no gesture was active or the dial is empty.
    pub fn end_drag(&mut self) -> Option<Snap> {
        self.drag.take()?;
        let slot = self.slot_size()?;

        let normalized = geometry::normalize_degrees(self.rotation);
        let index = (normalized / slot).round() as usize % self.item_count;
        self.rotation = index as f64 * slot;
        self.selected = Some(index);

        Some(Snap {
            index,
            rotation: self.rotation,
        })
    }

    /// Abandon the active gesture without snapping or selecting. Rotation
    /// keeps its last dragged value.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Direct activation of one item, bypassing the drag machine: records
    /// the selection and leaves the rotation untouched. Returns false for an
    /// out-of-range index.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.item_count {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Replace the item count after a structural change. An in-flight
    /// gesture is aborted and a selection that no longer exists is dropped.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.drag = None;
        if self.selected.is_some_and(|i| i >= item_count) {
            self.selected = None;
        }
    }
}
