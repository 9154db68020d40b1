use super::{ICON_SIZE, TAP_THRESHOLD};
use gdk_pixbuf::Pixbuf;
use spindle::geometry::{self, Point};
use spindle::{DialState, MenuItem, SizeMetrics, SizePreset};

#[derive(Clone)]
pub struct DialItem {
    pub item: MenuItem,
    pub pixbuf: Option<Pixbuf>,
}

impl DialItem {
    pub fn new(item: MenuItem) -> Self {
        let pixbuf = Self::load_icon(&item);
        Self { item, pixbuf }
    }

    fn load_icon(item: &MenuItem) -> Option<Pixbuf> {
        let icon = item.icon.as_ref()?;
        let path = spindle::icon::find_icon_path(icon)?;
        Pixbuf::from_file_at_scale(&path, ICON_SIZE, ICON_SIZE, true).ok()
    }
}

/// Outcome of lifting the pointer: the wheel snapped after a drag, or the
/// press never armed and counts as a direct tap on the item it hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    Snapped { index: usize },
    Tapped { index: usize },
}

/// GUI-side dial model: the core drag state machine plus everything the
/// renderer and the input handlers need — items with their loaded icons, the
/// resolved size metrics, the dial center in widget coordinates, hover and
/// press tracking.
pub struct DialModel {
    pub state: DialState,
    pub items: Vec<DialItem>,
    pub metrics: SizeMetrics,
    pub center_label: String,
    pub center: Point,
    pub hover_index: Option<usize>,
    press_origin: Option<Point>,
    armed: bool,
    generation: u64,
}

impl DialModel {
    pub fn new(items: Vec<DialItem>, size: SizePreset, center_label: String) -> Self {
        Self {
            state: DialState::new(items.len()),
            items,
            // resolved once; never recomputed per frame
            metrics: size.metrics(),
            center_label,
            center: Point::default(),
            hover_index: None,
            press_origin: None,
            armed: false,
            generation: 0,
        }
    }

    /// Bumped on every structural reload; pending deferred notifications
    /// carry the generation they were scheduled against and are dropped if
    /// it moved on.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.center = Point::new(width / 2.0, height / 2.0);
    }

    pub fn menu_item(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index).map(|i| &i.item)
    }

    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.state.selected().and_then(|i| self.menu_item(i))
    }

    /// Screen-space center of the item at `index`.
    pub fn item_center(&self, index: usize) -> Point {
        let offset = geometry::item_offset(
            index,
            self.items.len(),
            self.state.rotation_degrees(),
            self.metrics.radius,
        );
        Point::new(self.center.x + offset.x, self.center.y + offset.y)
    }

    /// Item under the pointer, resolved by distance to each item circle.
    pub fn hit_test(&self, pointer: Point) -> Option<usize> {
        let item_radius = self.metrics.item_radius();
        (0..self.items.len())
            .map(|i| (i, self.item_center(i).distance_to(pointer)))
            .filter(|(_, distance)| *distance <= item_radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    pub fn update_hover(&mut self, pointer: Point) -> bool {
        if self.state.is_dragging() {
            return false;
        }
        let new_index = self.hit_test(pointer);
        let changed = self.hover_index != new_index;
        self.hover_index = new_index;
        changed
    }

    /// Pointer down: the grip offset is captured here, but rotation only
    /// starts following the pointer once travel exceeds the tap threshold.
    pub fn press_at(&mut self, pointer: Point) {
        if self.press_origin.is_some() {
            return;
        }
        self.press_origin = Some(pointer);
        self.armed = false;
        self.state
            .begin_drag(geometry::pointer_angle(pointer, self.center));
    }

    /// Pointer move with the button/finger down. Returns true when the wheel
    /// rotated and needs a redraw.
    pub fn drag_to(&mut self, pointer: Point) -> bool {
        let Some(origin) = self.press_origin else {
            return false;
        };
        if !self.armed {
            if origin.distance_to(pointer) < TAP_THRESHOLD {
                return false;
            }
            self.armed = true;
        }
        self.state
            .drag_to(geometry::pointer_angle(pointer, self.center));
        true
    }

    /// Pointer up. An armed gesture snaps; an unarmed one is a tap resolved
    /// against the press origin, which selects without touching the rotation.
    pub fn release_at(&mut self, pointer: Point) -> Option<Release> {
        let origin = self.press_origin.take()?;

        if self.armed {
            self.armed = false;
            // the release position is the final move of the gesture
            self.state
                .drag_to(geometry::pointer_angle(pointer, self.center));
            return self
                .state
                .end_drag()
                .map(|snap| Release::Snapped { index: snap.index });
        }

        self.state.cancel_drag();
        let index = self.hit_test(origin)?;
        self.state
            .select(index)
            .then_some(Release::Tapped { index })
    }

    /// Swap in a new item set after a config reload. An in-flight gesture is
    /// aborted; the generation bump invalidates pending notifications.
    pub fn reload(&mut self, items: Vec<DialItem>, size: SizePreset, center_label: String) {
        self.state.set_item_count(items.len());
        self.items = items;
        self.metrics = size.metrics();
        self.center_label = center_label;
        self.hover_index = None;
        self.press_origin = None;
        self.armed = false;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spindle::{ItemId, ItemLabel};

    fn test_items(count: usize) -> Vec<DialItem> {
        (0..count)
            .map(|i| DialItem {
                item: MenuItem::new(
                    ItemId::new(i as u32),
                    ItemLabel::new(format!("Item {i}")),
                    None,
                ),
                pixbuf: None,
            })
            .collect()
    }

    fn test_model(count: usize) -> DialModel {
        let mut model = DialModel::new(test_items(count), SizePreset::Medium, "Menu".into());
        model.set_viewport(320.0, 320.0);
        model
    }

    fn point_at_angle(model: &DialModel, degrees: f64, radius: f64) -> Point {
        let rad = degrees.to_radians();
        Point::new(
            model.center.x + radius * rad.cos(),
            model.center.y + radius * rad.sin(),
        )
    }

    #[test]
    fn viewport_centers_the_dial() {
        let model = test_model(8);
        assert_eq!(model.center, Point::new(160.0, 160.0));
    }

    #[test]
    fn hit_test_finds_item_under_pointer() {
        let model = test_model(8);
        // item 0 sits on the positive x-axis at the orbital radius
        assert_eq!(model.hit_test(Point::new(280.0, 160.0)), Some(0));
        // item 2 of 8 sits at 90 degrees
        assert_eq!(model.hit_test(Point::new(160.0, 280.0)), Some(2));
        // dial center is not an item
        assert_eq!(model.hit_test(Point::new(160.0, 160.0)), None);
    }

    #[test]
    fn tap_selects_without_rotating() {
        let mut model = test_model(8);
        let on_item_3 = point_at_angle(&model, 135.0, 120.0);

        model.press_at(on_item_3);
        let release = model.release_at(on_item_3);

        assert_eq!(release, Some(Release::Tapped { index: 3 }));
        assert_eq!(model.state.selected(), Some(3));
        assert_eq!(model.state.rotation_degrees(), 0.0);
    }

    #[test]
    fn sub_threshold_wiggle_still_counts_as_tap() {
        let mut model = test_model(8);
        let press = Point::new(280.0, 160.0);

        model.press_at(press);
        assert!(!model.drag_to(Point::new(281.0, 161.0)));
        let release = model.release_at(Point::new(281.0, 161.0));

        assert_eq!(release, Some(Release::Tapped { index: 0 }));
        assert_eq!(model.state.rotation_degrees(), 0.0);
    }

    #[test]
    fn drag_past_threshold_snaps_on_release() {
        let mut model = test_model(8);

        model.press_at(point_at_angle(&model, 0.0, 120.0));
        assert!(model.drag_to(point_at_angle(&model, 47.0, 120.0)));
        assert!((model.state.rotation_degrees() - 47.0).abs() < 1e-9);

        let release = model.release_at(point_at_angle(&model, 47.0, 120.0));
        assert_eq!(release, Some(Release::Snapped { index: 1 }));
        assert!((model.state.rotation_degrees() - 45.0).abs() < 1e-9);
    }

    #[test]
    fn tap_outside_any_item_selects_nothing() {
        let mut model = test_model(8);
        let dead_zone = Point::new(160.0, 160.0);

        model.press_at(dead_zone);
        assert_eq!(model.release_at(dead_zone), None);
        assert_eq!(model.state.selected(), None);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut model = test_model(8);
        assert_eq!(model.release_at(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn empty_dial_accepts_gestures_without_selecting() {
        let mut model = test_model(0);

        model.press_at(Point::new(200.0, 160.0));
        model.drag_to(Point::new(160.0, 220.0));
        assert_eq!(model.release_at(Point::new(160.0, 220.0)), None);
        assert_eq!(model.state.selected(), None);
    }

    #[test]
    fn hover_is_frozen_while_pressed() {
        let mut model = test_model(8);
        assert!(model.update_hover(Point::new(280.0, 160.0)));
        assert_eq!(model.hover_index, Some(0));

        model.press_at(Point::new(280.0, 160.0));
        assert!(!model.update_hover(Point::new(160.0, 280.0)));
        assert_eq!(model.hover_index, Some(0));
    }

    #[test]
    fn reload_aborts_gesture_and_bumps_generation() {
        let mut model = test_model(8);
        model.press_at(point_at_angle(&model, 0.0, 120.0));
        model.drag_to(point_at_angle(&model, 47.0, 120.0));

        model.reload(test_items(3), SizePreset::Large, "Go".into());

        assert_eq!(model.generation(), 1);
        assert_eq!(model.items.len(), 3);
        assert_eq!(model.metrics.radius, 140.0);
        assert!(!model.state.is_dragging());
        assert_eq!(model.release_at(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn selected_item_resolves_through_state() {
        let mut model = test_model(8);
        let on_item_1 = point_at_angle(&model, 45.0, 120.0);
        model.press_at(on_item_1);
        model.release_at(on_item_1);

        let selected = model.selected_item().unwrap();
        assert_eq!(selected.id.get(), 1);
    }
}
