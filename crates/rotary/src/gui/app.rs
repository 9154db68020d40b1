use crate::config;
use crate::events::AppEvent;
use crate::gui::dial::{self, DialItem, DialModel, Release};
use crate::gui::theme::{self, ThemeColors};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use spindle::{MenuItem, Point};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

pub type SelectCallback = Rc<dyn Fn(&MenuItem)>;

pub struct AppModel {
    pub dial: Rc<RefCell<DialModel>>,
    pub on_select: SelectCallback,
    pub config_path: PathBuf,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Pressed(Point),
    DragMoved(Point),
    Released(Point),
    Motion(Point),
    Resized(i32, i32),
    Activate { generation: u64, index: usize },
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (
        DialModel,
        SelectCallback,
        PathBuf,
        async_channel::Receiver<AppEvent>,
    );
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Rotary"),
            set_default_size: (side, side),
            add_css_class: "rotary-window",

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "rotary-drawing-area",

                connect_resize[sender] => move |_, width, height| {
                    sender.input(AppMsg::Resized(width, height));
                },

                add_controller = gtk::EventControllerMotion {
                    connect_motion[sender] => move |_, x, y| {
                        sender.input(AppMsg::Motion(Point::new(x, y)));
                    }
                },

                // One gesture controller covers mouse and single-touch drags;
                // GTK's implicit grab keeps delivering updates and the final
                // release after the pointer leaves the widget.
                add_controller = gtk::GestureDrag {
                    connect_drag_begin[sender] => move |_, x, y| {
                        sender.input(AppMsg::Pressed(Point::new(x, y)));
                    },
                    connect_drag_update[sender] => move |gesture, dx, dy| {
                        if let Some((x, y)) = gesture.start_point() {
                            sender.input(AppMsg::DragMoved(Point::new(x + dx, y + dy)));
                        }
                    },
                    connect_drag_end[sender] => move |gesture, dx, dy| {
                        if let Some((x, y)) = gesture.start_point() {
                            sender.input(AppMsg::Released(Point::new(x + dx, y + dy)));
                        }
                    },
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (dial, on_select, config_path, rx) = init;

        theme::load_css();

        let dial = Rc::new(RefCell::new(dial));
        let side = dial.borrow().metrics.side as i32;

        let model = AppModel {
            dial: dial.clone(),
            on_select,
            config_path,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let dial_draw = dial.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                if let Err(e) = dial::draw(cr, &dial_draw.borrow(), &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Resized(width, height) => {
                self.dial
                    .borrow_mut()
                    .set_viewport(width as f64, height as f64);
                self.drawing_area.queue_draw();
            }
            AppMsg::Motion(point) => {
                if self.dial.borrow_mut().update_hover(point) {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Pressed(point) => {
                self.dial.borrow_mut().press_at(point);
            }
            AppMsg::DragMoved(point) => {
                if self.dial.borrow_mut().drag_to(point) {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Released(point) => {
                let release = self.dial.borrow_mut().release_at(point);
                match release {
                    Some(Release::Snapped { index }) => {
                        self.drawing_area.queue_draw();
                        self.schedule_activation(&sender, index);
                    }
                    Some(Release::Tapped { index }) => {
                        // direct activation path: no snap delay
                        self.drawing_area.queue_draw();
                        self.activate(index);
                    }
                    None => {}
                }
            }
            AppMsg::Activate { generation, index } => {
                // deferred snap notification; stale once the item set changed
                if self.dial.borrow().generation() == generation {
                    self.activate(index);
                }
            }
            AppMsg::ConfigReload => match config::load_from(&self.config_path) {
                Ok(new_config) => {
                    let items = new_config
                        .items
                        .iter()
                        .map(|c| DialItem::new(c.to_menu_item()))
                        .collect();
                    self.dial
                        .borrow_mut()
                        .reload(items, new_config.size, new_config.center_label);
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}

impl AppModel {
    fn activate(&self, index: usize) {
        let dial = self.dial.borrow();
        if let Some(item) = dial.menu_item(index) {
            (self.on_select)(item);
        }
    }

    fn schedule_activation(&self, sender: &ComponentSender<Self>, index: usize) {
        let generation = self.dial.borrow().generation();
        let sender = sender.clone();
        glib::timeout_add_local_once(
            Duration::from_millis(dial::SNAP_NOTIFY_DELAY_MS),
            move || {
                // a no-op if the component has already been torn down
                sender.input(AppMsg::Activate { generation, index });
            },
        );
    }
}
