use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub selected: Srgba<f64>,
    pub hovered: Srgba<f64>,
    pub item: Srgba<f64>,
    pub center: Srgba<f64>,
    pub ring: Srgba<f64>,
    pub indicator: Srgba<f64>,
    pub text: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            selected: Self::lookup_color(
                context,
                "theme_selected_bg_color",
                Srgba::new(0.23, 0.42, 0.78, 0.95),
                Some(0.95),
            ),
            hovered: Self::lookup_color(
                context,
                "theme_selected_bg_color",
                Srgba::new(0.35, 0.45, 0.85, 0.6),
                Some(0.6),
            ),
            item: Self::lookup_color(
                context,
                "theme_bg_color",
                Srgba::new(0.18, 0.18, 0.21, 0.9),
                Some(0.9),
            ),
            center: Self::lookup_color(
                context,
                "theme_base_color",
                Srgba::new(0.1, 0.1, 0.13, 0.95),
                Some(0.95),
            ),
            ring: Self::lookup_color(
                context,
                "borders",
                Srgba::new(0.45, 0.45, 0.5, 0.3),
                Some(0.3),
            ),
            indicator: Self::lookup_color(
                context,
                "error_color",
                Srgba::new(0.85, 0.2, 0.2, 1.0),
                None,
            ),
            text: Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(1.0, 1.0, 1.0, 1.0),
                None,
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.rotary-window {
    background-color: #14161c;
}
.rotary-drawing-area {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
