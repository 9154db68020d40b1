use super::model::{DialItem, DialModel};
use super::{ICON_INACTIVE_ALPHA, ICON_SIZE};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use palette::Srgba;
use spindle::Point;
use std::f64::consts::PI;

struct ItemRenderer<'a> {
    item: &'a DialItem,
    center: Point,
    radius: f64,
    selected: bool,
    hovered: bool,
}

impl<'a> ItemRenderer<'a> {
    fn new(
        item: &'a DialItem,
        center: Point,
        radius: f64,
        selected: bool,
        hovered: bool,
    ) -> Self {
        Self {
            item,
            center,
            radius,
            selected,
            hovered,
        }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        self.draw_circle(cr, colors)?;
        self.draw_content(cr, colors)?;
        Ok(())
    }

    fn draw_circle(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let visual = ItemVisual::resolve(self.selected, self.hovered);
        let (r, g, b, a) = visual.color(colors).into_components();
        cr.set_source_rgba(r, g, b, a);
        cr.arc(self.center.x, self.center.y, self.radius, 0.0, 2.0 * PI);
        cr.fill()?;

        if self.selected {
            let (r, g, b, _) = colors.text.into_components();
            cr.set_source_rgba(r, g, b, 0.8);
            cr.set_line_width(2.0);
            cr.arc(self.center.x, self.center.y, self.radius, 0.0, 2.0 * PI);
            cr.stroke()?;
        }
        Ok(())
    }

    fn draw_content(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        if let Some(pixbuf) = &self.item.pixbuf {
            self.draw_icon(cr, pixbuf)
        } else if let Some(initial) = self.item.item.initial() {
            self.draw_initial(cr, colors, initial)
        } else {
            Ok(())
        }
    }

    fn draw_icon(&self, cr: &Context, pixbuf: &Pixbuf) -> Result<(), cairo::Error> {
        // fit icon into the item circle
        let icon_scale = (self.radius * 2.0 * 0.75) / ICON_SIZE as f64;
        let (iw, ih) = (
            pixbuf.width() as f64 * icon_scale,
            pixbuf.height() as f64 * icon_scale,
        );
        let (ix, iy) = (self.center.x - iw / 2.0, self.center.y - ih / 2.0);

        cr.save()?;
        cr.translate(ix, iy);
        cr.scale(icon_scale, icon_scale);

        // dim icons that are neither selected nor hovered
        if !self.selected && !self.hovered {
            cr.push_group();
            cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
            cr.paint()?;
            cr.pop_group_to_source()?;
            cr.paint_with_alpha(ICON_INACTIVE_ALPHA)?;
        } else {
            cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
            cr.paint()?;
        }
        cr.restore()
    }

    fn draw_initial(
        &self,
        cr: &Context,
        colors: &ThemeColors,
        initial: char,
    ) -> Result<(), cairo::Error> {
        let mut buf = [0u8; 4];
        let text = initial.encode_utf8(&mut buf);
        draw_centered_text(
            cr,
            self.center,
            0.0,
            self.radius * 0.6,
            true,
            colors.text,
            text,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemVisual {
    Selected,
    Hovered,
    Idle,
}

impl ItemVisual {
    fn resolve(selected: bool, hovered: bool) -> Self {
        if selected {
            Self::Selected
        } else if hovered {
            Self::Hovered
        } else {
            Self::Idle
        }
    }

    fn color(&self, colors: &ThemeColors) -> Srgba<f64> {
        match self {
            Self::Selected => colors.selected,
            Self::Hovered => colors.hovered,
            Self::Idle => colors.item,
        }
    }
}

pub fn draw(cr: &Context, model: &DialModel, colors: &ThemeColors) -> Result<(), cairo::Error> {
    draw_guide_rings(cr, model, colors)?;
    draw_center(cr, model, colors)?;

    for (i, item) in model.items.iter().enumerate() {
        ItemRenderer::new(
            item,
            model.item_center(i),
            model.metrics.item_radius(),
            model.state.selected() == Some(i),
            model.hover_index == Some(i),
        )
        .draw(cr, colors)?;
    }

    draw_indicator(cr, model, colors)
}

fn draw_guide_rings(
    cr: &Context,
    model: &DialModel,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let (r, g, b, a) = colors.ring.into_components();
    let outer = model.metrics.side / 2.0;

    cr.set_line_width(1.0);
    for (inset, fade) in [(2.0, 1.0), (18.0, 0.66), (34.0, 0.33)] {
        cr.set_source_rgba(r, g, b, a * fade);
        cr.arc(model.center.x, model.center.y, outer - inset, 0.0, 2.0 * PI);
        cr.stroke()?;
    }
    Ok(())
}

fn draw_center(cr: &Context, model: &DialModel, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let radius = model.metrics.center_radius();
    let (r, g, b, a) = colors.center.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.arc(model.center.x, model.center.y, radius, 0.0, 2.0 * PI);
    cr.fill()?;

    draw_centered_text(
        cr,
        model.center,
        -radius * 0.4,
        9.0,
        false,
        colors.text,
        "ROTARY",
    )?;
    draw_centered_text(
        cr,
        model.center,
        0.0,
        14.0,
        true,
        colors.text,
        &model.center_label,
    )?;

    if let Some(selected) = model.selected_item() {
        draw_centered_text(
            cr,
            model.center,
            radius * 0.45,
            10.0,
            false,
            colors.text,
            selected.label.as_str(),
        )?;
    }
    Ok(())
}

/// Tick pointing at the currently selected item, rotating with the wheel.
fn draw_indicator(
    cr: &Context,
    model: &DialModel,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let Some(selected) = model.state.selected() else {
        return Ok(());
    };

    let angle = model.state.item_angle(selected).to_radians();
    let inner = model.metrics.radius + model.metrics.item_radius();
    let outer = inner + 10.0;

    let (r, g, b, a) = colors.indicator.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.set_line_width(3.0);
    cr.move_to(
        model.center.x + inner * angle.cos(),
        model.center.y + inner * angle.sin(),
    );
    cr.line_to(
        model.center.x + outer * angle.cos(),
        model.center.y + outer * angle.sin(),
    );
    cr.stroke()
}

fn draw_centered_text(
    cr: &Context,
    center: Point,
    y_offset: f64,
    size: f64,
    bold: bool,
    color: Srgba<f64>,
    text: &str,
) -> Result<(), cairo::Error> {
    let weight = if bold {
        cairo::FontWeight::Bold
    } else {
        cairo::FontWeight::Normal
    };
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.select_font_face("Sans", cairo::FontSlant::Normal, weight);
    cr.set_font_size(size);
    if let Ok(ext) = cr.text_extents(text) {
        cr.move_to(
            center.x - ext.width() / 2.0,
            center.y + y_offset + ext.height() / 2.0,
        );
        cr.show_text(text)?;
    }
    Ok(())
}
