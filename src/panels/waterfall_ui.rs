//! Central image area: draws the waterfall, crosshair and selection, and turns
//! clicks into image-area pixel coordinates.

use eframe::egui;

use crate::color_scheme::OverlayColors;
use crate::data::calculator::DisplayGeometry;
use crate::data::selection::{Point, Selection, SelectionEvent, ThirdClickPolicy};
use crate::data::waterfall::WaterfallImage;

pub struct WaterfallPanel {
    image: Option<WaterfallImage>,
    texture: Option<egui::TextureHandle>,
    pub selection: Selection,
    /// Pointer position over the image during the last frame.
    pub hover: Option<Point>,
    /// Size of the image area during the last frame.
    pub display: Option<DisplayGeometry>,
    /// Area size the points of the current selection are expressed in.
    reference: Option<DisplayGeometry>,
    pub overlay: OverlayColors,
}

impl WaterfallPanel {
    pub const NO_IMAGE_LABEL: &'static str = "Load a waterfall image to start picking";

    pub fn new(policy: ThirdClickPolicy, overlay: OverlayColors) -> Self {
        Self {
            image: None,
            texture: None,
            selection: Selection::new(policy),
            hover: None,
            display: None,
            reference: None,
            overlay,
        }
    }

    pub fn image(&self) -> Option<&WaterfallImage> {
        self.image.as_ref()
    }

    /// Replace the shown image. The selection starts over.
    pub fn set_image(&mut self, ctx: &egui::Context, image: WaterfallImage) {
        self.texture = Some(ctx.load_texture(
            "waterfall",
            image.to_color_image(),
            egui::TextureOptions::LINEAR,
        ));
        self.image = Some(image);
        self.reset();
        self.hover = None;
    }

    pub fn reset(&mut self) {
        self.selection.reset();
        self.reference = None;
    }

    /// Area geometry the selection was clicked in; the calculator must use this one.
    pub fn selection_geometry(&self) -> Option<DisplayGeometry> {
        if self.selection.is_empty() {
            None
        } else {
            self.reference
        }
    }

    /// Feed a click at screen position `pos` inside the image area `rect`.
    ///
    /// A new selection adopts the current area size. Later clicks of the same
    /// selection are rescaled into it, so resizing the window between clicks
    /// or before Calculate keeps the box on the same part of the image.
    pub fn handle_click(&mut self, rect: egui::Rect, pos: egui::Pos2) -> SelectionEvent {
        let current = area_geometry(rect);
        if self.selection.is_empty() || self.selection.is_complete() || self.reference.is_none() {
            self.reference = Some(current);
        }
        let reference = self.reference.unwrap_or(current);
        let p = to_image_point(rect, pos, reference);
        log::debug!("Click at ({}, {})", p.x, p.y);
        self.selection.add_point(p)
    }

    /// Render into the remaining space of `ui`. Returns the selection event of a click, if any.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<SelectionEvent> {
        let Some(texture) = &self.texture else {
            self.hover = None;
            self.display = None;
            ui.centered_and_justified(|ui| {
                ui.label(Self::NO_IMAGE_LABEL);
            });
            return None;
        };

        let size = ui.available_size();
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
        let painter = ui.painter_at(rect);
        painter.image(
            texture.id(),
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        let current = area_geometry(rect);
        self.display = Some(current);
        self.hover = response
            .hover_pos()
            .map(|pos| to_image_point(rect, pos, current));

        let mut event = None;
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                event = Some(self.handle_click(rect, pos));
            }
        }

        self.draw_overlay(&painter, rect);
        event
    }

    fn draw_overlay(&self, painter: &egui::Painter, rect: egui::Rect) {
        let current = area_geometry(rect);
        if let Some(p) = self.hover {
            let stroke = egui::Stroke::new(1.0, self.overlay.crosshair);
            let pos = to_screen(rect, p, current);
            painter.hline(rect.x_range(), pos.y, stroke);
            painter.vline(pos.x, rect.y_range(), stroke);
        }

        let reference = self.reference.unwrap_or(current);
        if let Some(b) = self.selection.selection_box() {
            let min = to_screen(rect, Point::new(b.x, b.y), reference);
            let max = to_screen(
                rect,
                Point::new(b.x + b.width as i32, b.y + b.height as i32),
                reference,
            );
            let box_rect = egui::Rect::from_min_max(min, max);
            painter.rect_stroke(
                box_rect,
                egui::CornerRadius::ZERO,
                egui::Stroke::new(2.0, self.overlay.selection_box),
                egui::StrokeKind::Middle,
            );
        } else if let Some(first) = self.selection.points().first() {
            painter.circle_filled(
                to_screen(rect, *first, reference),
                3.0,
                self.overlay.first_point,
            );
        }
    }
}

fn area_geometry(rect: egui::Rect) -> DisplayGeometry {
    DisplayGeometry::new(rect.width().round() as u32, rect.height().round() as u32)
}

/// Ratio between `reference` and the on-screen `rect`, per axis.
fn scale(rect: egui::Rect, reference: DisplayGeometry) -> egui::Vec2 {
    let sx = if rect.width() > 0.0 {
        reference.width as f32 / rect.width()
    } else {
        1.0
    };
    let sy = if rect.height() > 0.0 {
        reference.height as f32 / rect.height()
    } else {
        1.0
    };
    egui::vec2(sx, sy)
}

/// Screen position to pixels of an area sized `reference`.
fn to_image_point(rect: egui::Rect, pos: egui::Pos2, reference: DisplayGeometry) -> Point {
    let rel = (pos - rect.min) * scale(rect, reference);
    Point::new(rel.x.round() as i32, rel.y.round() as i32)
}

fn to_screen(rect: egui::Rect, p: Point, reference: DisplayGeometry) -> egui::Pos2 {
    let s = scale(rect, reference);
    rect.min + egui::vec2(p.x as f32 / s.x, p.y as f32 / s.y)
}

/// Status-bar text for a pointer position.
pub fn position_status(p: Point) -> String {
    format!("Position: ({}, {})", p.x, p.y)
}

/// Status-bar text for a completed selection.
pub fn box_status(b: &crate::data::selection::SelectionBox) -> String {
    format!("Box: {}x{} at ({}, {})", b.width, b.height, b.x, b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_point_is_relative_to_rect() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(100.0, 50.0));
        let same = area_geometry(rect);
        assert_eq!(to_image_point(rect, egui::pos2(15.4, 20.6), same), Point::new(5, 1));
        assert_eq!(to_screen(rect, Point::new(5, 1), same), egui::pos2(15.0, 21.0));
    }

    #[test]
    fn points_rescale_into_reference_area() {
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(950.0, 600.0));
        let reference = DisplayGeometry::new(1900, 1200);
        assert_eq!(
            to_image_point(rect, egui::pos2(350.0, 50.0), reference),
            Point::new(700, 100)
        );
        assert_eq!(
            to_screen(rect, Point::new(700, 100), reference),
            egui::pos2(350.0, 50.0)
        );
    }

    #[test]
    fn second_click_after_resize_uses_first_click_geometry() {
        let mut panel = WaterfallPanel::new(
            ThirdClickPolicy::Restart,
            crate::color_scheme::ColorScheme::Dark.overlay_colors(),
        );
        let wide = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1900.0, 1200.0));
        let narrow = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(950.0, 1200.0));
        panel.handle_click(wide, egui::pos2(700.0, 100.0));
        let event = panel.handle_click(narrow, egui::pos2(550.0, 400.0));
        let SelectionEvent::Completed(b) = event else {
            panic!("expected completed selection, got {:?}", event);
        };
        assert_eq!((b.x, b.width), (700, 400));
        assert_eq!(panel.selection_geometry(), Some(DisplayGeometry::new(1900, 1200)));

        panel.reset();
        assert_eq!(panel.selection_geometry(), None);
    }
}
