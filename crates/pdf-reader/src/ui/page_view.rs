use crate::viewer::command::ViewerCommand;
use crate::viewer::engine::PdfEngine;
use crate::viewer::session::{RenderedPage, ViewerSession};
use eframe::egui;

/// True when an image of `image_size` needs scrolling to fit in `viewport_size`.
pub fn overflows(image_size: egui::Vec2, viewport_size: egui::Vec2) -> bool {
    image_size.x > viewport_size.x || image_size.y > viewport_size.y
}

/// Where a pan starts: the press position, since egui reports the drag only
/// once the pointer has passed its drag threshold.
pub fn drag_anchor(
    press_origin: Option<egui::Pos2>,
    pointer: Option<egui::Pos2>,
) -> Option<egui::Pos2> {
    press_origin.or(pointer)
}

/// Screen rectangle of the page inside `content_rect`: centred, then shifted by the pan offset.
pub fn page_rect(
    content_rect: egui::Rect,
    image_size: egui::Vec2,
    offset: egui::Vec2,
) -> egui::Rect {
    let centring = ((content_rect.size() - image_size) * 0.5).max(egui::Vec2::ZERO);
    egui::Rect::from_min_size(content_rect.min + centring + offset, image_size)
}

#[derive(Default)]
pub struct PageView {
    texture: Option<(u64, egui::TextureHandle)>,
}

impl PageView {
    fn texture_for(&mut self, ctx: &egui::Context, page: &RenderedPage) -> egui::TextureHandle {
        if let Some((generation, texture)) = &self.texture
            && *generation == page.generation
        {
            return texture.clone();
        }

        let texture = ctx.load_texture(
            format!("pdf_page_{}", page.page_index),
            page.image.clone(),
            Default::default(),
        );
        self.texture = Some((page.generation, texture.clone()));
        texture
    }

    pub fn show<E: PdfEngine>(
        &mut self,
        ui: &mut egui::Ui,
        session: &ViewerSession<E>,
        commands: &mut Vec<ViewerCommand>,
    ) {
        let Some(page) = session.rendered_page() else {
            self.texture = None;
            if !session.is_document_loaded() {
                ui.vertical_centered(|ui| {
                    ui.add_space(100.0);
                    ui.label("Open a PDF file to view");
                });
            }
            return;
        };

        let texture = self.texture_for(ui.ctx(), page);
        let image_size = texture.size_vec2();
        let viewport_size = ui.available_size();
        let overflowing = overflows(image_size, viewport_size);
        let offset = session.image_offset();

        egui::ScrollArea::both()
            .drag_to_scroll(false)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let content_size = image_size.max(viewport_size);
                let (content_rect, response) =
                    ui.allocate_exact_size(content_size, egui::Sense::drag());

                ui.painter().image(
                    texture.id(),
                    page_rect(content_rect, image_size, offset),
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );

                let pointer = response.interact_pointer_pos();
                if response.drag_started_by(egui::PointerButton::Primary)
                    && let Some(anchor) =
                        drag_anchor(ui.input(|i| i.pointer.press_origin()), pointer)
                {
                    commands.push(ViewerCommand::DragStart {
                        pos: anchor,
                        overflowing,
                    });
                }

                // The start frame also carries the movement made inside the threshold.
                if response.dragged()
                    && let Some(pos) = pointer
                {
                    commands.push(ViewerCommand::DragMove(pos));
                }

                if response.drag_stopped() {
                    commands.push(ViewerCommand::DragEnd);
                }
            });

        if session.drag_state().is_dragging() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if overflowing {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_overflow_on_either_axis() {
        let viewport = vec2(800.0, 600.0);
        assert!(!overflows(vec2(612.0, 592.0), viewport));
        assert!(overflows(vec2(612.0, 792.0), viewport));
        assert!(overflows(vec2(900.0, 100.0), viewport));
        assert!(!overflows(viewport, viewport));
    }

    #[test]
    fn test_drag_anchor_prefers_press_origin() {
        let press = Some(pos2(100.0, 100.0));
        let past_threshold = Some(pos2(106.0, 100.0));
        assert_eq!(drag_anchor(press, past_threshold), press);
        assert_eq!(drag_anchor(None, past_threshold), past_threshold);
        assert_eq!(drag_anchor(None, None), None);
    }

    #[test]
    fn test_small_page_is_centred() {
        let content = egui::Rect::from_min_size(pos2(0.0, 50.0), vec2(800.0, 600.0));
        let rect = page_rect(content, vec2(600.0, 400.0), egui::Vec2::ZERO);
        assert_eq!(rect.min, pos2(100.0, 150.0));
        assert_eq!(rect.size(), vec2(600.0, 400.0));
    }

    #[test]
    fn test_large_page_is_anchored_and_offset() {
        let content = egui::Rect::from_min_size(pos2(0.0, 0.0), vec2(1200.0, 1600.0));
        let rect = page_rect(content, vec2(1200.0, 1600.0), vec2(-30.0, 12.0));
        assert_eq!(rect.min, pos2(-30.0, 12.0));
    }
}
