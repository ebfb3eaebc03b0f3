use suraido_core::Board;

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

pub(crate) const LABEL_FILL: &str = "rgba(255,255,255,.65)";

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SliceRect {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) size: f64,
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct RenderOptions {
    pub(crate) show_labels: bool,
}

pub(crate) trait DrawSurface {
    fn clear(&mut self, width: f64, height: f64);
    fn blit(&mut self, src: SliceRect, dest: SliceRect);
    fn label(&mut self, text: &str, center_x: f64, center_y: f64, font_px: f64);
}

pub(crate) fn draw_board(
    surface: &mut impl DrawSurface,
    board: &Board,
    started: bool,
    tile_size: f64,
    source_size: f64,
    options: RenderOptions,
) {
    let grid = board.grid_size();
    if grid == 0 || tile_size <= 0.0 {
        return;
    }
    let slice = source_size / grid as f64;
    let canvas_size = tile_size * grid as f64;
    surface.clear(canvas_size, canvas_size);
    let complete = board.is_complete();
    let blank = board.blank_home();
    for (slot, tile) in board.tiles().iter().enumerate() {
        if slot == board.empty_slot() {
            continue;
        }
        if started && complete && tile.home == blank {
            continue;
        }
        let dest = SliceRect {
            x: (slot % grid) as f64 * tile_size,
            y: (slot / grid) as f64 * tile_size,
            size: tile_size,
        };
        let src = SliceRect {
            x: (tile.home % grid) as f64 * slice,
            y: (tile.home / grid) as f64 * slice,
            size: slice,
        };
        surface.blit(src, dest);
        if options.show_labels {
            surface.label(
                &(tile.home + 1).to_string(),
                dest.x + tile_size * 0.5,
                dest.y + tile_size * 0.5,
                tile_size * 0.5,
            );
        }
    }
}

pub(crate) struct CanvasSurface<'a> {
    pub(crate) ctx: &'a CanvasRenderingContext2d,
    pub(crate) image: &'a HtmlImageElement,
}

impl DrawSurface for CanvasSurface<'_> {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn blit(&mut self, src: SliceRect, dest: SliceRect) {
        let _ = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                self.image, src.x, src.y, src.size, src.size, dest.x, dest.y, dest.size, dest.size,
            );
    }

    fn label(&mut self, text: &str, center_x: f64, center_y: f64, font_px: f64) {
        self.ctx.set_font(&format!("{font_px:.0}px sans-serif"));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_line_width(1.0);
        let _ = self.ctx.stroke_text(text, center_x, center_y);
        self.ctx.set_fill_style_str(LABEL_FILL);
        let _ = self.ctx.fill_text(text, center_x, center_y);
    }
}

#[cfg(test)]
mod tests {
    use super::{draw_board, DrawSurface, RenderOptions, SliceRect};
    use suraido_core::{Board, GRID_SIZE, TILE_COUNT};

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear(f64, f64),
        Blit { src: SliceRect, dest: SliceRect },
        Label { text: String, x: f64, y: f64 },
    }

    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    impl DrawSurface for RecordingSurface {
        fn clear(&mut self, width: f64, height: f64) {
            self.ops.push(Op::Clear(width, height));
        }

        fn blit(&mut self, src: SliceRect, dest: SliceRect) {
            self.ops.push(Op::Blit { src, dest });
        }

        fn label(&mut self, text: &str, center_x: f64, center_y: f64, _font_px: f64) {
            self.ops.push(Op::Label {
                text: text.to_string(),
                x: center_x,
                y: center_y,
            });
        }
    }

    fn labels(surface: &RecordingSurface) -> Vec<&str> {
        surface
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn blit_count(surface: &RecordingSurface) -> usize {
        surface
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Blit { .. }))
            .count()
    }

    #[test]
    fn the_empty_slot_is_never_drawn() {
        let board = Board::solved(GRID_SIZE);
        let mut surface = RecordingSurface::default();
        draw_board(
            &mut surface,
            &board,
            false,
            100.0,
            1280.0,
            RenderOptions { show_labels: true },
        );
        assert_eq!(surface.ops[0], Op::Clear(400.0, 400.0));
        assert_eq!(blit_count(&surface), TILE_COUNT - 1);
        assert!(!labels(&surface).contains(&"16"));
    }

    #[test]
    fn a_started_complete_board_suppresses_the_blank_tile() {
        let mut board = Board::solved(GRID_SIZE);
        board.park_empty_slot();
        let mut surface = RecordingSurface::default();
        draw_board(
            &mut surface,
            &board,
            true,
            100.0,
            1280.0,
            RenderOptions { show_labels: true },
        );
        assert_eq!(blit_count(&surface), TILE_COUNT - 1);
        assert!(!labels(&surface).contains(&"16"));
    }

    #[test]
    fn a_finished_round_draws_the_full_picture_without_labels() {
        let mut board = Board::solved(GRID_SIZE);
        board.park_empty_slot();
        let mut surface = RecordingSurface::default();
        draw_board(
            &mut surface,
            &board,
            false,
            100.0,
            1280.0,
            RenderOptions { show_labels: false },
        );
        assert_eq!(blit_count(&surface), TILE_COUNT);
        assert!(labels(&surface).is_empty());
    }

    #[test]
    fn rects_map_slots_to_destinations_and_homes_to_sources() {
        let mut order: Vec<usize> = (0..TILE_COUNT).collect();
        order.swap(0, 1);
        order.swap(0, 4);
        let board = Board::from_order(&order, GRID_SIZE).unwrap();
        let mut surface = RecordingSurface::default();
        draw_board(
            &mut surface,
            &board,
            true,
            100.0,
            1280.0,
            RenderOptions::default(),
        );
        let first = surface
            .ops
            .iter()
            .find_map(|op| match op {
                Op::Blit { src, dest } => Some((*src, *dest)),
                _ => None,
            })
            .unwrap();
        assert_eq!(
            first.1,
            SliceRect {
                x: 0.0,
                y: 0.0,
                size: 100.0
            }
        );
        assert_eq!(
            first.0,
            SliceRect {
                x: 0.0,
                y: 320.0,
                size: 320.0
            }
        );
    }
}
