use web_sys::{DomRect, Element, HtmlCanvasElement, MouseEvent};

pub(crate) trait HasClientRect {
    fn client_rect(&self) -> DomRect;
}

impl HasClientRect for HtmlCanvasElement {
    fn client_rect(&self) -> DomRect {
        self.get_bounding_client_rect()
    }
}

impl HasClientRect for Element {
    fn client_rect(&self) -> DomRect {
        self.get_bounding_client_rect()
    }
}

pub(crate) fn click_coords(event: &MouseEvent, element: &impl HasClientRect) -> Option<(f64, f64)> {
    let rect = element.client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    let x = event.client_x() as f64 - rect.left();
    let y = event.client_y() as f64 - rect.top();
    Some((x, y))
}

pub(crate) fn cell_at(x: f64, y: f64, tile_size: f64, grid_size: usize) -> Option<usize> {
    if tile_size <= 0.0 || x < 0.0 || y < 0.0 {
        return None;
    }
    let col = (x / tile_size).floor() as usize;
    let row = (y / tile_size).floor() as usize;
    if col >= grid_size || row >= grid_size {
        return None;
    }
    Some(row * grid_size + col)
}
