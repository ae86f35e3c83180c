use egui::{Align2, Color32, FontId, Pos2, Sense, Stroke, Ui, pos2, vec2};

use crate::core::data::complex::Complex;
use crate::core::parameter::control_plane::ControlPlane;

const BACKGROUND: Color32 = Color32::from_gray(24);
const AXIS: Color32 = Color32::from_gray(110);
const MARKER: Color32 = Color32::from_rgb(230, 80, 60);

/// Draws the `c` picker and returns the parameter under a click, if any.
pub fn show(ui: &mut Ui, plane: &ControlPlane, c: Complex, label: &str) -> Option<Complex> {
    let size = plane.size();
    let (response, painter) = ui.allocate_painter(
        vec2(size.width() as f32, size.height() as f32),
        Sense::click_and_drag(),
    );
    let rect = response.rect;
    let to_screen = |(x, y): (f64, f64)| -> Pos2 { rect.min + vec2(x as f32, y as f32) };

    painter.rect_filled(rect, 0.0, BACKGROUND);

    let origin = to_screen(plane.origin());
    painter.line_segment(
        [pos2(rect.left(), origin.y), pos2(rect.right(), origin.y)],
        Stroke::new(1.0, AXIS),
    );
    painter.line_segment(
        [pos2(origin.x, rect.top()), pos2(origin.x, rect.bottom())],
        Stroke::new(1.0, AXIS),
    );

    let anchor = to_screen(plane.label_anchor(c));
    painter.circle_filled(anchor, 3.0, MARKER);
    painter.text(
        anchor + vec2(5.0, -5.0),
        Align2::LEFT_BOTTOM,
        label,
        FontId::proportional(12.0),
        Color32::WHITE,
    );

    if !(response.clicked() || response.dragged()) {
        return None;
    }

    let pointer = response.interact_pointer_pos()?;
    let local = pointer - rect.min;

    Some(plane.map_to_cartesian(f64::from(local.x), f64::from(local.y)))
}
