//! egui implementation of the map drawing capability: equirectangular
//! projection of the visible region onto the panel, a graticule, marker
//! pins, the user-location dot, and a recenter control.

use egui::{Align2, Color32, CornerRadius, FontId, Pos2, Rect, Sense, Stroke};
use location_core::{MapRenderer, MapViewOptions};
use shared::geo::{Coordinate, Region};

const WATER_COLOR: Color32 = Color32::from_rgb(214, 230, 242);
const GRATICULE_COLOR: Color32 = Color32::from_rgb(166, 188, 204);
const LABEL_COLOR: Color32 = Color32::from_rgb(96, 116, 130);
const MARKER_COLOR: Color32 = Color32::from_rgb(204, 64, 54);
const USER_DOT_COLOR: Color32 = Color32::from_rgb(66, 133, 244);

/// Renderer-local pan offset in degrees, driven by dragging. Never touches
/// the screen state; recentering just clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MapPan {
    pub lat_offset: f64,
    pub lon_offset: f64,
}

impl MapPan {
    pub fn recenter(&mut self) {
        *self = Self::default();
    }

    pub fn is_centered(&self) -> bool {
        *self == Self::default()
    }
}

pub struct EguiMapCanvas<'u, 's> {
    pub ui: &'u mut egui::Ui,
    pub pan: &'s mut MapPan,
    pub show_graticule: &'s mut bool,
}

impl MapRenderer for EguiMapCanvas<'_, '_> {
    fn render_map(&mut self, region: Region, markers: &[Coordinate], options: MapViewOptions) {
        let size = self.ui.available_size();
        let (response, painter) = self.ui.allocate_painter(size, Sense::click_and_drag());
        let rect = response.rect;

        // Dragging pans in screen pixels; convert to degrees of the span.
        if response.dragged() {
            let delta = response.drag_delta();
            self.pan.lon_offset -=
                f64::from(delta.x) * region.longitude_delta / f64::from(rect.width());
            self.pan.lat_offset +=
                f64::from(delta.y) * region.latitude_delta / f64::from(rect.height());
        }

        painter.rect_filled(rect, CornerRadius::same(0), WATER_COLOR);

        if *self.show_graticule {
            self.draw_graticule(&painter, rect, region);
        }

        for marker in markers {
            let head = project(region, *self.pan, rect, *marker);
            if rect.expand(16.0).contains(head) {
                // Simple pin: stem down to the coordinate, round head above.
                let tip = head;
                let head_center = Pos2::new(tip.x, tip.y - 12.0);
                painter.line_segment([tip, head_center], Stroke::new(2.5, MARKER_COLOR));
                painter.circle_filled(head_center, 6.0, MARKER_COLOR);
                painter.circle_stroke(head_center, 6.0, Stroke::new(1.5, Color32::WHITE));
            }
        }

        if options.show_user_location {
            let dot = project(region, *self.pan, rect, region.center);
            if rect.contains(dot) {
                painter.circle_filled(dot, 5.0, USER_DOT_COLOR);
                painter.circle_stroke(dot, 7.0, Stroke::new(2.0, Color32::WHITE));
            }
        }

        // Shown only once the user has panned away from the fix.
        if options.show_recenter_control && !self.pan.is_centered() {
            let button_rect = Rect::from_min_size(
                Pos2::new(rect.right() - 96.0, rect.bottom() - 40.0),
                egui::vec2(84.0, 28.0),
            );
            let recenter = self
                .ui
                .put(button_rect, egui::Button::new("Recenter"))
                .clicked();
            if recenter {
                self.pan.recenter();
            }
        }

        response.context_menu(|ui| {
            ui.checkbox(self.show_graticule, "Show graticule");
        });
    }
}

impl EguiMapCanvas<'_, '_> {
    fn draw_graticule(&self, painter: &egui::Painter, rect: Rect, region: Region) {
        let stroke = Stroke::new(1.0, GRATICULE_COLOR);
        let font = FontId::proportional(9.0);
        let viewed_lat = region.center.latitude + self.pan.lat_offset;
        let viewed_lon = region.center.longitude + self.pan.lon_offset;

        let lat_step = graticule_step(region.latitude_delta);
        let bottom = viewed_lat - region.latitude_delta / 2.0;
        let top = viewed_lat + region.latitude_delta / 2.0;
        let mut lat = (bottom / lat_step).ceil() * lat_step;
        while lat <= top {
            let y = project(region, *self.pan, rect, Coordinate::new(lat, viewed_lon)).y;
            painter.line_segment(
                [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
                stroke,
            );
            painter.text(
                Pos2::new(rect.left() + 4.0, y + 2.0),
                Align2::LEFT_TOP,
                format!("{lat:.3}°"),
                font.clone(),
                LABEL_COLOR,
            );
            lat += lat_step;
        }

        let lon_step = graticule_step(region.longitude_delta);
        let left = viewed_lon - region.longitude_delta / 2.0;
        let right = viewed_lon + region.longitude_delta / 2.0;
        let mut lon = (left / lon_step).ceil() * lon_step;
        while lon <= right {
            let x = project(region, *self.pan, rect, Coordinate::new(viewed_lat, lon)).x;
            painter.line_segment(
                [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
                stroke,
            );
            painter.text(
                Pos2::new(x + 2.0, rect.top() + 2.0),
                Align2::LEFT_TOP,
                format!("{lon:.3}°"),
                font.clone(),
                LABEL_COLOR,
            );
            lon += lon_step;
        }
    }
}

/// Equirectangular projection of `coordinate` into `rect` for the visible
/// region (the region center shifted by the pan offset).
fn project(region: Region, pan: MapPan, rect: Rect, coordinate: Coordinate) -> Pos2 {
    let viewed_lat = region.center.latitude + pan.lat_offset;
    let viewed_lon = region.center.longitude + pan.lon_offset;

    let x = f64::from(rect.left())
        + ((coordinate.longitude - (viewed_lon - region.longitude_delta / 2.0))
            / region.longitude_delta)
            * f64::from(rect.width());
    let y = f64::from(rect.top())
        + (((viewed_lat + region.latitude_delta / 2.0) - coordinate.latitude)
            / region.latitude_delta)
            * f64::from(rect.height());
    Pos2::new(x as f32, y as f32)
}

/// Round graticule spacing (1/2/5 times a power of ten) that yields a
/// handful of lines across the span.
fn graticule_step(span: f64) -> f64 {
    let target = span / 6.0;
    let magnitude = 10f64.powf(target.log10().floor());
    let normalized = target / magnitude;
    let factor = if normalized < 1.5 {
        1.0
    } else if normalized < 3.5 {
        2.0
    } else if normalized < 7.5 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}
