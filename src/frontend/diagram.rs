//! Diagram canvas: body figure, amplifier and wires.
//!
//! Renders the exercise with custom egui painting and translates pointer
//! input into drag actions:
//! - Drag start over an electrode handle begins a wire
//! - Pointer motion moves the loose wire end
//! - Release over an amplifier input (or anywhere else) resolves it

use egui::{Align2, Color32, CursorIcon, FontId, PointerButton, Sense, Shape, Stroke, Ui};

use crate::editor::{ConnectionEditor, DragGesture};
use crate::frontend::layout::{self, DiagramTransform, AMPLIFIER_ORIGIN, HANDLE_RADIUS};
use crate::frontend::state::AppAction;
use crate::types::{AmplifierInput, ElectrodeId, Position};

/// Wire color for an electrode
pub fn wire_color(electrode: ElectrodeId, visuals: &egui::Visuals) -> Color32 {
    match electrode {
        ElectrodeId::LA => Color32::from_rgb(0xef, 0x44, 0x44),
        ElectrodeId::RA => Color32::from_rgb(0x22, 0xc5, 0x5e),
        ElectrodeId::RL => visuals.strong_text_color(),
    }
}

/// Render the diagram and return the pointer actions for this frame.
pub fn render(ui: &mut Ui, editor: &ConnectionEditor) -> Vec<AppAction> {
    let mut actions = Vec::new();

    let size = ui.available_size();
    let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
    let t = DiagramTransform::fit(response.rect);
    let visuals = ui.visuals().clone();
    let ink = visuals.strong_text_color();
    let accent = Color32::from_rgb(0x25, 0x63, 0xeb);

    painter.rect_filled(response.rect, 0.0, visuals.extreme_bg_color);

    let hover = response.hover_pos().map(|p| t.to_diagram(p));
    let hovered_electrode = hover.and_then(layout::electrode_at);
    let hovered_input = hover.and_then(layout::input_at);

    draw_body(&painter, &t, visuals.weak_text_color());
    draw_amplifier(&painter, &t, ink);

    // Committed wires
    for conn in editor.connections() {
        painter.line_segment(
            [
                t.to_screen(layout::electrode_anchor(conn.from)),
                t.to_screen(layout::input_anchor(conn.to)),
            ],
            Stroke::new(t.len(3.0), wire_color(conn.from, &visuals)),
        );
    }

    // Wire being dragged
    if let DragGesture::Active { source, position } = *editor.gesture() {
        let points = [t.to_screen(layout::electrode_anchor(source)), t.to_screen(position)];
        painter.extend(Shape::dashed_line(
            &points,
            Stroke::new(t.len(2.0), Color32::from_gray(0x66)),
            t.len(5.0),
            t.len(5.0),
        ));
    }

    // Electrode handles
    for e in ElectrodeId::ALL {
        let center = t.to_screen(layout::electrode_anchor(e));
        let fill = if hovered_electrode == Some(e) {
            Color32::from_gray(0x70)
        } else {
            ink
        };
        painter.circle_filled(center, t.len(HANDLE_RADIUS), fill);
        painter.text(
            t.to_screen(layout::electrode_label_anchor(e)),
            Align2::CENTER_CENTER,
            e.label(),
            FontId::proportional(t.len(14.0)),
            accent,
        );
    }

    // Amplifier input handles
    let dragging = editor.gesture().is_active();
    for input in AmplifierInput::ALL {
        let anchor = layout::input_anchor(input);
        let center = t.to_screen(anchor);
        let highlighted = dragging && hovered_input == Some(input);
        let fill = if highlighted { accent } else { ink };
        painter.circle_filled(center, t.len(HANDLE_RADIUS), fill);
        if highlighted {
            painter.circle_stroke(
                center,
                t.len(HANDLE_RADIUS + 4.0),
                Stroke::new(t.len(1.5), accent),
            );
        }
    }

    // Pointer handling
    if response.drag_started_by(PointerButton::Primary) {
        let origin = ui.input(|i| i.pointer.press_origin());
        if let Some(start) = origin.map(|p| t.to_diagram(p)) {
            if let Some(electrode) = layout::electrode_at(start) {
                let position = response
                    .interact_pointer_pos()
                    .map(|p| t.to_diagram(p))
                    .unwrap_or(start);
                actions.push(AppAction::BeginDrag { electrode, position });
            }
        }
    } else if response.dragged_by(PointerButton::Primary) && dragging {
        if let Some(p) = response.interact_pointer_pos() {
            actions.push(AppAction::UpdateDrag(t.to_diagram(p)));
        }
    }

    if response.drag_stopped() {
        let release = ui
            .input(|i| i.pointer.latest_pos())
            .map(|p| t.to_diagram(p));
        actions.push(AppAction::EndDrag(release.and_then(layout::input_at)));
    }

    if dragging {
        ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
    } else if hovered_electrode.is_some() {
        ui.ctx().set_cursor_icon(CursorIcon::Grab);
    }

    actions
}

fn line(painter: &egui::Painter, t: &DiagramTransform, a: (f32, f32), b: (f32, f32), stroke: Stroke) {
    painter.line_segment(
        [
            t.to_screen(Position::new(a.0, a.1)),
            t.to_screen(Position::new(b.0, b.1)),
        ],
        stroke,
    );
}

fn draw_body(painter: &egui::Painter, t: &DiagramTransform, color: Color32) {
    let stroke = Stroke::new(t.len(4.0), color);

    painter.circle_stroke(t.to_screen(Position::new(255.0, 115.0)), t.len(28.0), stroke);
    line(painter, t, (255.0, 143.0), (255.0, 160.0), stroke);

    // Torso
    painter.add(Shape::closed_line(
        [
            (205.0, 165.0),
            (305.0, 165.0),
            (290.0, 330.0),
            (220.0, 330.0),
        ]
        .iter()
        .map(|&(x, y)| t.to_screen(Position::new(x, y)))
        .collect(),
        stroke,
    ));

    // Arms
    line(painter, t, (205.0, 170.0), (170.0, 250.0), stroke);
    line(painter, t, (170.0, 250.0), (160.0, 310.0), stroke);
    line(painter, t, (305.0, 170.0), (340.0, 250.0), stroke);
    line(painter, t, (340.0, 250.0), (350.0, 310.0), stroke);

    // Legs
    line(painter, t, (230.0, 330.0), (230.0, 450.0), stroke);
    line(painter, t, (230.0, 450.0), (225.0, 480.0), stroke);
    line(painter, t, (280.0, 330.0), (280.0, 450.0), stroke);
    line(painter, t, (280.0, 450.0), (285.0, 480.0), stroke);
}

fn draw_amplifier(painter: &egui::Painter, t: &DiagramTransform, ink: Color32) {
    let o = AMPLIFIER_ORIGIN;
    let stroke = Stroke::new(t.len(3.0), ink);
    let thin = Stroke::new(t.len(2.0), ink);

    painter.add(Shape::closed_line(
        vec![
            t.to_screen(o),
            t.to_screen(Position::new(o.x + 100.0, o.y + 50.0)),
            t.to_screen(Position::new(o.x, o.y + 100.0)),
        ],
        stroke,
    ));

    // Output lead
    line(painter, t, (o.x + 100.0, o.y + 50.0), (o.x + 150.0, o.y + 50.0), thin);

    for (input, sign_y) in [(AmplifierInput::Positive, 15.0), (AmplifierInput::Negative, 90.0)] {
        let anchor = layout::input_anchor(input);
        line(painter, t, (anchor.x, anchor.y), (o.x, anchor.y), thin);
        painter.text(
            t.to_screen(Position::new(o.x + 18.0, o.y + sign_y)),
            Align2::CENTER_CENTER,
            input.symbol(),
            FontId::proportional(t.len(20.0)),
            ink,
        );
    }

    // Ground lead from the triangle's lower edge, with the ground symbol below the handle
    let ground = layout::input_anchor(AmplifierInput::Ground);
    line(painter, t, (ground.x, o.y + 75.0), (ground.x, ground.y), thin);
    let gy = ground.y + 8.0;
    line(painter, t, (ground.x, gy), (ground.x, gy + 10.0), thin);
    for (half, dy) in [(8.0, 10.0), (5.0, 13.0), (2.0, 16.0)] {
        line(painter, t, (ground.x - half, gy + dy), (ground.x + half, gy + dy), thin);
    }
}
