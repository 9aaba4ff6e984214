// src/gui/components/tabs.rs
//
// Renders the top tabs. A click runs the tab-switch reducer, which
// always refetches the entered tab's table.

use eframe::egui;

use crate::{config::options::ViewKind, gui::app::App, specs};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut clicked: Option<ViewKind> = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.state.view.current;
        for spec in specs::SPECS {
            let selected = spec.kind == cur;
            if ui.selectable_label(selected, spec.title).clicked() && !selected {
                clicked = Some(spec.kind);
            }
        }
    });

    if let Some(kind) = clicked {
        logf!("UI: Tab switch {} → {}", app.state.view.current, kind);
        let ctx = ui.ctx().clone();
        app.reduce(&ctx, |v| v.switch_tab(kind));
    }
}
