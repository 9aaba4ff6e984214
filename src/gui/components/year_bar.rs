// src/gui/components/year_bar.rs
//
// Controls above the table: the year dropdown for yearly tabs, the
// prev/next pager for the historique.

use eframe::egui;

use crate::{
    gui::app::App,
    view::HistoriqueState,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.state.view.current.is_yearly() {
        year_selector(ui, app);
    } else {
        pager(ui, app);
    }
}

fn year_selector(ui: &mut egui::Ui, app: &mut App) {
    let view = &app.state.view;
    let mut chosen: Option<String> = None;

    ui.horizontal(|ui| {
        ui.label("Année:");

        let shown = view.selected_year.clone().unwrap_or_else(|| s!("—"));
        egui::ComboBox::from_id_salt("year_selector")
            .selected_text(shown)
            .show_ui(ui, |ui| {
                for y in &view.years {
                    let selected = view.selected_year.as_deref() == Some(y.as_str());
                    if ui.selectable_label(selected, y).clicked() && !selected {
                        chosen = Some(y.clone());
                    }
                }
            });

        if let Some(title) = view.year_title() {
            ui.strong(title);
        }
    });

    if let Some(year) = chosen {
        logf!("UI: Year → {}", year);
        let ctx = ui.ctx().clone();
        app.reduce(&ctx, |v| v.select_year(&year));
    }
}

fn pager(ui: &mut egui::Ui, app: &mut App) {
    let HistoriqueState::Loaded(p) = &app.state.view.historique else {
        return;
    };

    let (can_prev, can_next, label) = (p.can_prev(), p.can_next(), p.range_label());
    let mut go_prev = false;
    let mut go_next = false;

    ui.horizontal(|ui| {
        go_prev = ui.add_enabled(can_prev, egui::Button::new("◀ Précédent")).clicked();
        ui.strong(label);
        go_next = ui.add_enabled(can_next, egui::Button::new("Suivant ▶")).clicked();
    });

    if go_prev {
        app.state.view = app.state.view.prev_page();
        logd!("UI: Pager prev");
    } else if go_next {
        app.state.view = app.state.view.next_page();
        logd!("UI: Pager next");
    }
}
