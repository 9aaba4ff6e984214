// src/gui/components/data_table.rs
//
// Draws the current tab's table, or its error/loading placeholder.
// Purely a view over `ViewState`.

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::consts::RANK_COLUMN,
    gui::app::App,
    table::TableModel,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let view = &app.state.view;

    if let Some(msg) = view.current_error() {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new(msg).color(Color32::RED));
        });
        return;
    }

    let Some(table) = view.current_table() else {
        if view.is_loading() {
            ui.centered_and_justified(|ui| { ui.add(egui::Spinner::new()); });
        }
        return;
    };

    // Per-view salt so column widths don't leak between tabs
    let salt = ("table_state", view.current, view.selected_year.clone());

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| inner_table(ui, &table, salt));
}

fn inner_table(ui: &mut egui::Ui, table: &TableModel, salt: impl std::hash::Hash) {
    let cols = table.ncols();
    if cols == 0 {
        return;
    }

    TableBuilder::new(ui)
        .id_salt(salt)
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::auto().at_least(140.0).resizable(true).clip(true))
        .columns(Column::auto().at_least(40.0).resizable(true), cols - 1)
        .min_scrolled_height(0.0)
        .header(24.0, |mut header| {
            for ci in 0..cols {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let text = table.header.get(ci).cloned().unwrap_or_else(|| format!("Col {}", ci + 1));
                    ui.add(egui::Label::new(RichText::new(text).strong()).selectable(false));
                });
            }
        })
        .body(|body| {
            body.rows(20.0, table.nrows(), |mut row| {
                let r = &table.body[row.index()];
                for ci in 0..cols {
                    let text = r.get(ci).map(|c| c.as_str()).unwrap_or("");
                    row.col(|ui| {
                        // Rank stands out, centered
                        if ci == RANK_COLUMN {
                            ui.centered_and_justified(|ui| { ui.strong(text); });
                        } else {
                            ui.label(text);
                        }
                    });
                }
            });
        });
}
