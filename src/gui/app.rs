// src/gui/app.rs
use std::{
    error::Error,
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    loader,
    view::{Fetch, Outcome, ViewState},
};

use super::components::{data_table, tabs, year_bar};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Classement",
        options,
        Box::new(|cc| {
            let mut app = App::new(AppState::default());
            app.reduce(&cc.egui_ctx, ViewState::start);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // status line under the table
    pub status: String,

    // worker → UI: settled fetches
    tx: Sender<Outcome>,
    rx: Receiver<Outcome>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let (tx, rx) = mpsc::channel();
        logf!("Init: source={:?} page_size={}", state.options.source, state.options.years_per_page);
        Self { state, status: s!("Idle"), tx, rx }
    }

    /// Run a reducer against the view state and start whatever fetch it asks for.
    pub fn reduce<F>(&mut self, ctx: &egui::Context, f: F)
    where
        F: FnOnce(&ViewState) -> (ViewState, Option<Fetch>),
    {
        let (next, fetch) = f(&self.state.view);
        self.state.view = next;
        if let Some(fetch) = fetch {
            self.spawn_fetch(ctx, fetch);
        }
    }

    fn spawn_fetch(&mut self, ctx: &egui::Context, fetch: Fetch) {
        logd!("Fetch: start {:?}", fetch);
        self.status = s!("Chargement…");

        let src = self.state.options.source.clone();
        let tx = self.tx.clone();
        let ctx2 = ctx.clone();

        thread::spawn(move || {
            let outcome = loader::run_fetch(&src, &fetch);
            // Receiver gone means the window closed; nothing left to tell.
            let _ = tx.send(outcome);
            ctx2.request_repaint();
        });
    }

    /// Fold in every fetch that settled since the last frame.
    fn drain_outcomes(&mut self, ctx: &egui::Context) {
        while let Ok(outcome) = self.rx.try_recv() {
            self.status = match &outcome {
                Outcome::Historique(Ok(d)) => format!("Prêt: {} pilotes, {} années", d.rows.len(), d.years.len()),
                Outcome::Yearly { year, result: Ok(t), .. } => format!("Prêt: {} lignes ({})", t.nrows(), year),
                Outcome::Historique(Err(e)) | Outcome::Yearly { result: Err(e), .. } => format!("Erreur: {}", e),
            };
            self.reduce(ctx, |v| v.apply(outcome));
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_outcomes(ctx);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.view.is_loading() {
                    ui.add(egui::Spinner::new());
                }
                ui.label(&self.status);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            tabs::draw(ui, self);

            ui.separator();

            year_bar::draw(ui, self);

            ui.separator();

            data_table::draw(ui, self);
        });
    }
}
