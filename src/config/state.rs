// src/config/state.rs
use super::options::AppOptions;
use crate::view::ViewState;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
        }
    }
}

/// Everything the front-ends hold between frames.
/// `view` is replaced wholesale by the reducers in `crate::view`.
#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
    pub view: ViewState,
}

impl Default for AppState {
    fn default() -> Self {
        let options = AppOptions::default();
        let view = ViewState::new(options.years_per_page);
        Self {
            options,
            gui: GuiState::default(),
            view,
        }
    }
}
