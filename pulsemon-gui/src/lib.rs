use eframe::egui;
use pulsemon_client::{spawn_poller, PollerConfig};

mod app;
mod chart;

pub use app::DashboardApp;

#[derive(Debug, Clone)]
pub struct GuiConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: "Pulsemon".to_string(),
            width: 1024.0,
            height: 360.0,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GuiError {
    #[error("gui error: {0}")]
    Gui(String),
}

/// Spawns the measurement poller and runs the dashboard window until the
/// user closes it. The poller is shut down when the app is dropped.
pub fn run_gui(
    config: GuiConfig,
    poller_config: PollerConfig,
    max_points: usize,
) -> Result<(), GuiError> {
    let repaint_interval = poller_config.interval;
    let (poller, batch_rx) = spawn_poller(poller_config);

    let mut options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([config.width, config.height]),
        ..Default::default()
    };
    // NOTE: Vsync generates hangs and lag on occluded windows.
    options.vsync = false;

    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| {
            Box::new(DashboardApp::new(
                batch_rx,
                Some(poller),
                max_points,
                repaint_interval,
            ))
        }),
    )
    .map_err(|err| GuiError::Gui(err.to_string()))
}
