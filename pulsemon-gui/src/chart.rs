use egui_plot::{Legend, Line, Plot, PlotPoints};
use pulsemon_core::SeriesBuffer;

/// Replaces both chart series with the buffer's current contents.
///
/// The x-axis is plain seconds rather than wall-clock time, matching the
/// sensor's boot-relative timestamps.
pub(crate) fn render_chart(ui: &mut egui::Ui, buffer: &SeriesBuffer) {
    let bpm: PlotPoints = buffer.bpm_points().collect();
    let average: PlotPoints = buffer.average_points().collect();

    Plot::new("heart_rate")
        .legend(Legend::default())
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .x_axis_label("seconds")
        .y_axis_label("BPM")
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(bpm)
                    .color(egui::Color32::RED)
                    .width(2.0)
                    .name("BPM"),
            );
            plot_ui.line(
                Line::new(average)
                    .color(egui::Color32::from_rgb(255, 165, 0))
                    .width(1.0)
                    .name("Avg BPM"),
            );
        });
}
