//! Waveform plot using egui_plot
//!
//! Displays the current synthetic waveform on a fixed seconds axis. The plot
//! is a read-only monitor strip: zoom, drag and scroll are disabled so the
//! trace always fills the same window.

use crate::config::ExerciseSettings;
use crate::waveform::export::TimeAxis;
use crate::waveform::Waveform;
use egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints};

/// Trace color of the monitor
pub const TRACE_COLOR: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);

/// Vertical extent of the monitor in amplitude units
const Y_RANGE: (f64, f64) = (-2.0, 2.0);

/// Plot view configuration
#[derive(Debug, Clone)]
pub struct WaveformView {
    /// Whether to show grid lines
    pub show_grid: bool,
    /// Trace width
    pub line_width: f32,
    /// Time axis of the trace
    pub axis: TimeAxis,
}

impl Default for WaveformView {
    fn default() -> Self {
        Self {
            show_grid: true,
            line_width: 2.0,
            axis: TimeAxis::default(),
        }
    }
}

impl WaveformView {
    /// Create a WaveformView from exercise settings
    pub fn from_settings(settings: &ExerciseSettings) -> Self {
        Self {
            show_grid: settings.show_grid,
            line_width: settings.line_width,
            ..Default::default()
        }
    }

    /// X-axis bounds for a trace of `samples` samples
    pub fn x_bounds(&self, samples: usize) -> (f64, f64) {
        let span = samples.max(1) as f64 * self.axis.seconds_per_sample;
        (self.axis.start, self.axis.start + span)
    }

    /// Render the plot. An empty strip is shown until a waveform exists.
    pub fn render(&self, ui: &mut Ui, waveform: Option<&Waveform>, expected_len: usize) {
        let samples = waveform.map(Waveform::len).unwrap_or(expected_len);
        let (x_min, x_max) = self.x_bounds(samples);

        let plot = Plot::new("ecg_waveform")
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show_axes(true)
            .show_grid(self.show_grid)
            .x_axis_label("seconds")
            .include_x(x_min)
            .include_x(x_max)
            .include_y(Y_RANGE.0)
            .include_y(Y_RANGE.1);

        plot.show(ui, |plot_ui| {
            if let Some(waveform) = waveform {
                let points: PlotPoints =
                    waveform.as_plot_points(self.axis.start, self.axis.seconds_per_sample).into();
                let line = Line::new("ECG", points)
                    .color(TRACE_COLOR)
                    .width(self.line_width);
                plot_ui.line(line);
            }
        });
    }
}
