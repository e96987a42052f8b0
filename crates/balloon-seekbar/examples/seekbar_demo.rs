//! Host-side demo: mounts a seek bar, swipes across it and logs every
//! notification and repaint.
//!
//! Run with `RUST_LOG=debug` to see lifecycle events from the widget.

use balloon_core::{MeasureSpec, PointerEvent, RecordingCanvas, Rect, Widget};
use balloon_seekbar::{BalloonSeekBar, ConfigError, FnListener};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const ATTRIBUTES: &str = r##"
max: 100
background: "#cccccc"
foreground: "#2e7d32"
stroke_width: 8
text_size: 14
padding: { left: 16, top: 8, right: 16, bottom: 8 }
"##;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut bar = BalloonSeekBar::from_yaml(ATTRIBUTES)?.with_test_id("demo");
    bar.set_on_change_listener(FnListener::new(
        |percentage| tracing::info!(percentage, "progress"),
        |value| tracing::info!(value, "value"),
    ));

    let size = bar.measure(MeasureSpec::Exactly(360.0), MeasureSpec::Unspecified);
    bar.layout(Rect::new(0.0, 0.0, size.width, size.height.max(64.0)));
    bar.on_attach();

    let Some(bounds) = bar.content_bounds() else {
        tracing::error!("seek bar could not be laid out");
        return Ok(());
    };
    let y = bar
        .renderer()
        .geometry()
        .map_or(bounds.top, |g| g.background.center().y);

    bar.event(&PointerEvent::down(bounds.left + 10.0, y));
    for step in 0..=12u8 {
        let x = bounds.left - 20.0 + f32::from(step) * (bounds.width() + 40.0) / 12.0;
        bar.event(&PointerEvent::moved(x, y));

        std::thread::sleep(Duration::from_millis(12));
        if bar.poll_redraw() {
            let mut canvas = RecordingCanvas::new();
            bar.paint(&mut canvas);
            tracing::info!(commands = canvas.command_count(), value = bar.value(), "repaint");
        }
    }
    bar.event(&PointerEvent::up(bounds.right, y));

    tracing::info!(value = bar.value(), max = bar.max_value(), "released");

    bar.on_detach();
    Ok(())
}
