//! Format layer creation

/// Applies the shared [`DisplayConfig`](crate::DisplayConfig) toggles to a
/// `fmt` layer and boxes it, so every format yields the same layer type.
/// `$colors` is the color setting already resolved against the writer.
macro_rules! display_layer {
    ($layer:expr, $display:expr, $colors:expr) => {{
        let display = $display;
        let layer = $layer
            .with_ansi($colors)
            .with_target(display.target)
            .with_file(display.source)
            .with_line_number(display.source)
            .with_thread_ids(display.thread_ids)
            .with_thread_names(display.thread_names);

        if display.time {
            layer.boxed()
        } else {
            layer.without_time().boxed()
        }
    }};
}
