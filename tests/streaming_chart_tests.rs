use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use stream_chart::api::{
    ChartConfiguration, InvalidationLevel, RedrawRequester, StreamingChart, StreamingChartConfig,
};
use stream_chart::core::Viewport;
use stream_chart::interaction::PointerPresence;
use stream_chart::render::NullRenderer;
use stream_chart::ChartError;

#[derive(Default)]
struct CountingRequester {
    full: AtomicUsize,
    cursor: AtomicUsize,
}

impl RedrawRequester for CountingRequester {
    fn request_redraw(&self, level: InvalidationLevel) {
        match level {
            InvalidationLevel::Full => self.full.fetch_add(1, Ordering::SeqCst),
            InvalidationLevel::Cursor => self.cursor.fetch_add(1, Ordering::SeqCst),
            InvalidationLevel::None => 0,
        };
    }
}

fn chart(width: u32, height: u32, sample_count: usize) -> StreamingChart {
    let config =
        StreamingChartConfig::new(Viewport::new(width, height)).with_sample_count(sample_count);
    StreamingChart::new(config, ChartConfiguration::default()).expect("chart init")
}

#[test]
fn window_keeps_latest_values_after_overflow() {
    let chart = chart(800, 600, 100);
    for value in 0..150 {
        chart.append(f64::from(value)).expect("append");
    }

    let expected: Vec<f64> = (50..150).map(f64::from).collect();
    assert_eq!(chart.samples(), expected);
    assert_eq!(chart.last_sample_index(), 150);
}

#[test]
fn single_large_value_widens_only_maximum() {
    let chart = chart(800, 600, 10);
    chart.append(5.0).expect("append");

    let bounds = chart.bounds();
    assert_eq!(bounds.maximum(), 5.0);
    assert_eq!(bounds.minimum(), -1.0);
}

#[test]
fn manual_bounds_still_auto_widen() {
    let chart = chart(800, 600, 10);
    chart.set_maximum(0.5).expect("tighten maximum");
    chart.set_minimum(-0.25).expect("tighten minimum");
    assert_eq!(chart.bounds().maximum(), 0.5);

    chart.append(0.75).expect("append");
    chart.append(-2.0).expect("append");
    assert_eq!(chart.bounds().maximum(), 0.75);
    assert_eq!(chart.bounds().minimum(), -2.0);

    let err = chart.set_minimum(1.0).expect_err("minimum above maximum");
    assert!(matches!(err, ChartError::InvalidArgument(_)));
}

#[test]
fn sample_count_below_one_is_invalid_argument() {
    let chart = chart(800, 600, 10);
    assert!(matches!(
        chart.set_sample_count(0),
        Err(ChartError::InvalidArgument(_))
    ));

    let config = StreamingChartConfig::new(Viewport::new(10, 10)).with_sample_count(0);
    assert!(matches!(
        StreamingChart::new(config, ChartConfiguration::default()),
        Err(ChartError::InvalidArgument(_))
    ));
}

#[test]
fn shrinking_sample_count_trims_immediately() {
    let chart = chart(800, 600, 10);
    chart.extend((0..10).map(f64::from)).expect("extend");
    chart.set_sample_count(4).expect("sample count");
    assert_eq!(chart.samples(), vec![6.0, 7.0, 8.0, 9.0]);
    assert_eq!(chart.sample_count(), 4);
    assert_eq!(chart.last_sample_index(), 10);
}

#[test]
fn inspector_at_last_column_highlights_newest_sample() {
    for width in [100, 800] {
        let mut chart = chart(width, 200, 100);
        chart
            .set_configuration(ChartConfiguration::default().with_inspector_enabled(true))
            .expect("configuration");
        chart.extend((0..100).map(f64::from)).expect("extend");

        chart.on_pointer_move(f64::from(width) - 1.0);
        let inspected = chart.inspected_sample().expect("inspected sample");
        assert_eq!(inspected.window_index, 99, "width {width}");
        assert_eq!(inspected.value, 99.0);
    }
}

#[test]
fn pointer_exit_resets_focus_to_three_quarters() {
    let mut chart = chart(800, 600, 100);
    chart
        .set_configuration(ChartConfiguration::default().with_inspector_enabled(true))
        .expect("configuration");
    chart.on_pointer_move(10.0);
    chart.on_pointer_exit();
    assert_eq!(chart.inspector().focus_x(), 0.75 * 800.0 - 1.0);
}

#[test]
fn pointer_enter_and_exit_track_presence_when_enabled() {
    let mut chart = chart(800, 600, 100);
    chart
        .set_configuration(ChartConfiguration::default().with_inspector_enabled(true))
        .expect("configuration");
    assert_eq!(chart.inspector().presence(), PointerPresence::Outside);

    chart.on_pointer_enter();
    assert_eq!(chart.inspector().presence(), PointerPresence::Inside);
    assert_eq!(chart.inspector().focus_x(), 799.0);

    chart.on_pointer_exit();
    assert_eq!(chart.inspector().presence(), PointerPresence::Outside);
    assert_eq!(chart.inspector().focus_x(), 599.0);
}

#[test]
fn pointer_enter_and_exit_are_ignored_when_disabled() {
    let mut chart = chart(800, 600, 100);

    chart.on_pointer_enter();
    assert_eq!(chart.inspector().presence(), PointerPresence::Outside);

    chart.on_pointer_exit();
    assert_eq!(chart.inspector().presence(), PointerPresence::Outside);
    assert_eq!(chart.inspector().focus_x(), 799.0);
}

#[test]
fn disabled_inspector_ignores_pointer_activity() {
    let requester = Arc::new(CountingRequester::default());
    let mut chart = StreamingChart::with_redraw_requester(
        StreamingChartConfig::new(Viewport::new(400, 300)),
        ChartConfiguration::default(),
        requester.clone(),
    )
    .expect("chart init");
    let focus = chart.inspector().focus_x();

    chart.on_pointer_move(10.0);
    chart.on_pointer_exit();
    chart.on_pointer_drag(12.0);

    assert_eq!(chart.inspector().focus_x(), focus);
    assert_eq!(requester.cursor.load(Ordering::SeqCst), 0);
    assert!(chart.inspected_sample().is_none());
}

#[test]
fn producer_appends_request_full_redraw() {
    let requester = Arc::new(CountingRequester::default());
    let mut chart = StreamingChart::with_redraw_requester(
        StreamingChartConfig::new(Viewport::new(400, 300)),
        ChartConfiguration::default().with_inspector_enabled(true),
        requester.clone(),
    )
    .expect("chart init");

    let mut renderer = NullRenderer::default();
    chart.render(&mut renderer).expect("render");
    assert_eq!(chart.pending_invalidation(), InvalidationLevel::None);

    let feed = chart.feed();
    std::thread::spawn(move || {
        for i in 0..10 {
            feed.append(f64::from(i)).expect("append");
        }
    })
    .join()
    .expect("producer thread");

    assert_eq!(requester.full.load(Ordering::SeqCst), 10);
    assert_eq!(chart.pending_invalidation(), InvalidationLevel::Full);
    chart.render(&mut renderer).expect("render");
    assert_eq!(chart.pending_invalidation(), InvalidationLevel::None);

    chart.on_pointer_move(50.0);
    assert_eq!(chart.pending_invalidation(), InvalidationLevel::Cursor);
    assert_eq!(requester.cursor.load(Ordering::SeqCst), 1);
}

#[test]
fn resize_refocuses_inspector_on_rightmost_column() {
    let mut chart = chart(400, 300, 50);
    chart.on_resize(640, 480);
    assert_eq!(chart.viewport(), Viewport::new(640, 480));
    assert_eq!(chart.inspector().focus_x(), 639.0);
    assert_eq!(chart.coordinate_mapper().pixels_per_sample(), 12.8);
}

#[test]
fn invalid_configuration_is_rejected_and_previous_kept() {
    let mut chart = chart(400, 300, 50);
    let mut bad = ChartConfiguration::default().with_label_text("bad");
    bad.line_width = 0.0;
    assert!(chart.set_configuration(bad).is_err());
    assert_eq!(chart.configuration(), &ChartConfiguration::default());
}
