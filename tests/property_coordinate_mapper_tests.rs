use proptest::prelude::*;
use stream_chart::api::{ChartConfiguration, StreamingChart, StreamingChartConfig};
use stream_chart::core::{CoordinateMapper, ScaleBounds, Viewport};
use stream_chart::render::DrawCommand;

proptest! {
    #[test]
    fn index_mapping_is_monotonic_and_bounded(
        width in 0u32..4_000,
        sample_count in 1usize..2_000
    ) {
        let mapper = CoordinateMapper::new(
            Viewport::new(width, 100),
            sample_count,
            ScaleBounds::default(),
        );
        let mut previous = 0.0;
        for index in 0..=sample_count {
            let x = mapper.sample_index_to_x(index);
            prop_assert!(x >= previous);
            prop_assert!((0.0..=f64::from(width)).contains(&x));
            previous = x;
        }
    }

    #[test]
    fn axis_line_sits_at_zero_value(
        minimum in -1e4f64..0.0,
        span in 1e-3f64..1e4,
        height in 1u32..2_000
    ) {
        let config = StreamingChartConfig::new(Viewport::new(300, height))
            .with_bounds(minimum, minimum + span);
        let chart = StreamingChart::new(
            config,
            ChartConfiguration::default().with_tick_distance(0),
        )
        .expect("chart init");

        let frame = chart.build_frame();
        let DrawCommand::Line(axis) = &frame.commands[2] else {
            panic!("third command must be the axis");
        };
        let expected = chart.coordinate_mapper().value_to_y(0.0);
        prop_assert_eq!(axis.y1, expected);
        prop_assert_eq!(axis.y2, expected);
    }

    #[test]
    fn degenerate_range_maps_to_finite_row(
        bound in -1e9f64..1e9,
        value in -1e9f64..1e9,
        height in 0u32..2_000
    ) {
        let mapper = CoordinateMapper::from_parts(Viewport::new(100, height), 10, bound, bound, 0.1);
        let y = mapper.value_to_y(value);
        prop_assert!(y.is_finite());
        prop_assert!((0.0..=f64::from(height)).contains(&y));
    }
}
