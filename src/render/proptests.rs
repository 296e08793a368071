//! Property-based tests for render planning
//!
//! These tests verify the invariants the page relies on:
//! - The plan always covers the whole message, in order
//! - Fence-free text comes back as exactly one text segment
//! - Valid blocks become widgets with the values they were built from
//! - Broken blocks never panic and keep their fence markers

#![allow(clippy::redundant_closure_for_method_calls)]

use super::plan::{build_render_plan, Segment};
use super::widget::{StockChart, WeatherCard, Widget};
use proptest::prelude::*;
use serde_json::json;

// ============================================================================
// Strategies
// ============================================================================

/// Prose that cannot contain a backtick
fn arb_prose() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,:!?\n]{0,60}"
}

fn arb_stock() -> impl Strategy<Value = StockChart> {
    (
        "[A-Z]{1,5}",
        0.0f64..5000.0,
        -100.0f64..100.0,
        "[+-]?[0-9]{1,2}\\.[0-9]%",
    )
        .prop_map(|(symbol, price, change, percent_change)| StockChart {
            symbol,
            price,
            change,
            percent_change,
        })
}

fn arb_weather() -> impl Strategy<Value = WeatherCard> {
    (
        "[A-Z][a-z]{2,10}",
        -40.0f64..50.0,
        prop_oneof![
            Just("Sunny".to_string()),
            Just("Cloudy".to_string()),
            Just("Light rain".to_string()),
            Just("Fog".to_string()),
        ],
        0.0f64..100.0,
    )
        .prop_map(|(location, temperature, condition, humidity)| WeatherCard {
            location,
            temperature,
            condition,
            humidity,
        })
}

fn arb_widget() -> impl Strategy<Value = Widget> {
    prop_oneof![
        arb_stock().prop_map(Widget::StockChart),
        arb_weather().prop_map(Widget::WeatherCard),
    ]
}

fn fenced(widget: &Widget) -> String {
    let (tag, data) = match widget {
        Widget::StockChart(stock) => ("stock_chart", serde_json::to_value(stock)),
        Widget::WeatherCard(card) => ("weather_card", serde_json::to_value(card)),
    };
    let payload = json!({ "type": tag, "data": data.unwrap() });
    format!("```json\n{payload}\n```")
}

/// A block that looks like data but must not validate
fn arb_broken_block() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z{}:, ]{0,30}".prop_map(|junk| format!("```json\n{{{junk}\n```")),
        "[a-z_]{1,15}".prop_map(|tag| format!("```json\n{{\"type\":\"x_{tag}\"}}\n```")),
        Just("```json\n{\"type\":\"stock_chart\",\"data\":{\"symbol\":\"AAPL\"}}\n```".to_string()),
        Just("```json\n{\"type\":\"weather_card\",\"data\":{\"location\":1}}\n```".to_string()),
    ]
}

/// A message mixing prose, valid blocks and broken blocks
fn arb_message() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            3 => arb_prose(),
            2 => arb_widget().prop_map(|w| fenced(&w)),
            1 => arb_broken_block(),
            1 => Just("```json\n{\"unterminated\": ".to_string()),
        ],
        0..8,
    )
    .prop_map(|parts| parts.concat())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_plan_reconstructs_input(text in arb_message()) {
        let plan = build_render_plan(&text);
        prop_assert_eq!(plan.reconstruct(&text), text);
    }

    #[test]
    fn prop_arbitrary_text_never_panics(text in any::<String>()) {
        let plan = build_render_plan(&text);
        prop_assert_eq!(plan.reconstruct(&text), text);
    }

    #[test]
    fn prop_no_empty_or_adjacent_text_segments(text in arb_message()) {
        let plan = build_render_plan(&text);
        let segments = plan.segments();
        for segment in segments {
            if let Segment::Text(t) = segment {
                prop_assert!(!t.is_empty());
            }
        }
        for pair in segments.windows(2) {
            let both_text = matches!(pair, [Segment::Text(_), Segment::Text(_)]);
            prop_assert!(!both_text, "adjacent text segments: {:?}", pair);
        }
    }

    #[test]
    fn prop_fence_free_text_is_one_segment(text in "[^`]{1,200}") {
        let plan = build_render_plan(&text);
        prop_assert_eq!(plan.segments(), &[Segment::Text(text.clone())]);
    }

    #[test]
    fn prop_lone_valid_block_is_one_widget(widget in arb_widget()) {
        let text = fenced(&widget);
        let plan = build_render_plan(&text);
        prop_assert_eq!(plan.len(), 1);
        let descriptor = plan.widgets().next().unwrap();
        prop_assert_eq!(descriptor.widget(), &widget);
        prop_assert_eq!(descriptor.source(), 0..text.len());
    }

    #[test]
    fn prop_widgets_keep_source_order(
        widgets in proptest::collection::vec(arb_widget(), 1..5),
        sep in arb_prose(),
    ) {
        let text = widgets.iter().map(fenced).collect::<Vec<_>>().join(&sep);
        let plan = build_render_plan(&text);

        let found: Vec<_> = plan.widgets().map(|d| d.widget().clone()).collect();
        prop_assert_eq!(&found, &widgets);

        let starts: Vec<_> = plan.widgets().map(|d| d.source().start).collect();
        prop_assert!(starts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_broken_block_keeps_fence_markers(
        block in arb_broken_block(),
        before in arb_prose(),
        after in arb_prose(),
    ) {
        let text = format!("{before}{block}{after}");
        let plan = build_render_plan(&text);
        prop_assert!(plan.is_plain_text());
        prop_assert_eq!(plan.segments(), &[Segment::Text(text.clone())]);
    }
}
