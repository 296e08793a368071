//! Widget descriptors and block validation
//!
//! A block becomes a widget only when its JSON carries a known `type`
//! and every required field under `data` has the right type. Anything
//! short of that is rejected whole.

use super::error::ParseError;
use super::fence::FencedBlock;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::ops::Range;

/// Closed set of widget kinds the page knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    StockChart,
    WeatherCard,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 2] = [WidgetKind::StockChart, WidgetKind::WeatherCard];

    /// Discriminant as written in the block's `type` field
    pub fn tag(self) -> &'static str {
        match self {
            WidgetKind::StockChart => "stock_chart",
            WidgetKind::WeatherCard => "weather_card",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl std::fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Stock quote shown as a price header plus a small trend line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockChart {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub percent_change: String,
}

/// One point of the stock trend line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub time: String,
    pub price: f64,
}

const TREND_STEPS: u32 = 10;

impl StockChart {
    pub fn is_positive(&self) -> bool {
        self.change >= 0.0
    }

    /// Synthetic intraday series: starts two `change`s below the quote and
    /// climbs by one `change` over `TREND_STEPS` hourly steps.
    pub fn trend(&self) -> Vec<TrendPoint> {
        let base = self.price - self.change * 2.0;
        let step = self.change / f64::from(TREND_STEPS);
        (0..=TREND_STEPS)
            .map(|i| TrendPoint {
                time: format!("{i}h"),
                price: base + step * f64::from(i),
            })
            .collect()
    }
}

/// Current conditions for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherCard {
    pub location: String,
    pub temperature: f64,
    pub condition: String,
    pub humidity: f64,
}

impl WeatherCard {
    /// Icon for the condition text; first matching keyword wins
    pub fn icon(&self) -> &'static str {
        const ICONS: &[(&[&str], &str)] = &[
            (&["sun", "clear"], "☀️"),
            (&["cloud"], "☁️"),
            (&["rain", "shower"], "🌧️"),
            (&["snow"], "❄️"),
            (&["thunder", "storm"], "⛈️"),
            (&["fog", "mist"], "🌫️"),
            (&["wind"], "💨"),
        ];

        let condition = self.condition.to_lowercase();
        ICONS
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| condition.contains(k)))
            .map_or("🌤️", |(_, icon)| *icon)
    }
}

/// Validated payload, one variant per widget kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Widget {
    StockChart(StockChart),
    WeatherCard(WeatherCard),
}

impl Widget {
    pub fn kind(&self) -> WidgetKind {
        match self {
            Widget::StockChart(_) => WidgetKind::StockChart,
            Widget::WeatherCard(_) => WidgetKind::WeatherCard,
        }
    }
}

/// A widget together with the byte range of the block it came from.
///
/// Fields are private so a descriptor cannot change after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetDescriptor {
    widget: Widget,
    source: Range<usize>,
}

impl WidgetDescriptor {
    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    #[allow(dead_code)] // Utility method
    pub fn kind(&self) -> WidgetKind {
        self.widget.kind()
    }

    /// Byte range of the originating block, fence markers included
    pub fn source(&self) -> Range<usize> {
        self.source.clone()
    }
}

/// Presentation hints computed once on the server
#[derive(Serialize)]
#[serde(untagged)]
enum Hints {
    Stock { positive: bool, trend: Vec<TrendPoint> },
    Weather { icon: &'static str },
}

#[derive(Serialize)]
struct SourceSpan {
    start: usize,
    end: usize,
}

#[derive(Serialize)]
struct DescriptorView<'a> {
    #[serde(flatten)]
    widget: &'a Widget,
    #[serde(flatten)]
    hints: Hints,
    source: SourceSpan,
}

impl Serialize for WidgetDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let hints = match &self.widget {
            Widget::StockChart(stock) => Hints::Stock {
                positive: stock.is_positive(),
                trend: stock.trend(),
            },
            Widget::WeatherCard(weather) => Hints::Weather {
                icon: weather.icon(),
            },
        };
        DescriptorView {
            widget: &self.widget,
            hints,
            source: SourceSpan {
                start: self.source.start,
                end: self.source.end,
            },
        }
        .serialize(serializer)
    }
}

/// Turn one fenced block into a widget, or say why it cannot be one.
pub fn parse_and_validate(block: &FencedBlock) -> Result<WidgetDescriptor, ParseError> {
    let value: Value = serde_json::from_str(&block.inner)
        .map_err(|e| ParseError::malformed(format!("Invalid JSON: {e}")))?;

    let kind = match value.get("type") {
        Some(Value::String(tag)) => WidgetKind::from_tag(tag)
            .ok_or_else(|| ParseError::unknown_kind(format!("Unknown widget type: {tag}")))?,
        Some(other) => {
            return Err(ParseError::unknown_kind(format!(
                "Widget type must be a string, got {other}"
            )))
        }
        None => return Err(ParseError::unknown_kind("Missing widget type")),
    };

    let data = value
        .get("data")
        .cloned()
        .ok_or_else(|| ParseError::invalid_payload(format!("{kind}: missing data")))?;

    let widget = match kind {
        WidgetKind::StockChart => Widget::StockChart(decode_payload(kind, data)?),
        WidgetKind::WeatherCard => Widget::WeatherCard(decode_payload(kind, data)?),
    };

    Ok(WidgetDescriptor {
        widget,
        source: block.span.clone(),
    })
}

fn decode_payload<T: serde::de::DeserializeOwned>(
    kind: WidgetKind,
    data: Value,
) -> Result<T, ParseError> {
    serde_json::from_value(data).map_err(|e| ParseError::invalid_payload(format!("{kind}: {e}")))
}
