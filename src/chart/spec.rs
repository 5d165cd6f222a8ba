//! Vega-Lite chart description of the heatmap.

use serde::Serialize;

use crate::chart::scale::ColorScale;
use crate::pipeline::types::{Heatmap, HeatmapCell};

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";
pub const CHART_TITLE: &str = "Odds of Getting a Table";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub title: &'static str,
    pub data: InlineData,
    pub mark: &'static str,
    pub encoding: Encoding,
    pub width: u32,
    pub height: u32,
    pub config: Config,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineData {
    pub values: Vec<HeatmapCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Encoding {
    pub x: PositionChannel,
    pub y: PositionChannel,
    pub color: ColorChannel,
    pub tooltip: Vec<TooltipField>,
}

/// An ordinal axis with an explicit category order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionChannel {
    pub field: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub sort: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorChannel {
    pub field: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub scale: ColorScale,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipField {
    pub field: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub view: ViewConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewConfig {
    #[serde(rename = "strokeWidth")]
    pub stroke_width: u32,
}

/// Rect heatmap: weekdays down, time slots across, colored by summed odds.
pub fn build_spec(heatmap: &Heatmap) -> ChartSpec {
    let scale = ColorScale::from_values(&heatmap.values());

    ChartSpec {
        schema: VEGA_LITE_SCHEMA,
        title: CHART_TITLE,
        data: InlineData {
            values: heatmap.cells.clone(),
        },
        mark: "rect",
        encoding: Encoding {
            x: PositionChannel {
                field: "table_slot_str",
                kind: "ordinal",
                title: "Time Slot",
                sort: heatmap.slot_order.clone(),
            },
            y: PositionChannel {
                field: "day_str",
                kind: "ordinal",
                title: "Weekday",
                sort: heatmap.day_order.iter().map(|d| d.to_string()).collect(),
            },
            color: ColorChannel {
                field: "Value",
                kind: "quantitative",
                title: "Odds",
                scale,
            },
            tooltip: vec![
                TooltipField {
                    field: "day_str",
                    kind: "nominal",
                    title: "Weekday",
                },
                TooltipField {
                    field: "table_slot_str",
                    kind: "nominal",
                    title: "Time Slot",
                },
                TooltipField {
                    field: "Value",
                    kind: "quantitative",
                    title: "Odds of Table Availability",
                },
            ],
        },
        width: heatmap.width,
        height: heatmap.height,
        config: Config {
            view: ViewConfig { stroke_width: 0 },
        },
    }
}
