// File: crates/demo/src/samples.rs
// Summary: Built-in event dashboard specs rendered by `dashchart samples`.

use anyhow::{Context, Result};
use dashchart_core::ChartSpec;

const SAMPLES: &[(&str, &str)] = &[
    ("ticket_sales", include_str!("../specs/ticket_sales.json")),
    ("registrations", include_str!("../specs/registrations.json")),
    ("check_ins", include_str!("../specs/check_ins.json")),
    ("ticket_types", include_str!("../specs/ticket_types.json")),
    ("revenue_by_channel", include_str!("../specs/revenue_by_channel.json")),
    ("attendance_split", include_str!("../specs/attendance_split.json")),
];

pub fn names() -> impl Iterator<Item = &'static str> {
    SAMPLES.iter().map(|(name, _)| *name)
}

/// Parse every built-in sample, in a stable order.
pub fn load_all() -> Result<Vec<(&'static str, ChartSpec)>> {
    SAMPLES
        .iter()
        .map(|(name, json)| {
            let spec = ChartSpec::from_json(json).with_context(|| format!("sample '{name}'"))?;
            Ok((*name, spec))
        })
        .collect()
}
