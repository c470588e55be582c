// File: crates/chart-core/src/adapter.rs
// Summary: Maps a ChartSpec to a render tree. Pure: no retained state, never fails.

use tracing::debug;

use crate::axis::axes_for;
use crate::color::{default_palette, palette_color, resolve_color, resolve_series_color, Color};
use crate::options::{IndexAxis, ResolvedOptions};
use crate::spec::{ChartKind, ChartSpec};
use crate::table::{build_rows, resolve_series_name};
use crate::tree::{
    CartesianChart, Container, Curve, Legend, Mark, Orientation, PieChart, Placeholder, RenderTree, Wedge,
    DOUGHNUT_INNER_RADIUS, PIE_OUTER_RADIUS, UNSUPPORTED_MESSAGE,
};

/// Translate `spec` into a render tree for its kind.
///
/// Unknown kinds produce [`RenderTree::Unsupported`]. Series whose length
/// differs from the category count are not rejected; positions past their end
/// are absent in the output.
pub fn adapt(spec: &ChartSpec) -> RenderTree {
    let opts = spec.options.resolve();
    let container = Container { height: opts.height };

    for (i, s) in spec.series.iter().enumerate() {
        if s.values.len() != spec.categories.len() {
            debug!(
                series = i,
                values = s.values.len(),
                categories = spec.categories.len(),
                "series length differs from category count"
            );
        }
    }

    let palette = default_palette();
    match &spec.kind {
        ChartKind::Bar => {
            let marks = spec
                .series
                .iter()
                .enumerate()
                .map(|(i, s)| Mark::Bar { data_key: resolve_series_name(s, i), fill: resolve_series_color(s, i, &palette) })
                .collect();
            let orientation = match opts.index_axis {
                IndexAxis::X => Orientation::Vertical,
                IndexAxis::Y => Orientation::Horizontal,
            };
            cartesian(spec, &opts, container, orientation, marks)
        }
        ChartKind::Line => {
            let marks = spec
                .series
                .iter()
                .enumerate()
                .map(|(i, s)| Mark::Line {
                    data_key: resolve_series_name(s, i),
                    stroke: resolve_series_color(s, i, &palette),
                    curve: Curve::Monotone,
                })
                .collect();
            cartesian(spec, &opts, container, Orientation::Vertical, marks)
        }
        ChartKind::Area => {
            let marks = spec
                .series
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    let color = resolve_series_color(s, i, &palette);
                    Mark::Area {
                        data_key: resolve_series_name(s, i),
                        stroke: color.clone(),
                        fill: color,
                        curve: Curve::Monotone,
                    }
                })
                .collect();
            cartesian(spec, &opts, container, Orientation::Vertical, marks)
        }
        ChartKind::Pie => pie(spec, &opts, &palette, container, 0.0),
        ChartKind::Doughnut => pie(spec, &opts, &palette, container, DOUGHNUT_INNER_RADIUS),
        ChartKind::Unsupported(name) => {
            debug!(kind = %name, "unsupported chart kind; emitting placeholder");
            RenderTree::Unsupported(Placeholder { message: UNSUPPORTED_MESSAGE.to_string(), container })
        }
    }
}

impl ChartSpec {
    /// Shorthand for [`adapt`].
    pub fn to_render_tree(&self) -> RenderTree { adapt(self) }
}

fn legend(opts: &ResolvedOptions) -> Option<Legend> {
    opts.show_legend.then(|| Legend::vertical(opts.legend_align))
}

fn cartesian(
    spec: &ChartSpec,
    opts: &ResolvedOptions,
    container: Container,
    orientation: Orientation,
    marks: Vec<Mark>,
) -> RenderTree {
    // Only bars honor a transposed layout; lines and areas always run along x.
    let index_axis = match orientation {
        Orientation::Vertical => IndexAxis::X,
        Orientation::Horizontal => IndexAxis::Y,
    };
    let (category_axis, value_axis) = axes_for(index_axis);
    RenderTree::Cartesian(CartesianChart {
        orientation,
        container,
        rows: build_rows(spec),
        category_axis,
        value_axis,
        marks,
        legend: legend(opts),
        grid: opts.show_grid,
    })
}

fn pie(spec: &ChartSpec, opts: &ResolvedOptions, palette: &[Color], container: Container, inner_radius: f32) -> RenderTree {
    let first = spec.series.first();
    let wedges = spec
        .categories
        .iter()
        .enumerate()
        .map(|(row, name)| Wedge {
            name: name.clone(),
            value: first.and_then(|s| s.value_at(row)),
            fill: match first {
                Some(s) => resolve_color(s, row, palette),
                None => palette_color(palette, row),
            },
        })
        .collect();
    RenderTree::Pie(PieChart {
        container,
        value_key: first.map(|s| resolve_series_name(s, 0)),
        wedges,
        inner_radius,
        outer_radius: PIE_OUTER_RADIUS,
        legend: legend(opts),
    })
}
