// File: crates/dashboard-dioxus/src/ui/chart.rs
// Summary: SvgChart component; draws a mapped chart as SVG elements with its legend underneath.

use chart_core::geometry::fmt_num;
use chart_core::{Chart, PlotShapes, RenderOptions};
use dioxus::prelude::*;
use tracing::warn;

use crate::view::ChartView;

#[component]
pub fn SvgChart(chart: Chart, opts: RenderOptions) -> Element {
    let view = match ChartView::build(&chart, &opts) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, title = chart.title.as_deref().unwrap_or("untitled"), "chart not drawn");
            return rsx! { div { class: "chart-placeholder chart-error", "Chart unavailable: {e}" } };
        }
    };
    let t = view.theme;
    let height = opts.canvas.height;

    rsx! {
        div { class: "chart-placeholder",
            svg {
                class: view.class,
                width: "100%",
                height: "300",
                view_box: "{view.view_box}",
                preserve_aspect_ratio: "xMidYMid meet",
                defs {
                    linearGradient { id: "{view.gradient_id}", x1: "0%", y1: "0%", x2: "0%", y2: "100%",
                        stop { offset: "0%", stop_color: t.accent_start, stop_opacity: "1" }
                        stop { offset: "100%", stop_color: t.accent_end, stop_opacity: "{view.fade}" }
                    }
                }
                rect { x: "0", y: "0", width: "{fmt_num(view.width)}", height: "{fmt_num(height)}", fill: t.background }
                for y in view.gridlines.iter().copied() {
                    line { x1: "0", y1: "{fmt_num(y)}", x2: "{fmt_num(view.width)}", y2: "{fmt_num(y)}", stroke: t.grid, stroke_width: "1" }
                }
                {match &view.shapes {
                    PlotShapes::Points(points) => rsx! {
                        polyline { points: "{view.points}", fill: "none", stroke: "{view.paint}", stroke_width: "3" }
                        if view.dot_radius > 0.0 {
                            for p in points.iter() {
                                circle { cx: "{fmt_num(p.x)}", cy: "{fmt_num(p.y)}", r: "{fmt_num(view.dot_radius)}", fill: t.dot_fill }
                            }
                        }
                    },
                    PlotShapes::Bars(bars) => rsx! {
                        for b in bars.iter() {
                            rect {
                                x: "{fmt_num(b.x)}",
                                y: "{fmt_num(b.y)}",
                                width: "{fmt_num(b.width)}",
                                height: "{fmt_num(b.height)}",
                                fill: "{view.paint}",
                                rx: "4",
                            }
                        }
                    },
                }}
                if let Some(axes) = view.axes {
                    for (x1, y1, x2, y2) in axes {
                        line {
                            x1: "{fmt_num(x1)}",
                            y1: "{fmt_num(y1)}",
                            x2: "{fmt_num(x2)}",
                            y2: "{fmt_num(y2)}",
                            stroke: t.axis_line,
                            stroke_width: "2",
                        }
                    }
                }
            }
            div { class: "chart-legend",
                for entry in view.legend.iter() {
                    span { class: "legend-item", "{entry}" }
                }
            }
        }
    }
}
