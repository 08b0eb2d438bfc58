use std::f64::consts::{FRAC_PI_2, TAU};

use dioxus::prelude::*;
use monad_dash_api::prelude::DistributionEntry;

const RADIUS: f64 = 100.0;
const CENTER: f64 = 110.0;

#[derive(Props, Clone, PartialEq)]
pub struct DistributionChartProps {
    entries: Vec<DistributionEntry>,
}

/// Pie chart with a legend listing every tracked asset, zero balances included.
#[component]
pub fn DistributionChart(props: DistributionChartProps) -> Element {
    let slices = pie_slices(&props.entries);
    let empty = slices.is_empty();

    rsx! {
        div { class: "card flex flex-col items-center",
            h2 { class: "text-xl font-bold mb-4", "Token Distribution" }

            svg {
                width: "220",
                height: "220",
                view_box: "0 0 220 220",
                if empty {
                    circle { cx: "{CENTER}", cy: "{CENTER}", r: "{RADIUS}", fill: "#e5e7eb" }
                }
                for (i, slice) in slices.into_iter().enumerate() {
                    match slice {
                        Slice::Full { color } => rsx! {
                            circle { key: "{i}", cx: "{CENTER}", cy: "{CENTER}", r: "{RADIUS}", fill: "{color}" }
                        },
                        Slice::Arc { path, color } => rsx! {
                            path { key: "{i}", d: "{path}", fill: "{color}" }
                        },
                    }
                }
            }

            // Legend below chart
            div { class: "mt-4 w-full max-h-52 overflow-y-auto text-center",
                for entry in props.entries.iter() {
                    div { class: "flex justify-center items-center mb-1.5",
                        div {
                            class: "w-3.5 h-3.5 mr-2",
                            style: "background-color: {entry.color};",
                        }
                        span { {entry.legend_label()} }
                    }
                }
            }
        }
    }
}

enum Slice {
    Full { color: &'static str },
    Arc { path: String, color: &'static str },
}

fn pie_slices(entries: &[DistributionEntry]) -> Vec<Slice> {
    let mut start = 0.0;
    let mut slices = vec![];

    for entry in entries.iter().filter(|e| e.percentage > 0.0) {
        let sweep = entry.percentage / 100.0;
        if sweep >= 0.9999 {
            slices.push(Slice::Full { color: entry.color });
        } else {
            slices.push(Slice::Arc {
                path: arc_path(start, sweep),
                color: entry.color,
            });
        }
        start += sweep;
    }

    slices
}

/// SVG path for a wedge starting at `start` (fraction of a turn from 12 o'clock).
fn arc_path(start: f64, sweep: f64) -> String {
    let a0 = start * TAU - FRAC_PI_2;
    let a1 = (start + sweep) * TAU - FRAC_PI_2;
    let (x0, y0) = (CENTER + RADIUS * a0.cos(), CENTER + RADIUS * a0.sin());
    let (x1, y1) = (CENTER + RADIUS * a1.cos(), CENTER + RADIUS * a1.sin());
    let large_arc = if sweep > 0.5 { 1 } else { 0 };

    format!(
        "M {CENTER} {CENTER} L {x0:.3} {y0:.3} A {RADIUS} {RADIUS} 0 {large_arc} 1 {x1:.3} {y1:.3} Z"
    )
}
