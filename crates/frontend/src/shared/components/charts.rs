//! In-house SVG charts for the dashboard: a monthly bar chart and a
//! monthly line chart. Geometry is computed by pure functions so the
//! scaling logic stays testable outside the browser.

use leptos::prelude::*;

pub const VIEW_WIDTH: f64 = 560.0;
pub const VIEW_HEIGHT: f64 = 300.0;

const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 42.0;

const Y_TICKS: usize = 4;

fn plot_width() -> f64 {
    VIEW_WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

fn plot_height() -> f64 {
    VIEW_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

/// Round a maximum up to a 1/2/5 × 10^k ceiling so axis ticks land on
/// readable values.
pub fn nice_ceil(max: f64) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Bar rectangles for the given values, scaled against `top` (the axis
/// ceiling). Bars occupy 60% of their slot, centered.
pub fn bar_layout(values: &[f64], top: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let slot = plot_width() / values.len() as f64;
    let bar_w = slot * 0.6;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let h = if top > 0.0 {
                (v / top).clamp(0.0, 1.0) * plot_height()
            } else {
                0.0
            };
            BarRect {
                x: MARGIN_LEFT + i as f64 * slot + (slot - bar_w) / 2.0,
                y: MARGIN_TOP + plot_height() - h,
                w: bar_w,
                h,
            }
        })
        .collect()
}

/// Point coordinates for the line chart, centered in the same slots the
/// bar chart uses.
pub fn line_points(values: &[f64], top: f64) -> Vec<(f64, f64)> {
    if values.is_empty() {
        return Vec::new();
    }
    let slot = plot_width() / values.len() as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let ratio = if top > 0.0 {
                (v / top).clamp(0.0, 1.0)
            } else {
                0.0
            };
            (
                MARGIN_LEFT + i as f64 * slot + slot / 2.0,
                MARGIN_TOP + plot_height() * (1.0 - ratio),
            )
        })
        .collect()
}

fn grid_view(top: f64, format_tick: fn(f64) -> String) -> AnyView {
    (0..=Y_TICKS)
        .map(|i| {
            let ratio = i as f64 / Y_TICKS as f64;
            let y = MARGIN_TOP + plot_height() * (1.0 - ratio);
            let value = top * ratio;
            view! {
                <g>
                    <line
                        x1=MARGIN_LEFT.to_string()
                        y1=y.to_string()
                        x2=(VIEW_WIDTH - MARGIN_RIGHT).to_string()
                        y2=y.to_string()
                        stroke="#e5e7eb"
                        stroke-width="1"
                    />
                    <text
                        x=(MARGIN_LEFT - 8.0).to_string()
                        y=(y + 4.0).to_string()
                        text-anchor="end"
                        font-size="10"
                        fill="#6b7280"
                    >
                        {format_tick(value)}
                    </text>
                </g>
            }
        })
        .collect_view()
        .into_any()
}

fn x_label_view(labels: &[String], count: usize) -> AnyView {
    let slot = plot_width() / count as f64;
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let x = MARGIN_LEFT + i as f64 * slot + slot / 2.0;
            view! {
                <text
                    x=x.to_string()
                    y=(VIEW_HEIGHT - MARGIN_BOTTOM + 16.0).to_string()
                    text-anchor="middle"
                    font-size="10"
                    fill="#6b7280"
                >
                    {label.clone()}
                </text>
            }
        })
        .collect_view()
        .into_any()
}

fn format_int_tick(value: f64) -> String {
    format!("{}", value.round() as i64)
}

/// Monthly bar chart (x: month label, y: value).
#[component]
pub fn BarChart(#[prop(into)] points: Signal<Vec<(String, f64)>>) -> impl IntoView {
    view! {
        <svg
            class="chart"
            viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
            preserveAspectRatio="xMidYMid meet"
            role="img"
        >
            {move || {
                let data = points.get();
                let labels: Vec<String> = data.iter().map(|(m, _)| m.clone()).collect();
                let values: Vec<f64> = data.iter().map(|(_, v)| *v).collect();
                let top = nice_ceil(values.iter().fold(0.0, |acc: f64, v| acc.max(*v)));
                let bars = bar_layout(&values, top)
                    .into_iter()
                    .zip(data.iter())
                    .map(|(rect, (label, value))| {
                        view! {
                            <rect
                                x=rect.x.to_string()
                                y=rect.y.to_string()
                                width=rect.w.to_string()
                                height=rect.h.to_string()
                                rx="3"
                                fill="#66c2a5"
                            >
                                <title>{format!("{}: {}", label, value)}</title>
                            </rect>
                        }
                    })
                    .collect_view();
                view! {
                    <g>
                        {grid_view(top, format_int_tick)}
                        {bars}
                        {x_label_view(&labels, labels.len().max(1))}
                    </g>
                }
            }}
        </svg>
    }
}

/// Monthly line chart with a soft area fill under the curve.
#[component]
pub fn LineChart(#[prop(into)] points: Signal<Vec<(String, f64)>>) -> impl IntoView {
    view! {
        <svg
            class="chart"
            viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
            preserveAspectRatio="xMidYMid meet"
            role="img"
        >
            {move || {
                let data = points.get();
                let labels: Vec<String> = data.iter().map(|(m, _)| m.clone()).collect();
                let values: Vec<f64> = data.iter().map(|(_, v)| *v).collect();
                let top = nice_ceil(values.iter().fold(0.0, |acc: f64, v| acc.max(*v)));
                let pts = line_points(&values, top);

                let polyline = pts
                    .iter()
                    .map(|(x, y)| format!("{:.1},{:.1}", x, y))
                    .collect::<Vec<_>>()
                    .join(" ");

                let baseline = MARGIN_TOP + plot_height();
                let area = match (pts.first(), pts.last()) {
                    (Some(first), Some(last)) => format!(
                        "M {:.1} {:.1} L {} L {:.1} {:.1} Z",
                        first.0,
                        baseline,
                        pts.iter()
                            .map(|(x, y)| format!("{:.1} {:.1}", x, y))
                            .collect::<Vec<_>>()
                            .join(" L "),
                        last.0,
                        baseline,
                    ),
                    _ => String::new(),
                };

                let markers = pts
                    .iter()
                    .zip(data.iter())
                    .map(|((x, y), (label, value))| {
                        view! {
                            <circle cx=x.to_string() cy=y.to_string() r="4" fill="#8da0cb">
                                <title>{format!("{}: {}", label, value)}</title>
                            </circle>
                        }
                    })
                    .collect_view();

                view! {
                    <g>
                        {grid_view(top, format_int_tick)}
                        <path d=area fill="#8da0cb" fill-opacity="0.15"/>
                        <polyline
                            points=polyline
                            fill="none"
                            stroke="#8da0cb"
                            stroke-width="2"
                        />
                        {markers}
                        {x_label_view(&labels, labels.len().max(1))}
                    </g>
                }
            }}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_ceil_rounds_to_readable_steps() {
        assert_eq!(nice_ceil(0.0), 1.0);
        assert_eq!(nice_ceil(7.0), 10.0);
        assert_eq!(nice_ceil(42.0), 50.0);
        assert_eq!(nice_ceil(180.0), 200.0);
        assert_eq!(nice_ceil(950.0), 1000.0);
        assert_eq!(nice_ceil(1000.0), 1000.0);
    }

    #[test]
    fn bar_heights_are_proportional() {
        let bars = bar_layout(&[50.0, 100.0], 100.0);
        assert_eq!(bars.len(), 2);
        assert!((bars[0].h * 2.0 - bars[1].h).abs() < 1e-9);
        // taller bar starts higher up
        assert!(bars[1].y < bars[0].y);
    }

    #[test]
    fn empty_series_produces_no_geometry() {
        assert!(bar_layout(&[], 10.0).is_empty());
        assert!(line_points(&[], 10.0).is_empty());
    }

    #[test]
    fn line_points_stay_inside_the_plot() {
        let pts = line_points(&[0.0, 5.0, 10.0], 10.0);
        for (x, y) in &pts {
            assert!(*x >= MARGIN_LEFT && *x <= VIEW_WIDTH - MARGIN_RIGHT);
            assert!(*y >= MARGIN_TOP && *y <= VIEW_HEIGHT - MARGIN_BOTTOM);
        }
        // the max value touches the top gridline
        assert!((pts[2].1 - MARGIN_TOP).abs() < 1e-9);
    }

    #[test]
    fn zero_top_degrades_to_flat_baseline() {
        let bars = bar_layout(&[1.0], 0.0);
        assert_eq!(bars[0].h, 0.0);
    }
}
