use super::CHART_COLORS;
use leptos::prelude::*;
use std::f64::consts::PI;

const VIEW: f64 = 400.0;
const RADIUS: f64 = 150.0;

/// One labelled value of the pie.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

/// Start/end angles (radians, 12 o'clock = -PI/2, clockwise) for each
/// positive-share slice. Zero or negative values produce empty slices so
/// indices stay aligned with the input.
pub fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let mut angles = Vec::with_capacity(values.len());
    let mut cursor = -PI / 2.0;
    for &value in values {
        if total <= 0.0 || value <= 0.0 {
            angles.push((cursor, cursor));
            continue;
        }
        let sweep = value / total * 2.0 * PI;
        angles.push((cursor, cursor + sweep));
        cursor += sweep;
    }
    angles
}

pub fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// SVG path for one pie wedge.
pub fn arc_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let (x0, y0) = polar(cx, cy, r, start);
    let (x1, y1) = polar(cx, cy, r, end);
    let large_arc = if end - start > PI { 1 } else { 0 };
    format!(
        "M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z"
    )
}

/// Pie chart with a color-swatch legend.
#[component]
pub fn PieChart(slices: Vec<PieSlice>) -> impl IntoView {
    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let angles = slice_angles(&values);
    let center = VIEW / 2.0;

    // A lone non-zero slice is a full disc; an arc with coincident
    // endpoints would collapse to nothing.
    let visible = values.iter().filter(|v| **v > 0.0).count();

    let wedges = slices
        .iter()
        .zip(&angles)
        .enumerate()
        .filter(|(_, (slice, _))| slice.value > 0.0)
        .map(|(i, (slice, (start, end)))| {
            let color = CHART_COLORS[i % CHART_COLORS.len()];
            let title = format!("{}: {}", slice.label, slice.value);
            if visible == 1 {
                view! {
                    <circle
                        cx=format!("{center}")
                        cy=format!("{center}")
                        r=format!("{RADIUS}")
                        fill=color
                    >
                        <title>{title}</title>
                    </circle>
                }
                .into_any()
            } else {
                view! {
                    <path d=arc_path(center, center, RADIUS, *start, *end) fill=color>
                        <title>{title}</title>
                    </path>
                }
                .into_any()
            }
        })
        .collect_view();

    let legend = slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            let color = CHART_COLORS[i % CHART_COLORS.len()];
            let share = if total > 0.0 {
                format!(" ({:.1}%)", slice.value.max(0.0) / total * 100.0)
            } else {
                String::new()
            };
            view! {
                <li style="display: flex; align-items: center; gap: 6px; font-size: 0.8rem;">
                    <span style=format!("display: inline-block; width: 10px; height: 10px; border-radius: 2px; background: {};", color)></span>
                    {format!("{}{}", slice.label, share)}
                </li>
            }
        })
        .collect_view();

    view! {
        <div style="display: flex; gap: 24px; align-items: flex-start;">
            <svg width="400" height="400" viewBox=format!("0 0 {VIEW} {VIEW}") role="img">
                {wedges}
            </svg>
            <ul style="list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 4px;">
                {legend}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angles_cover_the_full_circle() {
        let angles = slice_angles(&[1.0, 1.0, 2.0]);
        assert_eq!(angles.len(), 3);
        assert!((angles[0].0 - (-PI / 2.0)).abs() < 1e-9);
        // quarters: 1/4, 1/4, 1/2
        assert!(((angles[0].1 - angles[0].0) - PI / 2.0).abs() < 1e-9);
        assert!(((angles[2].1 - angles[2].0) - PI).abs() < 1e-9);
        assert!((angles[2].1 - (3.0 * PI / 2.0)).abs() < 1e-9);
        // contiguous
        assert!((angles[1].0 - angles[0].1).abs() < 1e-9);
    }

    #[test]
    fn zero_values_yield_empty_slices() {
        let angles = slice_angles(&[0.0, 3.0]);
        assert_eq!(angles[0].0, angles[0].1);
        assert!(((angles[1].1 - angles[1].0) - 2.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn all_zero_input_degenerates_quietly() {
        let angles = slice_angles(&[0.0, 0.0]);
        assert!(angles.iter().all(|(s, e)| s == e));
    }

    #[test]
    fn arc_path_flags_major_arcs() {
        let minor = arc_path(200.0, 200.0, 150.0, 0.0, PI / 2.0);
        assert!(minor.contains(" 0 0 1 "));
        let major = arc_path(200.0, 200.0, 150.0, 0.0, 1.5 * PI);
        assert!(major.contains(" 0 1 1 "));
        assert!(major.starts_with("M 200.00 200.00"));
        assert!(major.ends_with('Z'));
    }

    #[test]
    fn polar_points_sit_on_the_radius() {
        let (x, y) = polar(200.0, 200.0, 150.0, -PI / 2.0);
        assert!((x - 200.0).abs() < 1e-9);
        assert!((y - 50.0).abs() < 1e-9);
    }
}
