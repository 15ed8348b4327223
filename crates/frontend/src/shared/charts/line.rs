use crate::shared::format::format_amount;
use leptos::prelude::*;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 300.0;
const PAD: f64 = 48.0;
const Y_TICKS: usize = 4;

/// Scale a series onto the chart area: x evenly spaced left to right,
/// y linear from zero (bottom) to `max` (top). A single point lands in
/// the horizontal middle.
pub fn scale_points(values: &[f64], width: f64, height: f64, pad: f64) -> Vec<(f64, f64)> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let inner_w = width - 2.0 * pad;
    let inner_h = height - 2.0 * pad;
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = if n <= 1 {
                pad + inner_w / 2.0
            } else {
                pad + inner_w * i as f64 / (n - 1) as f64
            };
            let y = if max <= 0.0 {
                height - pad
            } else {
                height - pad - inner_h * (v / max)
            };
            (x, y)
        })
        .collect()
}

/// Points formatted for an SVG `<polyline points=...>` attribute.
pub fn polyline_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Indices of up to `max_labels` evenly spread x-axis labels, always
/// including the first and last point.
pub fn label_indices(n: usize, max_labels: usize) -> Vec<usize> {
    if n == 0 || max_labels == 0 {
        return Vec::new();
    }
    if n <= max_labels || max_labels == 1 {
        return (0..n.min(max_labels)).collect();
    }
    let mut indices: Vec<usize> = (0..max_labels)
        .map(|i| i * (n - 1) / (max_labels - 1))
        .collect();
    indices.dedup();
    indices
}

/// Line chart of (label, value) points with y gridlines.
#[component]
pub fn LineChart(points: Vec<(String, f64)>) -> impl IntoView {
    let values: Vec<f64> = points.iter().map(|(_, v)| *v).collect();
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let scaled = scale_points(&values, WIDTH, HEIGHT, PAD);
    let poly = polyline_points(&scaled);

    let gridlines = (0..=Y_TICKS)
        .map(|i| {
            let frac = i as f64 / Y_TICKS as f64;
            let y = HEIGHT - PAD - (HEIGHT - 2.0 * PAD) * frac;
            let label = format_amount(Some(max * frac));
            view! {
                <g>
                    <line
                        x1=format!("{PAD}")
                        y1=format!("{y:.2}")
                        x2=format!("{}", WIDTH - PAD)
                        y2=format!("{y:.2}")
                        stroke="#e0e0e0"
                        stroke-dasharray="3 3"
                    />
                    <text
                        x=format!("{}", PAD - 6.0)
                        y=format!("{:.2}", y + 4.0)
                        text-anchor="end"
                        font-size="11"
                        fill="#6c757d"
                    >
                        {label}
                    </text>
                </g>
            }
        })
        .collect_view();

    let x_labels = label_indices(points.len(), 8)
        .into_iter()
        .map(|i| {
            let (x, _) = scaled[i];
            let label = points[i].0.clone();
            view! {
                <text
                    x=format!("{x:.2}")
                    y=format!("{}", HEIGHT - PAD + 18.0)
                    text-anchor="middle"
                    font-size="11"
                    fill="#6c757d"
                >
                    {label}
                </text>
            }
        })
        .collect_view();

    let markers = scaled
        .iter()
        .map(|(x, y)| {
            view! {
                <circle
                    cx=format!("{x:.2}")
                    cy=format!("{y:.2}")
                    r="4"
                    fill="#8884d8"
                />
            }
        })
        .collect_view();

    view! {
        <svg
            width="100%"
            height=format!("{HEIGHT}")
            viewBox=format!("0 0 {WIDTH} {HEIGHT}")
            role="img"
        >
            {gridlines}
            {x_labels}
            <polyline
                points=poly
                fill="none"
                stroke="#8884d8"
                stroke-width="2"
            />
            {markers}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_value_reaches_the_top_of_the_plot() {
        let scaled = scale_points(&[0.0, 50.0, 100.0], 800.0, 300.0, 48.0);
        assert_eq!(scaled[0], (48.0, 252.0));
        assert_eq!(scaled[2].1, 48.0);
        assert_eq!(scaled[2].0, 752.0);
        // halfway value sits halfway up
        assert!((scaled[1].1 - 150.0).abs() < 1e-9);
    }

    #[test]
    fn single_point_is_centered() {
        let scaled = scale_points(&[10.0], 800.0, 300.0, 48.0);
        assert_eq!(scaled.len(), 1);
        assert_eq!(scaled[0].0, 400.0);
    }

    #[test]
    fn flat_zero_series_hugs_the_baseline() {
        let scaled = scale_points(&[0.0, 0.0], 800.0, 300.0, 48.0);
        assert!(scaled.iter().all(|(_, y)| *y == 252.0));
    }

    #[test]
    fn polyline_joins_pairs_with_spaces() {
        let s = polyline_points(&[(1.0, 2.0), (3.5, 4.25)]);
        assert_eq!(s, "1.00,2.00 3.50,4.25");
    }

    #[test]
    fn label_indices_keep_endpoints() {
        assert_eq!(label_indices(3, 8), vec![0, 1, 2]);
        let sparse = label_indices(100, 8);
        assert_eq!(*sparse.first().unwrap(), 0);
        assert_eq!(*sparse.last().unwrap(), 99);
        assert!(sparse.len() <= 8);
        assert_eq!(label_indices(0, 8), Vec::<usize>::new());
    }
}
