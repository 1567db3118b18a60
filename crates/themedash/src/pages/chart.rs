//! Random line-chart data and its SVG projection.

use rand::Rng;
use rand_distr::StandardNormal;
use serde::Serialize;

const SERIES_COLORS: &[&str] = &["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd"];

/// A table of numeric samples, one column per series.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl LineChart {
    /// Fills a `rows` x `columns.len()` table with standard-normal samples.
    pub fn random_normal<R: Rng>(rng: &mut R, rows: usize, columns: &[&str]) -> Self {
        let rows = (0..rows)
            .map(|_| columns.iter().map(|_| rng.sample::<f64, _>(StandardNormal)).collect())
            .collect();
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    /// Projects the table onto a `width` x `height` SVG canvas.
    ///
    /// The y range spans the smallest to largest sample; a flat table is
    /// given a unit range so every point stays on the canvas.
    pub fn to_svg(&self, width: f64, height: f64) -> SvgChart {
        let values = self.rows.iter().flatten().copied();
        let (mut min, mut max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if !min.is_finite() || !max.is_finite() {
            min = 0.0;
            max = 0.0;
        }
        if max - min < f64::EPSILON {
            min -= 0.5;
            max += 0.5;
        }

        let project_y = |v: f64| height - (v - min) / (max - min) * height;
        let step = if self.rows.len() > 1 {
            width / (self.rows.len() - 1) as f64
        } else {
            0.0
        };

        let series = self
            .columns
            .iter()
            .enumerate()
            .map(|(col, name)| {
                let points = self
                    .rows
                    .iter()
                    .enumerate()
                    .map(|(i, row)| format!("{:.1},{:.1}", i as f64 * step, project_y(row[col])))
                    .collect::<Vec<_>>()
                    .join(" ");
                SvgSeries {
                    name: name.clone(),
                    color: SERIES_COLORS[col % SERIES_COLORS.len()],
                    points,
                }
            })
            .collect();

        SvgChart {
            width,
            height,
            zero_y: format!("{:.1}", project_y(0.0).clamp(0.0, height)),
            series,
        }
    }
}

/// A chart ready for an SVG `viewBox` of `width` x `height`.
#[derive(Debug, Clone, Serialize)]
pub struct SvgChart {
    pub width: f64,
    pub height: f64,
    /// y coordinate of the zero baseline, clamped to the canvas.
    pub zero_y: String,
    pub series: Vec<SvgSeries>,
}

/// One polyline of the chart.
#[derive(Debug, Clone, Serialize)]
pub struct SvgSeries {
    pub name: String,
    pub color: &'static str,
    /// `x,y` pairs separated by spaces, as the `points` attribute expects.
    pub points: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn parse_points(points: &str) -> Vec<(f64, f64)> {
        points
            .split(' ')
            .map(|pair| {
                let (x, y) = pair.split_once(',').unwrap();
                (x.parse().unwrap(), y.parse().unwrap())
            })
            .collect()
    }

    #[test]
    fn test_random_normal_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let chart = LineChart::random_normal(&mut rng, 20, &["a", "b", "c"]);

        assert_eq!(chart.columns, vec!["a", "b", "c"]);
        assert_eq!(chart.rows.len(), 20);
        assert!(chart.rows.iter().all(|r| r.len() == 3));
        assert!(chart.rows.iter().flatten().all(|v| v.is_finite()));
    }

    #[test]
    fn test_random_normal_is_roughly_centered() {
        let mut rng = StdRng::seed_from_u64(42);
        let chart = LineChart::random_normal(&mut rng, 2000, &["a"]);
        let mean: f64 = chart.rows.iter().map(|r| r[0]).sum::<f64>() / 2000.0;
        assert!(mean.abs() < 0.15, "mean was {}", mean);
    }

    #[test]
    fn test_svg_points_stay_on_canvas() {
        let mut rng = StdRng::seed_from_u64(1);
        let svg = LineChart::random_normal(&mut rng, 20, &["a", "b", "c"]).to_svg(600.0, 240.0);

        assert_eq!(svg.series.len(), 3);
        for series in &svg.series {
            let points = parse_points(&series.points);
            assert_eq!(points.len(), 20);
            assert_eq!(points[0].0, 0.0);
            assert_eq!(points[19].0, 600.0);
            assert!(points.iter().all(|(_, y)| (0.0..=240.0).contains(y)));
        }
    }

    #[test]
    fn test_svg_flat_series() {
        let chart = LineChart {
            columns: vec!["a".into()],
            rows: vec![vec![1.0], vec![1.0]],
        };
        let svg = chart.to_svg(100.0, 100.0);
        assert_eq!(svg.series[0].points, "0.0,50.0 100.0,50.0");
    }

    #[test]
    fn test_svg_empty_table() {
        let chart = LineChart {
            columns: vec!["a".into()],
            rows: vec![],
        };
        let svg = chart.to_svg(100.0, 100.0);
        assert_eq!(svg.series[0].points, "");
    }
}
