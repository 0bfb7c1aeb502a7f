use super::aggregate::{Aggregate, YearMonth};
use super::model::Pollutant;

/// Least-squares line `y = slope * x + intercept` with Pearson's r.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub r: f64,
}

impl LinearFit {
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Two pollutants' monthly means paired on shared months.
#[derive(Debug, Clone, PartialEq)]
pub struct Correlation {
    pub x: Pollutant,
    pub y: Pollutant,
    pub points: Vec<(YearMonth, [f64; 2])>,
    /// `None` with fewer than two points or no spread in x.
    pub fit: Option<LinearFit>,
}

impl Correlation {
    pub fn between(x: &Aggregate<YearMonth>, y: &Aggregate<YearMonth>) -> Self {
        let points: Vec<(YearMonth, [f64; 2])> = x
            .groups
            .iter()
            .filter_map(|g| y.get(&g.key).map(|y_mean| (g.key, [g.mean, y_mean])))
            .collect();
        let fit = fit_line(points.iter().map(|(_, p)| *p));

        Correlation {
            x: x.pollutant,
            y: y.pollutant,
            points,
            fit,
        }
    }
}

/// Ordinary least squares over `[x, y]` pairs.
pub fn fit_line(points: impl Iterator<Item = [f64; 2]> + Clone) -> Option<LinearFit> {
    let n = points.clone().count();
    if n < 2 {
        return None;
    }
    let n_f = n as f64;
    let (sum_x, sum_y) = points
        .clone()
        .fold((0.0, 0.0), |(sx, sy), [x, y]| (sx + x, sy + y));
    let (mean_x, mean_y) = (sum_x / n_f, sum_y / n_f);

    let (sxx, syy, sxy) = points.fold((0.0, 0.0, 0.0), |(sxx, syy, sxy), [x, y]| {
        let (dx, dy) = (x - mean_x, y - mean_y);
        (sxx + dx * dx, syy + dy * dy, sxy + dx * dy)
    });

    if sxx <= f64::EPSILON {
        return None;
    }
    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    // A flat y series has no defined correlation; report 0.
    let r = if syy <= f64::EPSILON {
        0.0
    } else {
        sxy / (sxx.sqrt() * syy.sqrt())
    };

    Some(LinearFit {
        slope,
        intercept,
        r,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::monthly_means;
    use crate::data::model::tests::record;
    use crate::data::model::Readings;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_perfect_line() {
        let fit = fit_line([[1.0, 3.0], [2.0, 5.0], [3.0, 7.0]].into_iter()).unwrap();
        assert!(approx(fit.slope, 2.0));
        assert!(approx(fit.intercept, 1.0));
        assert!(approx(fit.r, 1.0));
        assert!(approx(fit.at(10.0), 21.0));
    }

    #[test]
    fn test_negative_correlation() {
        let fit = fit_line([[0.0, 4.0], [1.0, 3.0], [2.0, 1.0], [3.0, 0.0]].into_iter()).unwrap();
        assert!(fit.slope < 0.0);
        assert!(fit.r < -0.9 && fit.r >= -1.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(fit_line([[1.0, 1.0]].into_iter()).is_none());
        assert!(fit_line([[2.0, 1.0], [2.0, 5.0]].into_iter()).is_none());
        let flat = fit_line([[1.0, 5.0], [2.0, 5.0]].into_iter()).unwrap();
        assert_eq!(flat.r, 0.0);
        assert!(approx(flat.slope, 0.0));
    }

    #[test]
    fn test_pairs_on_shared_months() {
        let both = |pm25: f64, pm10: Option<f64>| {
            Readings::default()
                .with(Pollutant::Pm25, Some(pm25))
                .with(Pollutant::Pm10, pm10)
        };
        let records = vec![
            record("Huairou", "2016-01-10", both(10.0, Some(20.0))),
            record("Huairou", "2016-02-10", both(20.0, Some(40.0))),
            record("Huairou", "2016-03-10", both(30.0, None)),
            record("Huairou", "2016-04-10", both(40.0, Some(80.0))),
        ];
        let x = monthly_means(Pollutant::Pm10, &records);
        let y = monthly_means(Pollutant::Pm25, &records);
        let corr = Correlation::between(&x, &y);

        assert_eq!(corr.x, Pollutant::Pm10);
        assert_eq!(corr.y, Pollutant::Pm25);
        assert_eq!(corr.points.len(), 3);
        assert_eq!(corr.points[2], (YearMonth::new(2016, 4), [80.0, 40.0]));
        let fit = corr.fit.unwrap();
        assert!(approx(fit.slope, 0.5));
        assert!(approx(fit.r, 1.0));
    }
}
