// src/analytics/stats.rs

//! Small numeric helpers shared by the report builders. Each returns `None`
//! where the statistic is undefined instead of producing NaN.

pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Pearson correlation of two equally long samples.
///
/// Undefined for fewer than two pairs or when either side has zero variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let mean_x = mean(xs.iter().copied())?;
    let mean_y = mean(ys.iter().copied())?;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator > 0.0 {
        Some(cov / denominator)
    } else {
        None
    }
}

/// Lag-1 autocorrelation: `series[t]` against `series[t-1]`.
pub fn lag1_autocorrelation(series: &[f64]) -> Option<f64> {
    if series.len() < 3 {
        return None;
    }
    pearson(&series[1..], &series[..series.len() - 1])
}

/// Mean difference between consecutive day numbers. `None` for fewer than two.
pub fn mean_gap(days: &[u32]) -> Option<f64> {
    mean(
        days.windows(2)
            .map(|pair| f64::from(pair[1]) - f64::from(pair[0])),
    )
}
