// Single-outlier detection by maximum squared residual
//
// Exactly one candidate per call. Ties keep the first index because the
// comparison is strict.

use serde::{Deserialize, Serialize};

/// The point with the largest squared residual under a fitted line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outlier {
    /// Index into the regression arrays
    pub index: usize,

    /// House number of the sample at `index`
    pub house_number: u32,

    /// Squared residual `(y - (slope·x + intercept))²`
    pub squared_residual: f64,
}

/// Find the worst-fitting point under `y = slope·x + intercept`
///
/// `xs`, `ys` and `house_numbers` are paired by index. Returns `None` for
/// empty input.
///
/// # Example
/// ```
/// use titlecast::regression::find_worst;
///
/// let worst = find_worst(&[1.0, 2.0, 3.0], &[1.0, 2.0, 30.0], &[2, 4, 6], 1.0, 0.0).unwrap();
/// assert_eq!(worst.index, 2);
/// assert_eq!(worst.house_number, 6);
/// ```
pub fn find_worst(
    xs: &[f64],
    ys: &[f64],
    house_numbers: &[u32],
    slope: f64,
    intercept: f64,
) -> Option<Outlier> {
    let mut worst: Option<Outlier> = None;

    for (index, ((x, y), house)) in xs.iter().zip(ys).zip(house_numbers).enumerate() {
        let residual = y - (slope * x + intercept);
        let squared_residual = residual * residual;

        let is_worse = match &worst {
            None => true,
            Some(current) => squared_residual > current.squared_residual,
        };

        if is_worse {
            worst = Some(Outlier {
                index,
                house_number: *house,
                squared_residual,
            });
        }
    }

    worst
}
