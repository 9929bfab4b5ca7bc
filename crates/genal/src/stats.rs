//! Summary statistics over population values.

/// Summary of a set of `f32` values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// The minimum value.
    pub min: f32,
    /// The maximum value.
    pub max: f32,
    /// The arithmetic mean.
    pub mean: f32,
    /// The population standard deviation.
    pub std_dev: f32,
}

impl Summary {
    /// Computes a summary of `values`.
    ///
    /// Returns `None` if `values` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use genal::stats::Summary;
    ///
    /// let summary = Summary::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    /// assert_eq!(summary.min, 2.0);
    /// assert_eq!(summary.max, 9.0);
    /// assert_eq!(summary.mean, 5.0);
    /// assert_eq!(summary.std_dev, 2.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f32>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        let n = values.len() as f32;
        let min = values.iter().copied().reduce(f32::min)?;
        let max = values.iter().copied().reduce(f32::max)?;
        let mean = values.iter().sum::<f32>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / n;
        Some(Self {
            min,
            max,
            mean,
            std_dev: variance.sqrt(),
        })
    }
}
