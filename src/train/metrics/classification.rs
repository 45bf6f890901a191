//! Multi-class F1 over class-index predictions

use super::{CategoryScore, Metric};

/// How per-category counts are combined into one F1
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Average {
    /// Pool TP, FP, FN over all categories
    #[default]
    Micro,
    /// Unweighted mean of per-category F1 over categories seen so far
    Macro,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Counts {
    tp: usize,
    fp: usize,
    fn_: usize,
}

impl Counts {
    fn f1(&self) -> f32 {
        let denom = 2 * self.tp + self.fp + self.fn_;
        if denom == 0 {
            return 0.0;
        }
        (2 * self.tp) as f32 / denom as f32
    }

    fn seen(&self) -> bool {
        self.tp + self.fp + self.fn_ > 0
    }
}

/// F1 tracker for single-label classification.
///
/// Outputs and labels are class indices into `categories`. Indices outside
/// the category list only count against the other side of the pair.
///
/// # Example
///
/// ```
/// use predictor::train::{F1Tracker, Metric};
///
/// let mut f1 = F1Tracker::new("f1", ["neg", "pos"]);
/// f1.update(&vec![1usize, 0, 1], &vec![1usize, 0, 0]);
///
/// let by_category = Metric::<Vec<usize>, Vec<usize>>::category_f1(&f1);
/// assert_eq!(by_category[1].category, "pos");
/// assert!((by_category[1].f1 - 2.0 / 3.0).abs() < 1e-6);
/// ```
#[derive(Clone, Debug)]
pub struct F1Tracker {
    name: String,
    categories: Vec<String>,
    average: Average,
    counts: Vec<Counts>,
}

impl F1Tracker {
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        categories: impl IntoIterator<Item = S>,
    ) -> Self {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        let counts = vec![Counts::default(); categories.len()];
        Self {
            name: name.into(),
            categories,
            average: Average::Micro,
            counts,
        }
    }

    /// Set the averaging mode
    pub fn with_average(mut self, average: Average) -> Self {
        self.average = average;
        self
    }

    fn record(&mut self, predicted: usize, actual: usize) {
        if predicted == actual {
            if let Some(c) = self.counts.get_mut(actual) {
                c.tp += 1;
            }
            return;
        }
        if let Some(c) = self.counts.get_mut(predicted) {
            c.fp += 1;
        }
        if let Some(c) = self.counts.get_mut(actual) {
            c.fn_ += 1;
        }
    }

    fn overall(&self) -> f32 {
        match self.average {
            Average::Micro => {
                let pooled = self.counts.iter().fold(Counts::default(), |acc, c| Counts {
                    tp: acc.tp + c.tp,
                    fp: acc.fp + c.fp,
                    fn_: acc.fn_ + c.fn_,
                });
                pooled.f1()
            }
            Average::Macro => {
                let seen: Vec<f32> = self
                    .counts
                    .iter()
                    .filter(|c| c.seen())
                    .map(Counts::f1)
                    .collect();
                if seen.is_empty() {
                    0.0
                } else {
                    seen.iter().sum::<f32>() / seen.len() as f32
                }
            }
        }
    }
}

impl<O, L> Metric<O, L> for F1Tracker
where
    O: AsRef<[usize]>,
    L: AsRef<[usize]>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn reset(&mut self) {
        self.counts.fill(Counts::default());
    }

    fn update(&mut self, output: &O, label: &L) {
        for (&predicted, &actual) in output.as_ref().iter().zip(label.as_ref()) {
            self.record(predicted, actual);
        }
    }

    fn print_score(&self) -> String {
        format!("{:.4}", self.overall())
    }

    fn f1(&self) -> f32 {
        self.overall()
    }

    fn category_f1(&self) -> Vec<CategoryScore> {
        self.categories
            .iter()
            .zip(&self.counts)
            .map(|(name, c)| CategoryScore::new(name.clone(), c.f1()))
            .collect()
    }
}
