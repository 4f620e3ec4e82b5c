//! Seeded train/test partitioning.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Seed for the corpus shuffle; fixed so the held-out set never leaks into
/// training across reruns.
pub const SPLIT_SEED: u64 = 48;

/// Share of the corpus held out for the final accuracy report.
pub const TEST_FRACTION: f64 = 0.2;

/// Train/test partition of a labelled text set.
#[derive(Debug)]
pub struct Split {
    pub train_texts: Vec<String>,
    pub train_labels: Vec<i64>,
    pub test_texts: Vec<String>,
    pub test_labels: Vec<i64>,
}

/// Shuffle with the given seed and split off a test fraction.
pub fn train_test_split(texts: &[String], labels: &[i64], test_fraction: f64, seed: u64) -> Split {
    debug_assert_eq!(texts.len(), labels.len());

    let mut indices: Vec<usize> = (0..texts.len()).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test_len = (texts.len() as f64 * test_fraction).round() as usize;
    let (test_indices, train_indices) = indices.split_at(test_len.min(texts.len()));

    let pick = |indices: &[usize]| -> (Vec<String>, Vec<i64>) {
        (
            indices.iter().map(|&i| texts[i].clone()).collect(),
            indices.iter().map(|&i| labels[i]).collect(),
        )
    };
    let (train_texts, train_labels) = pick(train_indices);
    let (test_texts, test_labels) = pick(test_indices);

    Split {
        train_texts,
        train_labels,
        test_texts,
        test_labels,
    }
}
