use crate::algorithms::algorithm_result::Convergence;
use tracing::{debug, trace, warn};

/// Divides every value by the largest one.
///
/// When the largest value is not positive (isolated vertices, empty neighbourhoods) there is
/// nothing to scale by and every value becomes zero.
pub(crate) fn normalise_by_max(values: &mut [f64]) {
    let max = values.iter().copied().fold(0.0f64, f64::max);
    if max > 0.0 {
        values.iter_mut().for_each(|v| *v /= max);
    } else {
        trace!("maximum tentative score is zero, scores collapse to zero");
        values.fill(0.0);
    }
}

pub(crate) fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(a, b)| (a - b).abs()).sum()
}

/// Repeats `step` until the summed absolute change drops below `confidence` or
/// `max_iterations` steps have been taken.
///
/// `step` reads the previous scores and writes the new, already normalised, scores into its
/// second argument.
pub(crate) fn iterate<F>(
    algorithm: &'static str,
    initial: Vec<f64>,
    confidence: f64,
    max_iterations: usize,
    mut step: F,
) -> (Vec<f64>, Convergence)
where
    F: FnMut(&[f64], &mut [f64]),
{
    let mut scores = initial;
    if scores.is_empty() {
        return (
            scores,
            Convergence::Converged {
                iterations: 0,
                residual: 0.0,
            },
        );
    }
    let mut next = vec![0.0; scores.len()];
    let mut residual = f64::INFINITY;

    for iterations in 1..=max_iterations {
        step(&scores, &mut next);
        residual = l1_distance(&scores, &next);
        std::mem::swap(&mut scores, &mut next);
        trace!(algorithm, iterations, residual, "iteration done");
        if residual < confidence {
            debug!(algorithm, iterations, residual, "converged");
            return (
                scores,
                Convergence::Converged {
                    iterations,
                    residual,
                },
            );
        }
    }

    warn!(
        algorithm,
        max_iterations, residual, "iteration budget exhausted before convergence"
    );
    (
        scores,
        Convergence::Exhausted {
            iterations: max_iterations,
            residual,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalise_handles_all_zero() {
        let mut values = vec![0.0, 0.0];
        normalise_by_max(&mut values);
        assert_eq!(values, vec![0.0, 0.0]);

        let mut values = vec![1.0, 4.0, 2.0];
        normalise_by_max(&mut values);
        assert_eq!(values, vec![0.25, 1.0, 0.5]);
    }

    #[test]
    fn halving_converges() {
        let (scores, convergence) = iterate("halve", vec![1.0], 0.1, 100, |prev, next| {
            next[0] = prev[0] / 2.0;
        });
        // 1 -> 0.5 -> 0.25 -> 0.125 -> 0.0625, the last change is 0.0625
        assert_eq!(scores, vec![0.0625]);
        assert_eq!(
            convergence,
            Convergence::Converged {
                iterations: 4,
                residual: 0.0625
            }
        );
    }

    #[test]
    fn budget_is_respected() {
        let mut calls = 0;
        let (_, convergence) = iterate("grow", vec![1.0], 1e-9, 5, |prev, next| {
            calls += 1;
            next[0] = prev[0] + 1.0;
        });
        assert_eq!(calls, 5);
        assert!(!convergence.is_converged());
        assert_eq!(convergence.iterations(), 5);
    }
}
