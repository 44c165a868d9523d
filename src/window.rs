use serde::{Deserialize, Serialize};

use crate::types::Data;

/// How to pad a window that runs past the end of the series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillPolicy {
    /// Pad with the arithmetic mean of the values still available
    MeanOfTail,
    /// Pad with zeros
    Zero,
}

/// Returns exactly `window_size` values starting at `index`, padding on the
/// right per `fill` when the slice would overrun the data. Pure; the caller
/// advances the cursor separately.
pub fn window(values: &Data, index: usize, window_size: usize, fill: FillPolicy) -> Data {
    if index + window_size <= values.len() {
        return values[index..index + window_size].to_vec();
    }

    let tail: &[f64] = if index < values.len() {
        &values[index..]
    } else {
        &[]
    };

    let fill_value = match fill {
        FillPolicy::Zero => 0.0,
        FillPolicy::MeanOfTail => {
            if tail.is_empty() {
                // mean of nothing, fall back to zero
                0.0
            } else {
                tail.iter().sum::<f64>() / tail.len() as f64
            }
        }
    };

    let mut padded = tail.to_vec();
    padded.resize(window_size, fill_value);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_window_is_a_contiguous_slice() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];

        assert_eq!(window(&values, 1, 3, FillPolicy::MeanOfTail), vec![2.0, 3.0, 4.0]);
        assert_eq!(window(&values, 2, 3, FillPolicy::Zero), vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn overrun_pads_with_tail_mean() {
        let values = vec![1.0, 2.0, 3.0, 4.0];

        // tail is [3.0, 4.0], mean 3.5
        let padded = window(&values, 2, 4, FillPolicy::MeanOfTail);
        assert_eq!(padded, vec![3.0, 4.0, 3.5, 3.5]);
    }

    #[test]
    fn overrun_pads_with_zero() {
        let values = vec![1.0, 2.0, 3.0, 4.0];

        let padded = window(&values, 3, 3, FillPolicy::Zero);
        assert_eq!(padded, vec![4.0, 0.0, 0.0]);
    }

    #[test]
    fn window_always_has_the_requested_length() {
        let values = vec![1.0, 2.0];

        for index in 0..6 {
            assert_eq!(window(&values, index, 4, FillPolicy::MeanOfTail).len(), 4);
            assert_eq!(window(&values, index, 4, FillPolicy::Zero).len(), 4);
        }
    }

    #[test]
    fn empty_tail_pads_with_zero_under_either_policy() {
        let values = vec![1.0, 2.0];

        assert_eq!(window(&values, 5, 3, FillPolicy::MeanOfTail), vec![0.0; 3]);
        assert_eq!(window(&values, 5, 3, FillPolicy::Zero), vec![0.0; 3]);
    }
}
