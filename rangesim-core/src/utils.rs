//! Module containing miscellaneous utility functions.

use crate::imports::*;

/// return max of 2 f64
pub fn max(a: f64, b: f64) -> f64 {
    a.max(b)
}

/// return min of 2 f64
pub fn min(a: f64, b: f64) -> f64 {
    a.min(b)
}

/// return min <f64> of arr
pub fn ndarrmin(arr: &Array1<f64>) -> f64 {
    arr.to_vec().into_iter().reduce(f64::min).unwrap_or(f64::NAN)
}

/// return max <f64> of arr
pub fn ndarrmax(arr: &Array1<f64>) -> f64 {
    arr.to_vec().into_iter().reduce(f64::max).unwrap_or(f64::NAN)
}

/// return true if the array is all zeros
pub fn ndarrallzeros(arr: &Array1<f64>) -> bool {
    arr.iter().all(|x| *x == 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_of_two_f64() {
        let a = 1.1;
        let b = 4.5;
        assert_eq!(max(a, b), 4.5);
    }

    #[test]
    fn test_min_of_two_f64() {
        let a = 1.1;
        let b = 4.5;
        assert_eq!(min(a, b), 1.1);
    }

    #[test]
    fn test_ndarrmin() {
        let xs = Array1::from_vec(vec![10.0, 80.0, 3.0, 8.2, 4.0]);
        assert_eq!(ndarrmin(&xs), 3.0);
    }

    #[test]
    fn test_ndarrmax() {
        let xs = Array1::from_vec(vec![10.0, 80.0, 3.0, 8.2, 4.0]);
        assert_eq!(ndarrmax(&xs), 80.0);
    }

    #[test]
    fn test_ndarrallzeros() {
        assert!(ndarrallzeros(&Array1::zeros(5)));
        assert!(!ndarrallzeros(&Array1::from_vec(vec![0.0, 1e-9])));
    }
}
