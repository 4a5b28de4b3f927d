pub struct MseLoss;

impl MseLoss {
    /// Half squared error of a single scalar prediction: 0.5 * (predicted - expected)²
    pub fn loss(predicted: f64, expected: f64) -> f64 {
        0.5 * (predicted - expected).powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_is_half_squared_difference() {
        assert_eq!(MseLoss::loss(0.9, 0.9), 0.0);
        assert!((MseLoss::loss(1.0, 0.5) - 0.125).abs() < 1e-12);
        assert_eq!(MseLoss::loss(0.2, 0.6), MseLoss::loss(0.6, 0.2));
    }
}
