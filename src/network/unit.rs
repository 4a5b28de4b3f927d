use crate::activation::sigmoid::sigmoid;

/// A single node slot: a scalar input whose activation is derived on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Unit {
    pub input: f64,
}

impl Unit {
    pub fn new() -> Unit {
        Unit::default()
    }

    pub fn activation(&self) -> f64 {
        sigmoid(self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_unit_activates_to_half() {
        let unit = Unit::new();
        assert_eq!(unit.input, 0.0);
        assert_eq!(unit.activation(), 0.5);
    }

    #[test]
    fn activation_follows_input() {
        let mut unit = Unit::new();
        unit.input = 2.0;
        assert!(unit.activation() > 0.5);
        unit.input = -2.0;
        assert!(unit.activation() < 0.5);
    }
}
