use crate::support::polynomial::Polynomial;

/// Fixed empirical fits shared by every conversion.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Fits {
    /// Plato from specific gravity, measured at 20°C relative to water at 20°C.
    ///
    /// `P = -616.868 + 1111.14·SG - 630.272·SG² + 135.997·SG³`
    pub(super) plato_from_sg_20c20c: Polynomial,

    /// Water density in kg/L as a function of °C.
    pub(super) water_density_vs_celsius: Polynomial,

    /// Additive correction (×1e-3) for a 15°C hydrometer read at another
    /// temperature, in °C.
    pub(super) hydrometer_15c_correction: Polynomial,
}

impl Default for Fits {
    fn default() -> Self {
        Self {
            plato_from_sg_20c20c: Polynomial::new()
                .push(-616.868)
                .push(1111.14)
                .push(-630.272)
                .push(135.997),
            water_density_vs_celsius: Polynomial::new()
                .push(0.999_977_653_2)
                .push(6.557_692_037e-5)
                .push(-1.007_534_371e-5)
                .push(1.372_076_106e-7)
                .push(-1.414_581_892e-9)
                .push(5.689_097_1e-12),
            hydrometer_15c_correction: Polynomial::new()
                .push(-0.911_045)
                .push(-16.2853e-3)
                .push(5.84346e-3)
                .push(-15.3243e-6),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees() {
        let fits = Fits::default();
        assert_eq!(fits.plato_from_sg_20c20c.degree(), Some(3));
        assert_eq!(fits.water_density_vs_celsius.degree(), Some(5));
        assert_eq!(fits.hydrometer_15c_correction.degree(), Some(3));
    }
}
