//! Series-sum circuit analysis over placed components.
//!
//! The figures are deliberately naive: every rated value of a kind is summed,
//! as if everything sat in one series loop, and the applied voltage is that of
//! the most recently placed source.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use crate::doc::{Part, PlacedComponent};

/// Totals computed from a set of placed components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CircuitAnalysis {
    /// Sum of resistor values in ohms.
    pub resistance: f64,
    /// Sum of capacitor values in microfarads.
    pub capacitance: f64,
    /// Sum of inductor values in millihenries.
    pub inductance: f64,
    /// Volts of the last voltage source, or zero.
    pub voltage: f64,
}

impl CircuitAnalysis {
    #[must_use]
    pub fn of<'a>(components: impl IntoIterator<Item = &'a PlacedComponent>) -> Self {
        components
            .into_iter()
            .fold(Self::default(), |mut acc, c| {
                match c.template.part {
                    Part::Resistor { ohms } => acc.resistance += ohms,
                    Part::Capacitor { microfarads } => acc.capacitance += microfarads,
                    Part::Inductor { millihenries } => acc.inductance += millihenries,
                    Part::VoltageSource { volts } => acc.voltage = volts,
                    _ => {}
                }
                acc
            })
    }

    /// Ohm's-law current in amperes; only defined with a positive voltage and resistance.
    #[must_use]
    pub fn current(&self) -> Option<f64> {
        (self.voltage > 0.0 && self.resistance > 0.0).then(|| self.voltage / self.resistance)
    }

    /// Multi-line text shown to the learner.
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = format!(
            "Circuit Analysis:\nTotal Resistance: {} Ω\nTotal Capacitance: {} µF\nTotal Inductance: {} mH\nApplied Voltage: {} V\n",
            self.resistance, self.capacitance, self.inductance, self.voltage
        );
        if let Some(amps) = self.current() {
            out.push_str(&format!("Current: {amps:.2} A\n"));
        }
        out
    }
}
