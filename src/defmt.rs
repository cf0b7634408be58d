//! `defmt` implementations

use defmt::Formatter;

use crate::FixedCapacityVector;

impl<T, const N: usize> defmt::Format for FixedCapacityVector<T, N>
where
    T: defmt::Format,
{
    fn format(&self, fmt: Formatter<'_>) {
        defmt::write!(fmt, "{=[?]}", self.as_slice())
    }
}
