use crate::evaluation::Measurement;
use std::collections::HashMap;

/// Source of flat, named performance measurements.
pub trait Measured {
    /// Returns every measurement, in a stable order.
    fn performance(&self) -> Vec<Measurement>;
}

pub trait MeasuredExt {
    /// Returns (name, Some(value)|None) for each requested metric, preserving order.
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>;

    fn metric(&self, name: &str) -> Option<f64> {
        self.metrics([name]).into_iter().next().and_then(|(_, v)| v)
    }
}

impl<T: Measured + ?Sized> MeasuredExt for T {
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ms = self.performance();
        let map: HashMap<_, _> = ms.into_iter().map(|m| (m.name, m.value)).collect();
        names
            .into_iter()
            .map(|n| (n.to_string(), map.get(n).copied()))
            .collect()
    }
}
