use crate::composition::Composition;
use crate::core::LabelSet;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Chart colours, handed out in rank order.
pub const PALETTE: [&str; 8] = [
    "#2E80B3", "#068587", "#4FB99F", "#6D909C", "#F2B134", "#ED553B", "#EA8859", "#F0EBDF",
];

/// Stable class → colour mapping shared by the training and test charts.
///
/// Colours are fixed the first time a class is assigned. Assign the training
/// composition first; classes that only appear later continue the palette
/// cycle where training left off.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorAssignment {
    labels: LabelSet,
}

impl ColorAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, label: &str) -> &'static str {
        palette_entry(self.labels.insert(label))
    }

    /// Assigns every class of `composition` in rank order.
    pub fn assign_all(&mut self, composition: &Composition) {
        for class in &composition.classes {
            self.assign(&class.label);
        }
    }

    pub fn color_of(&self, label: &str) -> Option<&'static str> {
        self.labels.index_of(label).map(palette_entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label, palette_entry(i)))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[inline]
fn palette_entry(i: usize) -> &'static str {
    PALETTE[i % PALETTE.len()]
}

impl Serialize for ColorAssignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (label, color) in self.iter() {
            map.serialize_entry(label, color)?;
        }
        map.end()
    }
}
