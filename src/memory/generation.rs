/// Occupancy counter of a node slot; advanced every time a closed slot is reopened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub(crate) struct Generation {
    id: usize,
}

impl Generation {
    pub(crate) const fn successor(&self) -> Self {
        Self {
            id: self.id.wrapping_add(1),
        }
    }
}
