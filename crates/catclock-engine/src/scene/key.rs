use super::ZIndex;

/// Paint-order position of a draw item.
///
/// Compares by layer first, then by the order items were pushed, so shapes on
/// the same layer keep their recording order. The derived ordering relies on
/// the field order below.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_wins_over_recording_order() {
        assert!(SortKey::new(ZIndex(0), 9) < SortKey::new(ZIndex(1), 0));
        assert!(SortKey::new(ZIndex(-3), 5) < SortKey::new(ZIndex(0), 1));
    }

    #[test]
    fn same_layer_follows_recording_order() {
        assert!(SortKey::new(ZIndex(2), 0) < SortKey::new(ZIndex(2), 1));
        assert_eq!(SortKey::new(ZIndex(2), 4), SortKey::new(ZIndex(2), 4));
    }
}
