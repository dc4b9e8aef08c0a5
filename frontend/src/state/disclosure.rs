use log::debug;

/// Single-open accordion over a fixed, ordered list of entries.
///
/// Opening one entry closes whichever entry was open before it; clicking the
/// open entry again collapses everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisclosurePanel {
    open: Option<usize>,
}

impl DisclosurePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        debug!("faq accordion open entry: {:?}", self.open);
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_with_nothing_open() {
        let panel = DisclosurePanel::new();
        assert_eq!(panel.open_index(), None);
        assert!((0..6).all(|i| !panel.is_open(i)));
    }

    #[test]
    fn test_opening_another_entry_closes_the_previous_one() {
        let mut panel = DisclosurePanel::new();
        panel.toggle(2);
        panel.toggle(4);
        assert!(!panel.is_open(2));
        assert!(panel.is_open(4));

        panel.toggle(4);
        assert!(!panel.is_open(4));
        assert_eq!(panel.open_index(), None);
    }

    #[test]
    fn test_out_of_range_index_is_just_another_selection() {
        let mut panel = DisclosurePanel::new();
        panel.toggle(1);
        panel.toggle(99);
        assert!(!panel.is_open(1));
        assert!(panel.is_open(99));
    }

    proptest! {
        #[test]
        fn test_at_most_one_entry_open(clicks in prop::collection::vec(0usize..6, 0..40)) {
            let mut panel = DisclosurePanel::new();
            for index in clicks {
                panel.toggle(index);
                let open = (0..6).filter(|i| panel.is_open(*i)).count();
                prop_assert!(open <= 1);
            }
        }

        #[test]
        fn test_double_toggle_collapses(
            clicks in prop::collection::vec(0usize..6, 0..20),
            index in 0usize..6,
        ) {
            let mut panel = DisclosurePanel::new();
            for click in clicks {
                panel.toggle(click);
            }
            prop_assume!(!panel.is_open(index));
            panel.toggle(index);
            prop_assert!(panel.is_open(index));
            panel.toggle(index);
            prop_assert_eq!(panel.open_index(), None);
        }
    }
}
