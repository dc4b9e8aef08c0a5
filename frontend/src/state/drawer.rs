use log::debug;

use super::scroller::{ScrollSurface, SectionId, SectionScroller};

/// Open/closed state of the mobile navigation drawer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationDrawerState {
    open: bool,
}

impl NavigationDrawerState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
        debug!("navigation drawer open: {}", self.open);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Closes the drawer, then scrolls. The drawer is closed even when the
    /// section does not exist.
    pub fn navigate_to<S: ScrollSurface>(
        &mut self,
        section: &SectionId,
        scroller: &SectionScroller<S>,
    ) -> bool {
        self.close();
        scroller.navigate_to(section)
    }
}

#[cfg(test)]
mod tests {
    use super::super::scroller::testing::FakeSurface;
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_toggle_flips() {
        let mut drawer = NavigationDrawerState::default();
        drawer.toggle();
        assert!(drawer.is_open());
        drawer.toggle();
        assert!(!drawer.is_open());
    }

    #[test]
    fn test_navigate_closes_open_drawer_and_scrolls() {
        let surface = FakeSurface::with_sections(&["how-it-works"]);
        let scroller = SectionScroller::new(surface.clone());
        let mut drawer = NavigationDrawerState::default();
        drawer.toggle();

        assert!(drawer.navigate_to(&SectionId::from(SectionId::HOW_IT_WORKS), &scroller));
        assert!(!drawer.is_open());
        assert_eq!(surface.scrolled(), vec!["scroll:how-it-works"]);
    }

    #[test]
    fn test_navigate_to_missing_section_still_closes() {
        let scroller = SectionScroller::new(FakeSurface::default());
        let mut drawer = NavigationDrawerState::default();
        drawer.toggle();

        assert!(!drawer.navigate_to(&"nonexistent-id".into(), &scroller));
        assert!(!drawer.is_open());
    }

    proptest! {
        #[test]
        fn test_navigate_always_leaves_drawer_closed(toggles in 0usize..10) {
            let scroller = SectionScroller::new(FakeSurface::with_sections(&["faq"]));
            let mut drawer = NavigationDrawerState::default();
            for _ in 0..toggles {
                drawer.toggle();
            }
            drawer.navigate_to(&"faq".into(), &scroller);
            prop_assert!(!drawer.is_open());
        }
    }
}
