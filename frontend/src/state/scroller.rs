use std::fmt;

use log::debug;
use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions};

/// Anchor id of a page section. Not checked against the rendered page.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
    pub const FEATURES: &'static str = "features";
    pub const HOW_IT_WORKS: &'static str = "how-it-works";
    pub const BENEFITS: &'static str = "benefits";
    pub const FAQ: &'static str = "faq";
    pub const CONTACT: &'static str = "contact";

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where sections live and how to bring one into view.
pub trait ScrollSurface {
    type Target;

    fn find(&self, id: &str) -> Option<Self::Target>;

    /// Starts a smooth scroll and returns without waiting for it.
    fn smooth_scroll(&self, target: &Self::Target);
}

/// The live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomSurface;

impl ScrollSurface for DomSurface {
    type Target = Element;

    fn find(&self, id: &str) -> Option<Element> {
        window()?.document()?.get_element_by_id(id)
    }

    fn smooth_scroll(&self, target: &Element) {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[derive(Clone)]
pub struct SectionScroller<S> {
    surface: S,
}

impl<S: ScrollSurface> SectionScroller<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Returns whether a section was found. A miss does nothing.
    pub fn navigate_to(&self, section: &SectionId) -> bool {
        match self.surface.find(section.as_str()) {
            Some(target) => {
                self.surface.smooth_scroll(&target);
                true
            }
            None => {
                debug!("no section with id {section}, not scrolling");
                false
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::ScrollSurface;

    /// In-memory page with a fixed set of section ids. Every scroll is
    /// appended to a shared log so callers can inspect ordering.
    #[derive(Clone, Debug, Default)]
    pub struct FakeSurface {
        pub sections: Vec<&'static str>,
        pub log: Rc<RefCell<Vec<String>>>,
    }

    impl FakeSurface {
        pub fn with_sections(sections: &[&'static str]) -> Self {
            Self {
                sections: sections.to_vec(),
                ..Default::default()
            }
        }

        pub fn scrolled(&self) -> Vec<String> {
            self.log.borrow().clone()
        }
    }

    impl ScrollSurface for FakeSurface {
        type Target = String;

        fn find(&self, id: &str) -> Option<String> {
            self.sections
                .iter()
                .find(|s| **s == id)
                .map(|s| s.to_string())
        }

        fn smooth_scroll(&self, target: &String) {
            self.log.borrow_mut().push(format!("scroll:{target}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeSurface;
    use super::*;

    #[test]
    fn test_scrolls_to_existing_section() {
        let surface = FakeSurface::with_sections(&["features", "faq"]);
        let scroller = SectionScroller::new(surface.clone());

        assert!(scroller.navigate_to(&SectionId::from(SectionId::FAQ)));
        assert_eq!(surface.scrolled(), vec!["scroll:faq"]);
    }

    #[test]
    fn test_missing_section_is_silent_noop() {
        let surface = FakeSurface::with_sections(&["features"]);
        let scroller = SectionScroller::new(surface.clone());

        for _ in 0..3 {
            assert!(!scroller.navigate_to(&SectionId::from("nonexistent-id")));
        }
        assert!(surface.scrolled().is_empty());
    }

    #[test]
    fn test_repeated_navigation_scrolls_each_time() {
        let surface = FakeSurface::with_sections(&["benefits"]);
        let scroller = SectionScroller::new(surface.clone());

        scroller.navigate_to(&"benefits".into());
        scroller.navigate_to(&"benefits".into());
        assert_eq!(surface.scrolled(), vec!["scroll:benefits", "scroll:benefits"]);
    }
}
