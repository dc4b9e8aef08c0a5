use std::fmt;
use std::rc::Rc;

use yew::prelude::*;

use super::contact_modal::{ContactModalState, WaitlistForm};
use super::disclosure::DisclosurePanel;
use super::drawer::NavigationDrawerState;
use super::scroller::{DomSurface, ScrollSurface, SectionId, SectionScroller};

/// Interaction state owned by `App` and handed to components through
/// [`PageContext`]. The three parts never touch each other, except that
/// navigating closes the drawer. Scrolling goes through the injected
/// surface, the live document in the app.
#[derive(Clone)]
pub struct PageState<S = DomSurface> {
    pub faq: DisclosurePanel,
    pub contact: ContactModalState,
    pub drawer: NavigationDrawerState,
    scroller: SectionScroller<S>,
}

impl<S: ScrollSurface> PageState<S> {
    pub fn with_surface(surface: S) -> Self {
        Self {
            faq: DisclosurePanel::default(),
            contact: ContactModalState::default(),
            drawer: NavigationDrawerState::default(),
            scroller: SectionScroller::new(surface),
        }
    }
}

impl<S: ScrollSurface + Default> Default for PageState<S> {
    fn default() -> Self {
        Self::with_surface(S::default())
    }
}

// The surface is plumbing, not state; re-renders only care about the rest.
impl<S> PartialEq for PageState<S> {
    fn eq(&self, other: &Self) -> bool {
        self.faq == other.faq && self.contact == other.contact && self.drawer == other.drawer
    }
}

impl<S> fmt::Debug for PageState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageState")
            .field("faq", &self.faq)
            .field("contact", &self.contact)
            .field("drawer", &self.drawer)
            .finish()
    }
}

pub enum PageAction {
    ToggleFaq(usize),
    OpenContact,
    CloseContact,
    SubmitContact(WaitlistForm),
    ToggleDrawer,
    Navigate(SectionId),
}

impl<S: ScrollSurface + Clone> Reducible for PageState<S> {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PageAction::ToggleFaq(index) => next.faq.toggle(index),
            PageAction::OpenContact => next.contact.open(),
            PageAction::CloseContact => next.contact.close(),
            PageAction::SubmitContact(form) => next.contact.submit(&form),
            PageAction::ToggleDrawer => next.drawer.toggle(),
            PageAction::Navigate(section) => {
                next.drawer.navigate_to(&section, &next.scroller);
            }
        }
        Rc::new(next)
    }
}

pub type PageContext = UseReducerHandle<PageState<DomSurface>>;
