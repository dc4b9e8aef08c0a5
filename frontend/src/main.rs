use std::rc::Rc;

use log::{info, warn};
use web_sys::window;
use yew::prelude::*;

mod config;
mod i18n;
mod state {
    pub mod contact_modal;
    pub mod disclosure;
    pub mod drawer;
    pub mod locale;
    pub mod page;
    pub mod scroller;
}
mod components {
    pub mod faq;
    pub mod language_toggle;
    pub mod nav;
    pub mod waitlist_modal;
}
mod pages {
    pub mod landing;
}

use components::{
    language_toggle::LocaleContext,
    nav::Nav,
    waitlist_modal::WaitlistModal,
};
use i18n::{I18n, Translations};
use pages::landing::Landing;
use state::{
    locale::{BrowserLocaleStore, Locale, LocalePreference},
    page::{PageContext, PageState},
    scroller::DomSurface,
};

fn sync_document_lang(locale: Locale) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if let Err(e) = root.set_attribute("lang", locale.code()) {
            warn!("could not set document lang: {:?}", e);
        }
    }
}

#[function_component]
fn App() -> Html {
    let page = use_reducer(PageState::<DomSurface>::default);
    let locale = use_reducer(|| LocalePreference::load(BrowserLocaleStore));
    let translations = use_state(|| Rc::new(Translations::bundled()));

    let current = locale.current_locale();
    let i18n = I18n {
        locale: current,
        translations: (*translations).clone(),
    };

    use_effect_with_deps(
        move |locale: &Locale| {
            sync_document_lang(*locale);
            || ()
        },
        current,
    );

    html! {
        <ContextProvider<LocaleContext> context={locale}>
            <ContextProvider<I18n> context={i18n}>
                <ContextProvider<PageContext> context={page}>
                    <Nav />
                    <Landing />
                    <WaitlistModal />
                </ContextProvider<PageContext>>
            </ContextProvider<I18n>>
        </ContextProvider<LocaleContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
