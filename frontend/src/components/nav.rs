use yew::prelude::*;

use crate::components::language_toggle::LanguageToggle;
use crate::i18n::I18n;
use crate::state::page::{PageAction, PageContext};
use crate::state::scroller::SectionId;

const NAV_LINKS: [(&str, &str); 4] = [
    (SectionId::FEATURES, "nav.features"),
    (SectionId::HOW_IT_WORKS, "nav.how_it_works"),
    (SectionId::BENEFITS, "nav.benefits"),
    (SectionId::FAQ, "nav.faq"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let page = use_context::<PageContext>().expect("PageContext is provided by App");
    let i18n = use_context::<I18n>().expect("I18n is provided by App");
    let drawer_open = page.drawer.is_open();

    let toggle_menu = {
        let page = page.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            page.dispatch(PageAction::ToggleDrawer);
        })
    };

    let open_contact = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.dispatch(PageAction::OpenContact))
    };

    let links = |class: &'static str| -> Html {
        NAV_LINKS
            .iter()
            .map(|&(section, key)| {
                let page = page.clone();
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    page.dispatch(PageAction::Navigate(SectionId::from(section)));
                });
                html! {
                    <button class={class} {onclick}>{i18n.t(key)}</button>
                }
            })
            .collect()
    };

    let menu_label = if drawer_open { "nav.close_menu" } else { "nav.open_menu" };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <span class="nav-logo">{i18n.t("brand")}</span>

                <div class="nav-right">
                    {links("nav-link")}
                    <LanguageToggle />
                    <button class="nav-cta" onclick={open_contact.clone()}>
                        {i18n.t("nav.join_waitlist")}
                    </button>
                </div>

                <button
                    class={classes!("burger-menu", drawer_open.then(|| "open"))}
                    aria-label={i18n.t(menu_label)}
                    aria-expanded={drawer_open.to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            {
                if drawer_open {
                    html! {
                        <div class="mobile-drawer">
                            {links("drawer-link")}
                            <LanguageToggle />
                            <button class="nav-cta drawer-cta" onclick={open_contact}>
                                {i18n.t("nav.join_waitlist")}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(4px);
                    border-bottom: 1px solid #e5e7eb;
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    height: 64px;
                    padding: 0 1rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #1d4ed8;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link, .drawer-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: #4b5563;
                    font-weight: 500;
                }
                .nav-link:hover, .drawer-link:hover {
                    color: #1d4ed8;
                }
                .nav-cta {
                    background: #1d4ed8;
                    color: white;
                    border: none;
                    border-radius: 6px;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #111827;
                }
                .mobile-drawer {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    padding: 1rem;
                    border-top: 1px solid #e5e7eb;
                    background: white;
                }
                .drawer-link {
                    text-align: left;
                    padding: 0.5rem 0.75rem;
                }
                .drawer-cta {
                    width: 100%;
                }
                @media (max-width: 768px) {
                    .nav-right {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                }
                @media (min-width: 769px) {
                    .mobile-drawer {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
