use yew::prelude::*;

use crate::i18n::I18n;
use crate::state::locale::{BrowserLocaleStore, LocaleAction, LocalePreference};

pub type LocaleContext = UseReducerHandle<LocalePreference<BrowserLocaleStore>>;

/// Shows the language you would switch to.
#[function_component(LanguageToggle)]
pub fn language_toggle() -> Html {
    let locale = use_context::<LocaleContext>().expect("LocaleContext is provided by App");
    let i18n = use_context::<I18n>().expect("I18n is provided by App");

    let onclick = Callback::from(move |_: MouseEvent| locale.dispatch(LocaleAction::Toggle));

    html! {
        <>
            <button
                class="language-toggle"
                aria-label={i18n.t("language.switch_label")}
                {onclick}
            >
                {i18n.t("language.switch_to")}
            </button>
            <style>
                {r#"
                .language-toggle {
                    background: none;
                    border: 1px solid #d1d5db;
                    border-radius: 6px;
                    padding: 0.4rem 0.75rem;
                    cursor: pointer;
                    color: #374151;
                }
                "#}
            </style>
        </>
    }
}
