use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::i18n::I18n;
use crate::state::contact_modal::WaitlistForm;
use crate::state::page::{PageAction, PageContext};

/// The one waitlist dialog. Rendered once by `App`; every call-to-action
/// opens it through [`PageContext`].
#[function_component(WaitlistModal)]
pub fn waitlist_modal() -> Html {
    let page = use_context::<PageContext>().expect("PageContext is provided by App");
    let i18n = use_context::<I18n>().expect("I18n is provided by App");
    let form = use_state(WaitlistForm::default);

    {
        let page = page.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && page.contact.is_visible() {
                page.dispatch(PageAction::CloseContact);
            }
        });
    }

    if !page.contact.is_visible() {
        return html! {};
    }

    let close = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.dispatch(PageAction::CloseContact))
    };

    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let onsubmit = {
        let page = page.clone();
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            page.dispatch(PageAction::SubmitContact((*form).clone()));
            form.set(WaitlistForm::default());
        })
    };

    let bind = |apply: fn(&mut WaitlistForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_project = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.project = input.value();
            form.set(next);
        })
    };

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div
                class="modal-content"
                role="dialog"
                aria-modal="true"
                aria-labelledby="waitlist-title"
                onclick={keep_open}
            >
                <button class="modal-close" aria-label={i18n.t("modal.close")} onclick={close}>
                    {"×"}
                </button>
                <h2 id="waitlist-title">{i18n.t("modal.title")}</h2>
                <p class="modal-description">{i18n.t("modal.description")}</p>

                <form class="waitlist-form" {onsubmit}>
                    <div class="form-row">
                        <label>
                            <span>{i18n.t("modal.first_name")}</span>
                            <input
                                required=true
                                value={form.first_name.clone()}
                                placeholder={i18n.t("modal.first_name_placeholder")}
                                oninput={bind(|f, v| f.first_name = v)}
                            />
                        </label>
                        <label>
                            <span>{i18n.t("modal.last_name")}</span>
                            <input
                                required=true
                                value={form.last_name.clone()}
                                placeholder={i18n.t("modal.last_name_placeholder")}
                                oninput={bind(|f, v| f.last_name = v)}
                            />
                        </label>
                    </div>
                    <label>
                        <span>{i18n.t("modal.email")}</span>
                        <input
                            type="email"
                            required=true
                            value={form.email.clone()}
                            placeholder={i18n.t("modal.email_placeholder")}
                            oninput={bind(|f, v| f.email = v)}
                        />
                    </label>
                    <label>
                        <span>{i18n.t("modal.institution")}</span>
                        <input
                            value={form.institution.clone()}
                            placeholder={i18n.t("modal.institution_placeholder")}
                            oninput={bind(|f, v| f.institution = v)}
                        />
                    </label>
                    <label>
                        <span>{i18n.t("modal.research_field")}</span>
                        <input
                            value={form.research_field.clone()}
                            placeholder={i18n.t("modal.research_field_placeholder")}
                            oninput={bind(|f, v| f.research_field = v)}
                        />
                    </label>
                    <label>
                        <span>{i18n.t("modal.project")}</span>
                        <textarea
                            value={form.project.clone()}
                            placeholder={i18n.t("modal.project_placeholder")}
                            oninput={on_project}
                        />
                    </label>
                    <button type="submit" class="modal-submit">{i18n.t("modal.submit")}</button>
                    <p class="modal-note">{i18n.t("modal.note")}</p>
                </form>
            </div>
            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.5);
                }
                .modal-content {
                    position: relative;
                    width: 100%;
                    max-width: 560px;
                    max-height: 90vh;
                    overflow-y: auto;
                    background: white;
                    border-radius: 12px;
                    padding: 2rem;
                }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    cursor: pointer;
                    color: #6b7280;
                }
                .modal-description {
                    color: #4b5563;
                }
                .waitlist-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-top: 1rem;
                }
                .waitlist-form label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                }
                .waitlist-form input, .waitlist-form textarea {
                    border: 1px solid #d1d5db;
                    border-radius: 6px;
                    padding: 0.5rem 0.75rem;
                    font: inherit;
                }
                .waitlist-form textarea {
                    min-height: 120px;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .modal-submit {
                    background: #1d4ed8;
                    color: white;
                    border: none;
                    border-radius: 6px;
                    padding: 0.75rem;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .modal-note {
                    text-align: center;
                    font-size: 0.8rem;
                    color: #6b7280;
                }
                @media (max-width: 640px) {
                    .form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
