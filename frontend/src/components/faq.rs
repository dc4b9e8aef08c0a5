use yew::prelude::*;

use crate::i18n::I18n;
use crate::state::page::{PageAction, PageContext};
use crate::state::scroller::SectionId;

/// Question ids in display order; position in this list is the entry index.
pub const FAQ_ENTRIES: [&str; 6] = ["q1", "q2", "q3", "q4", "q5", "q6"];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    answer: String,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button
                class="faq-question"
                aria-expanded={props.is_open.to_string()}
                onclick={toggle}
            >
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            {
                if props.is_open {
                    html! { <div class="faq-answer">{&props.answer}</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let page = use_context::<PageContext>().expect("PageContext is provided by App");
    let i18n = use_context::<I18n>().expect("I18n is provided by App");

    html! {
        <section id={SectionId::FAQ} class="faq-section">
            <div class="section-heading">
                <h2>{i18n.t("faq.title")}</h2>
                <p>{i18n.t("faq.subtitle")}</p>
            </div>
            <div class="faq-list">
                {
                    FAQ_ENTRIES.iter().enumerate().map(|(index, id)| {
                        let on_toggle = {
                            let page = page.clone();
                            Callback::from(move |_: ()| page.dispatch(PageAction::ToggleFaq(index)))
                        };
                        html! {
                            <FaqItem
                                key={*id}
                                question={i18n.t(&format!("faq.questions.{}.question", id))}
                                answer={i18n.t(&format!("faq.questions.{}.answer", id))}
                                is_open={page.faq.is_open(index)}
                                {on_toggle}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .faq-section {
                    padding: 5rem 1rem;
                    background: #f9fafb;
                }
                .faq-list {
                    max-width: 768px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .faq-item {
                    background: white;
                    border-radius: 8px;
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem 1.5rem;
                    background: none;
                    border: none;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-question:hover {
                    background: #f9fafb;
                }
                .toggle-icon {
                    font-size: 1.25rem;
                    color: #1d4ed8;
                }
                .faq-answer {
                    padding: 0 1.5rem 1rem;
                    color: #4b5563;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}
