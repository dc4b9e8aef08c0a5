use yew::prelude::*;

use crate::components::faq::FaqSection;
use crate::i18n::I18n;
use crate::state::page::{PageAction, PageContext};
use crate::state::scroller::SectionId;

const PROBLEMS: [(&str, &str); 6] = [
    ("search", "🕐"),
    ("copy_paste", "📄"),
    ("reading", "🧠"),
    ("analysis", "📊"),
    ("citation", "🔍"),
    ("consistency", "🔄"),
];

const STEPS: [(&str, &str); 4] = [("s1", "🔍"), ("s2", "🧠"), ("s3", "💬"), ("s4", "📈")];

const BENEFITS: [(&str, &str); 6] = [
    ("time", "🚀"),
    ("coverage", "🎯"),
    ("consistency", "📊"),
    ("insights", "🔍"),
    ("transparency", "✅"),
    ("cost", "💲"),
];

const COMPARISON_ROWS: [&str; 4] = ["search", "reading", "review", "analysis"];

const FOOTER_LINKS: [&str; 5] = ["about", "docs", "support", "privacy", "terms"];

#[function_component(Landing)]
pub fn landing() -> Html {
    let page = use_context::<PageContext>().expect("PageContext is provided by App");
    let i18n = use_context::<I18n>().expect("I18n is provided by App");

    let open_contact = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.dispatch(PageAction::OpenContact))
    };

    // The search box is not a search box; any interaction leads to the waitlist.
    // Click covers the case where the box kept focus after the dialog closed.
    let decoy_search_focus = {
        let page = page.clone();
        Callback::from(move |_: FocusEvent| page.dispatch(PageAction::OpenContact))
    };
    let decoy_search_click = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.dispatch(PageAction::OpenContact))
    };

    let see_how_it_works = {
        let page = page.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            page.dispatch(PageAction::Navigate(SectionId::from(SectionId::HOW_IT_WORKS)));
        })
    };

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-content">
                    <h1>{i18n.t("hero.title")}</h1>
                    <p class="hero-subtitle">{i18n.t("hero.subtitle")}</p>
                    <input
                        class="hero-search"
                        type="text"
                        readonly=true
                        placeholder={i18n.t("hero.search_placeholder")}
                        onfocus={decoy_search_focus}
                        onclick={decoy_search_click}
                    />
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={open_contact.clone()}>
                            {i18n.t("hero.cta_primary")}
                        </button>
                        <button class="hero-secondary" onclick={see_how_it_works}>
                            {i18n.t("hero.cta_secondary")}
                        </button>
                    </div>
                    <div class="hero-stats">
                        {
                            ["time_saved", "papers", "speed"].iter().map(|stat| html! {
                                <div class="hero-stat">
                                    <div class="stat-value">{i18n.t(&format!("hero.stats.{}_value", stat))}</div>
                                    <div class="stat-label">{i18n.t(&format!("hero.stats.{}_label", stat))}</div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </header>

            <section id={SectionId::FEATURES} class="problems">
                <div class="section-heading">
                    <h2>{i18n.t("problems.title")}</h2>
                    <p>{i18n.t("problems.subtitle")}</p>
                </div>
                <div class="card-grid">
                    {
                        PROBLEMS.iter().map(|(id, icon)| html! {
                            <div class="card problem-card">
                                <div class="card-icon">{*icon}</div>
                                <h3>{i18n.t(&format!("problems.items.{}.title", id))}</h3>
                                <p>{i18n.t(&format!("problems.items.{}.body", id))}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id={SectionId::HOW_IT_WORKS} class="how-it-works">
                <div class="section-heading">
                    <h2>{i18n.t("steps.title")}</h2>
                    <p>{i18n.t("steps.subtitle")}</p>
                </div>
                <div class="steps">
                    {
                        STEPS.iter().enumerate().map(|(n, (id, icon))| html! {
                            <div class={classes!("step", (n % 2 == 1).then(|| "reversed"))}>
                                <div class="step-text">
                                    <div class="step-number">{n + 1}</div>
                                    <h3>{i18n.t(&format!("steps.items.{}.title", id))}</h3>
                                    <p>{i18n.t(&format!("steps.items.{}.body", id))}</p>
                                    <span class="badge">{i18n.t(&format!("steps.items.{}.badge", id))}</span>
                                </div>
                                <div class="step-visual">{*icon}</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id={SectionId::BENEFITS} class="benefits">
                <div class="section-heading">
                    <h2>{i18n.t("benefits.title")}</h2>
                    <p>{i18n.t("benefits.subtitle")}</p>
                </div>
                <div class="card-grid">
                    {
                        BENEFITS.iter().map(|(id, icon)| html! {
                            <div class="card">
                                <div class="benefit-icon">{*icon}</div>
                                <h3>{i18n.t(&format!("benefits.items.{}.title", id))}</h3>
                                <p>{i18n.t(&format!("benefits.items.{}.body", id))}</p>
                                <span class="badge">{i18n.t(&format!("benefits.items.{}.badge", id))}</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="comparison">
                <div class="section-heading">
                    <h2>{i18n.t("comparison.title")}</h2>
                    <p>{i18n.t("comparison.subtitle")}</p>
                </div>
                <div class="comparison-table-wrapper">
                    <table class="comparison-table">
                        <thead>
                            <tr>
                                <th>{i18n.t("comparison.headers.task")}</th>
                                <th>{i18n.t("comparison.headers.traditional")}</th>
                                <th>{i18n.t("comparison.headers.platform")}</th>
                                <th>{i18n.t("comparison.headers.saved")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                COMPARISON_ROWS.iter().map(|row| html! {
                                    <tr>
                                        <td class="task">{i18n.t(&format!("comparison.rows.{}.task", row))}</td>
                                        <td>{i18n.t(&format!("comparison.rows.{}.traditional", row))}</td>
                                        <td>{i18n.t(&format!("comparison.rows.{}.platform", row))}</td>
                                        <td class="saved">{i18n.t(&format!("comparison.rows.{}.saved", row))}</td>
                                    </tr>
                                }).collect::<Html>()
                            }
                        </tbody>
                    </table>
                </div>
            </section>

            <FaqSection />

            <section id={SectionId::CONTACT} class="waitlist-cta">
                <h2>{i18n.t("cta.title")}</h2>
                <p>{i18n.t("cta.subtitle")}</p>
                <button class="cta-button" onclick={open_contact}>{i18n.t("cta.button")}</button>
                <p class="cta-perks">{i18n.t("cta.perks")}</p>
            </section>

            <footer class="footer">
                <div class="footer-links">
                    {
                        FOOTER_LINKS.iter().map(|link| html! {
                            <a href="#">{i18n.t(&format!("footer.{}", link))}</a>
                        }).collect::<Html>()
                    }
                </div>
                <p class="footer-copyright">{i18n.t("footer.copyright")}</p>
            </footer>

            <style>
                {r#"
                .landing-page {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #111827;
                }
                .hero {
                    padding: 8rem 1rem 5rem;
                    background: linear-gradient(135deg, #eff6ff, #dbeafe);
                }
                .hero-content {
                    max-width: 760px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .hero h1 {
                    font-size: 3rem;
                    line-height: 1.1;
                    color: #1e40af;
                    margin: 0;
                }
                .hero-subtitle {
                    font-size: 1.2rem;
                    color: #4b5563;
                    line-height: 1.6;
                }
                .hero-search {
                    padding: 0.9rem 1rem;
                    border: 1px solid #bfdbfe;
                    border-radius: 10px;
                    font-size: 1rem;
                    cursor: pointer;
                    background: white;
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .hero-cta, .cta-button {
                    background: #1d4ed8;
                    color: white;
                    border: none;
                    border-radius: 8px;
                    padding: 0.9rem 1.6rem;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .hero-secondary {
                    background: white;
                    color: #1d4ed8;
                    border: 1px solid #1d4ed8;
                    border-radius: 8px;
                    padding: 0.9rem 1.6rem;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                    padding-top: 1.5rem;
                }
                .stat-value {
                    font-size: 1.8rem;
                    font-weight: 700;
                    color: #1d4ed8;
                }
                .stat-label {
                    font-size: 0.85rem;
                    color: #4b5563;
                }
                .problems, .how-it-works, .benefits, .comparison {
                    padding: 5rem 1rem;
                }
                .problems {
                    background: #f9fafb;
                }
                .benefits {
                    background: linear-gradient(135deg, #eff6ff, #dbeafe);
                }
                .section-heading {
                    text-align: center;
                    max-width: 680px;
                    margin: 0 auto 3rem;
                }
                .section-heading h2 {
                    font-size: 2.25rem;
                }
                .section-heading p {
                    font-size: 1.2rem;
                    color: #4b5563;
                }
                .card-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 1.5rem;
                }
                .card {
                    background: white;
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
                    transition: box-shadow 0.2s;
                }
                .card:hover {
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1);
                }
                .card p {
                    color: #4b5563;
                }
                .card-icon {
                    width: 48px;
                    height: 48px;
                    border-radius: 8px;
                    background: #fee2e2;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.4rem;
                }
                .benefit-icon {
                    font-size: 2rem;
                }
                .badge {
                    display: inline-block;
                    background: #dbeafe;
                    color: #1d4ed8;
                    padding: 0.25rem 0.75rem;
                    border-radius: 6px;
                    font-size: 0.85rem;
                    font-weight: 600;
                }
                .steps {
                    max-width: 1000px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }
                .step {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    align-items: center;
                }
                .step.reversed .step-visual {
                    order: -1;
                }
                .step-text {
                    background: #f9fafb;
                    border-radius: 16px;
                    padding: 2rem;
                }
                .step-number {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    background: #1d4ed8;
                    color: white;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .step-visual {
                    height: 16rem;
                    border-radius: 16px;
                    background: linear-gradient(135deg, #dbeafe, #bfdbfe);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 5rem;
                }
                .comparison-table-wrapper {
                    max-width: 1000px;
                    margin: 0 auto;
                    overflow-x: auto;
                    border-radius: 12px;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .comparison-table {
                    width: 100%;
                    min-width: 600px;
                    border-collapse: collapse;
                }
                .comparison-table th {
                    background: #111827;
                    color: white;
                    padding: 1rem;
                    text-align: center;
                }
                .comparison-table td {
                    padding: 1rem;
                    text-align: center;
                    border-top: 1px solid #e5e7eb;
                }
                .comparison-table th:first-child, .comparison-table td.task {
                    text-align: left;
                    font-weight: 500;
                }
                .comparison-table td.saved {
                    color: #15803d;
                    font-weight: 700;
                }
                .waitlist-cta {
                    padding: 5rem 1rem;
                    text-align: center;
                    color: white;
                    background: linear-gradient(135deg, #2563eb, #1e40af);
                }
                .waitlist-cta h2 {
                    font-size: 2.5rem;
                }
                .waitlist-cta p {
                    max-width: 640px;
                    margin: 0 auto 2rem;
                    opacity: 0.9;
                }
                .cta-button {
                    background: white;
                    color: #1d4ed8;
                }
                .cta-perks {
                    margin-top: 2rem;
                }
                .footer {
                    background: #111827;
                    color: white;
                    padding: 3rem 1rem;
                    text-align: center;
                }
                .footer-links {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2rem;
                    margin-bottom: 2rem;
                }
                .footer-links a {
                    color: white;
                    text-decoration: none;
                }
                .footer-links a:hover {
                    color: #60a5fa;
                }
                .footer-copyright {
                    opacity: 0.7;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2rem;
                    }
                    .step {
                        grid-template-columns: 1fr;
                    }
                    .step.reversed .step-visual {
                        order: 0;
                    }
                }
                "#}
            </style>
        </div>
    }
}
