use yew::prelude::*;

use crate::content::STEPS;
use crate::hooks::reveal::{use_reveal, RevealGroup};
use crate::motion::easing::Easing;
use crate::motion::reveal::{Policy, RevealSpec};
use crate::motion::trigger::TriggerPoint;

pub(crate) const HEADING: RevealGroup = RevealGroup::children("steps.heading", RevealSpec::rise_in_view(30.0));

// Cards replay every time the section comes back into view
pub(crate) const CARDS: RevealGroup = RevealGroup::matching(
    "steps.cards",
    ".step-card",
    RevealSpec::rise_in_view(50.0)
        .duration(0.8)
        .stagger(0.2, 0.0)
        .easing(Easing::Power2Out)
        .trigger(TriggerPoint::ViewportLine(0.8), Policy::Reversible),
);

pub(crate) const PREVIEWS: RevealGroup = RevealGroup::children("steps.previews", RevealSpec::rise_in_view(30.0));

#[function_component(Steps)]
pub fn steps() -> Html {
    let section_ref = use_node_ref();
    let heading_ref = use_node_ref();
    let previews_ref = use_node_ref();

    use_reveal(&heading_ref, HEADING);
    use_reveal(&section_ref, CARDS);
    use_reveal(&previews_ref, PREVIEWS);

    html! {
        <section ref={section_ref} class="steps">
            <style>
                {r#"
                    .steps {
                        padding: 5rem 0;
                        background: #fff;
                    }
                    .step-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .step-card {
                        position: relative;
                        transition: transform 0.3s ease;
                    }
                    .step-card:hover {
                        transform: translateY(-10px) scale(1.02);
                    }
                    .step-body {
                        position: relative;
                        overflow: hidden;
                        background: #fff;
                        border-radius: 1rem;
                        border: 1px solid #f3f4f6;
                        padding: 2rem;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    }
                    .step-stripe {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 0.5rem;
                    }
                    .step-number {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1.5rem;
                        color: #fff;
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .step-body h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 1rem;
                    }
                    .step-body p {
                        color: #4b5563;
                        line-height: 1.625;
                    }
                    .step-preview {
                        margin-top: 1.5rem;
                        padding: 1rem;
                        background: #f9fafb;
                        border-radius: 0.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .step-connector {
                        display: none;
                        position: absolute;
                        right: -1rem;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 10;
                        width: 2rem;
                        height: 2rem;
                        background: #fff;
                        border: 4px solid #e5e7eb;
                        border-radius: 50%;
                    }
                    .preview-grid {
                        margin-top: 4rem;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }
                    .preview {
                        position: relative;
                        cursor: pointer;
                        transition: transform 0.3s ease;
                    }
                    .preview:hover {
                        transform: scale(1.05);
                    }
                    .preview-frame {
                        background: linear-gradient(135deg, #eff6ff, #faf5ff);
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    }
                    .preview-shade {
                        position: absolute;
                        inset: 0;
                        border-radius: 0.75rem;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.2), transparent);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .preview:hover .preview-shade {
                        opacity: 1;
                    }
                    @media (min-width: 768px) {
                        .step-grid, .preview-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                        .step-connector {
                            display: block;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <div ref={heading_ref} class="section-heading">
                    <h2>{"Build Your Perfect Portfolio in 3 Steps"}</h2>
                    <p>{"Simple, fast, and professional. Get your portfolio online in minutes."}</p>
                </div>

                <div class="step-grid">
                    { for STEPS.iter().enumerate().map(|(index, step)| html! {
                        <div key={step.title} class="step-card">
                            <div class="step-body">
                                <div class="step-stripe" style={format!("background: {};", step.gradient)}></div>
                                <div class="step-number" style={format!("background: {};", step.gradient)}>
                                    {step.number.to_string()}
                                </div>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                                <div class="step-preview">
                                    <div class="line" style={format!("background: {}; opacity: 0.6;", step.gradient)}></div>
                                    <div class="line" style="width: 75%;"></div>
                                    <div class="line" style="width: 50%;"></div>
                                </div>
                                {
                                    if index < STEPS.len() - 1 {
                                        html! { <div class="step-connector"></div> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        </div>
                    }) }
                </div>

                <div ref={previews_ref} class="preview-grid">
                    { for (0..3).map(|i| html! {
                        <div key={i} class="preview">
                            <div class="preview-frame">
                                <div class="card-line">
                                    <div class="browser-dots small">
                                        <span style="background: #f87171;"></span>
                                        <span style="background: #facc15;"></span>
                                        <span style="background: #4ade80;"></span>
                                    </div>
                                    <div class="tile tall"></div>
                                    <div class="line"></div>
                                    <div class="line" style="width: 66%;"></div>
                                </div>
                            </div>
                            <div class="preview-shade"></div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
