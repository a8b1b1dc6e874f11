use yew::prelude::*;

use crate::content::{IntegrationKind, INTEGRATIONS, TOOLS};
use crate::hooks::reveal::{use_reveal, RevealGroup};
use crate::motion::easing::Easing;
use crate::motion::reveal::{Policy, RevealSpec};
use crate::motion::trigger::TriggerPoint;
use crate::motion::visual::VisualState;

pub(crate) const HEADING: RevealGroup = RevealGroup::children("tools.heading", RevealSpec::rise_small());

pub(crate) const ICONS: RevealGroup = RevealGroup::matching(
    "tools.icons",
    ".tool-icon",
    RevealSpec::rise_in_view(0.0)
        .from_state(VisualState::IDENTITY.with_scale(0.0).with_rotation(-180.0))
        .stagger(0.1, 0.0)
        .easing(Easing::BackOut(1.7))
        .trigger(TriggerPoint::ViewportLine(0.7), Policy::Reversible),
);

pub(crate) const INTEGRATION_CARDS: RevealGroup = RevealGroup::children("tools.integrations", RevealSpec::rise_small());

fn integration_body(kind: IntegrationKind) -> Html {
    match kind {
        IntegrationKind::Checklist(items) => html! {
            <ul class="checklist">
                { for items.iter().map(|item| html! {
                    <li key={*item}><span class="dot"></span>{*item}</li>
                }) }
            </ul>
        },
        IntegrationKind::Meter { label, value, percent } => html! {
            <div class="meter">
                <div class="meter-head">
                    <span>{label}</span>
                    <strong>{value}</strong>
                </div>
                <div class="meter-track">
                    <div class="meter-fill" style={format!("width: {}%;", percent)}></div>
                </div>
            </div>
        },
        // Decorative, like every button on the page
        IntegrationKind::Action(label) => html! {
            <button class="deploy-button">{label}</button>
        },
    }
}

#[function_component(Tools)]
pub fn tools() -> Html {
    let section_ref = use_node_ref();
    let heading_ref = use_node_ref();
    let integrations_ref = use_node_ref();

    use_reveal(&heading_ref, HEADING);
    use_reveal(&section_ref, ICONS);
    use_reveal(&integrations_ref, INTEGRATION_CARDS);

    html! {
        <section ref={section_ref} id="templates" class="tools">
            <style>
                {r#"
                    .tools {
                        padding: 5rem 0;
                        background: linear-gradient(135deg, #eff6ff, #faf5ff);
                    }
                    .tools .section-heading h2 {
                        color: #2563eb;
                    }
                    .tool-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                        max-width: 56rem;
                        margin: 0 auto 4rem;
                    }
                    .tool-icon {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        cursor: pointer;
                        transition: transform 0.3s ease;
                    }
                    .tool-icon:hover {
                        transform: translateY(-5px) scale(1.1);
                    }
                    .tool-badge {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        font-weight: 700;
                        font-size: 1.125rem;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                        transition: box-shadow 0.3s ease;
                    }
                    .tool-icon:hover .tool-badge {
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.15);
                    }
                    .tool-name {
                        font-size: 0.875rem;
                        color: #4b5563;
                        margin-top: 0.5rem;
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .tool-icon:hover .tool-name {
                        opacity: 1;
                    }
                    .integration-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .integration {
                        background: #fff;
                        border-radius: 1rem;
                        border: 1px solid #f3f4f6;
                        padding: 2rem;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                        transition: transform 0.3s ease;
                    }
                    .integration:hover {
                        transform: translateY(-5px);
                    }
                    .integration-badge {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        font-weight: 700;
                        font-size: 1.25rem;
                        margin-bottom: 1.5rem;
                    }
                    .integration h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 1rem;
                    }
                    .integration p {
                        color: #4b5563;
                        margin-bottom: 1.5rem;
                    }
                    .checklist {
                        list-style: none;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        color: #4b5563;
                    }
                    .checklist .dot {
                        display: inline-block;
                        width: 0.5rem;
                        height: 0.5rem;
                        margin-right: 0.5rem;
                        border-radius: 50%;
                        background: #4ade80;
                    }
                    .meter {
                        background: linear-gradient(90deg, #faf5ff, #fdf2f8);
                        border-radius: 0.5rem;
                        padding: 1rem;
                    }
                    .meter-head {
                        display: flex;
                        justify-content: space-between;
                        font-size: 0.875rem;
                        color: #4b5563;
                        margin-bottom: 0.5rem;
                    }
                    .meter-head strong {
                        color: #9333ea;
                    }
                    .meter-track {
                        width: 100%;
                        height: 0.5rem;
                        background: #e5e7eb;
                        border-radius: 9999px;
                    }
                    .meter-fill {
                        height: 100%;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #c084fc, #ec4899);
                    }
                    .deploy-button {
                        width: 100%;
                        padding: 0.75rem 0;
                        border: none;
                        border-radius: 0.5rem;
                        color: #fff;
                        font-weight: 600;
                        background: linear-gradient(90deg, #fb923c, #ef4444);
                        cursor: pointer;
                        transition: box-shadow 0.3s ease;
                    }
                    .deploy-button:hover {
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    }
                    @media (min-width: 768px) {
                        .tool-grid {
                            grid-template-columns: repeat(6, 1fr);
                        }
                    }
                    @media (min-width: 1024px) {
                        .tool-grid {
                            grid-template-columns: repeat(8, 1fr);
                        }
                        .integration-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                "#}
            </style>
            <div class="container">
                <div ref={heading_ref} class="section-heading">
                    <h2>{"CONNECT YOUR TOOLS"}</h2>
                    <p>{"Seamlessly integrate with your favorite development tools and showcase your workflow"}</p>
                </div>

                <div class="tool-grid">
                    { for TOOLS.iter().map(|tool| html! {
                        <div key={tool.name} class="tool-icon">
                            <div class="tool-badge" style={format!("background: {};", tool.color)}>
                                {tool.icon}
                            </div>
                            <span class="tool-name">{tool.name}</span>
                        </div>
                    }) }
                </div>

                <div ref={integrations_ref} class="integration-grid">
                    { for INTEGRATIONS.iter().map(|integration| html! {
                        <div key={integration.title} class="integration">
                            <div class="integration-badge" style={format!("background: {};", integration.gradient)}>
                                {integration.badge}
                            </div>
                            <h3>{integration.title}</h3>
                            <p>{integration.description}</p>
                            { integration_body(integration.kind) }
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
