use yew::prelude::*;

use crate::content::{Mockup, FEATURES};
use crate::hooks::idle::use_bar_heights;
use crate::hooks::reveal::{use_reveal, RevealGroup};
use crate::motion::easing::Easing;
use crate::motion::reveal::{Policy, RevealSpec};
use crate::motion::trigger::TriggerPoint;

pub(crate) const HEADING: RevealGroup = RevealGroup::children("features.heading", RevealSpec::rise_small());

pub(crate) const CARDS: RevealGroup = RevealGroup::matching(
    "features.cards",
    ".feature-card",
    RevealSpec::rise_in_view(60.0)
        .duration(0.8)
        .stagger(0.3, 0.0)
        .easing(Easing::Power2Out)
        .trigger(TriggerPoint::ViewportLine(0.7), Policy::Reversible),
);

const CHART_BARS: usize = 8;

fn mockup(kind: Mockup, bars: &[f64]) -> Html {
    match kind {
        Mockup::Dashboard => html! {
            <div class="mockup">
                <div class="mockup-row">
                    <div class="swatch" style="width: 2rem; height: 2rem; border-radius: 50%; background: linear-gradient(90deg, #c084fc, #f472b6);"></div>
                    <div class="card-line" style="flex: 1;">
                        <div class="line" style="width: 75%;"></div>
                        <div class="line faint" style="width: 50%;"></div>
                    </div>
                </div>
                <div class="mockup-grid two">
                    <div class="tile"></div>
                    <div class="tile"></div>
                </div>
            </div>
        },
        Mockup::Analytics => html! {
            <div class="mockup">
                <div class="chart">
                    { for bars.iter().enumerate().map(|(i, height)| html! {
                        <div key={i} class="chart-bar" style={format!("height: {:.0}%;", height)}></div>
                    }) }
                </div>
            </div>
        },
        Mockup::Showcase => html! {
            <div class="mockup">
                <div class="mockup-grid three">
                    { for (0..6).map(|i| html! { <div key={i} class="tile square"></div> }) }
                </div>
            </div>
        },
        Mockup::Sync => html! {
            <div class="mockup">
                { for ["Repository", "Projects", "Skills"].iter().map(|label| html! {
                    <div key={*label} class="sync-row">
                        <span class="sync-dot"></span>
                        <span>{*label}</span>
                        <span class="sync-state">{"synced"}</span>
                    </div>
                }) }
            </div>
        },
        Mockup::Collaboration => html! {
            <div class="mockup">
                <div class="avatars">
                    { for ["#818cf8", "#a78bfa", "#f472b6", "#60a5fa"].iter().map(|color| html! {
                        <div key={*color} class="avatar" style={format!("background: {};", color)}></div>
                    }) }
                </div>
                <div class="line" style="width: 66%; margin-top: 1rem;"></div>
            </div>
        },
        Mockup::Templates => html! {
            <div class="mockup">
                <div class="mockup-grid two">
                    { for ["#fbcfe8", "#fecdd3", "#e9d5ff", "#fde68a"].iter().map(|color| html! {
                        <div key={*color} class="tile" style={format!("background: {};", color)}></div>
                    }) }
                </div>
            </div>
        },
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    let section_ref = use_node_ref();
    let heading_ref = use_node_ref();
    let bars = use_bar_heights(CHART_BARS);

    use_reveal(&heading_ref, HEADING);
    use_reveal(&section_ref, CARDS);

    html! {
        <section ref={section_ref} id="features" class="features">
            <style>
                {r#"
                    .features {
                        padding: 5rem 0;
                        background: #f9fafb;
                    }
                    .feature-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .feature-card {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1.5rem;
                        padding: 2rem;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .feature-card:hover {
                        transform: translateY(-8px);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }
                    .feature-decoration {
                        position: absolute;
                        top: -4rem;
                        right: -4rem;
                        width: 10rem;
                        height: 10rem;
                        border-radius: 50%;
                        opacity: 0.6;
                    }
                    .feature-subtitle {
                        position: relative;
                        font-size: 0.75rem;
                        font-weight: 600;
                        letter-spacing: 0.05em;
                        text-transform: uppercase;
                        color: #6b7280;
                    }
                    .feature-card h3 {
                        position: relative;
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #111827;
                        margin: 0.5rem 0 1rem;
                    }
                    .feature-card p {
                        position: relative;
                        color: #4b5563;
                        margin-bottom: 1.5rem;
                    }
                    .feature-more {
                        position: relative;
                        background: none;
                        border: none;
                        padding: 0;
                        margin-top: 1.5rem;
                        color: #111827;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.2s ease;
                    }
                    .feature-more:hover {
                        transform: translateX(4px);
                    }
                    .mockup {
                        position: relative;
                        background: #fff;
                        border-radius: 0.75rem;
                        padding: 1rem;
                        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                    }
                    .mockup-row {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                    }
                    .mockup-grid {
                        display: grid;
                        gap: 0.5rem;
                    }
                    .mockup-grid.two {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .mockup-grid.three {
                        grid-template-columns: repeat(3, 1fr);
                    }
                    .tile.square {
                        aspect-ratio: 1;
                        height: auto;
                    }
                    .chart {
                        display: flex;
                        align-items: flex-end;
                        gap: 0.375rem;
                        height: 6rem;
                    }
                    .chart-bar {
                        flex: 1;
                        border-radius: 0.25rem 0.25rem 0 0;
                        background: linear-gradient(to top, #3b82f6, #22d3ee);
                    }
                    .sync-row {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        color: #4b5563;
                        padding: 0.25rem 0;
                    }
                    .sync-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: #fb923c;
                    }
                    .sync-state {
                        margin-left: auto;
                        font-size: 0.75rem;
                        color: #16a34a;
                    }
                    .avatars {
                        display: flex;
                    }
                    .avatar {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        border: 2px solid #fff;
                        margin-left: -0.5rem;
                    }
                    .avatar:first-child {
                        margin-left: 0;
                    }
                    @media (min-width: 768px) {
                        .feature-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (min-width: 1024px) {
                        .feature-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                "#}
            </style>
            <div class="container">
                <div ref={heading_ref} class="section-heading">
                    <h2>{"Everything You Need to "}<span class="gradient-text">{"Shine"}</span></h2>
                    <p>{"Powerful features designed to help developers present their best work"}</p>
                </div>

                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div key={feature.title} class="feature-card" style={format!("background: {};", feature.card_background)}>
                            <div class="feature-decoration" style={format!("background: {};", feature.decoration)}></div>
                            <span class="feature-subtitle">{feature.subtitle}</span>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                            { mockup(feature.mockup, &bars) }
                            <button class="feature-more">{"Learn more →"}</button>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
