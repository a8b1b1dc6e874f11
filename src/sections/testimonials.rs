use yew::prelude::*;

use crate::content::{MAX_RATING, STATS, TESTIMONIALS};
use crate::hooks::reveal::{use_reveal, RevealGroup};
use crate::motion::easing::Easing;
use crate::motion::reveal::{Policy, RevealSpec};
use crate::motion::trigger::TriggerPoint;
use crate::motion::visual::VisualState;

const RISE: RevealSpec = RevealSpec::rise_in_view(30.0).stagger(0.1, 0.1);

pub(crate) const HEADING: RevealGroup = RevealGroup::children("testimonials.heading", RISE);

pub(crate) const CARDS: RevealGroup = RevealGroup::matching(
    "testimonials.cards",
    ".testimonial-card",
    RevealSpec::rise_in_view(50.0)
        .from_state(VisualState::rise(50.0).with_scale(0.9))
        .duration(0.8)
        .stagger(0.2, 0.0)
        .easing(Easing::Power2Out)
        .trigger(TriggerPoint::ViewportLine(0.7), Policy::Reversible),
);

pub(crate) const STAT_BLOCKS: RevealGroup = RevealGroup::children("testimonials.stats", RISE);

// Figures pop in from nothing while their blocks rise
pub(crate) const STAT_FIGURES: RevealGroup = RevealGroup::matching(
    "testimonials.figures",
    ".stat-figure",
    RevealSpec::rise_in_view(0.0)
        .from_state(VisualState::IDENTITY.with_scale(0.0))
        .stagger(0.1, 0.0),
);

fn stars(rating: u8) -> Html {
    html! {
        <div class="stars">
            { for (0..MAX_RATING).map(|i| html! {
                <svg key={i.to_string()} class={classes!("star", (i < rating).then(|| "filled"))} viewBox="0 0 20 20">
                    <path d="M9.05 2.93c.3-.92 1.6-.92 1.9 0l1.07 3.29a1 1 0 00.95.69h3.46c.97 0 1.37 1.24.59 1.81l-2.8 2.03a1 1 0 00-.36 1.12l1.07 3.29c.3.92-.76 1.69-1.54 1.12l-2.8-2.03a1 1 0 00-1.18 0l-2.8 2.03c-.78.57-1.84-.2-1.54-1.12l1.07-3.29a1 1 0 00-.36-1.12L2.98 8.72c-.78-.57-.38-1.81.59-1.81h3.46a1 1 0 00.95-.69l1.07-3.29z" />
                </svg>
            }) }
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let section_ref = use_node_ref();
    let heading_ref = use_node_ref();
    let stats_ref = use_node_ref();

    use_reveal(&heading_ref, HEADING);
    use_reveal(&section_ref, CARDS);
    use_reveal(&stats_ref, STAT_BLOCKS);
    use_reveal(&stats_ref, STAT_FIGURES);

    html! {
        <section ref={section_ref} id="pricing" class="testimonials">
            <style>
                {r#"
                    .testimonials {
                        padding: 5rem 0;
                        background: #fff;
                    }
                    .testimonial-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .testimonial-card {
                        position: relative;
                        border-radius: 1.5rem;
                        padding: 2rem;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .testimonial-card:hover {
                        transform: translateY(-10px) scale(1.02);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }
                    .quote-mark {
                        position: absolute;
                        top: 1rem;
                        right: 1.5rem;
                        font-size: 4rem;
                        line-height: 1;
                        opacity: 0.2;
                    }
                    .stars {
                        display: flex;
                        gap: 0.25rem;
                        margin-bottom: 1rem;
                    }
                    .star {
                        width: 1.25rem;
                        height: 1.25rem;
                        fill: #d1d5db;
                    }
                    .star.filled {
                        fill: #facc15;
                    }
                    .testimonial-card blockquote {
                        color: #374151;
                        line-height: 1.625;
                        margin: 0 0 1.5rem;
                    }
                    .author {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .author-initials {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        font-weight: 700;
                    }
                    .author-name {
                        font-weight: 600;
                        color: #111827;
                    }
                    .author-role {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .stat-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                        max-width: 56rem;
                        margin: 4rem auto 0;
                        text-align: center;
                    }
                    .stat-figure {
                        display: inline-block;
                        font-size: 2.25rem;
                        font-weight: 700;
                        background: linear-gradient(90deg, #3b82f6, #9333ea);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .stat-label {
                        color: #4b5563;
                        margin-top: 0.5rem;
                    }
                    @media (min-width: 768px) {
                        .testimonial-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                        .stat-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }
                "#}
            </style>
            <div class="container">
                <div ref={heading_ref} class="section-heading">
                    <h2>{"Loved by "}<span class="gradient-text">{"Developers"}</span></h2>
                    <p>{"Join thousands of developers who have elevated their careers with Profilio"}</p>
                </div>

                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <div key={t.name} class="testimonial-card" style={format!("background: {};", t.background)}>
                            <span class="quote-mark" style={format!("color: {};", t.accent)}>{"\u{201c}"}</span>
                            { stars(t.rating) }
                            <blockquote>{t.quote}</blockquote>
                            <div class="author">
                                <div class="author-initials" style={format!("background: {};", t.accent)}>
                                    {t.initials}
                                </div>
                                <div>
                                    <div class="author-name">{t.name}</div>
                                    <div class="author-role">{format!("{} at {}", t.role, t.company)}</div>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>

                <div ref={stats_ref} class="stat-grid">
                    { for STATS.iter().map(|stat| html! {
                        <div key={stat.label}>
                            <span class="stat-figure">{stat.figure}</span>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
