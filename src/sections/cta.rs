use yew::prelude::*;

use crate::config;
use crate::content::CTA_HIGHLIGHTS;
use crate::hooks::context::use_motion;
use crate::hooks::idle::use_particles;
use crate::hooks::parallax::{use_parallax, ParallaxLayer};
use crate::hooks::reveal::{use_reveal, RevealGroup};
use crate::motion::easing::Easing;
use crate::motion::idle::IdleJitter;
use crate::motion::parallax::ParallaxSpec;
use crate::motion::reveal::RevealSpec;

pub(crate) const BACKGROUND: ParallaxLayer = ParallaxLayer::new("cta.parallax", ParallaxSpec::vertical(0.0, 100.0));

pub(crate) const CONTENT: RevealGroup = RevealGroup::children(
    "cta.content",
    RevealSpec::rise_in_view(50.0).duration(0.8),
);

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    let motion = use_motion();
    let section_ref = use_node_ref();
    let background_ref = use_node_ref();
    let content_ref = use_node_ref();
    let particles = use_particles(config::CTA_PARTICLE_COUNT, IdleJitter::PARTICLE);

    use_parallax(&section_ref, &background_ref, BACKGROUND);
    use_reveal(&content_ref, CONTENT);

    html! {
        <section ref={section_ref} class="cta">
            <style>
                {r#"
                    .cta {
                        position: relative;
                        overflow: hidden;
                        padding: 6rem 0;
                        background: linear-gradient(135deg, #2563eb, #9333ea, #db2777);
                        color: #fff;
                    }
                    .cta-background {
                        position: absolute;
                        inset: 0;
                        opacity: 0.3;
                        background-image:
                            radial-gradient(circle at 20% 30%, rgba(255, 255, 255, 0.4) 0, transparent 40%),
                            radial-gradient(circle at 80% 70%, rgba(255, 255, 255, 0.3) 0, transparent 40%);
                        background-size: 100% 200%;
                    }
                    .particle {
                        position: absolute;
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: #fff;
                        opacity: 0.2;
                    }
                    @keyframes cta-drift {
                        from { transform: translateY(-20px); opacity: 0.2; }
                        to { transform: translateY(20px); opacity: 0.5; }
                    }
                    .cta-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .cta h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .cta-subtitle {
                        font-size: 1.25rem;
                        opacity: 0.9;
                        margin-bottom: 2.5rem;
                    }
                    .cta-buttons {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        justify-content: center;
                        margin-bottom: 3rem;
                    }
                    .cta-primary, .cta-secondary {
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        font-size: 1.125rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.3s ease, box-shadow 0.3s ease, background 0.3s ease;
                    }
                    .cta-primary {
                        background: #fff;
                        color: #7c3aed;
                        border: none;
                    }
                    .cta-primary:hover {
                        transform: translateY(-3px) scale(1.05);
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.2);
                    }
                    .cta-secondary {
                        background: transparent;
                        color: #fff;
                        border: 2px solid #fff;
                    }
                    .cta-secondary:hover {
                        background: rgba(255, 255, 255, 0.1);
                        transform: translateY(-3px);
                    }
                    .highlight-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                        margin-bottom: 3rem;
                    }
                    .highlight {
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(8px);
                        border-radius: 1rem;
                        padding: 1.5rem;
                        transition: transform 0.3s ease;
                    }
                    .highlight:hover {
                        transform: translateY(-5px);
                    }
                    .highlight-icon {
                        font-size: 2rem;
                        margin-bottom: 0.75rem;
                    }
                    .highlight h3 {
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .highlight p {
                        font-size: 0.875rem;
                        opacity: 0.8;
                    }
                    .trust {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1.5rem;
                        font-size: 0.875rem;
                        opacity: 0.8;
                    }
                    @media (min-width: 640px) {
                        .cta-buttons {
                            flex-direction: row;
                        }
                    }
                    @media (min-width: 768px) {
                        .cta h2 {
                            font-size: 3.75rem;
                        }
                        .highlight-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                "#}
            </style>
            <div ref={background_ref} class="cta-background" style="background-position: 50% 0%;"></div>

            { for particles.iter().enumerate().map(|(i, particle)| {
                let animation = if motion.animate {
                    particle.timing.css("cta-drift", Easing::EaseInOut, true)
                } else {
                    "none".to_string()
                };
                html! {
                    <div
                        key={i}
                        class="particle"
                        style={format!("left: {:.2}%; top: {:.2}%; animation: {};", particle.left, particle.top, animation)}
                    ></div>
                }
            }) }

            <div class="container">
                <div ref={content_ref} class="cta-content">
                    <h2>{"Ready to Build Your Dream Portfolio?"}</h2>
                    <p class="cta-subtitle">
                        {"Join thousands of developers showcasing their work with Profilio. Start free today."}
                    </p>
                    <div class="cta-buttons">
                        <button class="cta-primary">{"Start Building Free"}</button>
                        <button class="cta-secondary">{"View Templates"}</button>
                    </div>
                    <div class="highlight-grid">
                        { for CTA_HIGHLIGHTS.iter().map(|highlight| html! {
                            <div key={highlight.title} class="highlight">
                                <div class="highlight-icon">{highlight.icon}</div>
                                <h3>{highlight.title}</h3>
                                <p>{highlight.description}</p>
                            </div>
                        }) }
                    </div>
                    <div class="trust">
                        <span>{"✓ No credit card required"}</span>
                        <span>{"✓ Free forever plan"}</span>
                        <span>{"✓ Cancel anytime"}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
