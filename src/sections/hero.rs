use yew::prelude::*;

use crate::hooks::context::use_motion;
use crate::hooks::reveal::{use_reveal, RevealGroup};
use crate::motion::easing::Easing;
use crate::motion::idle::IdleTiming;
use crate::motion::reveal::RevealSpec;

pub(crate) const CONTENT: RevealGroup = RevealGroup::children(
    "hero.content",
    RevealSpec::rise_on_mount(50.0).duration(0.8),
);

const DASHBOARD_FLOAT: IdleTiming = IdleTiming::fixed(3.0);

#[function_component(Hero)]
pub fn hero() -> Html {
    let motion = use_motion();
    let content_ref = use_node_ref();
    use_reveal(&content_ref, CONTENT);

    let float_style = if motion.animate {
        format!("animation: {};", DASHBOARD_FLOAT.css("hero-float", Easing::Power2InOut, true))
    } else {
        String::new()
    };

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding-top: 5rem;
                        overflow: hidden;
                        background: linear-gradient(135deg, #fff7ed, #fdf2f8, #faf5ff);
                    }
                    .hero-blob {
                        position: absolute;
                        width: 20rem;
                        height: 20rem;
                        border-radius: 50%;
                        opacity: 0.3;
                        filter: blur(64px);
                    }
                    .hero-blob.top {
                        top: -10rem;
                        right: -10rem;
                        background: linear-gradient(135deg, #fed7aa, #fbcfe8);
                    }
                    .hero-blob.bottom {
                        bottom: -10rem;
                        left: -10rem;
                        background: linear-gradient(45deg, #e9d5ff, #bfdbfe);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .hero h1 {
                        font-size: 3rem;
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 1.5rem;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #4b5563;
                        max-width: 42rem;
                        margin: 0 auto 2rem;
                    }
                    .hero-cta {
                        background: linear-gradient(90deg, #fb923c, #ec4899);
                        color: #fff;
                        border: none;
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        font-size: 1.125rem;
                        font-weight: 600;
                        margin-bottom: 4rem;
                        cursor: pointer;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .hero-cta:hover {
                        transform: translateY(-3px) scale(1.05);
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    }
                    .hero-cta:active {
                        transform: scale(0.95);
                    }
                    @keyframes hero-float {
                        from { transform: translateY(0); }
                        to { transform: translateY(-20px); }
                    }
                    .browser {
                        background: #fff;
                        border-radius: 1rem;
                        border: 1px solid #f3f4f6;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        padding: 1.5rem;
                    }
                    .board {
                        background: #f9fafb;
                        border-radius: 0.5rem;
                        padding: 1.5rem;
                        text-align: left;
                    }
                    .board-head {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 1.5rem;
                    }
                    .board-title {
                        display: flex;
                        gap: 0.75rem;
                        align-items: center;
                    }
                    .board-title h3 {
                        font-weight: 600;
                        color: #111827;
                    }
                    .board-title p {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .board-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }
                    .tile-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .play {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto;
                        border-radius: 50%;
                        background: linear-gradient(90deg, #fb923c, #ec4899);
                    }
                    @media (min-width: 768px) {
                        .hero h1 {
                            font-size: 4.5rem;
                        }
                        .hero-subtitle {
                            font-size: 1.5rem;
                        }
                        .board-grid {
                            grid-template-columns: 1fr 2fr;
                        }
                        .tile-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }
                "#}
            </style>
            <div class="hero-blob top"></div>
            <div class="hero-blob bottom"></div>

            <div class="container">
                <div ref={content_ref} class="hero-content">
                    <h1>{"Unify Your "}<span class="gradient-text">{"Code"}</span>{" Journey"}</h1>
                    <p class="hero-subtitle">
                        {"Create, Collaborate, Code. Your comprehensive showcase of developer"}
                    </p>
                    <button class="hero-cta">{"Start Building Now"}</button>
                    <div class="hero-dashboard">
                        <div class="browser" style={float_style}>
                            <div class="browser-dots">
                                <span style="background: #f87171;"></span>
                                <span style="background: #facc15;"></span>
                                <span style="background: #4ade80;"></span>
                            </div>
                            <div class="board">
                                <div class="board-head">
                                    <div class="board-title">
                                        <div class="swatch" style="width: 2.5rem; height: 2.5rem; border-radius: 0.5rem; background: linear-gradient(90deg, #3b82f6, #9333ea);"></div>
                                        <div>
                                            <h3>{"Creative Board"}</h3>
                                            <p>{"Dashboard"}</p>
                                        </div>
                                    </div>
                                    <div style="display: flex; gap: 0.5rem;">
                                        <div class="placeholder" style="width: 2rem; height: 2rem;"></div>
                                        <div class="placeholder" style="width: 2rem; height: 2rem;"></div>
                                    </div>
                                </div>
                                <div class="board-grid">
                                    <div style="display: flex; flex-direction: column; gap: 0.75rem;">
                                        <div class="card-line">
                                            <div class="line" style="width: 100%;"></div>
                                            <div class="line faint" style="width: 66%;"></div>
                                        </div>
                                        <div class="card-line">
                                            <div class="line" style="width: 100%;"></div>
                                            <div class="line faint" style="width: 75%;"></div>
                                        </div>
                                    </div>
                                    <div class="card-line">
                                        <div class="tile-grid">
                                            { for (0..8).map(|i| html! { <div key={i} class="tile"></div> }) }
                                        </div>
                                        <div class="play"></div>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
