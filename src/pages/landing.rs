use log::{debug, info};
use yew::prelude::*;

use crate::config;
use crate::hooks::context::MotionContext;
use crate::hooks::scrolled::use_scrolled;
use crate::sections::{
    cta::CallToAction, features::Features, footer::Footer, header::Header, hero::Hero,
    steps::Steps, testimonials::Testimonials, tools::Tools,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    let motion = use_state(|| {
        let animate = config::motion_allowed();
        if !animate {
            info!("Reduced motion requested, rendering final states");
        }
        MotionContext::new(animate)
    });
    let scrolled = use_scrolled(config::HEADER_SCROLL_THRESHOLD, &motion.registry);

    {
        let registry = motion.registry.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    // Sections unmount after this cleanup runs, so some may still be counted
                    debug!("Landing unmounted with {} active observers", registry.active());
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<MotionContext> context={(*motion).clone()}>
            <style>
                {r#"
                    *, *::before, *::after {
                        box-sizing: border-box;
                    }
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
                        color: #111827;
                        background: #fff;
                        overflow-x: hidden;
                    }
                    h1, h2, h3, h4, p {
                        margin: 0;
                    }
                    .container {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .gradient-text {
                        background: linear-gradient(90deg, #3b82f6, #9333ea, #ec4899);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .section-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-heading h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 1rem;
                    }
                    .section-heading p {
                        font-size: 1.25rem;
                        color: #4b5563;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .line {
                        height: 0.5rem;
                        border-radius: 0.25rem;
                        background: #e5e7eb;
                    }
                    .line.faint {
                        background: #f3f4f6;
                    }
                    .card-line {
                        background: #fff;
                        border-radius: 0.5rem;
                        padding: 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    .placeholder {
                        background: #e5e7eb;
                        border-radius: 0.25rem;
                    }
                    .browser-dots {
                        display: flex;
                        gap: 0.5rem;
                        margin-bottom: 1rem;
                    }
                    .browser-dots span {
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 50%;
                    }
                    .browser-dots.small span {
                        width: 0.5rem;
                        height: 0.5rem;
                    }
                    .tile {
                        height: 3rem;
                        border-radius: 0.5rem;
                        background: linear-gradient(135deg, #dbeafe, #e9d5ff);
                    }
                    .tile.tall {
                        height: 6rem;
                    }
                    @media (min-width: 768px) {
                        .section-heading h2 {
                            font-size: 3rem;
                        }
                    }
                "#}
            </style>
            <Header scrolled={scrolled} />
            <main>
                <Hero />
                <Steps />
                <Tools />
                <Features />
                <Testimonials />
                <CallToAction />
            </main>
            <Footer />
        </ContextProvider<MotionContext>>
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::hooks::reveal::RevealGroup;
    use crate::motion::reveal::{BindPlan, Command};
    use crate::motion::visual::VisualState;
    use crate::sections::{cta, features, footer, header, hero, steps, testimonials, tools};

    const GROUPS: [RevealGroup; 20] = [
        header::BAR,
        header::NAV,
        header::CTA,
        hero::CONTENT,
        steps::HEADING,
        steps::CARDS,
        steps::PREVIEWS,
        tools::HEADING,
        tools::ICONS,
        tools::INTEGRATION_CARDS,
        features::HEADING,
        features::CARDS,
        testimonials::HEADING,
        testimonials::CARDS,
        testimonials::STAT_BLOCKS,
        testimonials::STAT_FIGURES,
        cta::CONTENT,
        footer::COLUMNS,
        footer::NEWSLETTER,
        footer::BOTTOM_BAR,
    ];

    #[test]
    fn every_group_ends_fully_visible() {
        for group in GROUPS {
            assert_eq!(
                group.spec.target(Command::Play),
                VisualState::IDENTITY,
                "{} does not settle in place",
                group.label
            );
        }
    }

    #[test]
    fn every_group_is_shown_when_motion_is_off() {
        for group in GROUPS {
            for capable in [true, false] {
                assert_eq!(
                    group.spec.plan(1, false, capable),
                    BindPlan::Instant(VisualState::IDENTITY),
                    "{} could stay hidden",
                    group.label
                );
            }
            assert_eq!(group.spec.plan(1, true, false), BindPlan::Instant(VisualState::IDENTITY));
        }
    }

    #[test]
    fn observer_labels_are_unique() {
        let mut labels: HashSet<&str> = GROUPS.iter().map(|g| g.label).collect();
        assert_eq!(labels.len(), GROUPS.len());
        assert!(labels.insert(cta::BACKGROUND.label), "parallax label reused");
    }
}
