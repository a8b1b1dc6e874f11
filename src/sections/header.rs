use yew::prelude::*;

use crate::content::{nav_anchor, BRAND, NAV_ITEMS};
use crate::hooks::reveal::{use_reveal, RevealGroup};
use crate::motion::reveal::RevealSpec;
use crate::motion::visual::VisualState;

pub(crate) const BAR: RevealGroup = RevealGroup::itself(
    "header.bar",
    RevealSpec::rise_on_mount(0.0)
        .from_state(VisualState::offset(0.0, -100.0))
        .stagger(0.0, 0.0),
);

pub(crate) const NAV: RevealGroup = RevealGroup::children(
    "header.nav",
    RevealSpec::rise_on_mount(-20.0).duration(0.2).stagger(0.1, 0.1),
);

pub(crate) const CTA: RevealGroup = RevealGroup::itself(
    "header.cta",
    RevealSpec::rise_on_mount(0.0)
        .from_state(VisualState::offset(20.0, 0.0).with_opacity(0.0))
        .stagger(0.0, 0.3),
);

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Page has scrolled far enough for the solid bar.
    pub scrolled: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let bar_ref = use_node_ref();
    let nav_ref = use_node_ref();
    let cta_ref = use_node_ref();

    use_reveal(&bar_ref, BAR);
    use_reveal(&nav_ref, NAV);
    use_reveal(&cta_ref, CTA);

    html! {
        <header ref={bar_ref} class={classes!("site-header", props.scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease, backdrop-filter 0.3s ease;
                    }
                    .site-header.scrolled {
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    }
                    .site-header .bar {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 0;
                    }
                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        transition: transform 0.2s ease;
                    }
                    .brand:hover {
                        transform: scale(1.05);
                    }
                    .brand-mark {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 0.5rem;
                        background: linear-gradient(90deg, #3b82f6, #9333ea);
                        color: #fff;
                        font-weight: 700;
                        font-size: 1.125rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .brand-name {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #111827;
                    }
                    .site-nav {
                        display: none;
                        gap: 2rem;
                    }
                    .site-nav a {
                        color: #4b5563;
                        font-weight: 500;
                        text-decoration: none;
                        transition: color 0.2s ease, transform 0.2s ease;
                    }
                    .site-nav a:hover {
                        color: #111827;
                        transform: translateY(-2px);
                    }
                    .header-cta {
                        background: linear-gradient(90deg, #3b82f6, #9333ea);
                        color: #fff;
                        border: none;
                        padding: 0.5rem 1.5rem;
                        border-radius: 0.5rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .header-cta:hover {
                        transform: translateY(-2px) scale(1.05);
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    }
                    .header-cta:active {
                        transform: scale(0.95);
                    }
                    @media (min-width: 768px) {
                        .site-nav {
                            display: flex;
                        }
                    }
                "#}
            </style>
            <div class="container bar">
                <div class="brand">
                    <div class="brand-mark">{"P"}</div>
                    <span class="brand-name">{BRAND}</span>
                </div>

                <nav ref={nav_ref} class="site-nav">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a key={*item} href={nav_anchor(item)}>{*item}</a>
                    }) }
                </nav>

                <button ref={cta_ref} class="header-cta">{"Get Started"}</button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::reveal::Command;

    #[test]
    fn nav_links_drop_in_quickly_one_after_another() {
        assert_eq!(NAV.spec.duration, 0.2);
        let delays = NAV.spec.delays(Command::Play, 4);
        let expected = [0.1, 0.2, 0.3, 0.4];
        for (delay, want) in delays.iter().zip(expected) {
            assert!((delay - want).abs() < 1e-9, "{} != {}", delay, want);
        }
    }

    #[test]
    fn cta_trails_the_bar() {
        assert_eq!(CTA.spec.delays(Command::Play, 1), vec![0.3]);
        assert_eq!(BAR.spec.delays(Command::Play, 1), vec![0.0]);
    }
}
