use yew::prelude::*;

use crate::content::{BRAND, FOOTER_COLUMNS, LEGAL_LINKS, SOCIAL_LINKS};
use crate::hooks::reveal::{use_reveal, RevealGroup};
use crate::motion::reveal::RevealSpec;

const RISE: RevealSpec = RevealSpec::rise_in_view(20.0).stagger(0.1, 0.2);

pub(crate) const COLUMNS: RevealGroup = RevealGroup::children("footer.columns", RISE);
pub(crate) const NEWSLETTER: RevealGroup = RevealGroup::itself("footer.newsletter", RISE);
pub(crate) const BOTTOM_BAR: RevealGroup = RevealGroup::children("footer.bottom", RISE);

#[function_component(Footer)]
pub fn footer() -> Html {
    let columns_ref = use_node_ref();
    let newsletter_ref = use_node_ref();
    let bottom_ref = use_node_ref();

    use_reveal(&columns_ref, COLUMNS);
    use_reveal(&newsletter_ref, NEWSLETTER);
    use_reveal(&bottom_ref, BOTTOM_BAR);

    html! {
        <footer id="contact" class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #111827;
                        color: #d1d5db;
                        padding: 4rem 0 2rem;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }
                    .footer-brand p {
                        color: #9ca3af;
                        margin: 1rem 0 1.5rem;
                        max-width: 20rem;
                    }
                    .footer-brand .brand-name {
                        color: #fff;
                    }
                    .socials {
                        display: flex;
                        gap: 0.75rem;
                    }
                    .social {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.5rem;
                        background: #1f2937;
                        color: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-decoration: none;
                        font-weight: 600;
                        transition: transform 0.2s ease, background 0.2s ease;
                    }
                    .social:hover {
                        transform: translateY(-3px);
                        background: linear-gradient(90deg, #3b82f6, #9333ea);
                    }
                    .footer-column h4 {
                        color: #fff;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .footer-column ul {
                        list-style: none;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .footer-column a, .legal a {
                        color: #9ca3af;
                        text-decoration: none;
                        display: inline-block;
                        transition: color 0.2s ease, transform 0.2s ease;
                    }
                    .footer-column a:hover, .legal a:hover {
                        color: #fff;
                        transform: translateX(4px);
                    }
                    .newsletter {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 2rem 0;
                        border-top: 1px solid #1f2937;
                    }
                    .newsletter h4 {
                        color: #fff;
                        font-weight: 600;
                    }
                    .newsletter-form {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .newsletter-form input {
                        flex: 1;
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        border: 1px solid #374151;
                        background: #1f2937;
                        color: #fff;
                    }
                    .newsletter-form button {
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 0.5rem;
                        color: #fff;
                        font-weight: 600;
                        background: linear-gradient(90deg, #3b82f6, #9333ea);
                        cursor: pointer;
                    }
                    .footer-bottom {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        justify-content: space-between;
                        align-items: center;
                        padding-top: 2rem;
                        border-top: 1px solid #1f2937;
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .legal {
                        display: flex;
                        gap: 1.5rem;
                    }
                    @media (min-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 2fr repeat(4, 1fr);
                        }
                        .newsletter {
                            flex-direction: row;
                            justify-content: space-between;
                            align-items: center;
                        }
                        .footer-bottom {
                            flex-direction: row;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <div ref={columns_ref} class="footer-grid">
                    <div class="footer-brand">
                        <div class="brand">
                            <div class="brand-mark">{"P"}</div>
                            <span class="brand-name">{BRAND}</span>
                        </div>
                        <p>{"The all-in-one platform for developers to build, showcase and share their portfolio."}</p>
                        <div class="socials">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <a key={social.name} class="social" href={social.href} title={social.name}>
                                    {social.icon}
                                </a>
                            }) }
                        </div>
                    </div>
                    { for FOOTER_COLUMNS.iter().map(|column| html! {
                        <div key={column.category} class="footer-column">
                            <h4>{column.category}</h4>
                            <ul>
                                { for column.links.iter().map(|link| html! {
                                    <li key={*link}><a href="#">{*link}</a></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>

                // Decorative only: nothing is submitted
                <div ref={newsletter_ref} class="newsletter">
                    <div>
                        <h4>{"Stay in the loop"}</h4>
                        <p>{"Product updates and portfolio tips, once a month."}</p>
                    </div>
                    <div class="newsletter-form">
                        <input type="email" placeholder="Enter your email" />
                        <button>{"Subscribe"}</button>
                    </div>
                </div>

                <div ref={bottom_ref} class="footer-bottom">
                    <span>{format!("© 2024 {}. All rights reserved.", BRAND)}</span>
                    <div class="legal">
                        { for LEGAL_LINKS.iter().map(|link| html! {
                            <a key={*link} href="#">{*link}</a>
                        }) }
                    </div>
                </div>
            </div>
        </footer>
    }
}
