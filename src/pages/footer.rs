use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{Icon, CONTACTS, PROGRAMS, QUICK_LINKS, SOCIALS};
use crate::reveal::{Motion, Stagger};

const COLUMN_STAGGER: Stagger = Stagger::every(100);

#[function_component(FooterSection)]
pub fn footer_section() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer { position: relative; overflow: hidden; background: var(--foreground); color: var(--background); }
                    .footer-accent { height: 0.25rem; background: linear-gradient(90deg, var(--saffron), var(--saffron-light), var(--accent)); }
                    .footer-inner { max-width: 80rem; margin: 0 auto; padding: 4rem 1rem; }
                    .footer-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 3rem; }
                    .footer-brand { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 1rem; font-size: 1.5rem; font-weight: 800; }
                    .footer-brand-icon { width: 2.5rem; height: 2.5rem; border-radius: 0.75rem; background: var(--saffron); display: flex; align-items: center; justify-content: center; }
                    .footer-muted { color: rgba(255,255,255,0.6); font-size: 0.875rem; line-height: 1.6; }
                    .footer-cta { margin-top: 1.5rem; padding: 0.75rem 1.75rem; border: none; border-radius: 999px; background: var(--saffron); color: white; font-weight: 600; cursor: pointer; transition: all 0.3s; box-shadow: 0 10px 15px var(--saffron-30); }
                    .footer-cta:hover { background: var(--accent); transform: scale(1.05); }
                    .site-footer h3 { font-size: 1.125rem; font-weight: 700; margin-bottom: 1rem; color: var(--saffron); }
                    .site-footer ul { list-style: none; margin: 0; padding: 0; }
                    .site-footer li { margin-bottom: 0.75rem; display: flex; gap: 0.75rem; }
                    .site-footer a { color: rgba(255,255,255,0.6); text-decoration: none; transition: color 0.2s; }
                    .site-footer a:hover { color: var(--saffron); }
                    .footer-socials { display: flex; gap: 0.75rem; margin-top: 1.5rem; }
                    .footer-socials a { width: 2.5rem; height: 2.5rem; border-radius: 50%; background: rgba(255,255,255,0.1); display: flex; align-items: center; justify-content: center; transition: all 0.3s; }
                    .footer-socials a:hover { background: var(--saffron); color: white; transform: scale(1.1); }
                    .footer-bottom { margin-top: 4rem; padding-top: 2rem; border-top: 1px solid rgba(255,255,255,0.1); display: flex; justify-content: space-between; gap: 1rem; font-size: 0.875rem; color: rgba(255,255,255,0.4); }
                    .footer-bottom nav { display: flex; gap: 1.5rem; }
                    @media (max-width: 1024px) { .footer-grid { grid-template-columns: repeat(2, 1fr); } }
                    @media (max-width: 768px) {
                        .footer-grid { grid-template-columns: 1fr; }
                        .footer-bottom { flex-direction: column; align-items: center; }
                    }
                "#}
            </style>
            <div class="footer-accent"></div>

            <div class="footer-inner">
                <div class="footer-grid">
                    <Reveal motion={Motion::RiseShort}>
                        <div class="footer-brand">
                            <div class="footer-brand-icon">{Icon::GraduationCap.glyph()}</div>
                            <span>{"Career"}<span class="text-saffron">{"4s"}</span></span>
                        </div>
                        <p class="footer-muted">
                            {"Empowering students to achieve their dream of pursuing B.Tech from top-tier engineering colleges across India."}
                        </p>
                        <button class="footer-cta">{"Apply Now →"}</button>
                    </Reveal>

                    <Reveal motion={Motion::RiseShort} delay_ms={COLUMN_STAGGER.delay_for(1)}>
                        <h3>{"Quick Links"}</h3>
                        <ul>
                            { for QUICK_LINKS.iter().map(|link| html! {
                                <li key={link.label}><a href={link.href}>{link.label}</a></li>
                            }) }
                        </ul>
                    </Reveal>

                    <Reveal motion={Motion::RiseShort} delay_ms={COLUMN_STAGGER.delay_for(2)}>
                        <h3>{"B.Tech Programs"}</h3>
                        <ul>
                            { for PROGRAMS.iter().map(|program| html! {
                                <li key={*program}><a href="#">{*program}</a></li>
                            }) }
                        </ul>
                    </Reveal>

                    <Reveal motion={Motion::RiseShort} delay_ms={COLUMN_STAGGER.delay_for(3)}>
                        <h3>{"Contact Us"}</h3>
                        <ul>
                            { for CONTACTS.iter().map(|(icon, text)| html! {
                                <li key={*text}>
                                    <span>{icon.glyph()}</span>
                                    <span class="footer-muted">{*text}</span>
                                </li>
                            }) }
                        </ul>
                        <div class="footer-socials">
                            { for SOCIALS.iter().map(|social| html! {
                                <a key={social.label} href={social.href} aria-label={social.label}>
                                    {social.icon.glyph()}
                                </a>
                            }) }
                        </div>
                    </Reveal>
                </div>

                <Reveal motion={Motion::RiseShort} delay_ms={COLUMN_STAGGER.delay_for(4)}>
                    <div class="footer-bottom">
                        <p>{"© 2025 Career4s. All rights reserved."}</p>
                        <nav>
                            <a href="#">{"Privacy Policy"}</a>
                            <a href="#">{"Terms of Service"}</a>
                        </nav>
                    </div>
                </Reveal>
            </div>
        </footer>
    }
}
