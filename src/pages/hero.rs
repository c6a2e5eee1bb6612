use yew::prelude::*;

use crate::components::counter::Counter;
use crate::components::reveal::Reveal;
use crate::content::{Icon, HERO_STATS};
use crate::count_up::CountUpConfig;
use crate::reveal::Stagger;

const STAT_STAGGER: Stagger = Stagger::new(550, 100);

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
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
                        overflow: hidden;
                        text-align: center;
                    }
                    .hero-blob {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(48px);
                        pointer-events: none;
                    }
                    .hero-blob.one { top: 5rem; left: 2.5rem; width: 18rem; height: 18rem; background: var(--saffron-10); animation: float 6s ease-in-out infinite; }
                    .hero-blob.two { bottom: 5rem; right: 2.5rem; width: 24rem; height: 24rem; background: var(--saffron-light-15); animation: float 7s ease-in-out infinite reverse; }
                    .hero-blob.three { top: 50%; left: 33%; width: 12rem; height: 12rem; background: var(--accent-10); animation: pulse-glow 4s ease-in-out infinite; }
                    .hero-inner { position: relative; z-index: 1; padding: 5rem 1rem; }
                    .hero-badge {
                        display: inline-flex;
                        gap: 0.5rem;
                        padding: 0.5rem 1.25rem;
                        border-radius: 999px;
                        border: 1px solid var(--saffron-20);
                        background: var(--saffron-10);
                        color: var(--saffron);
                        font-weight: 600;
                        font-size: 0.875rem;
                    }
                    .hero h1 { font-size: clamp(3rem, 8vw, 6rem); font-weight: 800; line-height: 1.1; margin: 1.5rem 0 1rem; }
                    .hero-brand { font-size: 1.875rem; font-weight: 700; color: var(--saffron); margin-bottom: 1.5rem; }
                    .hero-brand span { color: var(--accent); }
                    .hero-subtext { max-width: 42rem; margin: 0 auto 2.5rem; font-size: 1.25rem; color: var(--muted); line-height: 1.6; }
                    .hero-stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; max-width: 56rem; margin: 0 auto; }
                    .hero-stat-icon { display: inline-flex; width: 3.5rem; height: 3.5rem; align-items: center; justify-content: center; border-radius: 1rem; background: var(--saffron-10); margin-bottom: 1rem; font-size: 1.5rem; }
                    .hero-stat-value { display: block; font-size: 3rem; font-weight: 800; color: var(--saffron); }
                    .hero-stat-label { font-size: 0.875rem; color: var(--muted); font-weight: 500; margin-top: 0.25rem; }
                    .hero-scroll { margin-top: 4rem; font-size: 2rem; color: var(--saffron-50); animation: bounce 1s infinite; }
                    @media (max-width: 768px) {
                        .hero-stats { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
            <div class="hero-blob one"></div>
            <div class="hero-blob two"></div>
            <div class="hero-blob three"></div>

            <div class="hero-inner">
                <Reveal class="hero-badge-row">
                    <span class="hero-badge">
                        {Icon::GraduationCap.glyph()}
                        {"B.Tech Admissions 2026 Open"}
                    </span>
                </Reveal>

                <Reveal delay_ms={150}>
                    <h1>
                        {"Your Journey To "}
                        <span class="text-gradient-saffron">{"B.Tech"}</span>
                        <br/>
                        {"Starts Here"}
                    </h1>
                </Reveal>

                <Reveal delay_ms={250}>
                    <p class="hero-brand">{"Career"}<span>{"4s"}</span></p>
                </Reveal>

                <Reveal delay_ms={350}>
                    <p class="hero-subtext">
                        {"Top placements, Premier Colleges, Exclusive Scholarships — we Guide You Every Step Of The Way To Your Dream Engineering Career."}
                    </p>
                </Reveal>

                <div class="hero-stats">
                    { for HERO_STATS.iter().enumerate().map(|(i, stat)| html! {
                        <Reveal key={stat.label} delay_ms={STAT_STAGGER.delay_for(i)}>
                            <div class="hero-stat-icon">{stat.icon.glyph()}</div>
                            <Counter
                                target={stat.target}
                                suffix={stat.suffix}
                                config={CountUpConfig::default()}
                                class="hero-stat-value"
                            />
                            <p class="hero-stat-label">{stat.label}</p>
                        </Reveal>
                    }) }
                </div>

                <Reveal delay_ms={1000}>
                    <div class="hero-scroll">{"⌄"}</div>
                </Reveal>
            </div>
        </section>
    }
}
