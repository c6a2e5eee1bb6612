use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::COLLEGE_CATEGORIES;
use crate::reveal::{Motion, Stagger};

const CARD_STAGGER: Stagger = Stagger::new(300, 200);

#[function_component(CollegeComparison)]
pub fn college_comparison() -> Html {
    let last = COLLEGE_CATEGORIES.len() - 1;

    html! {
        <>
            <style>
                {r#"
                    .colleges-header { display: flex; flex-direction: column; align-items: center; padding: 5rem 1rem 3rem; text-align: center; }
                    .colleges-header h1 { font-size: clamp(2.25rem, 5vw, 3.75rem); font-weight: 800; margin: 1rem 0; }
                    .colleges { max-width: 1400px; margin: 0 auto; padding: 0 1rem 6rem; }
                    .colleges-row { display: flex; align-items: center; justify-content: center; gap: 1.5rem; }
                    .college-slot { display: contents; }
                    .college-column { width: 380px; }
                    .college-card {
                        height: 100%;
                        overflow: hidden;
                        border: 2px solid var(--saffron-20);
                        border-radius: 0.75rem;
                        background: var(--card);
                        transition: all 0.3s;
                    }
                    .college-card:hover { border-color: var(--saffron-60); transform: scale(1.05); box-shadow: 0 20px 25px rgba(0,0,0,0.1); }
                    .college-bar { height: 0.5rem; background: linear-gradient(90deg, var(--saffron), #fb923c, var(--saffron)); }
                    .college-card header { text-align: center; padding: 1.5rem 1.5rem 1rem; }
                    .college-icon { margin: 0 auto 1rem; width: 5rem; height: 5rem; display: flex; align-items: center; justify-content: center; border-radius: 1rem; background: var(--saffron-10); font-size: 2.5rem; transition: all 0.3s; }
                    .college-card:hover .college-icon { background: var(--saffron); }
                    .college-card h3 { font-size: 1.5rem; font-weight: 700; }
                    .college-card ul { list-style: none; padding: 0 1.5rem 1.5rem; margin: 0; }
                    .college-card li { display: flex; gap: 0.75rem; align-items: flex-start; margin-bottom: 1rem; }
                    .college-dot { margin-top: 0.5rem; width: 0.625rem; height: 0.625rem; border-radius: 50%; background: var(--saffron); flex-shrink: 0; }
                    .versus { width: 3.5rem; height: 3.5rem; border-radius: 50%; background: var(--saffron); color: white; display: flex; align-items: center; justify-content: center; font-weight: 700; font-size: 1.125rem; flex-shrink: 0; box-shadow: 0 10px 15px rgba(0,0,0,0.1); }
                    @media (max-width: 768px) {
                        .colleges-row { flex-direction: column; }
                        .college-column { width: 100%; }
                        .versus { display: none; }
                    }
                "#}
            </style>
            <section class="colleges-header">
                <Reveal threshold={0.1} motion={Motion::RiseShort}>
                    <span class="pill">{"🎓 B.Tech Admissions 2025"}</span>
                    <h1>{"Choose Your Path To "}<span class="text-saffron">{"B.Tech"}</span></h1>
                    <p class="section-lead">
                        {"Compare State Government, Central Government & Private engineering Colleges — Find The Perfect Fit For Your Future."}
                    </p>
                </Reveal>
            </section>

            <section class="colleges">
                <div class="colleges-row">
                    { for COLLEGE_CATEGORIES.iter().enumerate().map(|(i, college)| html! {
                        <div key={college.title} class="college-slot">
                            <Reveal threshold={0.1} delay_ms={CARD_STAGGER.delay_for(i)} class="college-column">
                                <article class="college-card">
                                    <div class="college-bar"></div>
                                    <header>
                                        <div class="college-icon">{college.icon.glyph()}</div>
                                        <h3>{college.title}</h3>
                                    </header>
                                    <ul aria-label={college.cta}>
                                        { for college.features.iter().map(|feature| html! {
                                            <li key={*feature}>
                                                <span class="college-dot"></span>
                                                {*feature}
                                            </li>
                                        }) }
                                    </ul>
                                </article>
                            </Reveal>
                            {
                                if i < last {
                                    html! { <div class="versus">{"VS"}</div> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }) }
                </div>
            </section>
        </>
    }
}
