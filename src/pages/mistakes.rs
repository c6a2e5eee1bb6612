use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::MISTAKES;
use crate::reveal::Stagger;

const CARD_STAGGER: Stagger = Stagger::every(120);
const BADGE_STAGGER: Stagger = Stagger::new(200, 120);

#[function_component(MistakesSection)]
pub fn mistakes_section() -> Html {
    html! {
        <section class="mistakes">
            <style>
                {r#"
                    .mistakes { padding: 5rem 1rem; background: var(--saffron-light-bg); }
                    .mistakes-inner { max-width: 72rem; margin: 0 auto; }
                    .mistakes-header { text-align: center; margin-bottom: 4rem; animation: fade-in 0.6s ease-out; }
                    .mistakes-header h2 { font-size: clamp(1.875rem, 4vw, 3rem); font-weight: 800; line-height: 1.2; }
                    .mistakes-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.5rem; }
                    .mistake-card {
                        position: relative;
                        height: 100%;
                        background: var(--background);
                        border: 2px solid transparent;
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                        box-shadow: 0 1px 2px rgba(0,0,0,0.05);
                        transition: border-color 0.5s, box-shadow 0.5s, transform 0.5s;
                    }
                    .mistake-card:hover { border-color: var(--saffron); transform: translateY(-0.5rem); box-shadow: 0 10px 15px var(--saffron-15); }
                    .mistake-number {
                        position: absolute;
                        top: -0.75rem;
                        right: -0.75rem;
                        width: 2rem;
                        height: 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        background: var(--saffron);
                        color: white;
                        font-weight: 700;
                        font-size: 0.875rem;
                        transform: scale(0);
                        transition: transform 0.5s;
                    }
                    .reveal-shown .mistake-number { transform: scale(1); }
                    .mistake-icon { width: 3rem; height: 3rem; border-radius: 0.5rem; background: var(--saffron-10); display: flex; align-items: center; justify-content: center; margin-bottom: 1rem; font-size: 1.5rem; }
                    .mistake-card:hover .mistake-icon { animation: bounce 1s infinite; }
                    .mistake-card h3 { font-weight: 700; font-size: 1rem; margin-bottom: 0.5rem; line-height: 1.35; }
                    .mistake-card p { color: var(--muted); font-size: 0.875rem; line-height: 1.6; }
                    @media (max-width: 1024px) { .mistakes-grid { grid-template-columns: repeat(2, 1fr); } }
                    @media (max-width: 640px) { .mistakes-grid { grid-template-columns: 1fr; } }
                "#}
            </style>
            <div class="mistakes-inner">
                <div class="mistakes-header">
                    <span class="pill">{"Admission Guide"}</span>
                    <h2>
                        {"Common Mistakes Parents Make"}
                        <br/>
                        <span class="text-saffron">{"During B.Tech Admission"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Avoid These Critical Errors To Secure The Best Engineering College For Your Child."}
                    </p>
                </div>

                <div class="mistakes-grid">
                    { for MISTAKES.iter().enumerate().map(|(i, mistake)| html! {
                        <Reveal key={mistake.title} defer_ms={CARD_STAGGER.delay_for(i)}>
                            <div class="mistake-card">
                                <span
                                    class="mistake-number"
                                    style={format!("transition-delay: {}ms;", BADGE_STAGGER.delay_for(i))}
                                >
                                    {i + 1}
                                </span>
                                <div class="mistake-icon">{mistake.icon.glyph()}</div>
                                <h3>{mistake.title}</h3>
                                <p>{mistake.description}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::{RevealOptions, RevealTiming};

    #[test]
    fn cards_seen_together_reveal_120ms_apart() {
        let timings: Vec<RevealTiming> = (0..3)
            .map(|i| RevealOptions::default().deferred(CARD_STAGGER.delay_for(i)).timing())
            .collect();
        assert_eq!(
            timings,
            [RevealTiming::Now, RevealTiming::After(120), RevealTiming::After(240)]
        );
    }
}
