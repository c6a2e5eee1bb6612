use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::DOCUMENT_CATEGORIES;
use crate::hooks::use_reveal;
use crate::reveal::{Motion, RevealOptions, Stagger};

const CARD_STAGGER: Stagger = Stagger::every(120);

#[function_component(DocumentationSection)]
pub fn documentation_section() -> Html {
    // Header and cards share the section's reveal.
    let section = use_reveal(RevealOptions::new(0.1), Callback::noop());

    html! {
        <section ref={section.node_ref} class="documentation">
            <style>
                {r#"
                    .documentation { position: relative; overflow: hidden; padding: 5rem 1rem; background: white; }
                    .documentation-inner { max-width: 72rem; margin: 0 auto; }
                    .documentation-header { text-align: center; margin-bottom: 3.5rem; }
                    .documentation-header h2 { font-size: clamp(2.25rem, 4vw, 3rem); font-weight: 800; color: #111827; margin-bottom: 1rem; }
                    .live-dot { display: inline-block; width: 0.5rem; height: 0.5rem; border-radius: 50%; background: var(--saffron); animation: pulse-dot 1.5s infinite; }
                    .documentation-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.5rem; }
                    .document-card {
                        position: relative;
                        background: white;
                        border: 2px solid var(--saffron-20);
                        border-radius: 1rem;
                        padding: 1.5rem;
                        cursor: pointer;
                        transition: opacity 0.7s, transform 0.7s, box-shadow 0.4s, border-color 0.4s;
                    }
                    .document-card:hover { transform: translateY(-0.5rem); border-color: var(--saffron); box-shadow: 0 8px 32px var(--saffron-25); }
                    .document-bar { position: absolute; top: 0; left: 0; right: 0; height: 0.25rem; border-radius: 1rem 1rem 0 0; }
                    .document-icon { width: 3rem; height: 3rem; border-radius: 0.75rem; display: flex; align-items: center; justify-content: center; margin-bottom: 1rem; font-size: 1.5rem; transition: transform 0.3s; }
                    .document-card:hover .document-icon { transform: scale(1.1); }
                    .gradient-saffron-light { background: linear-gradient(90deg, var(--saffron), var(--saffron-light)); }
                    .gradient-saffron-dark { background: linear-gradient(90deg, var(--saffron-dark), var(--saffron)); }
                    .document-card h3 { font-weight: 700; color: #1f2937; font-size: 1.125rem; margin-bottom: 1rem; display: flex; gap: 0.5rem; }
                    .document-card ul { list-style: none; margin: 0; padding: 0; }
                    .document-card li { display: flex; gap: 0.625rem; font-size: 0.875rem; color: #4b5563; margin-bottom: 0.625rem; }
                    .document-check { color: var(--saffron); }
                    .checklist-row { margin-top: 3.5rem; display: flex; justify-content: center; }
                    .checklist-button {
                        position: relative;
                        overflow: hidden;
                        display: inline-flex;
                        gap: 0.75rem;
                        padding: 1rem 2.5rem;
                        border: none;
                        border-radius: 999px;
                        color: white;
                        font-weight: 700;
                        cursor: pointer;
                        background: linear-gradient(90deg, hsl(18,100%,40%), hsl(24,100%,50%), hsl(32,100%,62%), hsl(24,100%,50%), hsl(18,100%,40%));
                        background-size: 300% auto;
                        animation: shimmer 2.5s linear infinite;
                        transition: transform 0.3s;
                    }
                    .checklist-button:hover { transform: scale(1.05); }
                    .checklist-button:active { transform: scale(0.95); }
                    .documentation-note { text-align: center; font-size: 0.75rem; color: #9ca3af; margin-top: 1.25rem; }
                    @media (max-width: 1024px) { .documentation-grid { grid-template-columns: repeat(2, 1fr); } }
                    @media (max-width: 640px) { .documentation-grid { grid-template-columns: 1fr; } }
                "#}
            </style>
            <div class="documentation-inner">
                <div class={classes!("documentation-header", Motion::Rise.class(section.visible))}>
                    <div class="pill">
                        <span class="live-dot"></span>
                        {"Documents Required"}
                    </div>
                    <h2>{"B.Tech Admission "}<span class="text-saffron">{"Documentation"}</span></h2>
                    <p class="section-lead">
                        {"Prepare all the required documents before applying. Keep originals and photocopies ready for a smooth admission process."}
                    </p>
                </div>

                <div class="documentation-grid">
                    { for DOCUMENT_CATEGORIES.iter().enumerate().map(|(i, category)| {
                        let gradient = format!("gradient-{}", category.gradient);
                        html! {
                            <div
                                key={category.title}
                                class={classes!("document-card", Motion::Rise.class(section.visible))}
                                style={format!("transition-delay: {}ms;", CARD_STAGGER.delay_for(i))}
                            >
                                <div class={classes!("document-bar", gradient.clone())}></div>
                                <div class={classes!("document-icon", gradient)}>{category.icon.glyph()}</div>
                                <h3><span>{category.emoji}</span>{category.title}</h3>
                                <ul>
                                    { for category.documents.iter().map(|doc| html! {
                                        <li key={*doc}>
                                            <span class="document-check">{"✔"}</span>
                                            <span>{*doc}</span>
                                        </li>
                                    }) }
                                </ul>
                            </div>
                        }
                    }) }
                </div>

                <Reveal threshold={0.1} delay_ms={500} motion={Motion::RiseShort} class="checklist-row">
                    <button class="checklist-button">
                        {"⬇ Download Complete Checklist"}
                    </button>
                </Reveal>

                <p class="documentation-note">
                    {"* All documents must be self-attested. Carry originals for verification."}
                </p>
            </div>
        </section>
    }
}
