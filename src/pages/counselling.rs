use yew::prelude::*;

use crate::content::{Icon, COUNSELLING_BODIES};

#[function_component(CounsellingSection)]
pub fn counselling_section() -> Html {
    html! {
        <section class="counselling">
            <style>
                {r#"
                    .counselling { padding: 5rem 0; background: linear-gradient(180deg, #fff7ed, #ffffff, #fff7ed); }
                    .counselling-inner { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
                    .counselling-header { text-align: center; margin-bottom: 3.5rem; }
                    .counselling-header h2 { font-size: 2.25rem; font-weight: 700; color: #ea580c; margin-bottom: 0.75rem; }
                    .counselling-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
                    .counselling-card {
                        background: white;
                        border: 1px solid #fed7aa;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        box-shadow: 0 1px 2px rgba(0,0,0,0.05);
                        transition: all 0.3s;
                    }
                    .counselling-card:hover { box-shadow: 0 20px 25px rgba(0,0,0,0.1); transform: translateY(-0.5rem); }
                    .counselling-icon { width: 3.5rem; height: 3.5rem; display: flex; align-items: center; justify-content: center; border-radius: 0.75rem; background: #f97316; margin-bottom: 1rem; font-size: 1.75rem; transition: transform 0.3s; }
                    .counselling-card:hover .counselling-icon { transform: scale(1.1); }
                    .counselling-card h3 { font-size: 1.25rem; font-weight: 600; color: #1f2937; }
                    .counselling-subtitle { font-size: 0.875rem; color: #6b7280; margin-bottom: 0.75rem; }
                    .counselling-stats { display: flex; justify-content: space-between; font-size: 0.875rem; margin-bottom: 0.75rem; color: #ea580c; font-weight: 500; }
                    .counselling-card p.description { color: #4b5563; font-size: 0.875rem; margin-bottom: 1rem; }
                    .counselling-more { background: none; border: none; padding: 0; color: #ea580c; font-weight: 600; cursor: pointer; }
                    .counselling-more:hover { color: #c2410c; }
                    @media (max-width: 1024px) { .counselling-grid { grid-template-columns: repeat(2, 1fr); } }
                    @media (max-width: 640px) { .counselling-grid { grid-template-columns: 1fr; } }
                "#}
            </style>
            <div class="counselling-inner">
                <div class="counselling-header">
                    <h2>{"Engineering Counselling"}</h2>
                    <p class="section-lead">
                        {"Explore All Major Counselling Processes Across India To Secure Admission In Top Engineering Colleges."}
                    </p>
                </div>

                <div class="counselling-grid">
                    { for COUNSELLING_BODIES.iter().map(|body| html! {
                        <div key={body.title} class="counselling-card">
                            <div class="counselling-icon">{body.icon.glyph()}</div>
                            <h3>{body.title}</h3>
                            <p class="counselling-subtitle">{body.subtitle}</p>
                            <div class="counselling-stats">
                                <span>{Icon::Users.glyph()}{" "}{body.students}</span>
                                <span>{Icon::Building.glyph()}{" "}{body.colleges}</span>
                            </div>
                            <p class="description">{body.description}</p>
                            <button class="counselling-more">{"View Details →"}</button>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
