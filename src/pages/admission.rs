use std::rc::Rc;

use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::ADMISSION_STEPS;
use crate::progress::ProgressLine;
use crate::reveal::{RevealSet, Stagger};

const STEP_STAGGER: Stagger = Stagger::every(150);
const STEP_THRESHOLD: f64 = 0.2;

/// Revealed steps by id, plus the furthest point the line has reached.
#[derive(Clone, PartialEq)]
pub struct Timeline {
    revealed: RevealSet<u32>,
    line: ProgressLine,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            revealed: RevealSet::default(),
            line: ProgressLine::new(ADMISSION_STEPS.len()),
        }
    }
}

pub struct StepRevealed {
    pub id: u32,
    pub index: usize,
}

impl Reducible for Timeline {
    type Action = StepRevealed;

    fn reduce(self: Rc<Self>, action: StepRevealed) -> Rc<Self> {
        if self.revealed.contains(&action.id) {
            return self;
        }
        let mut next = (*self).clone();
        next.revealed.insert(action.id);
        next.line.mark_visible(action.index);
        log::debug!(
            "admission step {} revealed ({} of {}), line at {}%",
            action.id,
            next.revealed.len(),
            ADMISSION_STEPS.len(),
            next.line.percent()
        );
        Rc::new(next)
    }
}

#[function_component(AdmissionProcess)]
pub fn admission_process() -> Html {
    let timeline = use_reducer(Timeline::default);

    html! {
        <section class="admission">
            <style>
                {r#"
                    .admission { padding: 5rem 1rem; background: var(--background); }
                    .admission-header { text-align: center; margin-bottom: 4rem; }
                    .admission-header h2 { font-size: clamp(2.25rem, 4vw, 3rem); font-weight: 700; margin-bottom: 1rem; }
                    .admission-rule { margin: 1.25rem auto 0; height: 0.25rem; width: 6rem; border-radius: 999px; background: var(--saffron); }
                    .timeline { position: relative; max-width: 42rem; margin: 0 auto; }
                    .timeline-track { position: absolute; left: 2rem; top: 2.5rem; bottom: 2.5rem; width: 2px; background: var(--border); }
                    .timeline-fill { position: absolute; left: 2rem; top: 2.5rem; width: 2px; background: var(--saffron); transition: height 1s ease-out; }
                    .timeline-steps { display: flex; flex-direction: column; gap: 2.5rem; }
                    .timeline-step { position: relative; display: flex; align-items: flex-start; gap: 1.5rem; }
                    .step-circle-wrap { position: relative; flex-shrink: 0; z-index: 1; }
                    .step-circle { width: 4rem; height: 4rem; border-radius: 50%; background: var(--saffron); display: flex; align-items: center; justify-content: center; font-size: 1.6rem; box-shadow: 0 10px 15px rgba(0,0,0,0.1); transition: box-shadow 0.7s; }
                    .reveal-shown .step-circle { box-shadow: 0 0 24px var(--saffron-50); animation: saffron-pulse 2s ease-in-out infinite; }
                    .step-number { position: absolute; top: -0.25rem; right: -0.25rem; width: 1.25rem; height: 1.25rem; border-radius: 50%; background: white; border: 2px solid var(--saffron); color: var(--saffron); font-size: 10px; font-weight: 700; display: flex; align-items: center; justify-content: center; }
                    .step-card { flex: 1; background: var(--card); border: 1px solid var(--border); border-radius: 1rem; padding: 1.5rem; transition: all 0.3s; }
                    .step-card:hover { transform: translateY(-0.25rem); border-color: var(--saffron-40); box-shadow: 0 4px 6px rgba(0,0,0,0.1); }
                    .step-card h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.5rem; transition: color 0.3s; }
                    .step-card:hover h3 { color: var(--saffron); }
                    .step-card p { color: var(--muted); font-size: 0.875rem; line-height: 1.6; }
                "#}
            </style>
            <div class="admission-header">
                <h2>{"BTech Admission Process"}</h2>
                <p class="section-lead">
                    {"Follow these simple steps to secure your admission and kickstart your engineering journey."}
                </p>
                <div class="admission-rule"></div>
            </div>

            <div class="timeline">
                <div class="timeline-track"></div>
                <div class="timeline-fill" style={timeline.line.css_height()}></div>

                <div class="timeline-steps">
                    { for ADMISSION_STEPS.iter().enumerate().map(|(index, step)| {
                        let on_reveal = {
                            let timeline = timeline.dispatcher();
                            let id = step.id;
                            Callback::from(move |_| timeline.dispatch(StepRevealed { id, index }))
                        };
                        html! {
                            <Reveal
                                key={step.id}
                                threshold={STEP_THRESHOLD}
                                defer_ms={STEP_STAGGER.delay_for(index)}
                                on_reveal={on_reveal}
                            >
                                <div class="timeline-step">
                                    <div class="step-circle-wrap">
                                        <div class="step-circle">{step.icon.glyph()}</div>
                                        <span class="step-number">{step.id}</span>
                                    </div>
                                    <div class="step-card">
                                        <h3>{step.title}</h3>
                                        <p>{step.description}</p>
                                    </div>
                                </div>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::RevealOptions;

    fn reveal(timeline: Rc<Timeline>, index: usize) -> Rc<Timeline> {
        let id = ADMISSION_STEPS[index].id;
        timeline.reduce(StepRevealed { id, index })
    }

    #[test]
    fn out_of_order_reveals_keep_the_furthest_step() {
        let timeline = Rc::new(Timeline::default());
        let timeline = reveal(timeline, 3);
        assert_eq!(timeline.line.percent(), 80.0);
        let timeline = reveal(timeline, 1);
        assert_eq!(timeline.line.percent(), 80.0);
        assert_eq!(timeline.revealed.len(), 2);
    }

    #[test]
    fn repeated_reveal_returns_the_same_state() {
        let timeline = reveal(Rc::new(Timeline::default()), 0);
        let again = reveal(timeline.clone(), 0);
        assert!(Rc::ptr_eq(&timeline, &again));
    }

    #[test]
    fn all_steps_fill_the_line() {
        let timeline = (0..ADMISSION_STEPS.len()).fold(Rc::new(Timeline::default()), reveal);
        assert_eq!(timeline.line.percent(), 100.0);
        assert!(ADMISSION_STEPS.iter().all(|s| timeline.revealed.contains(&s.id)));
    }

    #[test]
    fn steps_defer_by_their_own_position() {
        let delays: Vec<u32> = (0..ADMISSION_STEPS.len())
            .map(|i| RevealOptions::new(STEP_THRESHOLD).deferred(STEP_STAGGER.delay_for(i)).timing().delay_ms())
            .collect();
        assert_eq!(delays, [0, 150, 300, 450, 600]);
    }
}
