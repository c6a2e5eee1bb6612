use yew::prelude::*;

use crate::components::counter::Counter;
use crate::components::reveal::Reveal;
use crate::content::{
    Icon, PlacementKind, Recording, Webinar, COMPARISON_STATS, PAST_RECORDINGS, PLACEMENT_COUNTERS,
    UPCOMING_WEBINARS,
};
use crate::count_up::CountUpConfig;
use crate::hooks::use_reveal;
use crate::reveal::{Motion, RevealOptions, Stagger};

const WEBINAR_STAGGER: Stagger = Stagger::every(150);
const ROW_STAGGER: Stagger = Stagger::new(200, 80);
const RECORDING_STAGGER: Stagger = Stagger::every(100);
const COUNTER_DURATION_MS: u32 = 1200;

#[derive(Properties, PartialEq)]
struct WebinarCardProps {
    webinar: &'static Webinar,
    index: usize,
}

#[function_component(WebinarCard)]
fn webinar_card(props: &WebinarCardProps) -> Html {
    let webinar = props.webinar;
    let (motion, header_class) = match webinar.kind {
        PlacementKind::OnCampus => (Motion::FromLeft, "webinar-head on-campus"),
        PlacementKind::OffCampus => (Motion::FromRight, "webinar-head off-campus"),
    };

    html! {
        <Reveal threshold={0.1} delay_ms={WEBINAR_STAGGER.delay_for(props.index)} motion={motion}>
            <div class="webinar-card">
                <div class={header_class}>
                    <div class="webinar-badges">
                        <span class="webinar-kind">{webinar.kind.icon().glyph()}{" "}{webinar.kind.label()}</span>
                        {
                            if webinar.live_soon {
                                html! { <span class="webinar-live"><span class="live-dot white"></span>{"LIVE SOON"}</span> }
                            } else {
                                html! { <span class="webinar-upcoming">{"Upcoming"}</span> }
                            }
                        }
                    </div>
                    <h3>{webinar.title}</h3>
                </div>
                <div class="webinar-body">
                    <div class="webinar-speaker">
                        <strong>{webinar.speaker}</strong>
                        <span class="muted">{" · "}</span>
                        <small>{webinar.role}</small>
                    </div>
                    <div class="webinar-when">
                        <span>{"📅 "}{webinar.date}</span>
                        <span>{"🕒 "}{webinar.time}</span>
                    </div>
                    <button class="webinar-register">{"🚀 Register Now — Free"}</button>
                </div>
            </div>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
struct RecordingCardProps {
    recording: &'static Recording,
    index: usize,
}

#[function_component(RecordingCard)]
fn recording_card(props: &RecordingCardProps) -> Html {
    let recording = props.recording;

    html! {
        <Reveal threshold={0.05} delay_ms={RECORDING_STAGGER.delay_for(props.index)} motion={Motion::RiseShort}>
            <div class="recording-card">
                <div class="recording-thumb">
                    <span class="recording-glyph">{recording.thumbnail}</span>
                    <div class="recording-play"><span>{"▶"}</span></div>
                    <span class="recording-kind">{recording.kind.label()}</span>
                    <span class="recording-duration">{recording.duration}</span>
                </div>
                <div class="recording-info">
                    <h4>{recording.title}</h4>
                    <p>{"🎥 "}{recording.speaker}</p>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(PlacementWebinarSection)]
pub fn placement_webinar_section() -> Html {
    let strip = use_reveal(RevealOptions::new(0.1), Callback::noop());
    let counter_config = CountUpConfig::per_frame(COUNTER_DURATION_MS);

    html! {
        <section class="webinars">
            <style>
                {r#"
                    .webinars { position: relative; overflow: hidden; padding: 5rem 1rem; background: var(--saffron-muted); }
                    .webinars-inner { max-width: 72rem; margin: 0 auto; }
                    .webinars-header { text-align: center; margin-bottom: 3.5rem; }
                    .webinars-header h2 { font-size: clamp(2.25rem, 4vw, 3rem); font-weight: 800; color: #111827; margin-bottom: 1rem; }
                    .webinars h3.group-title { font-size: 1.25rem; font-weight: 700; color: #1f2937; margin-bottom: 1.5rem; display: flex; align-items: center; gap: 0.5rem; }
                    .group-bar { width: 0.25rem; height: 1.5rem; border-radius: 999px; background: var(--saffron); }
                    .webinar-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; margin-bottom: 4rem; }
                    .webinar-card { border-radius: 1rem; overflow: hidden; background: white; border: 2px solid var(--saffron-20); transition: all 0.3s; }
                    .webinar-card:hover { transform: translateY(-0.25rem); box-shadow: 0 10px 40px var(--saffron-20); }
                    .webinar-head { padding: 1.25rem 1.5rem; color: white; }
                    .webinar-head.on-campus { background: linear-gradient(135deg, hsl(18,100%,40%), hsl(24,100%,50%)); }
                    .webinar-head.off-campus { background: linear-gradient(135deg, hsl(24,100%,50%), hsl(32,100%,62%)); }
                    .webinar-head h3 { font-weight: 700; font-size: 1.125rem; }
                    .webinar-badges { display: flex; justify-content: space-between; margin-bottom: 0.5rem; font-size: 0.75rem; }
                    .webinar-kind, .webinar-upcoming { background: rgba(255,255,255,0.2); padding: 0.25rem 0.75rem; border-radius: 999px; }
                    .webinar-kind { font-weight: 700; text-transform: uppercase; letter-spacing: 0.1em; }
                    .webinar-live { background: #ef4444; padding: 0.25rem 0.75rem; border-radius: 999px; font-weight: 700; animation: pulse 2s infinite; }
                    .live-dot.white { background: white; margin-right: 0.375rem; }
                    .webinar-body { padding: 1.5rem; }
                    .webinar-speaker, .webinar-when { display: flex; gap: 1rem; align-items: center; font-size: 0.875rem; color: #4b5563; margin-bottom: 0.75rem; }
                    .webinar-register { width: 100%; margin-top: 0.5rem; padding: 0.75rem; border: none; border-radius: 0.75rem; font-weight: 700; color: white; cursor: pointer; background: linear-gradient(90deg, hsl(18,100%,40%), hsl(24,100%,50%)); transition: transform 0.2s; }
                    .webinar-register:hover { transform: scale(1.05); }
                    .comparison { margin-bottom: 4rem; border-radius: 1.5rem; overflow: hidden; box-shadow: 0 20px 25px rgba(0,0,0,0.1); transition: all 0.8s; }
                    .comparison-title { display: flex; gap: 0.75rem; align-items: center; padding: 1.25rem 2rem; color: white; background: linear-gradient(90deg, hsl(18,100%,40%), hsl(24,100%,50%), hsl(32,100%,62%)); }
                    .comparison-table { background: white; }
                    .comparison-row { display: grid; grid-template-columns: repeat(4, 1fr); align-items: center; padding: 1rem 1.5rem; border-bottom: 1px solid #f9fafb; font-size: 0.875rem; color: #4b5563; }
                    .comparison-row.head { padding: 0.75rem 1.5rem; background: var(--saffron-muted); font-size: 0.75rem; font-weight: 700; text-transform: uppercase; letter-spacing: 0.05em; color: #6b7280; }
                    .comparison-row .label { display: flex; gap: 0.5rem; align-items: center; font-weight: 700; color: #374151; }
                    .comparison-row:hover { background: var(--saffron-muted); }
                    .comparison-counters { display: grid; grid-template-columns: repeat(4, 1fr); color: white; background: linear-gradient(90deg, hsl(18,100%,40%), hsl(24,100%,50%)); }
                    .comparison-counter { text-align: center; padding: 1.25rem 0; border-right: 1px solid rgba(255,255,255,0.2); }
                    .comparison-counter:last-child { border: 0; }
                    .comparison-counter .value { font-size: 1.875rem; font-weight: 800; }
                    .comparison-counter .label { font-size: 0.75rem; color: rgba(255,255,255,0.8); margin-top: 0.25rem; }
                    .recording-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.25rem; }
                    .recording-card { border-radius: 1rem; overflow: hidden; border: 1px solid var(--saffron-15); background: white; cursor: pointer; transition: box-shadow 0.3s; }
                    .recording-card:hover { box-shadow: 0 8px 30px var(--saffron-20); }
                    .recording-thumb { position: relative; height: 10rem; display: flex; align-items: center; justify-content: center; background: linear-gradient(135deg, var(--saffron-muted), white); }
                    .recording-glyph { font-size: 3.75rem; transition: transform 0.3s; }
                    .recording-card:hover .recording-glyph { transform: scale(1.1); }
                    .recording-play { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; opacity: 0; transition: all 0.3s; }
                    .recording-card:hover .recording-play { opacity: 1; background: var(--saffron-20); }
                    .recording-play span { width: 3.5rem; height: 3.5rem; border-radius: 50%; background: rgba(255,255,255,0.9); color: var(--saffron); display: flex; align-items: center; justify-content: center; }
                    .recording-kind { position: absolute; top: 0.5rem; left: 0.5rem; font-size: 0.75rem; font-weight: 600; padding: 0.125rem 0.5rem; border-radius: 999px; background: rgba(255,255,255,0.9); color: var(--saffron-dark); }
                    .recording-duration { position: absolute; bottom: 0.5rem; right: 0.5rem; font-size: 0.75rem; padding: 0.125rem 0.5rem; border-radius: 0.375rem; background: rgba(0,0,0,0.6); color: white; }
                    .recording-info { padding: 1rem; }
                    .recording-info h4 { font-weight: 600; font-size: 0.875rem; color: #1f2937; margin-bottom: 0.25rem; }
                    .recording-info p { font-size: 0.75rem; color: #6b7280; }
                    @media (max-width: 1024px) { .recording-grid { grid-template-columns: repeat(2, 1fr); } }
                    @media (max-width: 768px) {
                        .webinar-grid, .recording-grid { grid-template-columns: 1fr; }
                        .comparison-counters { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
            <div class="webinars-inner">
                <Reveal threshold={0.1} class="webinars-header">
                    <div class="pill">{Icon::Users.glyph()}{" Placement Webinars"}</div>
                    <h2>{"Campus vs "}<span class="text-saffron">{"Off-Campus"}</span>{" Placement"}</h2>
                    <p class="section-lead">
                        {"Learn, prepare, and get placed. Join live webinars or watch past recordings from industry experts covering both routes to your dream job."}
                    </p>
                </Reveal>

                <h3 class="group-title"><span class="group-bar"></span>{"🔴 Upcoming Webinars"}</h3>
                <div class="webinar-grid">
                    { for UPCOMING_WEBINARS.iter().enumerate().map(|(index, webinar)| html! {
                        <WebinarCard key={webinar.id} webinar={webinar} index={index} />
                    }) }
                </div>

                <div ref={strip.node_ref} class={classes!("comparison", Motion::Scale.class(strip.visible))}>
                    <div class="comparison-title">
                        {Icon::TrendingUp.glyph()}
                        <h3>{"Campus vs Off-Campus — Quick Comparison"}</h3>
                    </div>
                    <div class="comparison-table">
                        <div class="comparison-row head">
                            <span>{"Category"}</span>
                            <span>{PlacementKind::OnCampus.icon().glyph()}{" "}{PlacementKind::OnCampus.label()}</span>
                            <span>{PlacementKind::OffCampus.icon().glyph()}{" "}{PlacementKind::OffCampus.label()}</span>
                            <span></span>
                        </div>
                        { for COMPARISON_STATS.iter().enumerate().map(|(i, stat)| html! {
                            <div
                                key={stat.label}
                                class={classes!("comparison-row", Motion::FromLeft.class(strip.visible))}
                                style={format!("transition-delay: {}ms;", ROW_STAGGER.delay_for(i))}
                            >
                                <div class="label">{stat.icon.glyph()}{" "}{stat.label}</div>
                                <div>{stat.on_campus}</div>
                                <div>{stat.off_campus}</div>
                                <div></div>
                            </div>
                        }) }
                    </div>
                    <div class="comparison-counters">
                        { for PLACEMENT_COUNTERS.iter().map(|counter| html! {
                            <div key={counter.label} class="comparison-counter">
                                <div class="value">
                                    <Counter target={counter.target} suffix={counter.suffix} config={counter_config} />
                                </div>
                                <div class="label">{counter.label}</div>
                            </div>
                        }) }
                    </div>
                </div>

                <h3 class="group-title"><span class="group-bar"></span>{"🎬 Past Webinar Recordings"}</h3>
                <div class="recording-grid">
                    { for PAST_RECORDINGS.iter().enumerate().map(|(index, recording)| html! {
                        <RecordingCard key={recording.id} recording={recording} index={index} />
                    }) }
                </div>
            </div>
        </section>
    }
}
