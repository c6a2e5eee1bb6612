use std::rc::Rc;

use yew::prelude::*;

use crate::config::SiteConfig;
use crate::count_up::{CountUp, CountUpConfig};
use crate::reveal::{RevealFlag, RevealOptions};
use crate::viewport;

/// Counters start once this much of them is on screen.
pub const COUNTER_THRESHOLD: f64 = 0.3;

pub struct RevealHandle {
    pub node_ref: NodeRef,
    pub visible: bool,
}

#[hook]
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

/// Reveals the element behind the returned `node_ref` the first time it
/// enters the viewport. `on_reveal` fires once, when the flag flips.
#[hook]
pub fn use_reveal(options: RevealOptions, on_reveal: Callback<()>) -> RevealHandle {
    let config = use_site_config();
    let options = options.fallback(config.fallback_on_unsupported);

    let node_ref = use_node_ref();
    let flag = use_mut_ref(RevealFlag::default);
    let visible = use_state_eq(|| false);

    {
        let node_ref = node_ref.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |options| {
                let watcher = if flag.borrow().is_visible() {
                    None
                } else {
                    let reveal: Rc<dyn Fn()> = Rc::new(move || {
                        if flag.borrow_mut().reveal() {
                            visible.set(true);
                            on_reveal.emit(());
                        }
                    });
                    viewport::watch(&node_ref, *options, reveal)
                };
                move || drop(watcher)
            },
            options,
        );
    }

    RevealHandle {
        node_ref,
        visible: *visible,
    }
}

/// Counts from 0 to `target` once the element behind the returned ref is
/// 30% visible. Returns the ref and the value to display.
#[hook]
pub fn use_count_up(target: u64, config: CountUpConfig) -> (NodeRef, u64) {
    let reveal = use_reveal(RevealOptions::new(COUNTER_THRESHOLD), Callback::noop());
    let value = use_state_eq(|| 0u64);
    let finished = use_state_eq(|| false);
    let started = use_mut_ref(|| false);
    let done = *finished;

    {
        let value = value.clone();
        let finished = finished.clone();
        use_effect_with_deps(
            move |&(visible, target, done)| {
                let mut interval = None;
                if visible && !done && !*started.borrow() {
                    *started.borrow_mut() = true;
                    let mut count = CountUp::new(target, config);
                    if count.needs_timer() {
                        log::debug!("counting up to {}", target);
                        interval = Some(gloo_timers::callback::Interval::new(config.tick_ms(), move || {
                            if let Some(next) = count.next() {
                                value.set(next);
                                if count.is_finished() {
                                    log::debug!("count-up reached {}", target);
                                    finished.set(true);
                                }
                            }
                        }));
                    } else {
                        finished.set(true);
                    }
                }
                // Runs on unmount, or when `finished` flips and the timer is spent.
                move || drop(interval)
            },
            (reveal.visible, target, done),
        );
    }

    (reveal.node_ref, *value)
}
