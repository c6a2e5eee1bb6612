use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::NodeRef;

use crate::reveal::{crosses_threshold, RevealOptions, RevealTiming};

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("IntersectionObserver unavailable: {0}")]
    Unsupported(String),
    #[error("reveal target is not mounted")]
    Detached,
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Owns one IntersectionObserver and the stagger timer it may schedule.
///
/// Dropping the watcher disconnects the observer and cancels a reveal that
/// has not fired yet, so unmounting never leaves callbacks behind.
pub struct ViewportWatcher {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl ViewportWatcher {
    pub fn observe(
        element: &Element,
        options: RevealOptions,
        on_enter: Rc<dyn Fn()>,
    ) -> Result<Self, WatchError> {
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();
        let threshold = options.threshold;
        let timing = options.timing();

        let callback = {
            let pending = pending.clone();
            let mut entered = false;
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                if entered {
                    return;
                }
                let crossed = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| {
                        crosses_threshold(entry.is_intersecting(), entry.intersection_ratio(), threshold)
                    });
                if !crossed {
                    return;
                }
                entered = true;
                observer.disconnect();
                log::debug!("viewport entry crossed {}, revealing in {} ms", threshold, timing.delay_ms());

                match timing {
                    RevealTiming::Now => on_enter(),
                    RevealTiming::After(delay_ms) => {
                        let on_enter = on_enter.clone();
                        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || on_enter()));
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| WatchError::Unsupported(format!("{:?}", e)))?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
            pending,
        })
    }
}

impl Drop for ViewportWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.pending.borrow_mut().take();
    }
}

/// Starts watching the element behind `node_ref`.
///
/// Returns `None` when nothing needs releasing later. If the browser cannot
/// observe and the options allow it, `on_enter` runs right away so content is
/// never stuck hidden.
pub fn watch(node_ref: &NodeRef, options: RevealOptions, on_enter: Rc<dyn Fn()>) -> Option<ViewportWatcher> {
    let result = node_ref
        .cast::<Element>()
        .ok_or(WatchError::Detached)
        .and_then(|element| ViewportWatcher::observe(&element, options, on_enter.clone()));

    match result {
        Ok(watcher) => Some(watcher),
        Err(WatchError::Detached) => {
            log::warn!("{}, revealing immediately", WatchError::Detached);
            on_enter();
            None
        }
        Err(e) if options.fallback_on_unsupported => {
            log::warn!("{}, revealing immediately", e);
            on_enter();
            None
        }
        Err(e) => {
            log::warn!("{}, content stays hidden", e);
            None
        }
    }
}
