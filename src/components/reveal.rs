use yew::prelude::*;

use crate::reveal::{Motion, RevealOptions};
use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(0.15)]
    pub threshold: f64,
    /// Timer delay after the element's own intersection fires.
    #[prop_or_default]
    pub defer_ms: u32,
    /// CSS transition delay once revealed.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(Motion::Rise)]
    pub motion: Motion,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_reveal: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let options = RevealOptions::new(props.threshold).deferred(props.defer_ms);
    let handle = use_reveal(options, props.on_reveal.clone());

    html! {
        <div
            ref={handle.node_ref}
            class={classes!(props.motion.class(handle.visible), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
