use yew::prelude::*;

use crate::count_up::{group_thousands, CountUpConfig};
use crate::hooks::use_count_up;

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: u64,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub config: CountUpConfig,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let (node_ref, value) = use_count_up(props.target, props.config);

    html! {
        <span ref={node_ref} class={props.class.clone()}>
            { group_thousands(value) }{ props.suffix.clone() }
        </span>
    }
}
