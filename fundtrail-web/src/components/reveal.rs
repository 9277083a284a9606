use fundtrail_core::RevealOptions;
use yew::prelude::*;

use crate::hooks::use_scroll_reveal;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub options: RevealOptions,
}

/// Block that fades in when scrolled into view.
#[function_component(Reveal)]
pub fn reveal(p: &Props) -> Html {
    let node = use_node_ref();
    use_scroll_reveal(node.clone(), p.options.clone());
    html! {
        <div ref={node} class={classes!("reveal", p.class.clone())}>
            { p.children.clone() }
        </div>
    }
}
