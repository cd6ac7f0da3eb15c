use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Becomes `true` the first time `target` scrolls into view and stays there.
pub fn use_reveal(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let visible = use_element_visibility(target);
    let (revealed, set_revealed) = signal(false);
    Effect::new(move |_| {
        if visible.get() {
            set_revealed.set(true);
        }
    });
    revealed
}

/// Classes that fade and lift an element in once `revealed` flips.
pub fn reveal_class(base: &'static str, revealed: bool) -> String {
    let state = if revealed {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-4"
    };
    format!("{base} transition-all duration-500 ease-out {state}")
}
