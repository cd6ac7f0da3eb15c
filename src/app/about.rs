use leptos::{html, prelude::*};

use super::reveal::{reveal_class, use_reveal};
use crate::skills::{highlight_delay_ms, Highlight, HIGHLIGHTS};

// Always rendered dark; this section ignores the page theme.
#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="relative w-full bg-slate-950 py-20 text-white">
            <div class="mx-auto max-w-6xl px-6">
                <div class="mb-10">
                    <h2 class="text-3xl font-bold sm:text-4xl">"About Me"</h2>
                    <p class="mt-3 max-w-2xl text-slate-300">
                        "I'm a creative developer focused on building polished, delightful experiences. I blend modern design, smooth motion, and robust engineering to turn ideas into products people love."
                    </p>
                </div>
                <div class="grid grid-cols-2 gap-4 sm:grid-cols-4">
                    {HIGHLIGHTS
                        .iter()
                        .enumerate()
                        .map(|(i, h)| view! { <HighlightTile highlight=*h index=i /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn HighlightTile(highlight: Highlight, index: usize) -> impl IntoView {
    let tile = NodeRef::<html::Div>::new();
    let revealed = use_reveal(tile);
    view! {
        <div
            node_ref=tile
            style=format!("transition-delay: {}ms", highlight_delay_ms(index))
            class=move || reveal_class(
                "flex items-center gap-3 rounded-2xl border border-white/10 bg-white/5 p-4 backdrop-blur hover:bg-white/10",
                revealed.get(),
            )
        >
            <div class="flex h-10 w-10 items-center justify-center rounded-xl bg-gradient-to-br from-cyan-500/30 to-fuchsia-500/30 text-sm">
                {highlight.icon}
            </div>
            <span class="text-sm font-semibold text-slate-100">{highlight.label}</span>
        </div>
    }
}
