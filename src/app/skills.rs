use leptos::{html, prelude::*};

use super::reveal::{reveal_class, use_reveal};
use crate::skills::{group_delay_ms, Skill, SkillGroup, SKILL_GROUPS};

// Always rendered dark; this section ignores the page theme.
#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="relative w-full bg-slate-950 py-20 text-white">
            <div class="mx-auto max-w-6xl px-6">
                <h2 class="text-3xl font-bold sm:text-4xl">"Skills"</h2>
                <p class="mt-3 max-w-2xl text-slate-300">
                    "A snapshot of the technologies I use to build end-to-end products."
                </p>
                <div class="mt-10 grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                    {SKILL_GROUPS
                        .iter()
                        .enumerate()
                        .map(|(i, g)| view! { <SkillCard group=*g index=i /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(group: SkillGroup, index: usize) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    let revealed = use_reveal(card);
    view! {
        <div
            node_ref=card
            style=format!("transition-delay: {}ms", group_delay_ms(index))
            class=move || reveal_class(
                "rounded-2xl border border-white/10 bg-white/5 p-6 backdrop-blur",
                revealed.get(),
            )
        >
            <h3 class="text-lg font-semibold">{group.title}</h3>
            <div class="mt-5 space-y-4">
                {group.items.iter().map(|skill| view! { <SkillBar skill=*skill /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SkillBar(skill: Skill) -> impl IntoView {
    let track = NodeRef::<html::Div>::new();
    let revealed = use_reveal(track);
    view! {
        <div>
            <div class="mb-2 flex items-center justify-between text-sm">
                <span class="text-slate-200">{skill.name}</span>
                <span class="text-slate-400">{format!("{}%", skill.level)}</span>
            </div>
            <div node_ref=track class="h-2 w-full rounded-full bg-white/10">
                <div
                    class="h-2 rounded-full bg-gradient-to-r from-cyan-500 to-fuchsia-500 transition-[width] duration-[1200ms] ease-out"
                    style=move || {
                        let width = if revealed.get() { skill.bar_width() } else { "0%".to_string() };
                        format!("width: {width}")
                    }
                ></div>
            </div>
        </div>
    }
}
