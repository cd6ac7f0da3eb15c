use leptos::{ev::MouseEvent, html, prelude::*};

use crate::{
    hero::{title_glyphs, Tilt},
    site::{SPLINE_SCENE, TAGLINE},
};

#[component]
pub fn Hero() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let (tilt, set_tilt) = signal(Tilt::default());

    let on_move = move |ev: MouseEvent| {
        let Some(el) = section.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        set_tilt.set(Tilt::from_pointer(
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
        ));
    };

    view! {
        <section
            node_ref=section
            id="home"
            on:mousemove=on_move
            on:mouseleave=move |_| set_tilt.set(Tilt::default())
            class="relative min-h-[90vh] w-full overflow-hidden bg-gradient-to-b from-slate-50 via-white to-slate-100 text-slate-900 dark:from-slate-900 dark:via-slate-900 dark:to-slate-950 dark:text-white"
        >
            // soft gradient orbs for depth
            <div
                class="pointer-events-none absolute inset-0 transition-transform duration-300"
                style=move || format!("transform: {}", tilt.get().background_transform())
            >
                <div class="pointer-events-none absolute -top-24 -left-24 h-72 w-72 rounded-full bg-fuchsia-400/20 blur-3xl dark:bg-fuchsia-500/20" />
                <div class="pointer-events-none absolute -bottom-24 -right-24 h-72 w-72 rounded-full bg-cyan-400/20 blur-3xl dark:bg-cyan-500/20" />
            </div>
            <div class="relative mx-auto grid max-w-7xl grid-cols-1 items-center gap-10 px-6 py-24 md:grid-cols-2 md:py-28 lg:py-32">
                <div
                    class="relative z-10 animate-fade-up transition-transform duration-300"
                    style=move || format!("transform: {}", tilt.get().content_transform())
                >
                    <div class="mb-4 inline-flex items-center gap-2 rounded-full border border-slate-900/10 bg-white/70 px-3 py-1 backdrop-blur dark:border-white/10 dark:bg-white/5">
                        <span class="text-cyan-600 dark:text-cyan-300">"✦"</span>
                        <span class="text-xs text-slate-700/80 dark:text-cyan-100/80">
                            "Interactive Portfolio"
                        </span>
                    </div>
                    <AnimatedTitle text=TAGLINE />
                    <p class="mt-4 max-w-xl text-lg text-slate-600 dark:text-slate-300">
                        "I craft delightful web experiences with cutting-edge tech, smooth motion, and a sprinkle of playful 3D."
                    </p>
                    <div class="mt-8 flex flex-wrap items-center gap-4">
                        <a
                            href="#portfolio"
                            class="group inline-flex items-center gap-2 rounded-xl bg-gradient-to-r from-cyan-500 to-fuchsia-500 px-5 py-3 text-sm font-semibold text-white shadow-lg shadow-cyan-500/20 transition-transform duration-200 hover:scale-[1.03] active:scale-[0.98]"
                        >
                            "View My Work"
                            <span class="transition-transform group-hover:translate-x-0.5">"→"</span>
                        </a>
                        <a
                            href="#about"
                            class="inline-flex items-center rounded-xl border border-slate-900/10 bg-white/70 px-5 py-3 text-sm font-semibold text-slate-900 backdrop-blur transition-colors hover:bg-white/90 dark:border-white/10 dark:bg-white/5 dark:text-white/90 dark:hover:bg-white/10"
                        >
                            "About Me"
                        </a>
                    </div>
                </div>
                <div class="relative h-[420px] w-full md:h-[520px]">
                    <div class="pointer-events-none absolute inset-0 rounded-3xl bg-gradient-to-tr from-cyan-400/20 to-fuchsia-400/20 blur-2xl" />
                    <div class="relative h-full w-full overflow-hidden rounded-3xl border border-slate-900/10 bg-white shadow-2xl backdrop-blur dark:border-white/10 dark:bg-white/5">
                        <spline-viewer url=SPLINE_SCENE class="block h-full w-full"></spline-viewer>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AnimatedTitle(text: &'static str) -> impl IntoView {
    view! {
        <h1 class="text-4xl font-extrabold tracking-tight sm:text-5xl lg:text-6xl">
            <span class="sr-only">{text}</span>
            <div aria-hidden="true" class="flex flex-wrap">
                {title_glyphs(text)
                    .into_iter()
                    .map(|g| {
                        view! {
                            <span
                                class="mr-[0.02em] inline-block animate-fade-up bg-gradient-to-r from-slate-900 to-slate-700 bg-clip-text text-transparent dark:from-white dark:to-white/80"
                                style=format!("animation-delay: {}ms", g.delay_ms)
                            >
                                {g.ch.to_string()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </h1>
    }
}
