use leptos::prelude::*;

use crate::portfolio::{catalog, categories, select, CategoryFilter, Project};

const ACTIVE_BUTTON: &str =
    "rounded-full px-4 py-2 text-sm transition-colors bg-gradient-to-r from-cyan-500 to-fuchsia-500 text-white";
const IDLE_BUTTON: &str = "rounded-full px-4 py-2 text-sm transition-colors border border-slate-200 bg-white text-slate-900 hover:bg-slate-50 dark:border-white/10 dark:bg-white/5 dark:text-white/80 dark:hover:bg-white/10";

#[component]
pub fn Portfolio() -> impl IntoView {
    let projects = catalog();
    let (filter, set_filter) = signal(CategoryFilter::All);
    let filtered = Memo::new(move |_| filter.with(|f| select(projects, f)));

    view! {
        <section
            id="portfolio"
            class="relative w-full bg-white py-20 text-slate-900 dark:bg-slate-950 dark:text-white"
        >
            <div class="mx-auto max-w-6xl px-6">
                <div class="flex flex-col items-start justify-between gap-6 sm:flex-row sm:items-end">
                    <div>
                        <h2 class="text-3xl font-bold sm:text-4xl">"Featured Work"</h2>
                        <p class="mt-3 max-w-2xl text-slate-600 dark:text-slate-300">
                            "A curated selection of recent projects and explorations."
                        </p>
                    </div>
                    <button
                        on:click=move |_| set_filter.set(CategoryFilter::All)
                        class="rounded-xl border border-slate-200 bg-white px-4 py-2 text-sm font-medium text-slate-900 shadow-sm backdrop-blur transition-colors hover:bg-slate-50 dark:border-white/10 dark:bg-white/5 dark:text-white/90 dark:hover:bg-white/10"
                    >
                        "View All Projects"
                    </button>
                </div>
                <div class="mt-8 flex flex-wrap gap-2">
                    {categories(projects)
                        .into_iter()
                        .map(|label| {
                            let text = label.clone();
                            let selected = label.clone();
                            view! {
                                <button
                                    on:click=move |_| set_filter.set(CategoryFilter::from(label.as_str()))
                                    class=move || {
                                        if filter.with(|f| f.is_selected(&selected)) {
                                            ACTIVE_BUTTON
                                        } else {
                                            IDLE_BUTTON
                                        }
                                    }
                                >
                                    {text}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="mt-8 grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                    <For
                        each=move || filtered.get()
                        key=|p| p.id
                        children=|p| view! { <ProjectCard project=p /> }
                    />
                </div>
                <Show when=move || filtered.with(Vec::is_empty)>
                    <p class="mt-8 text-sm text-slate-500 dark:text-slate-400">
                        "Nothing here yet."
                    </p>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="group animate-fade-up overflow-hidden rounded-2xl border border-slate-200 bg-white shadow-sm backdrop-blur dark:border-white/10 dark:bg-white/5">
            <div class="relative h-48 w-full overflow-hidden">
                <img
                    src=project.thumbnail_link.as_str()
                    alt=project.title.as_str()
                    class="h-full w-full object-cover transition-transform duration-500 group-hover:scale-105"
                />
                <div class="pointer-events-none absolute inset-0 bg-gradient-to-t from-black/40 to-transparent dark:from-slate-950/60" />
            </div>
            <div class="p-5">
                <div class="flex items-center justify-between gap-2">
                    <h3 class="text-lg font-semibold">{project.title.as_str()}</h3>
                    <span class="text-xs text-slate-500 dark:text-slate-400">
                        {project.category.as_str()}
                    </span>
                </div>
                <p class="mt-1 line-clamp-2 text-sm text-slate-600 dark:text-slate-300">
                    {project.description.as_str()}
                </p>
                <div class="mt-4 flex items-center gap-3">
                    <a
                        href=project.demo_link.as_str()
                        class="inline-flex items-center gap-2 rounded-lg bg-gradient-to-r from-cyan-500 to-fuchsia-500 px-3 py-2 text-xs font-semibold text-white shadow-cyan-500/20 hover:opacity-95"
                    >
                        "Live Demo ↗"
                    </a>
                </div>
            </div>
        </article>
    }
}
