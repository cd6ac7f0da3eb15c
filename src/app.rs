mod about;
mod contact;
mod hero;
mod portfolio;
mod reveal;
mod skills;
mod theme;

use chrono::{Datelike, Local};
use leptos::prelude::*;
use leptos_meta::*;

use crate::site::{self, BRAND_SUFFIX, FOOTER_LINKS, NAV_LINKS, OWNER};
use about::About;
use contact::Contact;
use hero::Hero;
use portfolio::Portfolio;
use skills::Skills;
use theme::{provide_theme, ThemeToggle};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();

    view! {
        <Title text=format!("{OWNER} - Creative Web Engineer") />
        <Meta name="description" content="Interactive portfolio: projects, skills and contact." />
        <div class="min-h-screen w-full bg-white text-slate-900 dark:bg-slate-950 dark:text-white">
            <Navbar />
            <Hero />
            <About />
            <Skills />
            <Portfolio />
            <Contact />
            <Footer />
            <a
                href="#home"
                aria-label="Scroll to top"
                class="fixed bottom-6 right-6 inline-flex h-10 w-10 items-center justify-center rounded-full border border-slate-200 bg-white text-slate-900 shadow-sm backdrop-blur transition-colors hover:bg-slate-50 dark:border-white/10 dark:bg-white/5 dark:text-white"
            >
                "↑"
            </a>
        </div>
    }
}

#[component]
fn Navbar() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 w-full border-b border-slate-200/80 bg-white/70 backdrop-blur dark:border-white/10 dark:bg-slate-950/70">
            <nav class="mx-auto flex max-w-7xl items-center justify-between px-6 py-3">
                <a href="#home" class="text-sm font-bold text-slate-900 dark:text-white">
                    <span class="bg-gradient-to-r from-cyan-600 to-fuchsia-600 bg-clip-text text-transparent">
                        {OWNER}
                    </span>
                    <span>{BRAND_SUFFIX}</span>
                </a>
                <div class="hidden items-center gap-6 text-sm text-slate-600 dark:text-slate-300 md:flex">
                    {NAV_LINKS
                        .iter()
                        .map(|l| {
                            view! {
                                <a href=l.href class="hover:text-slate-900 dark:hover:text-white">
                                    {l.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex items-center gap-2">
                    <ThemeToggle />
                    <a
                        href="#contact"
                        class="rounded-lg bg-gradient-to-r from-cyan-500 to-fuchsia-500 px-3 py-2 text-xs font-semibold text-white md:text-sm"
                    >
                        "Get in touch"
                    </a>
                </div>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = Local::now().year();
    view! {
        <footer class="border-t border-slate-200 bg-white/80 py-8 text-slate-500 dark:border-white/10 dark:bg-slate-950/80 dark:text-slate-400">
            <div class="mx-auto flex max-w-7xl flex-col items-center justify-between gap-4 px-6 sm:flex-row">
                <p class="text-sm" title=format!("Built {}", site::BUILD_TIME)>
                    {site::copyright(year)}
                </p>
                <div class="flex items-center gap-6 text-sm">
                    {FOOTER_LINKS
                        .iter()
                        .map(|l| {
                            view! {
                                <a href=l.href class="hover:text-slate-900 dark:hover:text-white">
                                    {l.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
