use leptos::{html, prelude::*};

use crate::{
    contact::ContactMessage,
    site::{SocialKind, CONTACT_EMAIL, SOCIAL_LINKS},
};

const FIELD: &str = "w-full rounded-lg border border-slate-200 bg-white px-3 py-2 text-slate-900 placeholder:text-slate-400 focus:outline-none focus:ring-2 focus:ring-cyan-500/50 dark:border-white/10 dark:bg-white/5 dark:text-white";
const LABEL: &str = "mb-1 block text-sm text-slate-600 dark:text-slate-300";
const CARD: &str = "rounded-2xl border border-slate-200 bg-white p-6 shadow-sm backdrop-blur dark:border-white/10 dark:bg-white/5";

#[component]
pub fn Contact() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(name), Some(email), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        let msg = ContactMessage::new(name.value(), email.value(), message.value());
        match msg.mailto_uri(CONTACT_EMAIL) {
            Ok(uri) => {
                set_error.set(None);
                if let Err(e) = window().location().set_href(&uri) {
                    log::warn!("couldn't open mail draft: {e:?}");
                }
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <section
            id="contact"
            class="relative w-full bg-white py-20 text-slate-900 dark:bg-slate-950 dark:text-white"
        >
            <div class="mx-auto max-w-6xl px-6">
                <div class="mb-8">
                    <h2 class="text-3xl font-bold sm:text-4xl">"Let's build something great"</h2>
                    <p class="mt-3 max-w-2xl text-slate-600 dark:text-slate-300">
                        "Have a project in mind or just want to say hi? Drop a message and I'll get back to you."
                    </p>
                </div>
                <div class="grid gap-8 md:grid-cols-2">
                    <form on:submit=on_submit class=CARD>
                        <div class="grid gap-4">
                            <div>
                                <label for="contact_name" class=LABEL>"Name"</label>
                                <input
                                    id="contact_name"
                                    node_ref=name_ref
                                    required
                                    type="text"
                                    name="name"
                                    placeholder="Your name"
                                    class=FIELD
                                />
                            </div>
                            <div>
                                <label for="contact_email" class=LABEL>"Email"</label>
                                <input
                                    id="contact_email"
                                    node_ref=email_ref
                                    required
                                    type="email"
                                    name="email"
                                    placeholder="you@email.com"
                                    class=FIELD
                                />
                            </div>
                            <div>
                                <label for="contact_message" class=LABEL>"Message"</label>
                                <textarea
                                    id="contact_message"
                                    node_ref=message_ref
                                    required
                                    name="message"
                                    rows="5"
                                    placeholder="Tell me about your project..."
                                    class=format!("{FIELD} resize-none")
                                ></textarea>
                            </div>
                            {move || {
                                error
                                    .get()
                                    .map(|e| view! { <p class="text-sm text-red-500">{e}</p> })
                            }}
                            <button
                                type="submit"
                                class="inline-flex w-full items-center justify-center rounded-xl bg-gradient-to-r from-cyan-500 to-fuchsia-500 px-4 py-2 font-semibold text-white shadow-lg shadow-cyan-500/20 transition-transform duration-150 hover:scale-[1.02] active:scale-[0.98]"
                            >
                                "Send Message"
                            </button>
                        </div>
                    </form>
                    <div class=CARD>
                        <h3 class="text-lg font-semibold">"Connect"</h3>
                        <p class="mt-2 text-slate-600 dark:text-slate-300">
                            "I'm active on these platforms:"
                        </p>
                        <div class="mt-4 flex flex-wrap gap-3">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|s| {
                                    view! {
                                        <a
                                            href=s.href
                                            aria-label=s.label
                                            class="inline-flex items-center gap-2 rounded-lg border border-slate-200 bg-white px-3 py-2 text-sm text-slate-900 transition-colors hover:bg-slate-50 dark:border-white/10 dark:bg-white/5 dark:text-white"
                                        >
                                            <i class=icon_class(s.kind)></i>
                                            {s.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="mt-6 rounded-xl border border-slate-200 bg-white p-4 dark:border-white/10 dark:bg-white/5">
                            <p class="text-sm text-slate-600 dark:text-slate-300">
                                "Prefer a quick email? Send a note to"
                                <a
                                    href=format!("mailto:{CONTACT_EMAIL}")
                                    class="ml-1 bg-gradient-to-r from-cyan-600 to-fuchsia-600 bg-clip-text font-semibold text-transparent"
                                >
                                    {CONTACT_EMAIL}
                                </a>
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn icon_class(kind: SocialKind) -> &'static str {
    match kind {
        SocialKind::GitHub => "devicon-github-plain",
        SocialKind::LinkedIn => "devicon-linkedin-plain",
        SocialKind::Instagram => "extra-instagram",
        SocialKind::Email => "extra-email",
    }
}
