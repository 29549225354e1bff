use std::rc::Rc;

use log::error;
use yew::prelude::*;

use crate::components::{
    about::About, contact::Contact, experience::Experience, hero::Hero, projects::Projects,
};
use crate::content::Content;
use crate::hooks::use_active_section;
use crate::motion::section::SectionId;
use crate::Nav;

const GLOBAL_CSS: &str = r#"
    :root {
        --background: #0b0f19;
        --foreground: #f8fafc;
        --primary: #38bdf8;
        --muted: #94a3b8;
        --border: rgba(255, 255, 255, 0.1);
    }
    * { box-sizing: border-box; }
    html { scroll-behavior: smooth; }
    body {
        margin: 0;
        background: var(--background);
        color: var(--foreground);
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .container { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
    .container.wide { max-width: 80rem; }
    .section-padding { padding: 6rem 0; }
    .tinted { background: rgba(30, 41, 59, 0.3); }
    .glass {
        background: rgba(255, 255, 255, 0.05);
        backdrop-filter: blur(12px);
        border: 1px solid var(--border);
    }
    .gradient-text {
        background: linear-gradient(90deg, var(--foreground), var(--primary));
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .accent { color: var(--primary); }
    .muted { color: var(--muted); }
    .section-header { text-align: center; margin-bottom: 4rem; }
    .section-header .eyebrow {
        color: var(--primary);
        font-family: monospace;
        font-size: 0.875rem;
        letter-spacing: 0.1em;
        margin-bottom: 1rem;
    }
    .section-header h2 { font-size: clamp(2.25rem, 5vw, 3rem); margin: 0 0 1.5rem; }
    .section-lead { color: #9ca3af; font-size: 1.25rem; max-width: 48rem; margin: 2rem auto 0; }
    .accent-rule {
        width: 6rem;
        height: 4px;
        margin: 0 auto;
        background: linear-gradient(90deg, var(--primary), transparent);
    }
    .tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
    .tag {
        padding: 0.25rem 0.6rem;
        font-size: 0.75rem;
        font-family: monospace;
        border-radius: 0.375rem;
        color: var(--primary);
        background: rgba(56, 189, 248, 0.2);
    }
    .reveal {
        opacity: 0;
        transform: translateY(40px);
        transition: opacity 0.8s ease, transform 0.8s ease;
    }
    .reveal.active {
        opacity: 1;
        transform: translateY(0);
    }
"#;

#[function_component(Home)]
pub fn home() -> Html {
    let content: Rc<Content> = use_memo(
        |_| {
            Content::load().unwrap_or_else(|err| {
                error!("{}", err);
                Content::default()
            })
        },
        (),
    );
    let active = use_active_section();

    html! {
        <ContextProvider<SectionId> context={active}>
            <style>{GLOBAL_CSS}</style>
            <Nav />
            <main>
                <Hero content={content.clone()} />
                <About content={content.clone()} />
                <Projects content={content.clone()} />
                <Experience content={content.clone()} />
                <Contact content={content} />
            </main>
        </ContextProvider<SectionId>>
    }
}
