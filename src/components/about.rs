use std::rc::Rc;

use yew::prelude::*;

use crate::components::icon::Icon;
use crate::components::section_header::SectionHeader;
use crate::content::Content;
use crate::hooks::use_reveal;
use crate::motion::section::SectionId;

const HEADER: usize = 0;
const JOURNEY: usize = 1;
const SKILLS: usize = 2;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub content: Rc<Content>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let content = &props.content;
    let (section, reveal) = use_reveal(3);

    html! {
        <section ref={section} id={SectionId::About.as_str()} class="section-padding tinted">
            <style>
                {r#"
                    .about-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 4rem;
                        align-items: center;
                    }
                    .journey-card {
                        border-radius: 1rem;
                        padding: 2rem;
                    }
                    .journey-card p {
                        color: var(--muted);
                        line-height: 1.7;
                        margin-bottom: 1.5rem;
                    }
                    .skills-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                    }
                    .skill-card {
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                        transition: transform 0.3s ease, background 0.3s ease;
                    }
                    .skill-card:hover { transform: scale(1.05); background: rgba(255, 255, 255, 0.1); }
                    .skill-card h4 { margin: 0.75rem 0 0.5rem; }
                    .skill-card p { font-size: 0.9rem; color: var(--muted); margin-bottom: 1rem; }
                "#}
            </style>
            <div class="container">
                <div class={reveal.class(HEADER)} data-reveal={HEADER.to_string()}>
                    <SectionHeader eyebrow="Get to know me" title="About Me" />
                </div>

                <div class="about-grid">
                    <div class={reveal.class(JOURNEY)} data-reveal={JOURNEY.to_string()}>
                        <div class="journey-card glass">
                            <h3 class="gradient-text">{"My Journey"}</h3>
                            { for content.about.iter().map(|paragraph| html! { <p>{paragraph}</p> }) }
                        </div>
                    </div>

                    <div class={format!("{} skills-grid", reveal.class(SKILLS))} data-reveal={SKILLS.to_string()}>
                        { for content.skills.iter().enumerate().map(|(index, skill)| html! {
                            <div
                                key={skill.title.clone()}
                                class="skill-card glass"
                                style={format!("animation-delay: {:.1}s", index as f32 * 0.1)}
                            >
                                <Icon kind={skill.icon} size={32} class={classes!("accent")} />
                                <h4>{&skill.title}</h4>
                                <p>{&skill.description}</p>
                                <div class="tags">
                                    { for skill.tech.iter().map(|tech| html! {
                                        <span key={tech.clone()} class="tag">{tech}</span>
                                    }) }
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
