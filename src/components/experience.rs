use std::rc::Rc;

use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::section_header::SectionHeader;
use crate::content::{Content, Experience as Position};
use crate::hooks::use_reveal;
use crate::motion::section::SectionId;

#[derive(Properties, PartialEq)]
pub struct ExperienceProps {
    pub content: Rc<Content>,
}

/// Timeline of past positions. Block 0 is the header, block `i + 1` is
/// the `i`-th position.
#[function_component(Experience)]
pub fn experience(props: &ExperienceProps) -> Html {
    let positions = &props.content.experiences;
    let (section, reveal) = use_reveal(positions.len() + 1);

    let entry = |index: usize, position: &Position| {
        let block = index + 1;
        html! {
            <div key={position.company.clone()} class={format!("{} timeline-entry", reveal.class(block))} data-reveal={block.to_string()}>
                <div class="timeline-dot"></div>
                <div class="timeline-card glass">
                    <div class="timeline-head">
                        <div>
                            <h3 class="gradient-text">{&position.position}</h3>
                            <div class="meta-line strong">
                                <Icon kind={IconKind::Building} size={16} />
                                <span>{&position.company}</span>
                            </div>
                        </div>
                        <div class="timeline-when">
                            <div class="meta-line">
                                <Icon kind={IconKind::Calendar} size={14} />
                                <span>{&position.period}</span>
                            </div>
                            <div class="meta-line">
                                <Icon kind={IconKind::MapPin} size={14} />
                                <span>{&position.location}</span>
                            </div>
                        </div>
                    </div>
                    <p class="timeline-description">{&position.description}</p>
                    <h4 class="accent">{"Key Achievements:"}</h4>
                    <ul class="achievements">
                        { for position.achievements.iter().map(|achievement| html! {
                            <li>{achievement}</li>
                        }) }
                    </ul>
                    <div class="tags">
                        { for position.tech.iter().map(|tech| html! {
                            <span key={tech.clone()} class="tag">{tech}</span>
                        }) }
                    </div>
                </div>
            </div>
        }
    };

    html! {
        <section ref={section} id={SectionId::Experience.as_str()} class="section-padding tinted">
            <style>
                {r#"
                    .timeline {
                        position: relative;
                        max-width: 56rem;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 4rem;
                    }
                    .timeline::before {
                        content: '';
                        position: absolute;
                        left: 2rem;
                        top: 0;
                        bottom: 0;
                        width: 2px;
                        background: linear-gradient(to bottom, var(--primary), transparent);
                    }
                    .timeline-entry { position: relative; }
                    .timeline-dot {
                        position: absolute;
                        left: 1.5rem;
                        width: 1rem;
                        height: 1rem;
                        border-radius: 50%;
                        background: var(--primary);
                        border: 4px solid var(--background);
                    }
                    .timeline-card {
                        margin-left: 5rem;
                        border-radius: 1rem;
                        padding: 2rem;
                    }
                    .timeline-head {
                        display: flex;
                        justify-content: space-between;
                        flex-wrap: wrap;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }
                    .timeline-when { color: var(--muted); font-size: 0.9rem; }
                    .meta-line { display: flex; align-items: center; gap: 0.4rem; }
                    .meta-line.strong { font-weight: 500; }
                    .timeline-description { color: var(--muted); line-height: 1.7; margin-bottom: 1.5rem; }
                    .achievements { color: var(--muted); font-size: 0.9rem; margin-bottom: 1.5rem; }
                    .achievements li { margin-bottom: 0.5rem; }
                    @media (max-width: 768px) {
                        .timeline::before, .timeline-dot { display: none; }
                        .timeline-card { margin-left: 0; }
                    }
                "#}
            </style>
            <div class="container">
                <div class={reveal.class(0)} data-reveal="0">
                    <SectionHeader eyebrow="My journey" title="Experience" />
                </div>
                <div class="timeline">
                    { for positions.iter().enumerate().map(|(index, position)| entry(index, position)) }
                </div>
            </div>
        </section>
    }
}
