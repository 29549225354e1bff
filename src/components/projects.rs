use std::rc::Rc;

use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::section_header::SectionHeader;
use crate::content::Content;
use crate::hooks::use_reveal;
use crate::motion::section::SectionId;

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub content: Rc<Content>,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let content = &props.content;
    let projects = &content.projects;
    // header, one block per project, then the "view all" link
    let (section, reveal) = use_reveal(projects.len() + 2);
    let view_all = projects.len() + 1;

    html! {
        <section ref={section} id={SectionId::Projects.as_str()} class="section-padding">
            <style>
                {r#"
                    .projects-list {
                        display: flex;
                        flex-direction: column;
                        gap: 8rem;
                    }
                    .project {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 4rem;
                        align-items: center;
                    }
                    .project.flipped .project-image { order: 2; }
                    .project-image {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .project-image img {
                        width: 100%;
                        height: 20rem;
                        object-fit: cover;
                        display: block;
                        transition: transform 0.7s ease;
                    }
                    .project-image:hover img { transform: scale(1.05); }
                    .project-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        gap: 1rem;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
                        opacity: 0;
                        transition: opacity 0.5s ease;
                    }
                    .project-image:hover .project-overlay { opacity: 1; }
                    .project-overlay a {
                        padding: 0.75rem;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.1);
                        color: white;
                    }
                    .featured-badge {
                        display: inline-block;
                        padding: 0.5rem 1rem;
                        font-size: 0.75rem;
                        border-radius: 999px;
                        color: var(--primary);
                        background: rgba(56, 189, 248, 0.2);
                        border: 1px solid rgba(56, 189, 248, 0.3);
                    }
                    .project-category { color: #6b7280; font-size: 0.9rem; }
                    .project h3 { font-size: 2.25rem; margin: 0.25rem 0 1rem; }
                    .project-description { color: #d1d5db; font-size: 1.1rem; line-height: 1.7; }
                    .stack-title { color: #9ca3af; font-size: 0.85rem; letter-spacing: 0.05em; }
                    .project-actions { display: flex; flex-wrap: wrap; gap: 1rem; padding-top: 1rem; }
                    .pill-button {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1.5rem;
                        border-radius: 999px;
                        font-weight: 500;
                        text-decoration: none;
                        transition: transform 0.3s ease;
                    }
                    .pill-button.primary { background: var(--primary); color: var(--background); }
                    .pill-button:hover { transform: scale(1.05); }
                    .view-all { text-align: center; margin-top: 5rem; }
                    .view-all a {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: var(--primary);
                        font-size: 1.1rem;
                        text-decoration: none;
                    }
                "#}
            </style>
            <div class="container wide">
                <div class={reveal.class(0)} data-reveal="0">
                    <SectionHeader eyebrow="Portfolio" title="Featured Projects">
                        <p class="section-lead">
                            {"A selection of projects that showcase my skills in design, development, and problem-solving"}
                        </p>
                    </SectionHeader>
                </div>

                <div class="projects-list">
                    { for projects.iter().enumerate().map(|(index, project)| {
                        let block = index + 1;
                        html! {
                            <div
                                key={project.title.clone()}
                                class={classes!(
                                    "project",
                                    reveal.is_active(block).then(|| "active"),
                                    (index % 2 == 1).then(|| "flipped"),
                                    "reveal"
                                )}
                                data-reveal={block.to_string()}
                            >
                                <div class="project-image">
                                    <img src={project.image.clone()} alt={project.title.clone()} />
                                    <div class="project-overlay">
                                        <a href={project.live_url.clone()} aria-label="Live demo">
                                            <Icon kind={IconKind::ExternalLink} />
                                        </a>
                                        <a href={project.github_url.clone()} aria-label="Source code">
                                            <Icon kind={IconKind::Github} />
                                        </a>
                                    </div>
                                </div>
                                <div class="project-details">
                                    if project.featured {
                                        <span class="featured-badge">{"✨ Featured Project"}</span>
                                    }
                                    <p class="project-category">{&project.category}</p>
                                    <h3 class="gradient-text">{&project.title}</h3>
                                    <p class="project-description">{&project.description}</p>
                                    <h4 class="stack-title">{"TECH STACK"}</h4>
                                    <div class="tags">
                                        { for project.tech.iter().map(|tech| html! {
                                            <span key={tech.clone()} class="tag">{tech}</span>
                                        }) }
                                    </div>
                                    <div class="project-actions">
                                        <a href={project.live_url.clone()} class="pill-button primary">
                                            <Icon kind={IconKind::ExternalLink} size={16} />
                                            <span>{"Live Demo"}</span>
                                            <Icon kind={IconKind::ArrowRight} size={16} />
                                        </a>
                                        <a href={project.github_url.clone()} class="pill-button glass">
                                            <Icon kind={IconKind::Github} size={16} />
                                            <span>{"View Code"}</span>
                                        </a>
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div class={format!("{} view-all", reveal.class(view_all))} data-reveal={view_all.to_string()}>
                    <a href={content.profile.github_url.clone()} target="_blank" rel="noopener noreferrer">
                        <span>{"View all projects on GitHub"}</span>
                        <Icon kind={IconKind::ArrowRight} size={18} />
                    </a>
                </div>
            </div>
        </section>
    }
}
