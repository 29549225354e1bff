use std::rc::Rc;

use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::content::Content;
use crate::dom::scroll::navigate;
use crate::hooks::use_rotating_label;
use crate::motion::section::SectionId;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: Rc<Content>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let content = &props.content;
    let is_visible = use_state(|| false);
    let role = use_rotating_label(content.roles.clone());

    // Fade the banner in once, right after the first paint
    {
        let is_visible = is_visible.clone();
        use_effect_with_deps(
            move |_| {
                is_visible.set(true);
                || ()
            },
            (),
        );
    }

    let scroll_down = Callback::from(|_: MouseEvent| {
        navigate(SectionId::About.as_str());
    });

    let links = content
        .social_links
        .iter()
        .filter(|link| matches!(link.icon, IconKind::Github | IconKind::Linkedin))
        .map(|link| {
            html! {
                <a href={link.href.clone()} target="_blank" rel="noopener noreferrer" class="hero-link glass" title={link.label.clone()}>
                    <Icon kind={link.icon} size={24} />
                </a>
            }
        })
        .chain(std::iter::once(html! {
            <a href={format!("mailto:{}", content.profile.email)} class="hero-link glass" title="Email">
                <Icon kind={IconKind::Mail} size={24} />
            </a>
        }));

    html! {
        <section id={SectionId::Hero.as_str()} class="hero-section">
            <style>
                {r#"
                    .hero-section {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        overflow: hidden;
                    }
                    .hero-orb {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(64px);
                        animation: float 6s ease-in-out infinite;
                    }
                    .hero-orb.one { top: 5rem; right: 5rem; width: 18rem; height: 18rem; background: rgba(56, 189, 248, 0.1); }
                    .hero-orb.two { bottom: 5rem; left: 5rem; width: 24rem; height: 24rem; background: rgba(59, 130, 246, 0.1); animation-delay: 1.5s; }
                    .hero-content {
                        text-align: center;
                        position: relative;
                        z-index: 1;
                        opacity: 0;
                        transition: opacity 1s ease, transform 1s ease;
                        transform: translateY(20px);
                    }
                    .hero-content.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .hero-greeting {
                        color: var(--primary);
                        font-family: monospace;
                        letter-spacing: 0.1em;
                    }
                    .hero-name {
                        font-size: clamp(3.5rem, 10vw, 6rem);
                        font-weight: 700;
                        margin: 0.5rem 0 1rem;
                    }
                    .hero-role {
                        height: 4rem;
                        font-size: 1.75rem;
                        font-weight: 300;
                    }
                    .hero-tagline {
                        max-width: 42rem;
                        margin: 0 auto 3rem;
                        color: var(--muted);
                        line-height: 1.7;
                        font-size: 1.15rem;
                    }
                    .hero-links {
                        display: flex;
                        gap: 1.5rem;
                        justify-content: center;
                        margin-bottom: 4rem;
                    }
                    .hero-link {
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                        color: inherit;
                        transition: transform 0.3s ease, background 0.3s ease;
                    }
                    .hero-link:hover { transform: scale(1.1); background: rgba(255, 255, 255, 0.1); }
                    .hero-scroll {
                        animation: bounce 1.5s infinite;
                        border-radius: 50%;
                        padding: 0.5rem;
                        border: none;
                        color: inherit;
                        cursor: pointer;
                    }
                    @keyframes float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-20px); }
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-8px); }
                    }
                "#}
            </style>
            <div class="hero-orb one"></div>
            <div class="hero-orb two"></div>
            <div class={classes!("hero-content", (*is_visible).then(|| "visible"))}>
                <p class="hero-greeting">{&content.profile.greeting}</p>
                <h1 class="hero-name gradient-text">{&content.profile.name}</h1>
                <h2 class="hero-role">
                    <span class="gradient-text">{role.unwrap_or_default()}</span>
                </h2>
                <p class="hero-tagline">{&content.profile.tagline}</p>
                <div class="hero-links">
                    { for links }
                </div>
                <button class="hero-scroll glass" onclick={scroll_down} aria-label="Scroll to about">
                    <Icon kind={IconKind::ChevronDown} size={24} />
                </button>
            </div>
        </section>
    }
}
