use std::rc::Rc;

use chrono::Datelike;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::section_header::SectionHeader;
use crate::components::toast::Toast;
use crate::contact_form::{ContactField, ContactForm};
use crate::content::Content;
use crate::dom::scroll::element_by_id;
use crate::hooks::{use_reveal, DraftAction};
use crate::motion::section::SectionId;

const HEADER: usize = 0;
const DETAILS: usize = 1;
const FORM: usize = 2;
const FOOTER: usize = 3;

fn control_id(field: ContactField) -> String {
    format!("contact-{}", field)
}

fn focus_control(field: ContactField) {
    if let Some(element) = element_by_id(&control_id(field))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    {
        let _ = element.focus();
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub content: Rc<Content>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let content = &props.content;
    let (section, reveal) = use_reveal(4);
    let form = use_reducer(ContactForm::default);

    let oninput = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let control = e
                .target_dyn_into::<HtmlInputElement>()
                .map(|input| (input.name(), input.value()))
                .or_else(|| {
                    e.target_dyn_into::<HtmlTextAreaElement>()
                        .map(|area| (area.name(), area.value()))
                });
            if let Some((field, value)) =
                control.and_then(|(name, value)| Some((ContactField::from_name(&name)?, value)))
            {
                dispatcher.dispatch(DraftAction::Set(field, value));
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(field) = form.draft.first_missing() {
                focus_control(field);
            }
            form.dispatch(DraftAction::Submit);
        })
    };

    let dismiss = {
        let dispatcher = form.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DraftAction::Dismiss))
    };

    let field = |control: ContactField, label: &'static str, kind: &'static str| {
        html! {
            <div class="form-field">
                <label for={control_id(control)}>{label}</label>
                <input
                    id={control_id(control)}
                    name={control.as_str()}
                    type={kind}
                    value={form.draft.get(control).to_string()}
                    oninput={oninput.clone()}
                    required={true}
                />
            </div>
        }
    };

    html! {
        <section ref={section} id={SectionId::Contact.as_str()} class="section-padding">
            <style>
                {r#"
                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 4rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .contact-intro { color: var(--muted); font-size: 1.1rem; line-height: 1.7; margin-bottom: 2rem; }
                    .contact-methods { display: flex; flex-direction: column; gap: 1.5rem; }
                    .contact-method {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        color: inherit;
                        text-decoration: none;
                    }
                    .contact-method-icon {
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        background: rgba(56, 189, 248, 0.2);
                        color: var(--primary);
                    }
                    .contact-method small { color: var(--muted); display: block; }
                    .socials { padding-top: 2rem; }
                    .socials-row { display: flex; gap: 1rem; margin-top: 1rem; }
                    .socials-row a { padding: 0.75rem; border-radius: 0.75rem; color: inherit; }
                    .contact-form { display: flex; flex-direction: column; gap: 1.5rem; }
                    .form-row { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1.5rem; }
                    .form-field label { display: block; font-size: 0.9rem; font-weight: 500; margin-bottom: 0.5rem; }
                    .form-field input, .form-field textarea {
                        width: 100%;
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        border: 1px solid var(--border);
                        background: rgba(255, 255, 255, 0.05);
                        color: inherit;
                        font: inherit;
                    }
                    .form-field input:focus, .form-field textarea:focus { outline: none; border-color: var(--primary); }
                    .form-field textarea { resize: none; }
                    .submit-button {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0.75rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: var(--primary);
                        color: var(--background);
                        font-weight: 500;
                        cursor: pointer;
                        transition: transform 0.3s ease;
                    }
                    .submit-button:hover { transform: scale(1.02); }
                    .site-footer {
                        text-align: center;
                        margin-top: 4rem;
                        padding-top: 4rem;
                        border-top: 1px solid var(--border);
                        color: var(--muted);
                    }
                "#}
            </style>
            <div class="container">
                <div class={reveal.class(HEADER)} data-reveal={HEADER.to_string()}>
                    <SectionHeader eyebrow="Get in touch" title="Let's Work Together" />
                </div>

                <div class="contact-grid">
                    <div class={reveal.class(DETAILS)} data-reveal={DETAILS.to_string()}>
                        <h3 class="gradient-text">{"Ready to start your project?"}</h3>
                        <p class="contact-intro">
                            {"I'm always interested in new opportunities and challenging projects. Whether you have a question, want to collaborate, or just want to say hello, I'd love to hear from you."}
                        </p>
                        <div class="contact-methods">
                            { for content.contact_methods.iter().map(|method| html! {
                                <a key={method.label.clone()} href={method.href.clone()} class="contact-method glass">
                                    <div class="contact-method-icon">
                                        <Icon kind={method.icon} />
                                    </div>
                                    <div>
                                        <small>{&method.label}</small>
                                        <span>{&method.value}</span>
                                    </div>
                                </a>
                            }) }
                        </div>
                        <div class="socials">
                            <small class="muted">{"Follow me on"}</small>
                            <div class="socials-row">
                                { for content.social_links.iter().map(|link| html! {
                                    <a
                                        key={link.label.clone()}
                                        href={link.href.clone()}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="glass"
                                        title={link.label.clone()}
                                    >
                                        <Icon kind={link.icon} />
                                    </a>
                                }) }
                            </div>
                        </div>
                    </div>

                    <div class={reveal.class(FORM)} data-reveal={FORM.to_string()}>
                        <form class="contact-form" onsubmit={onsubmit}>
                            <div class="form-row">
                                { field(ContactField::Name, "Name", "text") }
                                { field(ContactField::Email, "Email", "email") }
                            </div>
                            { field(ContactField::Subject, "Subject", "text") }
                            <div class="form-field">
                                <label for={control_id(ContactField::Message)}>{"Message"}</label>
                                <textarea
                                    id={control_id(ContactField::Message)}
                                    name={ContactField::Message.as_str()}
                                    rows="6"
                                    value={form.draft.message.clone()}
                                    oninput={oninput.clone()}
                                    required={true}
                                />
                            </div>
                            <button type="submit" class="submit-button">
                                <Icon kind={IconKind::Send} size={18} />
                                {"Send Message"}
                            </button>
                        </form>
                    </div>
                </div>

                <div class={format!("{} site-footer", reveal.class(FOOTER))} data-reveal={FOOTER.to_string()}>
                    <p>{format!("© {} {}. Crafted with passion and lots of coffee ☕", chrono::Local::now().year(), content.profile.name)}</p>
                </div>
            </div>
            if let Some(ack) = form.notice.clone() {
                <Toast key={form.submitted().to_string()} acknowledgment={ack} on_dismiss={dismiss} />
            }
        </section>
    }
}
