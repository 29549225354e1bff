use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::config;
use crate::contact_form::Acknowledgment;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub acknowledgment: Acknowledgment,
    pub on_dismiss: Callback<()>,
}

/// Transient notice in the corner. Give it a fresh `key` per notice so the
/// dismiss timer restarts.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::TOAST_DISMISS_MS, move || on_dismiss.emit(()));
                move || drop(timeout)
            },
            (),
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast glass" role="status" aria-live="polite">
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        z-index: 100;
                        max-width: 22rem;
                        padding: 1rem 3rem 1rem 1.25rem;
                        border-radius: 0.75rem;
                        animation: toast-in 0.3s ease-out;
                    }
                    .toast-title { font-weight: 600; margin-bottom: 0.25rem; }
                    .toast-description { color: var(--muted); font-size: 0.9rem; }
                    .toast-close {
                        position: absolute;
                        top: 0.75rem;
                        right: 0.75rem;
                        background: none;
                        border: none;
                        color: var(--muted);
                        cursor: pointer;
                    }
                    @keyframes toast-in {
                        from { transform: translateY(100%); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            <div class="toast-title">{&props.acknowledgment.title}</div>
            <div class="toast-description">{&props.acknowledgment.description}</div>
            <button class="toast-close" onclick={close} aria-label="Dismiss">
                <Icon kind={IconKind::X} size={16} />
            </button>
        </div>
    }
}
