use yew::prelude::*;

use crate::config;

// Embedded third-party documents get script/popup/form/same-origin and
// nothing else.
const EMBED_SANDBOX: &str = "allow-scripts allow-popups allow-forms allow-same-origin";

const MODAL_STYLE: &str = r#"
    .modal-overlay {
        position: fixed;
        inset: 0;
        z-index: 100;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
    }
    .modal-backdrop {
        position: absolute;
        inset: 0;
        background: rgba(0, 0, 0, 0.9);
        backdrop-filter: blur(8px);
    }
    .modal-panel {
        position: relative;
        width: 100%;
        max-width: 64rem;
        height: 85vh;
        display: flex;
        flex-direction: column;
        background: #171717;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 1rem;
        overflow: hidden;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.6);
    }
    .modal-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1rem;
        background: #000;
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
        color: #fff;
        font-family: monospace;
        font-size: 0.85rem;
    }
    .modal-close {
        background: none;
        border: none;
        color: #737373;
        font-size: 1.2rem;
        cursor: pointer;
    }
    .modal-close:hover {
        color: #fff;
    }
    .modal-body {
        flex: 1;
        background: #fff;
    }
    .modal-body iframe {
        width: 100%;
        height: 100%;
        border: 0;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

/// Full-screen overlay embedding the school application form. Dismissed by
/// the backdrop or the close control; owns no state of its own.
#[function_component(DeployModal)]
pub fn deploy_modal(props: &ModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay">
            <style>{MODAL_STYLE}</style>
            <div class="modal-backdrop" onclick={on_close.clone()}></div>
            <div class="modal-panel">
                <div class="modal-header">
                    <span>{"System Deployment Protocol"}</span>
                    <button class="modal-close" onclick={on_close}>{"✕"}</button>
                </div>
                <div class="modal-body">
                    <iframe
                        src={config::deploy_form_url()}
                        title="Deploy Form"
                        sandbox={EMBED_SANDBOX}
                    >
                        {"Loading system interface..."}
                    </iframe>
                </div>
            </div>
        </div>
    }
}

/// Full-screen overlay embedding the scheduling widget. Independent of the
/// deploy modal; both can be open at once.
#[function_component(ScheduleModal)]
pub fn schedule_modal(props: &ModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay">
            <style>{MODAL_STYLE}</style>
            <div class="modal-backdrop" onclick={on_close.clone()}></div>
            <div class="modal-panel">
                <div class="modal-header">
                    <span>{"Schedule Concept Call"}</span>
                    <button class="modal-close" onclick={on_close}>{"✕"}</button>
                </div>
                <div class="modal-body">
                    <iframe
                        src={config::schedule_call_url()}
                        title="Schedule a Call"
                        sandbox={EMBED_SANDBOX}
                    ></iframe>
                </div>
            </div>
        </div>
    }
}
