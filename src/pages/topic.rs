use log::warn;
use yew::prelude::*;

use crate::content;

const TOPIC_STYLE: &str = r#"
    .topic-page {
        min-height: 100vh;
        background: #000;
        padding: 6rem 1.5rem 3rem;
        animation: enter-right 0.7s cubic-bezier(0.22, 1, 0.36, 1);
    }
    @keyframes enter-right {
        from { transform: translateX(3rem); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    .topic-inner {
        max-width: 56rem;
        margin: 0 auto;
    }
    .back-link {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        margin-bottom: 3rem;
        background: none;
        border: none;
        color: #737373;
        font-family: monospace;
        font-size: 0.75rem;
        text-transform: uppercase;
        letter-spacing: 0.2em;
        cursor: pointer;
    }
    .back-link:hover {
        color: #fff;
    }
    .topic-head {
        border-left: 2px solid rgba(255, 255, 255, 0.1);
        padding-left: 2rem;
        margin-bottom: 4rem;
    }
    .topic-eyebrow {
        color: #22c55e;
        font-family: monospace;
        font-size: 0.75rem;
        text-transform: uppercase;
        letter-spacing: 0.2em;
        margin-bottom: 1rem;
    }
    .topic-head h1 {
        color: #fff;
        font-size: 3.5rem;
        letter-spacing: -0.02em;
        margin: 0 0 1.5rem;
    }
    .topic-head p {
        color: #a3a3a3;
        font-size: 1.25rem;
        line-height: 1.6;
        max-width: 42rem;
        margin: 0;
    }
    .topic-points {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 2rem;
        margin-bottom: 4rem;
    }
    .topic-point {
        background: rgba(23, 23, 23, 0.5);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 0.75rem;
        padding: 2rem;
        transition: border-color 0.3s;
    }
    .topic-point:hover {
        border-color: rgba(255, 255, 255, 0.3);
    }
    .topic-point h3 {
        color: #fff;
        font-size: 1rem;
        margin: 0 0 0.75rem;
    }
    .topic-point .point-index {
        color: #525252;
        font-family: monospace;
        font-size: 0.75rem;
        margin-right: 0.5rem;
    }
    .topic-point p {
        color: #a3a3a3;
        font-size: 0.9rem;
        line-height: 1.6;
        margin: 0;
    }
    .topic-outcome {
        display: flex;
        align-items: center;
        gap: 1.5rem;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 0.75rem;
        padding: 2rem;
    }
    .outcome-mark {
        width: 3rem;
        height: 3rem;
        flex-shrink: 0;
        border-radius: 50%;
        background: #fff;
        color: #000;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.3rem;
    }
    .outcome-label {
        color: #737373;
        font-family: monospace;
        font-size: 0.75rem;
        text-transform: uppercase;
        letter-spacing: 0.2em;
        margin-bottom: 0.25rem;
    }
    .outcome-text {
        color: #fff;
        font-size: 1.1rem;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct TopicPageProps {
    pub id: AttrValue,
    pub on_back: Callback<()>,
}

/// Detail page for one program module. An id that is not in the content
/// table renders nothing at all; that is the defined miss behavior, not a
/// failure.
#[function_component(TopicPage)]
pub fn topic_page(props: &TopicPageProps) -> Html {
    let Some(topic) = content::find_topic(&props.id) else {
        warn!("No topic content for id '{}', rendering blank", props.id);
        return html! {};
    };

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_| on_back.emit(()))
    };

    html! {
        <div class="topic-page">
            <style>{TOPIC_STYLE}</style>
            <div class="topic-inner">
                <button class="back-link" onclick={on_back}>
                    {"← Return to Dashboard"}
                </button>

                <div class="topic-head">
                    <div class="topic-eyebrow">{topic.subtitle}</div>
                    <h1>{topic.title}</h1>
                    <p>{topic.description}</p>
                </div>

                <div class="topic-points">
                    { for topic.points.iter().enumerate().map(|(i, point)| html! {
                        <div class="topic-point">
                            <h3>
                                <span class="point-index">{format!("0{}", i + 1)}</span>
                                {point.heading}
                            </h3>
                            <p>{point.body}</p>
                        </div>
                    }) }
                </div>

                <div class="topic-outcome">
                    <div class="outcome-mark">{"✓"}</div>
                    <div>
                        <div class="outcome-label">{"Module Outcome"}</div>
                        <div class="outcome-text">{topic.outcome}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}
