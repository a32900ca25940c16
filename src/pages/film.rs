use yew::prelude::*;

const FILM_STYLE: &str = r#"
    .film-page {
        min-height: 100vh;
        background: #000;
        display: flex;
        flex-direction: column;
        animation: enter-right 0.7s cubic-bezier(0.22, 1, 0.36, 1);
    }
    @keyframes enter-right {
        from { transform: translateX(3rem); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    .film-topbar {
        position: absolute;
        top: 0;
        width: 100%;
        z-index: 20;
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1.5rem;
        box-sizing: border-box;
        background: linear-gradient(to bottom, rgba(0, 0, 0, 0.8), transparent);
    }
    .exit-theater {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.5rem 1rem;
        background: rgba(0, 0, 0, 0.5);
        border: none;
        border-radius: 9999px;
        color: rgba(255, 255, 255, 0.7);
        backdrop-filter: blur(8px);
        cursor: pointer;
    }
    .exit-theater:hover {
        color: #fff;
    }
    .live-badge {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        color: rgba(255, 255, 255, 0.7);
        font-family: monospace;
        font-size: 0.75rem;
        letter-spacing: 0.2em;
    }
    .live-dot {
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 50%;
        background: #ef4444;
        animation: pulse 1.5s infinite;
    }
    @keyframes pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.3; }
    }
    .film-stage {
        flex: 1;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 3rem;
        position: relative;
    }
    .film-screen {
        position: relative;
        width: 100%;
        max-width: 80rem;
        aspect-ratio: 16 / 9;
        background: #0a0a0a;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 0.5rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.7);
    }
    .play-ring {
        width: 6rem;
        height: 6rem;
        border: 1px solid rgba(255, 255, 255, 0.2);
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 1.5rem;
        color: #fff;
        font-size: 2rem;
        cursor: pointer;
        transition: background 0.3s;
    }
    .play-ring:hover {
        background: rgba(255, 255, 255, 0.1);
    }
    .film-screen h2 {
        color: #fff;
        font-size: 1.9rem;
        letter-spacing: -0.02em;
        margin: 0 0 0.5rem;
    }
    .film-runtime {
        color: #737373;
        font-family: monospace;
        font-size: 0.85rem;
        text-transform: uppercase;
        letter-spacing: 0.2em;
    }
    .film-footer {
        padding: 3rem;
        background: #0a0a0a;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
    }
    .film-footer-inner {
        max-width: 80rem;
        margin: 0 auto;
        display: flex;
        flex-wrap: wrap;
        justify-content: space-between;
        align-items: center;
        gap: 1.5rem;
    }
    .film-footer h3 {
        color: #fff;
        font-size: 1.1rem;
        margin: 0 0 0.25rem;
    }
    .film-footer p {
        color: #737373;
        font-size: 0.9rem;
        margin: 0;
    }
    .deploy-button {
        padding: 0.75rem 1.5rem;
        background: #fff;
        color: #000;
        border: none;
        border-radius: 0.5rem;
        font-weight: 500;
        font-size: 0.9rem;
        cursor: pointer;
    }
    .deploy-button:hover {
        background: #e5e5e5;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct FilmPageProps {
    pub on_back: Callback<()>,
    pub on_deploy: Callback<()>,
}

/// Brand-film page. The player is a placeholder; there is no actual video
/// source wired up yet.
#[function_component(FilmPage)]
pub fn film_page(props: &FilmPageProps) -> Html {
    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_| on_back.emit(()))
    };
    let on_deploy = {
        let on_deploy = props.on_deploy.clone();
        Callback::from(move |_| on_deploy.emit(()))
    };

    html! {
        <div class="film-page">
            <style>{FILM_STYLE}</style>
            <div class="film-topbar">
                <button class="exit-theater" onclick={on_back}>
                    {"← Exit Theater Mode"}
                </button>
                <div class="live-badge">
                    <div class="live-dot"></div>
                    <span>{"LIVE FEED"}</span>
                </div>
            </div>

            <div class="film-stage">
                <div class="film-screen">
                    <div class="play-ring">{"▶"}</div>
                    <h2>{"The Other Half"}</h2>
                    <p class="film-runtime">{"Official Brand Film • 02:14"}</p>
                </div>
            </div>

            <div class="film-footer">
                <div class="film-footer-inner">
                    <div>
                        <h3>{"Ready to complete the human?"}</h3>
                        <p>{"Join the 500+ schools transforming education."}</p>
                    </div>
                    <button class="deploy-button" onclick={on_deploy}>
                        {"Deploy System →"}
                    </button>
                </div>
            </div>
        </div>
    }
}
