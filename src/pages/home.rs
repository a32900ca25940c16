use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{self, PLUGIN_TRACKS};
use crate::router::View;

const HOME_STYLE: &str = r#"
    html {
        scroll-behavior: smooth;
    }
    .home-page {
        background: #000;
        min-height: 100vh;
        color: #fff;
    }
    .page-fade-in {
        animation: fade-in 0.7s ease-out;
    }
    .page-enter-left {
        animation: enter-left 0.7s cubic-bezier(0.22, 1, 0.36, 1);
    }
    @keyframes fade-in {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes enter-left {
        from { transform: translateX(-3rem); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }

    .reveal {
        opacity: 0;
        transform: translateY(2rem);
        transition: opacity 0.7s ease-out, transform 0.7s ease-out;
    }
    .reveal-visible {
        opacity: 1;
        transform: translateY(0);
    }

    .top-nav {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 50;
        background: rgba(0, 0, 0, 0.9);
        backdrop-filter: blur(8px);
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    }
    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        height: 4rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .nav-logo {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        background: none;
        border: none;
        color: #fff;
        font-weight: 700;
        font-size: 0.9rem;
        letter-spacing: -0.02em;
        cursor: pointer;
    }
    .nav-links {
        display: flex;
        align-items: center;
        gap: 1.5rem;
        font-family: monospace;
        font-size: 0.75rem;
        color: #a3a3a3;
    }
    .nav-links a, .nav-links button.nav-link {
        background: none;
        border: none;
        color: inherit;
        font: inherit;
        text-decoration: none;
        cursor: pointer;
    }
    .nav-links a:hover, .nav-links button.nav-link:hover {
        color: #fff;
    }
    .nav-deploy {
        padding: 0.4rem 0.75rem;
        background: #fff;
        color: #000;
        border: none;
        border-radius: 0.5rem;
        font-size: 0.75rem;
        font-weight: 500;
        cursor: pointer;
    }
    @media (max-width: 768px) {
        .nav-links { display: none; }
    }

    .hero {
        position: relative;
        min-height: 85vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
        padding-top: 5rem;
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
        overflow: hidden;
        text-align: center;
    }
    .hero-inner {
        max-width: 64rem;
        margin: 0 auto;
        padding: 0 1.5rem 5rem;
    }
    .hero-status {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.25rem 0.75rem;
        background: #171717;
        border: 1px solid #262626;
        border-radius: 0.375rem;
        margin-bottom: 2rem;
        font-family: monospace;
        font-size: 0.65rem;
        color: #a3a3a3;
        text-transform: uppercase;
        letter-spacing: 0.2em;
    }
    .status-dot {
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 50%;
        background: #22c55e;
        animation: pulse 1.5s infinite;
    }
    @keyframes pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.3; }
    }
    .hero h1 {
        font-size: clamp(3rem, 8vw, 6rem);
        font-weight: 700;
        letter-spacing: -0.04em;
        line-height: 1.0;
        margin: 0 0 1.5rem;
    }
    .hero h1 .dim {
        color: #737373;
    }
    .hero-console {
        max-width: 42rem;
        margin: 0 auto 2.5rem;
        padding: 1rem;
        border-left: 2px solid #262626;
        background: rgba(23, 23, 23, 0.3);
        text-align: left;
        font-family: monospace;
        font-size: 0.85rem;
        color: #d4d4d4;
        line-height: 1.7;
    }
    .hero-console .boot-line {
        color: #737373;
    }
    .hero-ctas {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 1rem;
    }
    .cta-primary, .cta-secondary, .cta-ghost {
        padding: 0.75rem 1.5rem;
        border-radius: 0.5rem;
        font-size: 0.9rem;
        font-weight: 500;
        cursor: pointer;
    }
    .cta-primary {
        background: #fff;
        color: #000;
        border: none;
    }
    .cta-primary:hover { background: #e5e5e5; }
    .cta-secondary {
        background: transparent;
        color: #fff;
        border: 1px solid #404040;
    }
    .cta-secondary:hover { background: #171717; }
    .cta-ghost {
        background: transparent;
        color: #a3a3a3;
        border: none;
    }
    .cta-ghost:hover { color: #fff; }

    .hero-marquee {
        position: absolute;
        bottom: 0;
        width: 100%;
        padding: 0.75rem 0;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(10, 10, 10, 0.5);
        overflow: hidden;
    }
    .marquee-track {
        display: flex;
        gap: 3rem;
        white-space: nowrap;
        font-family: monospace;
        font-size: 0.65rem;
        color: #737373;
        text-transform: uppercase;
        letter-spacing: 0.2em;
        animation: marquee 40s linear infinite;
    }
    @keyframes marquee {
        0% { transform: translateX(0); }
        100% { transform: translateX(-50%); }
    }

    .clarity-section {
        padding: 10rem 1.5rem;
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    }
    .clarity-inner {
        max-width: 72rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: 5fr 7fr;
        gap: 4rem;
    }
    @media (max-width: 900px) {
        .clarity-inner { grid-template-columns: 1fr; }
    }
    .clarity-intro h2, .creative-head h2 {
        font-size: clamp(2.5rem, 5vw, 3.5rem);
        font-weight: 700;
        letter-spacing: -0.02em;
        margin: 0 0 1.5rem;
    }
    .clarity-intro p {
        color: #a3a3a3;
        font-size: 1.1rem;
        line-height: 1.6;
        margin-bottom: 2.5rem;
    }
    .system-readout {
        padding: 1.25rem;
        background: rgba(23, 23, 23, 0.3);
        border: 1px solid #262626;
        border-radius: 0.75rem;
        font-family: monospace;
        font-size: 0.85rem;
        color: #737373;
    }
    .system-readout .row {
        display: flex;
        justify-content: space-between;
    }
    .system-readout .row:first-child {
        border-bottom: 1px solid #262626;
        padding-bottom: 0.5rem;
        margin-bottom: 0.75rem;
    }
    .system-readout .online {
        color: #22c55e;
    }
    .layer-list {
        display: grid;
        gap: 1.5rem;
        align-content: center;
    }
    .layer-card {
        display: flex;
        align-items: flex-start;
        gap: 1.5rem;
        padding: 2rem;
        background: #0a0a0a;
        border: 1px solid #262626;
        border-radius: 1rem;
        cursor: pointer;
        transition: background 0.5s, border-color 0.5s, transform 0.5s;
    }
    .layer-card:hover {
        background: #171717;
        border-color: #404040;
        transform: translateX(0.5rem);
    }
    .layer-card h3 {
        color: #fff;
        font-size: 1.25rem;
        margin: 0 0 0.5rem;
    }
    .layer-card p {
        color: #a3a3a3;
        line-height: 1.6;
        margin: 0;
    }

    .creative-section {
        background: #fff;
        color: #000;
        padding: 10rem 1.5rem;
    }
    .creative-inner {
        max-width: 72rem;
        margin: 0 auto;
    }
    .creative-head {
        max-width: 42rem;
        margin-bottom: 5rem;
    }
    .creative-eyebrow {
        font-family: monospace;
        font-size: 0.75rem;
        text-transform: uppercase;
        letter-spacing: 0.2em;
        margin-bottom: 1.5rem;
    }
    .creative-head p {
        color: #525252;
        font-size: 1.25rem;
        line-height: 1.6;
    }
    .creative-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
        gap: 2rem;
    }
    .track-card {
        height: 100%;
        padding: 2.5rem;
        background: #fafafa;
        border: 1px solid #e5e5e5;
        border-radius: 1rem;
        cursor: pointer;
        transition: border-color 0.5s, transform 0.5s, box-shadow 0.5s;
        box-sizing: border-box;
    }
    .track-card:hover {
        border-color: #000;
        transform: translateY(-0.5rem);
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
    }
    .track-tags {
        display: flex;
        gap: 0.5rem;
        margin-bottom: 1.5rem;
    }
    .track-tags span {
        padding: 0.25rem 0.6rem;
        background: #fff;
        border: 1px solid #e5e5e5;
        border-radius: 0.25rem;
        font-size: 0.65rem;
        font-weight: 500;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        color: #737373;
    }
    .track-card h3 {
        font-size: 1.5rem;
        margin: 0 0 0.75rem;
    }
    .track-card p {
        color: #525252;
        line-height: 1.6;
        margin: 0;
    }

    .tracks-section {
        padding: 8rem 1.5rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
    }
    .tracks-inner {
        max-width: 56rem;
        margin: 0 auto;
    }
    .tracks-head {
        display: flex;
        flex-wrap: wrap;
        align-items: flex-end;
        justify-content: space-between;
        gap: 1.5rem;
        border-bottom: 1px solid #262626;
        padding-bottom: 2.5rem;
        margin-bottom: 4rem;
    }
    .tracks-head .eyebrow {
        display: block;
        font-family: monospace;
        font-size: 0.75rem;
        color: #737373;
        text-transform: uppercase;
        margin-bottom: 0.75rem;
    }
    .tracks-head h2 {
        font-size: 2.25rem;
        letter-spacing: -0.02em;
        margin: 0;
    }
    .tracks-head p {
        color: #a3a3a3;
        font-size: 0.9rem;
        max-width: 28rem;
        margin-top: 1rem;
    }
    .selection-counter {
        font-family: monospace;
        font-size: 0.75rem;
        color: #a3a3a3;
        background: #171717;
        border: 1px solid #262626;
        border-radius: 0.25rem;
        padding: 0.5rem 1rem;
    }
    .track-options {
        background: #0a0a0a;
        border: 1px solid #262626;
        border-radius: 1rem;
        overflow: hidden;
    }
    .track-option {
        display: flex;
        align-items: center;
        gap: 1.25rem;
        padding: 1.5rem;
        border-bottom: 1px solid #262626;
        cursor: pointer;
        user-select: none;
        transition: background 0.3s;
    }
    .track-option:last-child {
        border-bottom: 0;
    }
    .track-option:hover {
        background: rgba(23, 23, 23, 0.5);
    }
    .track-radio {
        width: 1.25rem;
        height: 1.25rem;
        border-radius: 50%;
        border: 1px solid #404040;
        display: flex;
        align-items: center;
        justify-content: center;
        transition: all 0.3s;
        flex-shrink: 0;
    }
    .track-option.selected .track-radio {
        background: #fff;
        border-color: #fff;
        transform: scale(1.1);
    }
    .track-radio-inner {
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 50%;
        background: #000;
    }
    .track-name {
        font-size: 1rem;
        font-weight: 500;
        color: #a3a3a3;
        transition: color 0.3s;
    }
    .track-option.selected .track-name {
        color: #fff;
    }
    .track-selected-flag {
        margin-left: auto;
        font-family: monospace;
        font-size: 0.65rem;
        color: #22c55e;
        text-transform: uppercase;
        letter-spacing: 0.2em;
        animation: pulse 1.5s infinite;
    }
    .tracks-confirm {
        margin-top: 3rem;
        display: flex;
        justify-content: flex-end;
    }

    .testimonials-section {
        padding: 8rem 1.5rem;
        background: #0a0a0a;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
    }
    .testimonials-inner {
        max-width: 72rem;
        margin: 0 auto;
    }
    .testimonials-eyebrow {
        font-family: monospace;
        font-size: 0.75rem;
        color: #737373;
        text-transform: uppercase;
        letter-spacing: 0.2em;
        margin-bottom: 4rem;
    }
    .testimonials-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
        gap: 2rem;
    }
    .testimonial-card {
        padding: 2.5rem;
        background: #000;
        border: 1px solid #262626;
        border-radius: 1rem;
        transition: border-color 0.5s, transform 0.5s;
    }
    .testimonial-card:hover {
        border-color: #525252;
        transform: translateY(-0.25rem);
    }
    .testimonial-card blockquote {
        color: #d4d4d4;
        font-size: 1.25rem;
        font-weight: 300;
        line-height: 1.6;
        margin: 0 0 2rem;
    }
    .testimonial-author {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .author-initial {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 0.25rem;
        background: #171717;
        border: 1px solid #262626;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #fff;
        font-weight: 700;
        font-size: 0.85rem;
    }
    .author-name {
        color: #fff;
        font-size: 0.85rem;
        font-weight: 700;
    }
    .author-role {
        color: #737373;
        font-family: monospace;
        font-size: 0.75rem;
    }

    .site-footer {
        background: #0a0a0a;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        padding: 6rem 1.5rem 2rem;
        font-size: 0.85rem;
    }
    .footer-grid {
        max-width: 72rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: 2fr 1fr 1fr;
        gap: 3rem;
    }
    @media (max-width: 768px) {
        .footer-grid { grid-template-columns: 1fr; }
    }
    .footer-brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        color: #fff;
        font-weight: 700;
        margin-bottom: 1.5rem;
    }
    .footer-blurb {
        color: #737373;
        max-width: 20rem;
        margin-bottom: 2rem;
    }
    .footer-ctas {
        display: flex;
        gap: 1rem;
    }
    .footer-col h4 {
        color: #fff;
        margin: 0 0 1rem;
    }
    .footer-col ul {
        list-style: none;
        margin: 0;
        padding: 0;
        color: #737373;
    }
    .footer-col li {
        margin-bottom: 0.5rem;
    }
    .footer-col a, .footer-col button {
        background: none;
        border: none;
        padding: 0;
        color: inherit;
        font: inherit;
        text-decoration: none;
        cursor: pointer;
    }
    .footer-col a:hover, .footer-col button:hover {
        color: #fff;
    }
    .footer-baseline {
        max-width: 72rem;
        margin: 5rem auto 0;
        padding-top: 2rem;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
        display: flex;
        justify-content: space-between;
        font-family: monospace;
        font-size: 0.7rem;
        color: #525252;
    }
"#;

/// Which of the six plugin tracks is picked. Exactly one entry is selected
/// at all times; picking an unknown name or the current one changes nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackSelection {
    selected: usize,
}

impl TrackSelection {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn selected(&self) -> &'static str {
        PLUGIN_TRACKS[self.selected]
    }

    pub fn is_selected(&self, track: &str) -> bool {
        self.selected() == track
    }

    pub fn choose(&mut self, track: &str) {
        if let Some(index) = PLUGIN_TRACKS.iter().position(|t| *t == track) {
            self.selected = index;
        }
    }
}

impl Default for TrackSelection {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    /// Entry animation class from the router: fade on first load, slide
    /// from the left when returning from a sub-page.
    pub transition_class: AttrValue,
    pub on_navigate: Callback<View>,
    pub on_deploy: Callback<()>,
    pub on_schedule: Callback<()>,
    /// Fired by the track selector's confirm button with the chosen track.
    pub on_confirm_track: Callback<String>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let go = |target: View| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(target.clone()))
    };
    let deploy = {
        let on_deploy = props.on_deploy.clone();
        Callback::from(move |_: MouseEvent| on_deploy.emit(()))
    };

    html! {
        <div class={classes!("home-page", props.transition_class.to_string())}>
            <style>{HOME_STYLE}</style>
            <Navbar
                on_home={go(View::Home)}
                on_download={go(View::Download)}
                on_deploy={deploy.clone()}
            />
            <Hero
                on_deploy={deploy.clone()}
                on_watch={go(View::Film)}
                on_download={go(View::Download)}
            />
            <ClaritySection on_select={props.on_navigate.reform(View::Topic)} />
            <CreativeSection on_select={props.on_navigate.reform(View::Topic)} />
            <TrackSelector on_confirm={props.on_confirm_track.clone()} />
            <Testimonials />
            <Footer on_deploy={deploy} on_book_call={props.on_schedule.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NavbarProps {
    on_home: Callback<MouseEvent>,
    on_download: Callback<MouseEvent>,
    on_deploy: Callback<MouseEvent>,
}

#[function_component(Navbar)]
fn navbar(props: &NavbarProps) -> Html {
    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <button class="nav-logo" onclick={props.on_home.clone()}>
                    {"The Other Half_"}
                </button>
                <div class="nav-links">
                    <a href="#clarity">{"Clarity"}</a>
                    <a href="#creative">{"Creative"}</a>
                    <a href="#plugins">{"Select Plugins"}</a>
                    <button class="nav-link" onclick={props.on_download.clone()}>
                        {"Download Concept"}
                    </button>
                    <button class="nav-deploy" onclick={props.on_deploy.clone()}>
                        {"Deploy in School"}
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    on_deploy: Callback<MouseEvent>,
    on_watch: Callback<MouseEvent>,
    on_download: Callback<MouseEvent>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let marquee_items = [
        "/// SYSTEM STATUS: OPTIMAL",
        "/// LATENCY: 0MS",
        "/// CLARITY CORE: ONLINE",
        "/// CREATIVITY ENGINE: ONLINE",
        "/// DEPLOYING TO 500+ SCHOOLS",
    ];

    html! {
        <section class="hero">
            <div class="hero-inner">
                <Reveal>
                    <div class="hero-status">
                        <div class="status-dot"></div>
                        <span>{"System Operational"}</span>
                    </div>
                </Reveal>
                <Reveal delay={100}>
                    <h1>{"Install the "}<span class="dim">{"Human OS."}</span></h1>
                </Reveal>
                <Reveal delay={200}>
                    <div class="hero-console">
                        <span class="boot-line">{"> Initializing clarity protocols..."}</span><br/>
                        <span class="boot-line">{"> Loading creativity engine..."}</span><br/>
                        {"> Education builds the hardware. We code the software (Identity, Confidence, Capability)."}
                    </div>
                </Reveal>
                <Reveal delay={300}>
                    <div class="hero-ctas">
                        <button class="cta-primary" onclick={props.on_deploy.clone()}>
                            {"Deploy in Your School →"}
                        </button>
                        <button class="cta-secondary" onclick={props.on_watch.clone()}>
                            {"▶ Watch Film"}
                        </button>
                        <button class="cta-ghost" onclick={props.on_download.clone()}>
                            {"Download Detailed Concept"}
                        </button>
                    </div>
                </Reveal>
            </div>
            <div class="hero-marquee">
                <div class="marquee-track">
                    // Doubled so the loop wraps without a visible seam.
                    { for marquee_items.iter().chain(marquee_items.iter()).map(|item| html! {
                        <span>{*item}</span>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SelectTopicProps {
    on_select: Callback<String>,
}

#[function_component(ClaritySection)]
fn clarity_section(props: &SelectTopicProps) -> Html {
    html! {
        <section id="clarity" class="clarity-section">
            <div class="clarity-inner">
                <div class="clarity-intro">
                    <Reveal>
                        <h2>{"The Clarity Kernel."}</h2>
                        <p>
                            {"Most students run on autopilot. We install the self-awareness \
                              protocols required to navigate complex environments."}
                        </p>
                        <div class="system-readout">
                            <div class="row">
                                <span>{"System Status:"}</span>
                                <span class="online">{"● Online"}</span>
                            </div>
                            <div class="row">
                                <span>{"Version:"}</span>
                                <span>{"2.4.0 (Stable)"}</span>
                            </div>
                        </div>
                    </Reveal>
                </div>
                <div class="layer-list">
                    { for content::CLARITY_LAYERS.iter().enumerate().map(|(i, layer)| {
                        let on_select = props.on_select.clone();
                        let id = layer.id;
                        html! {
                            <Reveal delay={(i as u32) * 100}>
                                <div
                                    class="layer-card"
                                    onclick={Callback::from(move |_| on_select.emit(id.to_string()))}
                                >
                                    <div>
                                        <h3>{layer.title}</h3>
                                        <p>{layer.blurb}</p>
                                    </div>
                                </div>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(CreativeSection)]
fn creative_section(props: &SelectTopicProps) -> Html {
    html! {
        <section id="creative" class="creative-section">
            <div class="creative-inner">
                <Reveal>
                    <div class="creative-head">
                        <div class="creative-eyebrow">{"⚡ Input / Output"}</div>
                        <h2>{"Creative Architecture."}</h2>
                        <p>{"Moving from passive consumption (Read-Only) to active creation (Read-Write)."}</p>
                    </div>
                </Reveal>
                <div class="creative-grid">
                    { for content::CREATIVE_TRACKS.iter().enumerate().map(|(i, track)| {
                        let on_select = props.on_select.clone();
                        let id = track.id;
                        html! {
                            <Reveal delay={(i as u32) * 100}>
                                <div
                                    class="track-card"
                                    onclick={Callback::from(move |_| on_select.emit(id.to_string()))}
                                >
                                    <div class="track-tags">
                                        { for track.tags.iter().map(|tag| html! { <span>{*tag}</span> }) }
                                    </div>
                                    <h3>{track.title}</h3>
                                    <p>{track.blurb}</p>
                                </div>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TrackSelectorProps {
    on_confirm: Callback<String>,
}

/// Radio-style list of the six plugin tracks. The confirmed value goes to
/// the deploy flow and nowhere else; the selection dies with the component.
#[function_component(TrackSelector)]
fn track_selector(props: &TrackSelectorProps) -> Html {
    let selection = use_state(TrackSelection::new);

    let on_confirm = {
        let selection = selection.clone();
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_| on_confirm.emit(selection.selected().to_string()))
    };

    html! {
        <section id="plugins" class="tracks-section">
            <div class="tracks-inner">
                <Reveal>
                    <div class="tracks-head">
                        <div>
                            <span class="eyebrow">{"System Configuration"}</span>
                            <h2>{"Select Custom Plugin"}</h2>
                            <p>{"Choose the single specialized track for your cohort (Grades 8-12)."}</p>
                        </div>
                        <div class="selection-counter">{"1 Selection Allowed"}</div>
                    </div>
                </Reveal>
                <div class="track-options">
                    { for PLUGIN_TRACKS.iter().enumerate().map(|(i, track)| {
                        let is_selected = selection.is_selected(track);
                        let onclick = {
                            let selection = selection.clone();
                            let track = *track;
                            Callback::from(move |_| {
                                let mut next = *selection;
                                next.choose(track);
                                selection.set(next);
                            })
                        };
                        html! {
                            <Reveal delay={(i as u32) * 50}>
                                <div
                                    class={classes!("track-option", is_selected.then_some("selected"))}
                                    {onclick}
                                >
                                    <div class="track-radio">
                                        if is_selected {
                                            <div class="track-radio-inner"></div>
                                        }
                                    </div>
                                    <span class="track-name">{*track}</span>
                                    if is_selected {
                                        <span class="track-selected-flag">{"Selected"}</span>
                                    }
                                </div>
                            </Reveal>
                        }
                    }) }
                </div>
                <Reveal delay={300}>
                    <div class="tracks-confirm">
                        <button class="cta-primary" onclick={on_confirm}>
                            {format!("Confirm: {} →", selection.selected())}
                        </button>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section class="testimonials-section">
            <div class="testimonials-inner">
                <Reveal>
                    <div class="testimonials-eyebrow">{"System Logs (Testimonials)"}</div>
                </Reveal>
                <div class="testimonials-grid">
                    { for content::TESTIMONIALS.iter().enumerate().map(|(i, entry)| html! {
                        <Reveal delay={(i as u32) * 150}>
                            <div class="testimonial-card">
                                <blockquote>{format!("\"{}\"", entry.quote)}</blockquote>
                                <div class="testimonial-author">
                                    <div class="author-initial">
                                        {entry.author.chars().next().map(String::from).unwrap_or_default()}
                                    </div>
                                    <div>
                                        <div class="author-name">{entry.author}</div>
                                        <div class="author-role">{entry.role}</div>
                                    </div>
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    on_deploy: Callback<MouseEvent>,
    on_book_call: Callback<()>,
}

#[function_component(Footer)]
fn footer(props: &FooterProps) -> Html {
    let book_call = {
        let on_book_call = props.on_book_call.clone();
        Callback::from(move |_: MouseEvent| on_book_call.emit(()))
    };

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">{"The Other Half_"}</div>
                    <p class="footer-blurb">
                        {"Engineering the human capability layer for the next generation."}
                    </p>
                    <div class="footer-ctas">
                        <button class="cta-primary" onclick={props.on_deploy.clone()}>
                            {"Deploy System"}
                        </button>
                        <button class="cta-secondary" onclick={book_call.clone()}>
                            {"Book a Call"}
                        </button>
                    </div>
                </div>
                <div class="footer-col">
                    <h4>{"System"}</h4>
                    <ul>
                        <li><a href="#clarity">{"Clarity Core"}</a></li>
                        <li><a href="#creative">{"Creative Engine"}</a></li>
                        <li><a href="#plugins">{"Plugin Library"}</a></li>
                        <li><a href="#">{"Changelog"}</a></li>
                    </ul>
                </div>
                <div class="footer-col">
                    <h4>{"Connect"}</h4>
                    <ul>
                        <li><button onclick={book_call}>{"Book a Demo"}</button></li>
                        <li><a href="#">{"Twitter / X"}</a></li>
                        <li><a href="#">{"LinkedIn"}</a></li>
                        <li><a href="#">{"Email"}</a></li>
                    </ul>
                </div>
            </div>
            <div class="footer-baseline">
                <span>{"© 2025 The Other Half Inc."}</span>
                <span>{"● All Systems Normal"}</span>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_track() {
        let selection = TrackSelection::new();
        assert_eq!(selection.selected(), "Python & AI Logic");
        assert!(selection.is_selected("Python & AI Logic"));
    }

    #[test]
    fn exactly_one_selected_after_any_clicks() {
        let mut selection = TrackSelection::new();
        let clicks = [
            "Robotics & Electronics",
            "Financial Literacy & Markets",
            "Video Editing & Content",
        ];
        for click in clicks {
            selection.choose(click);
            let selected_count = PLUGIN_TRACKS
                .iter()
                .filter(|t| selection.is_selected(t))
                .count();
            assert_eq!(selected_count, 1);
        }
        assert_eq!(selection.selected(), "Video Editing & Content");
    }

    #[test]
    fn reclicking_selected_is_a_no_op() {
        let mut selection = TrackSelection::new();
        selection.choose("Startup Entrepreneurship");
        let before = selection;
        selection.choose("Startup Entrepreneurship");
        assert_eq!(selection, before);
    }

    #[test]
    fn unknown_track_leaves_selection_unchanged() {
        let mut selection = TrackSelection::new();
        selection.choose("Underwater Basket Weaving");
        assert_eq!(selection.selected(), "Python & AI Logic");
    }
}
