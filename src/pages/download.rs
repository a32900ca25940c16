use yew::prelude::*;

use crate::config;
use crate::content;

// Same capability set the modals grant their embeds.
const EMBED_SANDBOX: &str = "allow-scripts allow-popups allow-forms allow-same-origin";

const DOWNLOAD_STYLE: &str = r#"
    .download-page {
        min-height: 100vh;
        background: #000;
        padding: 6rem 1.5rem 3rem;
        animation: enter-right 0.7s cubic-bezier(0.22, 1, 0.36, 1);
    }
    @keyframes enter-right {
        from { transform: translateX(3rem); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    .download-inner {
        max-width: 72rem;
        margin: 0 auto;
    }
    .back-link {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        margin-bottom: 2rem;
        background: none;
        border: none;
        color: #737373;
        cursor: pointer;
    }
    .back-link:hover {
        color: #fff;
    }
    .download-grid {
        display: grid;
        grid-template-columns: 1fr 2fr;
        gap: 3rem;
        height: calc(100vh - 200px);
    }
    @media (max-width: 900px) {
        .download-grid {
            grid-template-columns: 1fr;
            height: auto;
        }
    }
    .download-info {
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        gap: 2rem;
    }
    .doc-tag {
        display: inline-block;
        padding: 0.25rem 0.5rem;
        background: rgba(239, 68, 68, 0.1);
        border: 1px solid rgba(239, 68, 68, 0.2);
        border-radius: 0.25rem;
        color: #ef4444;
        font-family: monospace;
        font-size: 0.75rem;
        margin-bottom: 1rem;
    }
    .download-info h1 {
        color: #fff;
        font-size: 1.9rem;
        margin: 0 0 1rem;
    }
    .download-info > div > p {
        color: #a3a3a3;
        font-size: 0.9rem;
        line-height: 1.6;
    }
    .doc-contents {
        background: rgba(23, 23, 23, 0.5);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 0.75rem;
        padding: 1.5rem;
    }
    .doc-contents h3 {
        color: #fff;
        font-size: 0.85rem;
        margin: 0 0 1rem;
    }
    .doc-contents ul {
        list-style: none;
        margin: 0;
        padding: 0;
    }
    .doc-contents li {
        display: flex;
        justify-content: space-between;
        font-size: 0.75rem;
        padding-bottom: 0.5rem;
        margin-bottom: 0.5rem;
        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
    }
    .doc-contents li:last-child {
        border-bottom: 0;
    }
    .doc-contents .section-title {
        color: #d4d4d4;
    }
    .doc-contents .section-page {
        color: #525252;
        font-family: monospace;
    }
    .download-button {
        display: block;
        width: 100%;
        padding: 0.75rem 1.5rem;
        background: #fff;
        color: #000;
        border: none;
        border-radius: 0.5rem;
        font-weight: 500;
        font-size: 0.9rem;
        text-align: center;
        text-decoration: none;
        cursor: pointer;
    }
    .download-button:hover {
        background: #e5e5e5;
    }
    .download-note {
        color: #525252;
        font-family: monospace;
        font-size: 0.75rem;
        text-align: center;
        margin-top: 0.75rem;
    }
    .doc-frame {
        position: relative;
        background: #171717;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 1rem;
        overflow: hidden;
        min-height: 60vh;
    }
    .doc-frame-chrome {
        position: absolute;
        top: 0;
        width: 100%;
        height: 2.5rem;
        background: #000;
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0 1rem;
        box-sizing: border-box;
    }
    .chrome-dot {
        width: 0.6rem;
        height: 0.6rem;
        border-radius: 50%;
    }
    .chrome-filename {
        margin-left: 1rem;
        padding: 0.1rem 0.75rem;
        background: #262626;
        border-radius: 0.25rem;
        color: #a3a3a3;
        font-family: monospace;
        font-size: 0.65rem;
    }
    .doc-frame iframe {
        width: 100%;
        height: 100%;
        padding-top: 2.5rem;
        border: 0;
        box-sizing: border-box;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct DownloadPageProps {
    pub on_back: Callback<()>,
}

/// Concept-document page: read-only embedded preview on the right, contents
/// listing and a direct-download link on the left. The document itself lives
/// at a static URL outside this system.
#[function_component(DownloadPage)]
pub fn download_page(props: &DownloadPageProps) -> Html {
    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_| on_back.emit(()))
    };

    html! {
        <div class="download-page">
            <style>{DOWNLOAD_STYLE}</style>
            <div class="download-inner">
                <button class="back-link" onclick={on_back}>
                    {"← Return to System"}
                </button>

                <div class="download-grid">
                    <div class="download-info">
                        <div>
                            <div class="doc-tag">{"/// SYSTEM DOCUMENTATION"}</div>
                            <h1>{"The Other Half Terminal."}</h1>
                            <p>
                                {"This document contains the full architecture of the Human OS, \
                                  including the Clarity Kernel and Creativity Engine protocols."}
                            </p>

                            <div class="doc-contents">
                                <h3>{"Document Contents"}</h3>
                                <ul>
                                    { for content::DOCUMENT_SECTIONS.iter().map(|section| html! {
                                        <li>
                                            <span class="section-title">{section.title}</span>
                                            <span class="section-page">{format!("Pg {}", section.page)}</span>
                                        </li>
                                    }) }
                                </ul>
                            </div>
                        </div>

                        <div>
                            <a
                                class="download-button"
                                href={config::concept_download_url()}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {"Direct Download (PDF)"}
                            </a>
                            <p class="download-note">{"Secure Connection • 2.4 MB"}</p>
                        </div>
                    </div>

                    <div class="doc-frame">
                        <div class="doc-frame-chrome">
                            <div class="chrome-dot" style="background: rgba(239, 68, 68, 0.2);"></div>
                            <div class="chrome-dot" style="background: rgba(234, 179, 8, 0.2);"></div>
                            <div class="chrome-dot" style="background: rgba(34, 197, 94, 0.2);"></div>
                            <div class="chrome-filename">{"terminal_v2.pdf"}</div>
                        </div>
                        <iframe
                            src={config::concept_preview_url()}
                            title="PDF Viewer"
                            allow="autoplay"
                            sandbox={EMBED_SANDBOX}
                        ></iframe>
                    </div>
                </div>
            </div>
        </div>
    }
}
