use log::{info, Level};
use yew::prelude::*;

mod config;
mod content;
mod router;
mod components {
    pub mod modal;
    pub mod reveal;
}
mod pages {
    pub mod download;
    pub mod film;
    pub mod home;
    pub mod topic;
}

use components::modal::{DeployModal, ScheduleModal};
use pages::{download::DownloadPage, film::FilmPage, home::Home, topic::TopicPage};
use router::{BrowserViewport, Overlays, View, ViewRouter};

#[function_component]
fn App() -> Html {
    // The router is the single owner of the view state; the use_state copy
    // only mirrors it so Yew re-renders after each transition.
    let router = use_mut_ref(ViewRouter::new);
    let view = use_state(|| View::Home);
    let overlays = use_state(Overlays::default);

    let on_navigate = {
        let router = router.clone();
        let view = view.clone();
        Callback::from(move |target: View| {
            let current = {
                let mut router = router.borrow_mut();
                router.navigate(target, &BrowserViewport);
                router.current().clone()
            };
            view.set(current);
        })
    };

    let open_deploy = {
        let overlays = overlays.clone();
        Callback::from(move |_| overlays.set(overlays.open_deploy()))
    };
    let close_deploy = {
        let overlays = overlays.clone();
        Callback::from(move |_| overlays.set(overlays.close_deploy()))
    };
    let open_schedule = {
        let overlays = overlays.clone();
        Callback::from(move |_| overlays.set(overlays.open_schedule()))
    };
    let close_schedule = {
        let overlays = overlays.clone();
        Callback::from(move |_| overlays.set(overlays.close_schedule()))
    };

    // The confirmed track goes into the deploy flow and nowhere else.
    let confirm_track = {
        let open_deploy = open_deploy.clone();
        Callback::from(move |track: String| {
            info!("Deploy requested with track '{}'", track);
            open_deploy.emit(());
        })
    };

    let back_home = on_navigate.reform(|_: ()| View::Home);

    let page = match &*view {
        View::Download => {
            info!("Rendering Download page");
            html! { <DownloadPage on_back={back_home} /> }
        }
        View::Film => {
            info!("Rendering Film page");
            html! { <FilmPage on_back={back_home} on_deploy={open_deploy.clone()} /> }
        }
        View::Topic(id) => {
            info!("Rendering Topic page for '{id}'");
            html! { <TopicPage id={id.clone()} on_back={back_home} /> }
        }
        View::Home => {
            info!("Rendering Home page");
            let transition = router.borrow().home_transition();
            html! {
                <Home
                    transition_class={transition}
                    on_navigate={on_navigate.clone()}
                    on_deploy={open_deploy.clone()}
                    on_schedule={open_schedule}
                    on_confirm_track={confirm_track}
                />
            }
        }
    };

    html! {
        <>
            { page }
            // Rendered above whichever page is active so an open modal
            // survives navigation.
            <DeployModal is_open={overlays.deploy} on_close={close_deploy} />
            <ScheduleModal is_open={overlays.schedule} on_close={close_schedule} />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
