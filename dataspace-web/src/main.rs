#![allow(non_snake_case)]

mod components;
mod rows;
mod session;
mod toast;
mod transport;

use dioxus::prelude::*;
use tracing::Level;

use crate::components::dashboard::Dashboard;
use crate::session::Session;
use crate::toast::{ToastList, ToastNotifier};

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

fn main() {
    // Init logger
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}

fn App() -> Element {
    use_context_provider(Session::from_build_env);
    use_context_provider(ToastNotifier::new);
    rsx! {
        Router::<Route> {}
        ToastList {}
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        div {
            h1 { "Dataspace" }
            Dashboard {}
        }
    }
}
