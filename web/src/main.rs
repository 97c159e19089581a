use dioxus::prelude::*;

use ui::{use_auth, AuthProvider, LogoutButton, Navbar};
use views::{Dashboard, Login, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[layout(Protected)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/users")]
        Users {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Route guard wrapping the protected views. Without a session it bounces
/// back to the login route and renders nothing.
#[component]
fn Protected() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if !auth().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        Navbar {
            Link { class: "nav-link", to: Route::Dashboard {}, "Dashboard" }
            Link { class: "nav-link", to: Route::Users {}, "Users" }
            span { class: "nav-spacer" }
            LogoutButton {
                class: "nav-link nav-logout",
                on_logout: move |_| {
                    nav.replace(Route::Login {});
                },
            }
        }
        div {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
