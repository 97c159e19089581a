use dioxus::prelude::*;

/// Top navigation bar shown above every protected view. The host app
/// supplies the links so this crate stays independent of the route type.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        div {
            class: "navbar",
            {children}
        }
    }
}
