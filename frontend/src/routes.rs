use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::chatbot_page::ChatbotPage;
use crate::pages::resources_page::ResourcesPage;

/// Filter parameters live in the query string, which the filter component
/// reads and rewrites itself; routes only select the page.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    ResourcesPage {},


    #[route("/chatbot")]
    ChatbotPage {},

}
