//! Resource catalog page.

use common::resource::Resource;
use dioxus::prelude::*;

use crate::components::{
    error_boundary::ComponentErrorBoundary, resource_card::ResourceCard, resource_filters::ResourceFilters,
};

/// Resource catalog page
#[component]
pub fn ResourcesPage() -> Element {
    let resources = use_signal(Vec::<Resource>::new);
    rsx! {
        Title { "Research Catalog - Resources" }
        div {
            id: "x-resources-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                overflow: auto;
            ",

            div {
                style: "
                    color: #0F172A;
                    font-size: 40px;
                    font-weight: 500;
                    letter-spacing: -0.02em;
                ",
                "Resources"
            }

            ComponentErrorBoundary {
                label: "resource filters".to_string(),
                ResourceFilters { resources }
            }

            div {
                id: "x-resources-grid",
                style: "
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 16px;
                ",
                for resource in resources() {
                    ResourceCard { key: "{resource.id}", resource: resource.clone() }
                }
            }
        }
    }
}
