//! Catalog resource card component.

use common::resource::{Privacy, Resource, VerificationStatus};
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{md_action_icons::{MdLock, MdVerifiedUser}, md_social_icons::MdPerson},
};

/// Strong and light CSS colours for a palette name.
pub(crate) fn palette(name: &str) -> (&'static str, &'static str) {
    match name {
        "red" => ("#DC2626", "#FEE2E2"),
        "blue" => ("#2563EB", "#DBEAFE"),
        "green" => ("#16A34A", "#DCFCE7"),
        "purple" => ("#9333EA", "#F3E8FF"),
        "yellow" => ("#CA8A04", "#FEF9C3"),
        _ => ("#4B5563", "#F3F4F6"),
    }
}

#[component]
pub fn ResourceCard(resource: ReadSignal<Resource>) -> Element {
    let resource = resource.read().clone();
    let (strong, light) = palette(resource.type_color());

    rsx! {
        div {
            class: "x-resource-card",
            style: "
                display: flex;
                flex-direction: column;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
                overflow: hidden;
            ",

            if resource.has_header_image() {
                div {
                    style: "position: relative; width: 100%;",
                    div {
                        style: "position: absolute; top: 8px; left: 8px; z-index: 1;",
                        ResourceTypeBadge { label: resource.resource_type.clone(), strong, light }
                    }
                    img {
                        src: "{resource.header_image}",
                        alt: "{resource.name}",
                        style: "width: 100%; height: 200px; object-fit: cover;",
                    }
                }
            }

            // Header: NAME - PRIVACY
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                    gap: 8px;
                    padding: 14px 16px 0 16px;
                ",
                div { style: "font-size: 18px; font-weight: 600; color: #111827;", "{resource.name}" }
                if resource.privacy == Privacy::Private {
                    span {
                        title: "This resource is private",
                        Icon { icon: MdLock, style: "width: 18px; height: 18px; color: #6B7280;" }
                    }
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 8px; padding: 12px 16px 16px 16px;",

                div {
                    style: "display: flex; flex-direction: row; align-items: center; gap: 4px;",
                    if !resource.has_header_image() {
                        ResourceTypeBadge { label: resource.resource_type.clone(), strong, light }
                    }
                    if resource.status == VerificationStatus::Verified {
                        VerifiedBadge {}
                    }
                }

                div {
                    style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 6px;",
                    for tag in resource.sorted_tags() {
                        span {
                            key: "{tag.id}",
                            style: "font-size: 13px; padding: 2px 8px; border-radius: 6px; color: {strong}; background: {light};",
                            "{tag.value}"
                        }
                    }
                }

                div {
                    style: "
                        color: #6B7280;
                        font-size: 14px;
                        display: -webkit-box;
                        -webkit-line-clamp: 2;
                        -webkit-box-orient: vertical;
                        overflow: hidden;
                    ",
                    "{resource.description}"
                }

                div {
                    style: "display: flex; flex-direction: column; gap: 6px; padding-top: 8px;",
                    for author in resource.authors.iter() {
                        div {
                            key: "{author.author_id}",
                            style: "display: flex; flex-direction: row; align-items: center; gap: 6px;",
                            Icon { icon: MdPerson, style: "width: 18px; height: 18px; color: #6B7280;" }
                            span { style: "font-size: 13px; font-weight: 700;", "{author.author_id}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ResourceTypeBadge(label: String, strong: &'static str, light: &'static str) -> Element {
    rsx! {
        span {
            style: "
                font-size: 12px;
                font-weight: 700;
                padding: 2px 8px;
                border-radius: 6px;
                color: {strong};
                background: {light};
                box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            ",
            "{label}"
        }
    }
}

#[component]
fn VerifiedBadge() -> Element {
    let (strong, light) = palette(VerificationStatus::Verified.color());
    rsx! {
        span {
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                font-size: 12px;
                font-weight: 700;
                padding: 2px 8px;
                border-radius: 6px;
                color: {strong};
                background: {light};
            ",
            Icon { icon: MdVerifiedUser, style: "width: 14px; height: 14px;" }
            "Verified"
        }
    }
}
