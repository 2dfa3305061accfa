//! Error boundaries for the app shell and for single catalog widgets.

use dioxus::{
    logger::tracing::{error, info, warn},
    prelude::*,
};

/// Outermost boundary. It can sit outside the router, so it links back with a plain `href`.
#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                error!("render error in boundary {boundary_name}: {err:?}");
                rsx! {
                    ErrorPanel {
                        title: "The research catalog hit an error".to_string(),
                        detail: format!("Boundary: {boundary_name}\n\n{err:#?}"),
                        a {
                            href: "/",
                            style: ACTION_STYLE,
                            "Return to Resources"
                        }
                    }
                }
            },
            children
        }
    }
}

/// Boundary around one widget. Retrying remounts `children`, so the resource
/// filters read their state from the URL again.
#[component]
pub fn ComponentErrorBoundary(label: String, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let detail = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                warn!("{label} failed to render: {detail}");
                let retry_label = label.clone();
                rsx! {
                    ErrorPanel {
                        title: format!("Could not show the {label}"),
                        detail,
                        button {
                            style: ACTION_STYLE,
                            onclick: move |_| {
                                info!("retrying {retry_label}");
                                err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                {children}
            }
        }
    }
}

const ACTION_STYLE: &str = "
    color: #4F46E5;
    background: white;
    font-size: 16px;
    border: 1px solid #4F46E5;
    padding: 8px 14px;
    border-radius: 8px;
    cursor: pointer;
    text-decoration: none;
";

#[component]
fn ErrorPanel(title: String, detail: String, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: flex-start;
                gap: 12px;
                margin: 16px;
                padding: 16px 20px;
                border: 1px solid #FCA5A5;
                border-radius: 12px;
                background: #FEF2F2;
            ",
            div { style: "color: #B91C1C; font-size: 22px; font-weight: 600;", "{title}" }
            {children}
            details {
                summary { style: "color: #7F1D1D; cursor: pointer;", "Details" }
                pre {
                    style: "color: #450A0A; text-wrap: auto; max-width: 700px; max-height: 400px; overflow-y: auto;",
                    "{detail}"
                }
            }
        }
    }
}
