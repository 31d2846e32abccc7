use dioxus::prelude::*;

use crate::locality::NodeCanvasContainerProps;
use crate::utils::docs;

const STEP1_IMG: Asset = asset!("/assets/nodeMapSteps/1-getLicense.svg");
const STEP2_IMG: Asset = asset!("/assets/nodeMapSteps/2-setKey.svg");
const STEP3_IMG: Asset = asset!("/assets/nodeMapSteps/3-seeMap.svg");

/// Shown instead of the node canvas when the cluster has no enterprise license.
///
/// Takes the canvas props so the two are interchangeable at the call site.
#[component]
pub fn NeedEnterpriseLicense(props: NodeCanvasContainerProps) -> Element {
    // Accepted for interchangeability, not consumed.
    let _ = props;

    rsx! {
        section {
            class: "need-license",
            div {
                class: "need-license-blurb",
                div {
                    h1 { class: "need-license-blurb__header", "View the Node Map" }
                    p {
                        class: "need-license-blurb__text",
                        "The Node Map shows the geographical layout of your cluster, along "
                        "with metrics and health indicators. To enable the Node Map, "
                        "request an "
                        a { href: docs::ENTERPRISE_LICENSING.as_str(), "Enterprise trial license" }
                        " and refer to this "
                        a { href: docs::ENABLE_NODE_MAP.as_str(), "configuration guide" }
                        "."
                    }
                }
                a {
                    href: docs::START_TRIAL,
                    class: "need-license-blurb__trial-link",
                    "GET A 30-DAY ENTERPRISE TRIAL"
                }
            }
            div {
                class: "need-license-steps",
                Step {
                    num: 1,
                    img: STEP1_IMG,
                    a { href: docs::START_TRIAL, "Get a trial license" }
                    " delivered straight to your inbox."
                }
                Step {
                    num: 2,
                    img: STEP2_IMG,
                    "Activate the trial license with two simple SQL commands."
                }
                Step {
                    num: 3,
                    img: STEP3_IMG,
                    "Refer this "
                    a { href: docs::ENABLE_NODE_MAP.as_str(), "configuration guide" }
                    " to configure the Node Map."
                }
            }
        }
    }
}

#[component]
pub fn Step(num: u32, img: Asset, children: Element) -> Element {
    rsx! {
        div {
            class: "license-step",
            img { src: img, class: "license-step__image" }
            div {
                class: "license-step__text",
                span { class: "license-step__stepnum", "Step {num}:" }
                " "
                {children}
            }
        }
    }
}
