use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use crate::locality::{locality_route, parse_locality_route};
use crate::pages::need_license::NeedEnterpriseLicense;

const NEED_LICENSE_CSS: Asset = asset!("/assets/need_license.css");

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::NodeMapPage { tiers: Vec::new() })]
    #[route("/overview/map/:..tiers")]
    NodeMapPage { tiers: Vec<String> },
}

/// Node map for the locality named by the route.
#[component]
pub fn NodeMapPage(tiers: Vec<String>) -> Element {
    let tiers = match parse_locality_route(&tiers) {
        Ok(tiers) => {
            log::debug!("node map locality {}", locality_route(&tiers));
            tiers
        }
        Err(err) => {
            log::warn!("{err}, showing the cluster root instead");
            Vec::new()
        }
    };

    rsx! { NeedEnterpriseLicense { tiers } }
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: NEED_LICENSE_CSS }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_route_parses_tiers() {
        let route: Route = "/overview/map/region=us-east/zone=a".parse().unwrap();
        assert!(route == Route::NodeMapPage {
            tiers: vec!["region=us-east".to_string(), "zone=a".to_string()],
        });
    }

    #[test]
    fn test_root_redirects_to_map() {
        let root: Route = "/".parse().unwrap();
        assert!(root == Route::NodeMapPage { tiers: vec![] });

        let bare: Route = "/overview/map".parse().unwrap();
        assert!(bare == Route::NodeMapPage { tiers: vec![] });
    }

    #[test]
    fn test_malformed_route_still_renders_panel() {
        let render = |tiers: Vec<String>| {
            let mut dom = VirtualDom::new_with_props(
                NodeMapPage,
                NodeMapPageProps { tiers },
            );
            dom.rebuild_in_place();
            dioxus_ssr::render(&dom)
        };

        let good = render(vec!["region=us-east".to_string()]);
        let bad = render(vec!["not-a-tier".to_string()]);
        assert!(good.contains(r#"class="need-license""#));
        assert_eq!(good, bad);
    }
}
