use dioxus::prelude::*;

use crate::client::{
    component::Layout,
    route::{Root, Section},
};

/// Every URL lands on one of two variants inside the shell layout. Which view
/// is shown is decided by the site's route table against the raw location,
/// not by these variants.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Root {},

        #[route("/:..segments")]
        Section { segments: Vec<String> },
}
