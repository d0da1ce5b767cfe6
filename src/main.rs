mod client;
mod config;
mod error;
mod model;
mod site;

use client::App;

fn main() {
    dioxus::launch(App);
}
