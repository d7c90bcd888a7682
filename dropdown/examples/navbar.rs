//! Drives the navbar dropdown on an in-memory page and prints the markup
//! after each click. Logs go to `navbar.log`.

use std::fs::File;

use dropdown::markup::{MenuEntry, navbar_dropdown};
use dropdown::page::install;
use dropdown::DropdownConfig;
use log::LevelFilter;
use pagedom::{Document, Element, Page};
use simplelog::{Config, WriteLogger};

fn main() {
    let log_file = File::create("navbar.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let sections = ["Flute", "Clarinet", "Alto Sax", "Trumpet", "French Horn", "Percussion"]
        .into_iter()
        .map(MenuEntry::new);

    let document = Document::body([
        Element::new("nav").id("navbar").child(
            Element::list()
                .class("navbar-nav")
                .child(Element::item().child(Element::anchor("index.html").text("Home")))
                .child(navbar_dropdown("Sections", sections)),
        ),
        Element::new("main")
            .id("main")
            .child(Element::new("h1").text("Lexington Community Band")),
    ]);

    let mut page = Page::new(document);
    install(&mut page, DropdownConfig::default()).expect("Failed to install dropdowns");
    page.load();

    for target in ["navbarDropdown", "main", "navbarDropdown", "navbarDropdown"] {
        let event = page.click(target);
        println!(
            "click {target} (default prevented: {})\n{}\n",
            event.default_prevented(),
            page.document().to_html()
        );
    }
}
