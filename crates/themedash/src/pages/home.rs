//! The landing page: current theme and a handful of example widgets.

use chrono::Local;
use minijinja::Value;
use serde::Serialize;

use super::{Page, PageBody, PageContext, HOME_ROUTE};

#[derive(Debug, Serialize)]
struct Slider {
    min: u32,
    max: u32,
    value: u32,
}

#[derive(Debug, Serialize)]
struct HomeView {
    heading: &'static str,
    theme_label: &'static str,
    select_options: [&'static str; 2],
    slider: Slider,
    today: String,
}

pub(super) fn page() -> Page {
    Page {
        route: HOME_ROUTE,
        label: "Home",
        title: None,
        icon: None,
        render,
    }
}

fn render(ctx: &PageContext) -> PageBody {
    let view = HomeView {
        heading: "Themed App Template",
        theme_label: ctx.theme.label(),
        select_options: ["Option 1", "Option 2"],
        slider: Slider {
            min: 0,
            max: 100,
            value: 50,
        },
        today: Local::now().date_naive().format("%Y-%m-%d").to_string(),
    };
    PageBody {
        template: "home.html",
        context: Value::from_serialize(&view),
        sidebar_header: None,
    }
}
