//! The example data page.

use minijinja::Value;
use serde::Serialize;

use super::chart::{LineChart, SvgChart};
use super::{Page, PageBody, PageContext, DASHBOARD_ROUTE};

const CHART_ROWS: usize = 20;
const CHART_COLUMNS: [&str; 3] = ["a", "b", "c"];
const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 240.0;

#[derive(Debug, Serialize)]
struct DashboardView {
    chart: SvgChart,
}

pub(super) fn page() -> Page {
    Page {
        route: DASHBOARD_ROUTE,
        label: "Dashboard",
        title: Some("Dashboard"),
        icon: Some("📊"),
        render,
    }
}

fn render(_ctx: &PageContext) -> PageBody {
    let chart = LineChart::random_normal(&mut rand::rng(), CHART_ROWS, &CHART_COLUMNS);
    let view = DashboardView {
        chart: chart.to_svg(CHART_WIDTH, CHART_HEIGHT),
    };
    PageBody {
        template: "dashboard.html",
        context: Value::from_serialize(&view),
        sidebar_header: Some("Dashboard options"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_dashboard_has_three_series() {
        let body = render(&PageContext { theme: Theme::Light });
        let series = body
            .context
            .get_attr("chart")
            .and_then(|chart| chart.get_attr("series"))
            .unwrap();
        assert_eq!(series.len(), Some(3));
        assert_eq!(body.sidebar_header, Some("Dashboard options"));
    }

    #[test]
    fn test_dashboard_overrides_title_and_icon() {
        let page = page();
        assert_eq!(page.title, Some("Dashboard"));
        assert_eq!(page.icon, Some("📊"));
    }
}
