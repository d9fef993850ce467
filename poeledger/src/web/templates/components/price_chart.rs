use maud::{html, PreEscaped, Render};
use poeledger_charts::ChartData;

pub(crate) struct PriceChart<'a> {
    pub(crate) title: &'a str,
    pub(crate) chart: &'a ChartData,
    /// Server-side rendering of `chart`, absent when it could not be drawn.
    pub(crate) svg: Option<&'a str>,
}

impl<'a> PriceChart<'a> {
    fn chart_json(&self) -> String {
        // a literal "</" would end the script element early
        serde_json::to_string(self.chart)
            .unwrap_or_else(|_| "{}".to_string())
            .replace("</", "<\\/")
    }
}

impl<'a> Render for PriceChart<'a> {
    fn render(&self) -> maud::Markup {
        html! {
          section class="chart" {
            h2 { (self.title) }
            @if let Some(svg) = self.svg {
              (PreEscaped(svg))
            } @else if self.chart.is_empty() {
              p class="notice" { "No price data to show." }
            }
            script type="application/json" id="chart-data" { (PreEscaped(self.chart_json())) }
          }
        }
    }
}
