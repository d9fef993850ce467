use maud::html;
use poeledger_api_types::PricePageData;
use poeledger_charts::{chart_title, to_chart_data};
use tracing::warn;

use crate::web::templates::{
    components::{header::Header, price_chart::PriceChart},
    page::{Page, SITE_NAME},
};

pub(crate) const CHART_SIZE: (u32, u32) = (1000, 500);

/// The landing page: one item's daily prices in one league.
pub(crate) struct PricesPage {
    pub(crate) data: PricePageData,
    /// Set when there is no backend to load prices from.
    pub(crate) notice: Option<&'static str>,
}

impl Page for PricesPage {
    fn get_name(&'_ self) -> String {
        SITE_NAME.to_string()
    }

    fn draw_body(&self) -> maud::Markup {
        let data = &self.data;
        let title = chart_title(&data.current_league, &data.current_item);
        let chart = to_chart_data(&data.current_item, &data.records);
        let svg = if chart.is_empty() {
            None
        } else {
            poeledger_charts::render_chart(&chart, &title, CHART_SIZE)
                .map_err(|e| warn!("unable to render chart for {title}: {e}"))
                .ok()
        };
        html! {
          (Header {
            current_item: &data.current_item,
            current_league: &data.current_league,
            leagues: &data.leagues,
          })
          div class="container" {
            div class="main-content" {
              @if let Some(notice) = self.notice {
                p class="notice" { (notice) }
              }
              (PriceChart { title: &title, chart: &chart, svg: svg.as_deref() })
              @if !data.records.is_empty() {
                table class="price-table" {
                  thead { tr { th { "Date" } th { "Value" } th { "Confidence" } } }
                  tbody {
                    @for record in data.records.iter().rev() {
                      tr {
                        td { (record.date.format("%Y-%m-%d")) }
                        td { (record.value) }
                        td { (format!("{:?}", record.confidence)) }
                      }
                    }
                  }
                }
              }
            }
          }
        }
    }
}
