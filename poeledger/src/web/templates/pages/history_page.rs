use maud::html;
use poeledger_api_types::{PriceHistory, DEFAULT_ITEM, DEFAULT_LEAGUE};
use poeledger_charts::to_chart_data;
use tracing::warn;

use crate::web::item_search_form::{FormErrors, RawItemSearchForm};
use crate::web::templates::{
    components::{header::Header, price_chart::PriceChart, SearchBox},
    page::Page,
};

use super::price_page::CHART_SIZE;

/// Listing history for one item, plus the item search form.
pub(crate) struct HistoryPage {
    pub(crate) history: Option<PriceHistory>,
    pub(crate) form: RawItemSearchForm,
    pub(crate) errors: FormErrors,
}

impl Page for HistoryPage {
    fn get_name(&'_ self) -> String {
        match &self.history {
            Some(history) => format!("{} History", history.item_name),
            None => "History".to_string(),
        }
    }

    fn draw_body(&self) -> maud::Markup {
        let form = &self.form;
        let chart = self.history.as_ref().map(|history| {
            let title = format!("{} - {} History", history.league, history.item_name);
            let chart = to_chart_data(&history.item_name, &history.events);
            let svg = if chart.is_empty() {
                None
            } else {
                poeledger_charts::render_chart(&chart, &title, CHART_SIZE)
                    .map_err(|e| warn!("unable to render history chart: {e}"))
                    .ok()
            };
            (title, chart, svg)
        });
        html! {
          (Header {
            current_item: DEFAULT_ITEM,
            current_league: DEFAULT_LEAGUE,
            leagues: &[],
          })
          div class="container" {
            div class="main-content" {
              h2 { "Item history" }
              @if !self.errors.is_empty() {
                ul class="form-errors" {
                  @for (field, message) in self.errors.iter() {
                    li { (field) ": " (message) }
                  }
                }
              }
              form class="item-search-form" method="post" action="/search" {
                label { "Item"
                  (SearchBox {
                    name: "item",
                    value: form.item.as_deref().unwrap_or_default(),
                    placeholder: DEFAULT_ITEM,
                    endpoint: "/api/search/filters",
                    submit_on_select: false,
                  })
                }
                label { "Interval"
                  input type="number" name="intervalAmount" min="1"
                    value=(form.interval_amount.as_deref().unwrap_or("1"));
                }
                select name="intervalUnit" aria-label="Interval unit" {
                  @for unit in ["hours", "days", "weeks"] {
                    option value=(unit) selected[form.interval_unit.as_deref() == Some(unit)] { (unit) }
                  }
                }
                label { "10th quantile"
                  input type="checkbox" name="tenthQuantile" value="true"
                    checked[form.tenth_quantile.unwrap_or(false)];
                }
                label { "15th quantile"
                  input type="checkbox" name="fifteenthQuantile" value="true"
                    checked[form.fifteenth_quantile.unwrap_or(false)];
                }
                label { "30th quantile"
                  input type="checkbox" name="thirtiethQuantile" value="true"
                    checked[form.thirtieth_quantile.unwrap_or(false)];
                }
                label { "From"
                  input type="datetime-local" name="startTime" value=(form.start_time.as_deref().unwrap_or_default());
                }
                label { "To"
                  input type="datetime-local" name="endTime" value=(form.end_time.as_deref().unwrap_or_default());
                }
                input type="submit" value="Search";
              }
              @if let Some((title, chart, svg)) = &chart {
                (PriceChart { title, chart, svg: svg.as_deref() })
              } @else {
                p class="notice" { "Search for an item to see its listing history." }
              }
            }
          }
        }
    }
}
