use axum::http::StatusCode;
use maud::html;
use poeledger_api_types::{DEFAULT_ITEM, DEFAULT_LEAGUE};

use crate::web::templates::{components::header::Header, page::Page};

pub(crate) struct ErrorPage {
    pub(crate) status: StatusCode,
    pub(crate) message: String,
}

impl Page for ErrorPage {
    fn get_name(&'_ self) -> String {
        "Error".to_string()
    }

    fn draw_body(&self) -> maud::Markup {
        html! {
          (Header {
            current_item: DEFAULT_ITEM,
            current_league: DEFAULT_LEAGUE,
            leagues: &[],
          })
          div class="container" {
            div class="main-content" {
              h2 {
                "Error " (self.status.as_u16())
              }
              span {
                (self.message)
              }
            }
          }
        }
    }
}
