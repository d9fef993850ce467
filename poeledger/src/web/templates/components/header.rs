use maud::{html, Render};

use crate::web::templates::components::SearchBox;
use crate::web::templates::page::SITE_NAME;

pub(crate) struct Header<'a> {
    pub(crate) current_item: &'a str,
    pub(crate) current_league: &'a str,
    pub(crate) leagues: &'a [String],
}

impl<'a> Render for Header<'a> {
    fn render(&self) -> maud::Markup {
        let current_known = self.leagues.iter().any(|l| l == self.current_league);
        html! {
          header {
            div class="header" {
              h1 { a href="/" { (SITE_NAME) } }
              nav {
                a class="nav-item" href="/history" { "History" }
              }
              form class="search-form" method="get" action="/" {
                (SearchBox {
                    name: "get",
                    value: self.current_item,
                    placeholder: "Divine Orb",
                    endpoint: "/api/search/filters",
                    submit_on_select: true,
                })
                select name="league" aria-label="Leagues" {
                  @if !current_known {
                    option value=(self.current_league) selected { (self.current_league) }
                  }
                  @for league in self.leagues {
                    option value=(league) selected[league == self.current_league] { (league) }
                  }
                }
                input type="submit" hidden;
              }
            }
          }
        }
    }
}

#[cfg(test)]
mod test {
    use maud::Render;

    use super::Header;

    #[test]
    fn selects_current_league() {
        let leagues = vec!["Crucible".to_string(), "Sanctum".to_string()];
        let html = Header {
            current_item: "Divine Orb",
            current_league: "Sanctum",
            leagues: &leagues,
        }
        .render()
        .into_string();
        assert!(html.contains(r#"<option value="Sanctum" selected>Sanctum</option>"#));
        assert!(html.contains(r#"<option value="Crucible">Crucible</option>"#));
        assert!(html.contains(r#"name="get""#));
    }

    #[test]
    fn unknown_league_still_offered() {
        let html = Header {
            current_item: "Divine Orb",
            current_league: "Sanctum",
            leagues: &[],
        }
        .render()
        .into_string();
        assert!(html.contains(r#"<option value="Sanctum" selected>Sanctum</option>"#));
    }
}
