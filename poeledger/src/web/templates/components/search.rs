use maud::{html, Render};

/// Text input whose suggestions are fetched by `/static/search.js` on every keystroke.
pub(crate) struct SearchBox<'a> {
    pub(crate) name: &'a str,
    pub(crate) value: &'a str,
    pub(crate) placeholder: &'a str,
    pub(crate) endpoint: &'a str,
    pub(crate) submit_on_select: bool,
}

impl<'a> Render for SearchBox<'a> {
    fn render(&self) -> maud::Markup {
        let results_id = format!("{}-search-results", self.name);
        html! {
          div class="search-container" {
            input class="search-box" type="text" name=(self.name) value=(self.value)
                placeholder=(self.placeholder) autocomplete="off"
                data-search-endpoint=(self.endpoint) data-search-results=(results_id)
                data-submit-on-select[self.submit_on_select];
            div class="search-results" id=(results_id) hidden {
              // filled in by search.js
            }
          }
        }
    }
}
