use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::debug;
use url::form_urlencoded;

use super::templates::{page::RenderPage, pages::history_page::HistoryPage};

/// The item search form as posted, before any checks.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawItemSearchForm {
    pub(crate) item: Option<String>,
    pub(crate) interval_amount: Option<String>,
    pub(crate) interval_unit: Option<String>,
    pub(crate) tenth_quantile: Option<bool>,
    pub(crate) fifteenth_quantile: Option<bool>,
    pub(crate) thirtieth_quantile: Option<bool>,
    pub(crate) start_time: Option<String>,
    pub(crate) end_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ItemSearchForm {
    pub(crate) item: String,
    pub(crate) interval_amount: f64,
    pub(crate) interval_unit: String,
    pub(crate) tenth_quantile: bool,
    pub(crate) fifteenth_quantile: bool,
    pub(crate) thirtieth_quantile: bool,
    pub(crate) start_time: String,
    pub(crate) end_time: String,
}

/// Field name and message for every field that failed.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct FormErrors(Vec<(&'static str, String)>);

impl FormErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push((field, message.into()));
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    #[cfg(test)]
    pub(crate) fn get(&self, field: &str) -> Option<&str> {
        self.iter().find(|(f, _)| *f == field).map(|(_, m)| m)
    }
}

fn required(errors: &mut FormErrors, field: &'static str, value: &Option<String>) -> String {
    match value {
        Some(value) => value.trim().to_string(),
        None => {
            errors.push(field, "Required");
            String::new()
        }
    }
}

impl RawItemSearchForm {
    /// The form as first shown, before anything was posted. Only here does
    /// the 10th quantile start out ticked.
    pub(crate) fn initial(item: Option<String>) -> Self {
        Self {
            item,
            tenth_quantile: Some(true),
            ..Default::default()
        }
    }

    /// Checks every field and reports all failures together.
    /// Browsers leave unticked checkboxes out of the body, so a missing flag is `false`.
    pub(crate) fn validate(&self) -> Result<ItemSearchForm, FormErrors> {
        let mut errors = FormErrors::default();
        let item = required(&mut errors, "item", &self.item);
        let interval_amount = match self.interval_amount.as_deref().map(str::trim) {
            // an empty number input coerces to zero
            None | Some("") => 0.0,
            Some(amount) => amount.parse::<f64>().unwrap_or(f64::NAN),
        };
        if interval_amount.is_nan() {
            errors.push("intervalAmount", "Interval must be a number");
        } else if interval_amount <= 0.0 {
            errors.push("intervalAmount", "Interval must be greater than 0");
        }
        let interval_unit = required(&mut errors, "intervalUnit", &self.interval_unit);
        let start_time = required(&mut errors, "startTime", &self.start_time);
        let end_time = required(&mut errors, "endTime", &self.end_time);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ItemSearchForm {
            item,
            interval_amount,
            interval_unit,
            tenth_quantile: self.tenth_quantile.unwrap_or(false),
            fifteenth_quantile: self.fifteenth_quantile.unwrap_or(false),
            thirtieth_quantile: self.thirtieth_quantile.unwrap_or(false),
            start_time,
            end_time,
        })
    }
}

pub(crate) fn history_location(item: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("item", item)
        .finish();
    format!("/history?{query}")
}

pub(crate) async fn submit_search(Form(raw): Form<RawItemSearchForm>) -> Response {
    match raw.validate() {
        Ok(form) => {
            debug!("item search {form:?}");
            Redirect::to(&history_location(&form.item)).into_response()
        }
        Err(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            RenderPage(HistoryPage {
                history: None,
                form: raw,
                errors,
            }),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod test {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::web::{router, WebState};

    fn filled() -> RawItemSearchForm {
        RawItemSearchForm {
            item: Some("Headhunter".to_string()),
            interval_amount: Some("2".to_string()),
            interval_unit: Some("days".to_string()),
            start_time: Some("2024-01-01T00:00".to_string()),
            end_time: Some("2024-02-01T00:00".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_for_quantiles() {
        let form = filled().validate().unwrap();
        assert_eq!(form.interval_amount, 2.0);
        assert!(!form.tenth_quantile);
        assert!(!form.fifteenth_quantile);
        assert!(!form.thirtieth_quantile);
        let initial = RawItemSearchForm {
            tenth_quantile: RawItemSearchForm::initial(None).tenth_quantile,
            ..filled()
        };
        assert!(initial.validate().unwrap().tenth_quantile);
    }

    #[tokio::test]
    async fn unticked_box_is_false() {
        use axum::extract::FromRequest;

        let request = Request::builder()
            .method("POST")
            .uri("/search")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(
                "item=Headhunter&intervalAmount=1&intervalUnit=days&fifteenthQuantile=true\
                 &startTime=a&endTime=b",
            ))
            .unwrap();
        let Form(raw) = Form::<RawItemSearchForm>::from_request(request, &())
            .await
            .unwrap();
        let form = raw.validate().unwrap();
        assert!(!form.tenth_quantile);
        assert!(form.fifteenth_quantile);
    }

    #[test]
    fn interval_must_be_positive() {
        for amount in ["0", "-3", ""] {
            let raw = RawItemSearchForm {
                interval_amount: Some(amount.to_string()),
                ..filled()
            };
            let errors = raw.validate().unwrap_err();
            assert_eq!(
                errors.get("intervalAmount"),
                Some("Interval must be greater than 0")
            );
        }
        let raw = RawItemSearchForm {
            interval_amount: Some("often".to_string()),
            ..filled()
        };
        assert_eq!(
            raw.validate().unwrap_err().get("intervalAmount"),
            Some("Interval must be a number")
        );
    }

    #[test]
    fn every_error_is_reported() {
        let errors = RawItemSearchForm::default().validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(
            fields,
            ["item", "intervalAmount", "intervalUnit", "startTime", "endTime"]
        );
    }

    #[test]
    fn location_is_encoded() {
        assert_eq!(
            history_location("Mageblood & Co"),
            "/history?item=Mageblood+%26+Co"
        );
    }

    async fn post(body: &'static str) -> axum::response::Response {
        router(WebState { economy: None })
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/search")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn valid_form_redirects() {
        let response = post(
            "item=Headhunter&intervalAmount=1&intervalUnit=days&tenthQuantile=true\
             &startTime=2024-01-01T00%3A00&endTime=2024-02-01T00%3A00",
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/history?item=Headhunter"
        );
    }

    #[tokio::test]
    async fn invalid_form_is_rerendered() {
        let response = post("item=Headhunter&intervalAmount=0&intervalUnit=days").await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("Interval must be greater than 0"));
        assert!(body.contains(r#"value="Headhunter""#));
        assert!(!body.contains(r#"name="tenthQuantile" value="true" checked"#));
    }
}
