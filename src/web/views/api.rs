use poem::web::{Data, Json};
use poem::{handler, IntoResponse};
use serde::Deserialize;

use crate::aggregator::Aggregator;
use crate::prelude::*;

/// `POST /add-number` body. The field arrives as either
/// a JSON number or a string, depending on the client.
#[derive(Deserialize)]
pub struct AddNumber {
    #[serde(default)]
    pub number: Option<RawNumber>,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

/// The explicit parse-with-default boundary: anything that does not
/// read as a decimal number becomes `0`, fractions are truncated.
pub fn parse_number_or_zero(raw: Option<&RawNumber>) -> i64 {
    match raw {
        Some(RawNumber::Number(value)) if value.is_finite() => value.trunc() as i64,
        Some(RawNumber::Text(text)) => {
            let text = text.trim();
            text.parse::<i64>().ok().or_else(|| {
                text.parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .map(|value| value.trunc() as i64)
            })
            .unwrap_or_default()
        }
        _ => 0,
    }
}

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn post_add_number(
    aggregator: Data<&Aggregator>,
    Json(body): Json<AddNumber>,
) -> Result<impl IntoResponse> {
    let number = parse_number_or_zero(body.number.as_ref());
    let submission = aggregator.submit(number as f64).await?;
    info!(
        last_number = submission.last_number,
        avg_number = submission.avg_number,
    );
    Ok(Json(submission))
}

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get_numbers(aggregator: Data<&Aggregator>) -> Result<impl IntoResponse> {
    Ok(Json(aggregator.statistics().await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_integer_ok() {
        assert_eq!(parse_number_or_zero(Some(&RawNumber::Text("42".to_string()))), 42);
        assert_eq!(parse_number_or_zero(Some(&RawNumber::Text(" -7 ".to_string()))), -7);
    }

    #[test]
    fn parse_truncates_fractions_ok() {
        assert_eq!(parse_number_or_zero(Some(&RawNumber::Text("3.7".to_string()))), 3);
        assert_eq!(parse_number_or_zero(Some(&RawNumber::Number(3.7))), 3);
    }

    #[test]
    fn parse_defaults_to_zero_ok() {
        assert_eq!(parse_number_or_zero(Some(&RawNumber::Text("abc".to_string()))), 0);
        assert_eq!(parse_number_or_zero(Some(&RawNumber::Text(String::new()))), 0);
        assert_eq!(parse_number_or_zero(Some(&RawNumber::Number(f64::NAN))), 0);
        assert_eq!(parse_number_or_zero(None), 0);
    }
}
