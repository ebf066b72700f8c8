//! The alert shown for buttons whose features have not been built yet.

use axum::extract::Query;
use serde::{Deserialize, Serialize};

use crate::{alert::Alert, endpoints};

/// The query string for [get_coming_soon_alert].
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ComingSoonQuery {
    #[serde(default)]
    pub feature: String,
}

/// Tell the user that `feature` is not available yet.
pub async fn get_coming_soon_alert(Query(query): Query<ComingSoonQuery>) -> Alert {
    let feature = query.feature.trim();

    let message = if feature.is_empty() {
        "Coming soon".to_owned()
    } else {
        format!("{feature}: coming soon")
    };

    Alert::SuccessSimple { message }
}

/// The URL that fetches the "coming soon" alert for `feature`.
pub fn coming_soon_url(feature: &str) -> String {
    let query = ComingSoonQuery {
        feature: feature.to_owned(),
    };

    match serde_urlencoded::to_string(&query) {
        Ok(query) => format!("{}?{query}", endpoints::COMING_SOON_API),
        Err(error) => {
            tracing::error!("could not encode feature name {feature:?}: {error}");
            endpoints::COMING_SOON_API.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::Query;

    use crate::{
        alert::Alert,
        coming_soon::{ComingSoonQuery, coming_soon_url, get_coming_soon_alert},
    };

    #[tokio::test]
    async fn names_feature() {
        let query = ComingSoonQuery {
            feature: "QR code".to_owned(),
        };

        let alert = get_coming_soon_alert(Query(query)).await;

        assert_eq!(
            alert,
            Alert::SuccessSimple {
                message: "QR code: coming soon".to_owned()
            }
        );
    }

    #[tokio::test]
    async fn works_without_feature() {
        let alert = get_coming_soon_alert(Query(ComingSoonQuery::default())).await;

        assert_eq!(
            alert,
            Alert::SuccessSimple {
                message: "Coming soon".to_owned()
            }
        );
    }

    #[test]
    fn url_encodes_feature() {
        assert_eq!(
            coming_soon_url("My cards"),
            "/api/coming_soon?feature=My+cards"
        );
    }
}
