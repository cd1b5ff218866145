use std::sync::atomic::{AtomicU64, Ordering};

use crate::{
    api::DynAPI,
    config::Labels,
    entities::{FareResult, RouteRequest},
};

/// Where estimates and failures are shown to the user.
pub trait FareDisplay {
    fn show_fare(&self, fare_text: String, distance_text: String);
    fn show_message(&self, text: String, style_tag: String);
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Shown(FareResult),
    Failed,
    /// A newer request was issued before this one finished.
    Stale,
}

pub fn render(fare: &FareResult, labels: &Labels) -> (String, String) {
    (
        fare.total_fare.to_currency(&labels.currency_prefix),
        fare.total_distance.to_distance(&labels.distance_suffix),
    )
}

/// Runs fare requests against the engine and hands each result to a
/// display. Only the most recently issued request may update the display.
pub struct FareWidget<D> {
    api: DynAPI,
    display: D,
    labels: Labels,
    latest: AtomicU64,
}

impl<D: FareDisplay> FareWidget<D> {
    pub fn new(api: DynAPI, display: D, labels: Labels) -> Self {
        Self {
            api,
            display,
            labels,
            latest: AtomicU64::new(0),
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    #[tracing::instrument(skip(self))]
    pub async fn request_fare(&self, request: RouteRequest) -> Outcome {
        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        let result = self.api.estimate_fare(request).await;

        if self.latest.load(Ordering::SeqCst) != token {
            tracing::debug!(token, "discarding stale fare response");
            return Outcome::Stale;
        }

        match result {
            Ok(fare) => {
                let (fare_text, distance_text) = render(&fare, &self.labels);
                self.display.show_fare(fare_text, distance_text);
                Outcome::Shown(fare)
            }
            Err(_) => {
                self.display.show_message(
                    self.labels.route_error.clone(),
                    self.labels.error_style.clone(),
                );
                Outcome::Failed
            }
        }
    }
}
