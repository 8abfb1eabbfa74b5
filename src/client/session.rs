use super::ServerAPI;
use crate::entities::{city, Category, Coordinates, NearbyPoint};
use crate::error::{communication_error, Error, SERVER_REJECTED};

const PANORAMA_FAILED: &str = "Street View failed.";
const NEARBY_FAILED: &str = "Places API failed (check server console for details).";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Loaded,
    PartialError,
}

/// Everything the view shows. A new record replaces the old one on every
/// transition; nothing outside `Session` mutates it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisitState {
    pub coordinates: Option<Coordinates>,
    pub panorama_url: String,
    pub nearby_points: Vec<NearbyPoint>,
    pub status: Status,
    pub panorama_error: String,
    pub nearby_error: String,
    pub city_query: String,
    pub city_error: String,
    pub category: Category,
}

impl VisitState {
    pub fn loading(&self) -> bool {
        self.status == Status::Loading
    }

    fn has_errors(&self) -> bool {
        !self.panorama_error.is_empty() || !self.nearby_error.is_empty()
    }
}

type Observer = Box<dyn Fn(&VisitState) + Send + Sync>;

/// Drives visits against a server. Transitions take `&mut self`, so at most
/// one visit per session is ever in flight.
pub struct Session<A> {
    api: A,
    state: VisitState,
    observer: Option<Observer>,
}

impl<A: ServerAPI> Session<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: VisitState::default(),
            observer: None,
        }
    }

    pub fn with_observer(api: A, observer: impl Fn(&VisitState) + Send + Sync + 'static) -> Self {
        Self {
            api,
            state: VisitState::default(),
            observer: Some(Box::new(observer)),
        }
    }

    pub fn state(&self) -> &VisitState {
        &self.state
    }

    pub fn set_category(&mut self, category: Category) {
        self.set_state(VisitState {
            category,
            ..self.state.clone()
        });
    }

    fn set_state(&mut self, next: VisitState) {
        tracing::debug!(from = ?self.state.status, to = ?next.status, "session transition");
        self.state = next;

        if let Some(observer) = &self.observer {
            observer(&self.state);
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn teleport(&mut self) {
        self.set_state(VisitState {
            status: Status::Loading,
            city_query: self.state.city_query.clone(),
            category: self.state.category,
            ..VisitState::default()
        });

        match self.api.teleport().await {
            Ok(coordinates) => {
                tracing::info!(lat = coordinates.lat, lng = coordinates.lng, "teleport coordinates");
                self.visit(coordinates).await;
            }
            Err(err) => {
                tracing::error!(error = %err, "teleport failed");
                self.set_state(VisitState {
                    status: Status::Idle,
                    panorama_error: communication_error().message,
                    ..self.state.clone()
                });
            }
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn search_city(&mut self, input: &str) {
        let status = match self.state.coordinates {
            Some(_) => Status::Loaded,
            None => Status::Idle,
        };
        let cleared = VisitState {
            status,
            city_query: input.to_string(),
            city_error: String::new(),
            panorama_error: String::new(),
            nearby_error: String::new(),
            ..self.state.clone()
        };

        match city::lookup_city(input) {
            Ok(preset) => {
                tracing::info!(label = preset.label, "searching city preset");
                self.set_state(cleared);
                self.visit(preset.coordinates).await;
            }
            Err(err) => {
                self.set_state(VisitState {
                    city_error: err.message,
                    ..cleared
                });
            }
        }
    }

    pub async fn select_nearby_point(&mut self, point: &NearbyPoint) {
        match point.coordinates {
            Some(coordinates) => {
                tracing::info!(name = %point.name, "teleporting to nearby point");
                self.visit(coordinates).await;
            }
            None => {
                tracing::warn!(id = %point.id, name = %point.name, "nearby point has no coordinates");
            }
        }
    }

    /// Fetches the panorama and the nearby points for `coordinates`. Either
    /// may fail without affecting the other.
    #[tracing::instrument(skip(self))]
    pub async fn visit(&mut self, coordinates: Coordinates) {
        self.set_state(VisitState {
            coordinates: Some(coordinates),
            status: Status::Loading,
            city_query: self.state.city_query.clone(),
            city_error: self.state.city_error.clone(),
            category: self.state.category,
            ..VisitState::default()
        });

        let api = &self.api;
        let (panorama, nearby) = futures::join!(
            api.streetview(coordinates),
            api.places(coordinates, self.state.category)
        );

        let mut next = self.state.clone();

        match panorama {
            Ok(panorama) if !panorama.url.is_empty() => next.panorama_url = panorama.url,
            Ok(_) => next.panorama_error = PANORAMA_FAILED.into(),
            Err(err) => next.panorama_error = slot_message(err, PANORAMA_FAILED),
        }

        match nearby {
            Ok(points) => next.nearby_points = points,
            Err(err) => next.nearby_error = slot_message(err, NEARBY_FAILED),
        }

        next.status = if next.has_errors() {
            Status::PartialError
        } else {
            Status::Loaded
        };

        self.set_state(next);
    }
}

fn slot_message(err: Error, default: &str) -> String {
    if err.code == SERVER_REJECTED && err.message.is_empty() {
        default.into()
    } else {
        err.message
    }
}
