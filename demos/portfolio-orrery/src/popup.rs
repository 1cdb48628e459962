/// Popup overlay: the static content table and the state the host renders.

use serde::Serialize;
use orrery_engine::GameEvent;

use crate::bodies::Celestial;

/// Game event kinds sent to the host.
pub const EVENT_POPUP_CHANGED: f32 = 1.0;
pub const EVENT_DOWNLOAD_REQUESTED: f32 = 2.0;

/// Static content for one popup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupPayload {
    pub title: &'static str,
    pub description: &'static str,
    /// Image asset name, resolved by the host through the manifest.
    pub image: Option<&'static str>,
    /// Document asset name offered for download instead of an image.
    pub download: Option<&'static str>,
}

pub const WELCOME: PopupPayload = PopupPayload {
    title: "Welcome",
    description: "Each planet is a project. Click one to read about it, \
                  drag to orbit the camera and scroll to zoom. \
                  Click the sun to get my resume.",
    image: None,
    download: None,
};

/// Indexed by `Celestial::index()`.
const PAYLOADS: [PopupPayload; 8] = [
    PopupPayload {
        title: "Abdullah Rafiq",
        description: "Software engineer working on systems, data tooling and graphics. \
                      Every orbit here is something I built.",
        image: None,
        download: Some("resume"),
    },
    PopupPayload {
        title: "Realtime Chat Service",
        description: "WebSocket chat backend with presence, typing indicators and message history.",
        image: Some("mercury_project"),
        download: None,
    },
    PopupPayload {
        title: "Weather Dashboard",
        description: "Forecast dashboard that merges several public APIs into one hourly view.",
        image: Some("venus_project"),
        download: None,
    },
    PopupPayload {
        title: "Geospatial Tile Server",
        description: "Vector tile server that slices map data on demand and caches hot tiles.",
        image: Some("earth_project"),
        download: None,
    },
    PopupPayload {
        title: "Rover Telemetry Viewer",
        description: "Plots rover sensor streams and replays recorded drives frame by frame.",
        image: Some("mars_project"),
        download: None,
    },
    PopupPayload {
        title: "Distributed Job Scheduler",
        description: "Queue-backed scheduler with retries, priorities and a live worker view.",
        image: Some("jupiter_project"),
        download: None,
    },
    PopupPayload {
        title: "Trajectory Data Converter",
        description: "Converts flight trajectory logs between formats and validates them on the way.",
        image: Some("saturn_project"),
        download: None,
    },
    PopupPayload {
        title: "Procedural Music Generator",
        description: "Generates ambient tracks from seeded rules and renders them in the browser.",
        image: Some("uranus_project"),
        download: None,
    },
];

pub fn payload(celestial: Celestial) -> &'static PopupPayload {
    &PAYLOADS[celestial.index()]
}

/// What the popup is showing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Subject {
    Welcome,
    Body(Celestial),
}

/// Popup state serialized to the host's DOM overlay.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PopupState {
    pub visible: bool,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub download: Option<String>,
    #[serde(skip)]
    subject: Option<Subject>,
}

impl PopupState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the payload for a body.
    pub fn show(&mut self, celestial: Celestial) {
        self.fill(payload(celestial), Subject::Body(celestial));
    }

    /// Show the static welcome message (info control).
    pub fn show_welcome(&mut self) {
        self.fill(&WELCOME, Subject::Welcome);
    }

    fn fill(&mut self, p: &PopupPayload, subject: Subject) {
        self.visible = true;
        self.title = p.title.to_owned();
        self.description = p.description.to_owned();
        self.image = p.image.map(str::to_owned);
        self.download = p.download.map(str::to_owned);
        self.subject = Some(subject);
    }

    /// Hide the popup. Returns false if it was already hidden.
    pub fn close(&mut self) -> bool {
        let was_visible = self.visible;
        self.visible = false;
        was_visible
    }

    pub fn subject(&self) -> Option<Subject> {
        self.subject
    }

    pub fn shows_download(&self) -> bool {
        self.visible && self.download.is_some()
    }

    /// Document to download, if the download control is live.
    pub fn download_target(&self) -> Option<&str> {
        match self.subject {
            Some(Subject::Body(Celestial::Sun)) if self.visible => self.download.as_deref(),
            _ => None,
        }
    }

    /// `PopupChanged` event: a = celestial index (-1 for welcome or none),
    /// b = visible, c = download shown.
    pub fn changed_event(&self) -> GameEvent {
        let index = match self.subject {
            Some(Subject::Body(c)) => c.index() as f32,
            _ => -1.0,
        };
        GameEvent::new(
            EVENT_POPUP_CHANGED,
            index,
            if self.visible { 1.0 } else { 0.0 },
            if self.shows_download() { 1.0 } else { 0.0 },
        )
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_entry_per_body() {
        assert_eq!(PAYLOADS.len(), Celestial::ALL.len());
        for c in Celestial::ALL {
            assert!(!payload(c).title.is_empty());
        }
    }

    #[test]
    fn only_the_sun_offers_a_download() {
        for c in Celestial::ALL {
            let p = payload(c);
            if c == Celestial::Sun {
                assert!(p.download.is_some());
                assert!(p.image.is_none());
            } else {
                assert!(p.download.is_none());
                assert!(p.image.is_some());
            }
        }
    }

    #[test]
    fn sun_popup_enables_download() {
        let mut popup = PopupState::new();
        popup.show(Celestial::Sun);
        assert_eq!(popup.title, "Abdullah Rafiq");
        assert!(popup.shows_download());
        assert!(popup.image.is_none());
        assert_eq!(popup.download_target(), Some("resume"));
        let ev = popup.changed_event();
        assert_eq!((ev.kind, ev.a, ev.b, ev.c), (EVENT_POPUP_CHANGED, 0.0, 1.0, 1.0));
    }

    #[test]
    fn download_ignored_for_other_popups() {
        let mut popup = PopupState::new();
        popup.show(Celestial::Saturn);
        assert_eq!(popup.download_target(), None);
        popup.show_welcome();
        assert_eq!(popup.download_target(), None);
        assert_eq!(popup.changed_event().a, -1.0);
    }

    #[test]
    fn close_hides_and_disables_download() {
        let mut popup = PopupState::new();
        popup.show(Celestial::Sun);
        assert!(popup.close());
        assert!(!popup.close());
        assert_eq!(popup.download_target(), None);
        assert_eq!(popup.changed_event().b, 0.0);
    }

    #[test]
    fn json_carries_visible_fields_only() {
        let mut popup = PopupState::new();
        popup.show(Celestial::Saturn);
        let value: serde_json::Value = serde_json::from_str(&popup.to_json().unwrap()).unwrap();
        assert_eq!(value["visible"], true);
        assert_eq!(value["title"], "Trajectory Data Converter");
        assert_eq!(value["image"], "saturn_project");
        assert!(value["download"].is_null());
        assert!(value.get("subject").is_none());
    }
}
