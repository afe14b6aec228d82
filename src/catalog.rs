//! The ordered catalog of life events the globe navigates through.
//!
//! Pure data with a modular cursor. Constructed once at startup, either
//! from the compiled-in defaults or from an `events.json` override file
//! (same idiom as loading any other JSON asset).

use serde::Deserialize;

/// One biographical waypoint: a geographic coordinate plus descriptive text.
///
/// Latitude is conventionally in [-90, 90] and longitude in [-180, 180],
/// but the shipped catalog stores longitudes outside that range on purpose:
/// the orientation mapping is artistic, not geographic, and the out-of-range
/// values were calibrated against the rendered globe. They must be kept
/// as-is, not wrapped.
#[derive(Debug, Clone, Deserialize)]
pub struct LifeEvent {
    pub name: String,
    #[serde(rename = "lat")]
    pub latitude: f32,
    #[serde(rename = "lon")]
    pub longitude: f32,
    pub age: String,
    pub description: String,
}

/// Ordered sequence of life events with a wrapping cursor.
///
/// The cursor is mutated only by the choreographer's advance operation
/// (and, under the `calibrate` feature, event coordinates by the editor).
pub struct EventCatalog {
    events: Vec<LifeEvent>,
    cursor: usize,
}

impl EventCatalog {
    /// Build a catalog from an explicit event list. Must be non-empty.
    pub fn new(events: Vec<LifeEvent>) -> Result<Self, String> {
        if events.is_empty() {
            return Err("event catalog must contain at least one event".to_string());
        }
        Ok(Self { events, cursor: 0 })
    }

    /// The compiled-in default catalog.
    pub fn builtin() -> Self {
        Self {
            events: builtin_events(),
            cursor: 0,
        }
    }

    /// Parse a catalog from JSON (an array of event objects).
    pub fn from_json(json: &str) -> Result<Self, String> {
        let events: Vec<LifeEvent> =
            serde_json::from_str(json).map_err(|e| format!("invalid events file: {}", e))?;
        Self::new(events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The event at the cursor.
    pub fn current(&self) -> &LifeEvent {
        &self.events[self.cursor]
    }

    pub fn get(&self, index: usize) -> &LifeEvent {
        &self.events[index % self.events.len()]
    }

    /// Move the cursor by `direction` (±1), wrapping in both directions,
    /// and return the new current event.
    pub fn advance(&mut self, direction: i32) -> &LifeEvent {
        debug_assert!(direction == 1 || direction == -1);
        let len = self.events.len() as i32;
        self.cursor = (self.cursor as i32 + direction).rem_euclid(len) as usize;
        &self.events[self.cursor]
    }

    /// Overwrite the current event's coordinates (calibration only).
    #[cfg(feature = "calibrate")]
    pub fn set_current_coordinates(&mut self, latitude: f32, longitude: f32) {
        let event = &mut self.events[self.cursor];
        event.latitude = latitude;
        event.longitude = longitude;
    }
}

fn builtin_events() -> Vec<LifeEvent> {
    vec![
        LifeEvent {
            name: "Dhaka, Bangladesh".to_string(),
            latitude: 15.0906,
            longitude: 192.3428,
            age: "0".to_string(),
            description: "Born in Dhaka, the vibrant capital of Bangladesh. The city's \
                bustling streets, colorful rickshaws, and the aroma of street food would \
                have been my first sensory experiences. Though I was too young to remember, \
                this diverse and lively city set the stage for my multicultural journey."
                .to_string(),
        },
        LifeEvent {
            name: "Dubai, United Arab Emirates".to_string(),
            latitude: 19.4752,
            longitude: 140.0686,
            age: "3 months old".to_string(),
            description: "Moved to Dubai at just 3 months old. My parents, full of hope \
                and ambition, started our new life in a modest 1-bedroom apartment. Growing \
                up in this futuristic city, I witnessed its rapid transformation from desert \
                to a global metropolis. The blend of traditional Arab culture with modern \
                architecture and international influences shaped my early worldview."
                .to_string(),
        },
        LifeEvent {
            name: "New York, United States".to_string(),
            latitude: 34.9451,
            longitude: 12.8719,
            age: "17".to_string(),
            description: "At 17, I embarked on a life-changing trip to New York City. The \
                energy of the Big Apple was intoxicating - from the towering skyscrapers to \
                the diverse neighborhoods and the melting pot of cultures. This experience \
                opened my eyes to new possibilities and ignited a desire to pursue education \
                in North America."
                .to_string(),
        },
        LifeEvent {
            name: "Manitoba, Canada".to_string(),
            latitude: 39.5288,
            longitude: -8.9005,
            age: "20".to_string(),
            description: "At 20, I made the bold move to Manitoba, Canada, to pursue a \
                Computer Science degree at the University of Manitoba. The adjustment from \
                the desert climate of Dubai to the harsh Canadian winters was challenging \
                but exhilarating. Over the past two years, I've immersed myself in a new \
                culture, joined various student groups, and built a diverse network of \
                friends from around the world."
                .to_string(),
        },
    ]
}
