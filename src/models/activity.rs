use serde::{Deserialize, Serialize};

/// One entry of a purpose's activity template. The time window is display
/// text such as `"09:00 - 12:00"`, never parsed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ActivityTemplate {
    pub name: String,
    pub time: String,
    pub category: String,
}

impl ActivityTemplate {
    pub fn new(name: &str, time: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            time: time.to_string(),
            category: category.to_string(),
        }
    }
}
