use crate::global_id::{Identify, InternalId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl Business {
    pub const TYPE_NAME: &'static str = "Business";

    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            city: None,
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }
}

impl Identify for Business {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn internal_id(&self) -> InternalId {
        InternalId::from(&self.id)
    }
}
